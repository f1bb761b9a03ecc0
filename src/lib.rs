// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact face-embedding state encoding.
//!
//! Given `n` symbols and a list of relations (sets of symbols that belong
//! together), find the smallest hypercube dimension `d` and a `d`-bit code
//! per symbol such that every relation occupies a face of the cube that
//! contains no other symbol's code.
//!
//! ```
//! use face_encode::{encode, Limits, SymbolSet};
//!
//! let relations: Vec<SymbolSet> = vec!["1100".parse().unwrap(), "0011".parse().unwrap()];
//! let encoding = encode(4, &relations, &Limits::default()).unwrap();
//! assert_eq!(encoding.dimension, 2);
//! ```
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Computed once from the caller's relations:
//! - The constraint lattice: relations closed under intersection, with
//!   father/son edges and levels
//! - A lower bound on the hypercube dimension
//! - Per-dimension face categories and dimension ranges
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - Trail - records replaced faces for O(1) backtracking
//! - Faces - each constraint's current face and dimension
//! - Selection list - the order constraints were given faces
//!
//! # Search Algorithm
//!
//! The outer driver is a predicate program run on a backtracking engine:
//!
//! 1. **DimensionPredicate**: hypercube dimensions in increasing order
//! 2. **ConfigurationPredicate**: each universe child's face dimension
//! 3. **FaceAssignmentPredicate**: the inner face search for one configuration
//!
//! Every state change goes through the trail, so each retry starts from
//! exactly the state its choice point saw.

pub mod combinatorics;
pub mod context;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod limits;
pub mod memo;
pub mod predicates;
pub mod propagation;
pub mod search;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use encoder::{encode, AssignedFace, Encoding, SymbolTable};
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::{EncodeError, ParseError};
pub use geometry::{Code, SymbolSet};
pub use limits::Limits;
pub use trail::Trail;
