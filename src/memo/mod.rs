// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable during search).
//!
//! Everything derived from the caller's constraints before search starts:
//! - The constraint lattice (levels, father/son edges)
//! - The lower bound on the hypercube dimension
//! - Face categories and dimension ranges for a given hypercube dimension

pub mod bounds;
pub mod classify;
pub mod lattice;

pub use bounds::lower_bound;
pub use classify::{classify, Category, Classification, FaceRange};
pub use lattice::{Constraint, ConstraintId, Lattice, Origin, UNIVERSE};
