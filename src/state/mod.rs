// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, tracked on trail).
//!
//! - per-constraint [`Face`] records, written only through the trail
//! - the [`SelectionList`] of the current face-assignment attempt
//! - search [`Statistics`]

pub mod faces;
pub mod selection;
pub mod statistics;

pub use faces::{DynamicFaces, Face};
pub use selection::{SelectionList, SelectionNode};
pub use statistics::{Counters, Statistics, WorkSummary};
