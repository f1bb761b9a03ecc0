// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the constraint [`Lattice`], built once per run
//! - Tier 2 (DYNAMIC): faces, selection order and statistics, with
//!   trail-based backtracking
//!
//! Each encoding run owns one context. Nothing is global, so independent
//! runs can share nothing and proceed in parallel.

use crate::error::EncodeError;
use crate::geometry::Code;
use crate::limits::Limits;
use crate::memo::{Classification, ConstraintId, Lattice};
use crate::state::{DynamicFaces, Face, SelectionList, Statistics};
use crate::trail::Trail;

/// Mutable search state (Tier 2: DYNAMIC).
///
/// Faces are tracked on the trail. The hypercube dimension is rewritten by
/// every dimension choice, and the selection list is rebuilt by every
/// face-assignment attempt, so neither needs trailing.
#[derive(Debug, Default)]
pub struct DynamicState {
    /// Per-constraint face records, indexed by constraint id.
    pub faces: DynamicFaces,

    /// Hypercube dimension currently being searched.
    pub dimension: usize,

    /// Constraints holding a tentative face, in selection order.
    pub selection: SelectionList,
}

impl DynamicState {
    pub fn new(lattice: &Lattice) -> Self {
        Self {
            faces: DynamicFaces::new(lattice.len()),
            dimension: 0,
            selection: SelectionList::new(),
        }
    }
}

/// Search context combining MEMO and DYNAMIC state.
///
/// This is the main data structure passed through the search algorithm.
///
/// # Memory Model
///
/// - `lattice` is read-only once the context exists
/// - every face write goes through [`SearchContext::set_face`], which records
///   the previous value on the trail
/// - [`SearchContext::rewind_to`] restores faces from the trail
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable constraint lattice (Tier 1)
    pub lattice: Lattice,
    /// Trail for backtracking (Tier 2)
    pub trail: Trail,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    pub statistics: Statistics,
    pub limits: Limits,
    /// Set by a predicate that hit an unrecoverable condition; the search
    /// then suspends and the caller reports it.
    pub fatal: Option<EncodeError>,
}

impl SearchContext {
    pub fn new(lattice: Lattice, limits: Limits) -> Self {
        let state = DynamicState::new(&lattice);
        Self {
            lattice,
            trail: Trail::new(),
            state,
            statistics: Statistics::new(),
            limits,
            fatal: None,
        }
    }

    /// Get a constraint's face.
    #[inline]
    pub fn face(&self, id: ConstraintId) -> &Face {
        self.state.faces.get(id)
    }

    /// The assigned face of a constraint, if it is coded.
    #[inline]
    pub fn code(&self, id: ConstraintId) -> Option<&Code> {
        self.state.faces.code(id)
    }

    /// Replace a constraint's face, recording the old one on the trail.
    pub fn set_face(&mut self, id: ConstraintId, face: Face) {
        let old = std::mem::replace(&mut self.state.faces.faces[id], face);
        self.trail.record_change(id, old);
    }

    /// Apply `update` to a copy of the face and store it through the trail.
    pub fn update_face(&mut self, id: ConstraintId, update: impl FnOnce(&mut Face)) {
        let mut face = self.face(id).clone();
        update(&mut face);
        self.set_face(id, face);
    }

    /// Undo every face write made since the trail had length `position`.
    pub fn rewind_to(&mut self, position: usize) {
        for entry in self.trail.unwind_to(position) {
            self.state.faces.faces[entry.id] = entry.old_value;
        }
    }

    /// Write a classification into the faces, replacing any assignment.
    pub fn apply_classification(&mut self, classification: &Classification) {
        self.state.dimension = classification.dimension;
        for (id, range) in classification.ranges.iter().enumerate() {
            self.set_face(id, Face::from_range(range));
        }
    }
}
