// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dynamic face state structures.
//!
//! One [`Face`] per lattice constraint. A face is a small value record that
//! the search replaces wholesale through the trail, never patches in place.

use crate::geometry::Code;
use crate::memo::{Category, ConstraintId, FaceRange};

/// Per-constraint dynamic state (mutable, trail-tracked).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Face {
    /// Which generator produces candidates for this constraint.
    pub category: Category,

    /// Smallest face dimension allowed.
    pub min_dim: usize,

    /// Largest face dimension allowed.
    pub max_dim: usize,

    /// The dimension currently chosen, within `[min_dim, max_dim]`.
    ///
    /// Fixed by the configuration for category 1, the accepted face's
    /// dimension for categories 2 and 3.
    pub cur_dim: usize,

    /// Starting point of the generator for the current attempt.
    pub seed: Option<Code>,

    /// First candidate the generator produced when this face was accepted.
    pub first_tried: Option<Code>,

    /// The assigned face.
    ///
    /// **None** = uncoded constraint (used by the select-next heuristic)
    /// **Some(code)** = coded, either by its own generator or derived
    pub current: Option<Code>,

    /// Father whose assignment derived this face, if it was not generated.
    pub codfather: Option<ConstraintId>,
}

impl Face {
    /// Fresh face for a classified constraint.
    pub fn from_range(range: &FaceRange) -> Self {
        Self {
            category: range.category,
            min_dim: range.min_dim,
            max_dim: range.max_dim,
            cur_dim: range.min_dim,
            ..Self::default()
        }
    }

    /// True once a face has been assigned.
    #[inline]
    pub fn is_coded(&self) -> bool {
        self.current.is_some()
    }

    /// The same face with no assignment, ready for a new attempt.
    ///
    /// Category-1 constraints keep the dimension picked by the configuration;
    /// the others restart from their minimum.
    pub fn cleared(&self) -> Self {
        let cur_dim = match self.category {
            Category::UniverseChild => self.cur_dim,
            _ => self.min_dim,
        };
        Self {
            category: self.category,
            min_dim: self.min_dim,
            max_dim: self.max_dim,
            cur_dim,
            ..Self::default()
        }
    }
}

/// All dynamic face state, indexed by constraint id.
#[derive(Debug, Clone, Default)]
pub struct DynamicFaces {
    pub faces: Vec<Face>,
}

impl DynamicFaces {
    /// Unclassified faces for `count` constraints.
    pub fn new(count: usize) -> Self {
        Self {
            faces: vec![Face::default(); count],
        }
    }

    #[inline]
    pub fn get(&self, id: ConstraintId) -> &Face {
        &self.faces[id]
    }

    /// The assigned face of `id`, if any.
    #[inline]
    pub fn code(&self, id: ConstraintId) -> Option<&Code> {
        self.faces[id].current.as_ref()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Ids of every coded constraint, ascending.
    pub fn coded(&self) -> impl Iterator<Item = ConstraintId> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, face)| face.is_coded())
            .map(|(id, _)| id)
    }
}
