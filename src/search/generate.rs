// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Category-specific candidate generators.
//!
//! - **Category 1** enumerates every face of its configured dimension in the
//!   full cube, starting from a wildcard-prefix seed.
//! - **Category 2** works in the sub-cube spanned by the intersection of its
//!   fathers' faces, trying sub-face dimensions from its minimum up to the
//!   intersection's dimension.
//! - **Category 3** does the same inside its single father's face, stopping
//!   one below the father's dimension.
//!
//! Sub-faces are merged back into full width with [`Code::embed`]. Within
//! one selection no candidate is produced twice.

use crate::combinatorics::LexCursor;
use crate::geometry::Code;
use crate::memo::{Category, ConstraintId, Lattice};
use crate::propagation::fathers_intersection;
use crate::state::{DynamicFaces, Face};

/// Enumeration state for one selected constraint.
#[derive(Debug, Clone)]
pub enum FaceGenerator {
    UniverseChild(LexCursor),
    MultipleFathers(SubfaceCursor),
    SingleFather(SubfaceCursor),
}

impl FaceGenerator {
    /// Generator for a category-1 constraint starting at `seed`.
    pub fn universe_child(seed: Code) -> Self {
        FaceGenerator::UniverseChild(LexCursor::new(seed))
    }

    /// Generator for `id` in the current hypercube, plus its seed.
    ///
    /// The universe never needs a generator; it is treated as category 1
    /// of full dimension so the match stays total.
    pub fn new(
        lattice: &Lattice,
        faces: &DynamicFaces,
        id: ConstraintId,
        dimension: usize,
    ) -> (Self, Option<Code>) {
        let face = faces.get(id);
        match face.category {
            Category::Universe | Category::UniverseChild => {
                let seed = Code::wildcard_prefix(dimension, face.cur_dim.min(dimension));
                (Self::universe_child(seed.clone()), Some(seed))
            }
            Category::MultipleFathers => {
                let cursor = SubfaceCursor::new(face, false);
                let seed = cursor.seed(&parent_face(lattice, faces, id));
                (FaceGenerator::MultipleFathers(cursor), seed)
            }
            Category::SingleFather => {
                let cursor = SubfaceCursor::new(face, true);
                let seed = cursor.seed(&parent_face(lattice, faces, id));
                (FaceGenerator::SingleFather(cursor), seed)
            }
        }
    }

    /// Next candidate face for `id`, or `None` when exhausted.
    pub fn next_candidate(
        &mut self,
        lattice: &Lattice,
        faces: &DynamicFaces,
        id: ConstraintId,
    ) -> Option<Code> {
        match self {
            FaceGenerator::UniverseChild(cursor) => cursor.next(),
            FaceGenerator::MultipleFathers(cursor) | FaceGenerator::SingleFather(cursor) => {
                let parent = parent_face(lattice, faces, id)?;
                cursor.next_in(&parent)
            }
        }
    }
}

/// The face candidates must lie in: the intersection of the coded
/// fathers' faces, which for a single father is its face.
fn parent_face(lattice: &Lattice, faces: &DynamicFaces, id: ConstraintId) -> Option<Code> {
    fathers_intersection(lattice, faces, id).ok().flatten()
}

/// Enumerates sub-faces of a parent face, by increasing dimension.
#[derive(Debug, Clone)]
pub struct SubfaceCursor {
    dim: usize,
    max_dim: usize,
    /// Stop below the parent's own dimension.
    proper: bool,
    cursor: Option<LexCursor>,
}

impl SubfaceCursor {
    fn new(face: &Face, proper: bool) -> Self {
        Self {
            dim: face.min_dim,
            max_dim: face.max_dim,
            proper,
            cursor: None,
        }
    }

    /// Sub-face dimension currently being enumerated.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Largest sub-face dimension allowed inside `parent`.
    fn limit(&self, parent: &Code) -> Option<usize> {
        let top = if self.proper {
            parent.dimension().checked_sub(1)?
        } else {
            parent.dimension()
        };
        Some(top.min(self.max_dim))
    }

    /// First candidate the enumeration will produce.
    fn seed(&self, parent: &Option<Code>) -> Option<Code> {
        let parent = parent.as_ref()?;
        if self.dim > self.limit(parent)? {
            return None;
        }
        Some(parent.embed(&Code::wildcard_prefix(parent.dimension(), self.dim)))
    }

    fn next_in(&mut self, parent: &Code) -> Option<Code> {
        let limit = self.limit(parent)?;
        loop {
            if self.dim > limit {
                return None;
            }
            let cursor = self.cursor.get_or_insert_with(|| {
                LexCursor::new(Code::wildcard_prefix(parent.dimension(), self.dim))
            });
            match cursor.next() {
                Some(sub) => return Some(parent.embed(&sub)),
                None => {
                    self.cursor = None;
                    self.dim += 1;
                }
            }
        }
    }
}
