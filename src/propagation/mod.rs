// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Consistency checks for candidate faces.
//!
//! A candidate face for constraint `c` is accepted only if it passes both
//! rule sets:
//!
//! **Father consistency**:
//! - one father: the father's face properly contains the candidate
//! - two or more fathers: with `I` the intersection of the fathers' faces,
//!   `I` properly contains the candidate when `dim(I)` is larger, and equals
//!   it when the dimensions match
//!
//! **Global consistency**, against every other coded constraint `o`:
//! - (a) the faces differ
//! - (b) face inclusion mirrors relation inclusion, in both directions and
//!   with the same strictness
//! - (c) intersecting faces require intersecting relations
//! - (d) when both cardinalities exceed one and the relations share `s`
//!   symbols, the faces' common sub-cube has at least `s` vertices
//!
//! Together these keep every coded pair consistent, so a complete
//! assignment is sound without a final pass.

pub mod errors;

pub use errors::Conflict;

use crate::geometry::Code;
use crate::memo::{ConstraintId, Lattice};
use crate::state::DynamicFaces;

/// Run the father and global checks for `candidate` as the face of `id`.
pub fn check_candidate(
    lattice: &Lattice,
    faces: &DynamicFaces,
    id: ConstraintId,
    candidate: &Code,
) -> Result<(), Conflict> {
    check_fathers(lattice, faces, id, candidate)?;
    check_global(lattice, faces, id, candidate)
}

/// Father consistency. Uncoded fathers are ignored.
pub fn check_fathers(
    lattice: &Lattice,
    faces: &DynamicFaces,
    id: ConstraintId,
    candidate: &Code,
) -> Result<(), Conflict> {
    let fathers = lattice.fathers(id);
    match fathers {
        [] => Ok(()),
        [father] => match faces.code(*father) {
            Some(face) if !face.properly_contains(candidate) => Err(Conflict::FatherContainment),
            _ => Ok(()),
        },
        _ => {
            let Some(meet) = fathers_intersection(lattice, faces, id)? else {
                return Ok(());
            };
            let fits = if meet.dimension() > candidate.dimension() {
                meet.properly_contains(candidate)
            } else {
                meet == *candidate
            };
            if fits {
                Ok(())
            } else {
                Err(Conflict::FatherIntersection)
            }
        }
    }
}

/// Intersection of the coded fathers' faces.
///
/// `Ok(None)` when no father is coded yet; a conflict when the faces are
/// disjoint.
pub fn fathers_intersection(
    lattice: &Lattice,
    faces: &DynamicFaces,
    id: ConstraintId,
) -> Result<Option<Code>, Conflict> {
    let mut meet: Option<Code> = None;
    for &father in lattice.fathers(id) {
        let Some(face) = faces.code(father) else {
            continue;
        };
        meet = Some(match meet {
            None => face.clone(),
            Some(acc) => acc
                .intersection(face)
                .ok_or(Conflict::FatherIntersection)?,
        });
    }
    Ok(meet)
}

/// Global consistency against every coded constraint other than `id`.
pub fn check_global(
    lattice: &Lattice,
    faces: &DynamicFaces,
    id: ConstraintId,
    candidate: &Code,
) -> Result<(), Conflict> {
    let mine = lattice.constraint(id);
    for other in faces.coded().filter(|&other| other != id) {
        let Some(face) = faces.code(other) else {
            continue;
        };
        let theirs = lattice.constraint(other);

        // (a)
        if face == candidate {
            return Err(Conflict::DuplicateFace);
        }

        // (b)
        let face_below = face.properly_contains(candidate);
        let face_above = candidate.properly_contains(face);
        let relation_below = mine.members.is_proper_subset(&theirs.members);
        let relation_above = theirs.members.is_proper_subset(&mine.members);
        if face_below != relation_below || face_above != relation_above {
            return Err(Conflict::InclusionMismatch);
        }

        // (c) and (d)
        let shared = mine.members.intersection_len(&theirs.members);
        match candidate.intersection(face) {
            Some(_) if shared == 0 => return Err(Conflict::DisjointRelations),
            Some(meet) => {
                if mine.cardinality > 1 && theirs.cardinality > 1 && meet.vertex_count() < shared as u64 {
                    return Err(Conflict::IntersectionTooSmall);
                }
            }
            None if shared > 0 && mine.cardinality > 1 && theirs.cardinality > 1 => {
                return Err(Conflict::IntersectionTooSmall);
            }
            None => {}
        }
    }
    Ok(())
}
