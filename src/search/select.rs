// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Which constraint to code next.
//!
//! Only *ready* constraints are considered: uncoded, not the universe, and
//! with every father already coded. Among those, with `dim` the current
//! dimension of the constraint just coded, the first non-empty tier wins:
//!
//! 1. category 1, current dimension `dim`, sharing a son with it
//! 2. category 1, current dimension `dim`
//! 3. any category, current dimension `dim`, sharing a son with it
//! 4. any category, current dimension `dim`
//! 5. the largest current dimension, category 1 first
//!
//! Ties go to the lowest constraint id.

use crate::memo::{Category, ConstraintId, Lattice, UNIVERSE};
use crate::state::{DynamicFaces, Face};

/// The first constraint of an attempt: the category-1 constraint with the
/// largest current dimension.
pub fn select_first(faces: &DynamicFaces) -> Option<ConstraintId> {
    faces
        .faces
        .iter()
        .enumerate()
        .filter(|(_, face)| face.category == Category::UniverseChild)
        .max_by_key(|&(id, face)| (face.cur_dim, std::cmp::Reverse(id)))
        .map(|(id, _)| id)
}

/// The constraint to code after `just`, or `None` when nothing is ready.
pub fn select_next(
    lattice: &Lattice,
    faces: &DynamicFaces,
    just: ConstraintId,
) -> Option<ConstraintId> {
    let ready: Vec<(ConstraintId, &Face)> = (0..lattice.len())
        .filter(|&id| is_ready(lattice, faces, id))
        .map(|id| (id, faces.get(id)))
        .collect();
    if ready.is_empty() {
        return None;
    }

    let dim = faces.get(just).cur_dim;
    let universe_child = |face: &Face| face.category == Category::UniverseChild;
    let tiers: [&dyn Fn(ConstraintId, &Face) -> bool; 4] = [
        &|id: ConstraintId, face: &Face| {
            universe_child(face) && face.cur_dim == dim && lattice.share_son(just, id)
        },
        &|_: ConstraintId, face: &Face| universe_child(face) && face.cur_dim == dim,
        &|id: ConstraintId, face: &Face| face.cur_dim == dim && lattice.share_son(just, id),
        &|_: ConstraintId, face: &Face| face.cur_dim == dim,
    ];
    for tier in tiers {
        if let Some(&(id, _)) = ready.iter().find(|(id, face)| tier(*id, *face)) {
            return Some(id);
        }
    }

    ready
        .iter()
        .max_by_key(|&&(id, face)| (face.cur_dim, universe_child(face), std::cmp::Reverse(id)))
        .map(|&(id, _)| id)
}

fn is_ready(lattice: &Lattice, faces: &DynamicFaces, id: ConstraintId) -> bool {
    id != UNIVERSE
        && !faces.get(id).is_coded()
        && lattice
            .fathers(id)
            .iter()
            .all(|&father| faces.get(father).is_coded())
}
