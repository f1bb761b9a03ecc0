// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Faces derived for free after an assignment.
//!
//! When constraint `c` has just been coded and shares exactly one son `s`
//! with another coded constraint `o`, and `s` is an uncoded category-2
//! constraint, its face must lie in `I = face(c) ∩ face(o)`. If `I` has
//! exactly the dimension `s` would start from, there is only one choice and
//! `s` takes it immediately, remembering `c` as its codfather. A larger `I`
//! leaves `s` to its own generator. Derivation does not cascade.

use crate::context::SearchContext;
use crate::memo::{Category, ConstraintId};
use crate::propagation::{check_candidate, Conflict};
use crate::state::Counters;

/// Derive faces for the shared sons of `coded`. All writes go through the
/// trail, so rewinding past the assignment of `coded` undoes them too.
pub fn derive_free_faces(ctx: &mut SearchContext, coded: ConstraintId) -> Result<(), Conflict> {
    let Some(face) = ctx.code(coded).cloned() else {
        return Ok(());
    };
    let others: Vec<ConstraintId> = ctx
        .state
        .faces
        .coded()
        .filter(|&other| other != coded)
        .collect();

    for other in others {
        let [son] = ctx.lattice.common_sons(coded, other)[..] else {
            continue;
        };
        let son_face = ctx.face(son);
        if son_face.category != Category::MultipleFathers || son_face.is_coded() {
            continue;
        }
        let (min_dim, cur_dim) = (son_face.min_dim, son_face.cur_dim);
        let Some(other_face) = ctx.code(other) else {
            continue;
        };

        let meet = face
            .intersection(other_face)
            .ok_or(Conflict::DerivedFaceTooSmall)?;
        if meet.dimension() < min_dim {
            return Err(Conflict::DerivedFaceTooSmall);
        }
        if meet.dimension() > cur_dim {
            continue;
        }

        if check_candidate(&ctx.lattice, &ctx.state.faces, son, &meet).is_err() {
            return Err(Conflict::DerivedFaceInconsistent);
        }
        log::trace!("derived {} for constraint {} from {}", meet, son, coded);
        ctx.update_face(son, |face| {
            face.cur_dim = meet.dimension();
            face.current = Some(meet);
            face.codfather = Some(coded);
        });
        ctx.statistics.increment_counter(Counters::InducedFaces);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Code, SymbolSet};
    use crate::limits::Limits;
    use crate::memo::{classify, Lattice, UNIVERSE};

    fn context(n: usize, strings: &[&str], d: usize) -> SearchContext {
        let relations: Vec<SymbolSet> = strings.iter().map(|s| s.parse().unwrap()).collect();
        let lattice = Lattice::build(n, &relations, &Limits::default()).unwrap();
        let classification = classify(&lattice, d);
        let mut ctx = SearchContext::new(lattice, Limits::default());
        ctx.apply_classification(&classification);
        ctx
    }

    fn assign(ctx: &mut SearchContext, id: ConstraintId, s: &str) {
        let code: Code = s.parse().unwrap();
        ctx.update_face(id, |face| face.current = Some(code));
    }

    #[test]
    fn test_derives_shared_son() {
        let mut ctx = context(4, &["1110", "0111"], 3);
        let meet = ctx.lattice.find(&"0110".parse().unwrap()).unwrap();
        assign(&mut ctx, UNIVERSE, "***");
        assign(&mut ctx, 1, "**0");
        let checkpoint = ctx.trail.len();
        assign(&mut ctx, 2, "*0*");

        assert_eq!(derive_free_faces(&mut ctx, 2), Ok(()));
        assert_eq!(ctx.code(meet).map(|c| c.to_string()), Some("*00".to_string()));
        assert_eq!(ctx.face(meet).codfather, Some(2));
        assert_eq!(ctx.statistics.get(Counters::InducedFaces), 1);

        ctx.rewind_to(checkpoint);
        assert_eq!(ctx.code(meet), None);
        assert_eq!(ctx.face(meet).codfather, None);
    }

    #[test]
    fn test_too_small_intersection_conflicts() {
        let mut ctx = context(4, &["1110", "0111"], 3);
        assign(&mut ctx, UNIVERSE, "***");
        assign(&mut ctx, 1, "**0");
        assign(&mut ctx, 2, "0*1");
        assert_eq!(
            derive_free_faces(&mut ctx, 2),
            Err(Conflict::DerivedFaceTooSmall)
        );
    }

    #[test]
    fn test_derives_square() {
        let mut ctx = context(5, &["11110", "01111"], 4);
        let meet = ctx.lattice.find(&"01110".parse().unwrap()).unwrap();
        assert_eq!(ctx.face(meet).cur_dim, 2);
        assign(&mut ctx, UNIVERSE, "****");
        assign(&mut ctx, 1, "***0");
        assign(&mut ctx, 2, "**0*");
        assert_eq!(derive_free_faces(&mut ctx, 2), Ok(()));
        assert_eq!(ctx.code(meet).map(|c| c.to_string()), Some("**00".to_string()));
    }

    #[test]
    fn test_larger_intersection_left_to_generator() {
        let mut ctx = context(4, &["1110", "0111"], 4);
        let meet = ctx.lattice.find(&"0110".parse().unwrap()).unwrap();
        assign(&mut ctx, UNIVERSE, "****");
        assign(&mut ctx, 1, "***0");
        assign(&mut ctx, 2, "**0*");
        // `**00` leaves a choice of edges for the meet.
        assert_eq!(derive_free_faces(&mut ctx, 2), Ok(()));
        assert_eq!(ctx.code(meet), None);
        assert_eq!(ctx.statistics.get(Counters::InducedFaces), 0);
    }
}
