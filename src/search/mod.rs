// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking face assignment for one configuration.
//!
//! With the hypercube dimension and every category-1 face dimension fixed,
//! [`assign_faces`] gives each constraint a face or proves none exists:
//!
//! 1. clear every face and give the universe the whole cube
//! 2. select the first constraint ([`select_first`])
//! 3. draw candidates from the selected constraint's generator, checking
//!    each one ([`check_candidate`](crate::propagation::check_candidate));
//!    on acceptance derive faces for shared sons ([`derive_free_faces`]),
//!    then select the next constraint ([`select_next`])
//! 4. when a generator runs out, drop that selection and resume the
//!    previous one from its next candidate
//!
//! Every face write is trailed. Each selection remembers the trail length
//! when it was made, so rewinding there before drawing a candidate undoes
//! the previous candidate with everything derived from it.

pub mod generate;
pub mod induce;
pub mod select;

pub use generate::{FaceGenerator, SubfaceCursor};
pub use induce::derive_free_faces;
pub use select::{select_first, select_next};

use crate::context::SearchContext;
use crate::error::EncodeError;
use crate::geometry::Code;
use crate::memo::{ConstraintId, UNIVERSE};
use crate::propagation::check_candidate;
use crate::state::Counters;

/// Run one face-assignment attempt.
///
/// `Ok(true)` leaves every constraint coded; `Ok(false)` means this
/// configuration has no assignment. The only error is an exceeded work
/// limit.
pub fn assign_faces(ctx: &mut SearchContext) -> Result<bool, EncodeError> {
    ctx.statistics.start_attempt();
    reset_faces(ctx);
    ctx.state.selection.clear();

    let Some(first) = select_first(&ctx.state.faces) else {
        return Ok(true);
    };
    push_selection(ctx, first);

    loop {
        let Some(node) = ctx.state.selection.tail() else {
            log::debug!(
                "attempt failed after {} tried codes",
                ctx.statistics.attempt_tried_codes()
            );
            return Ok(false);
        };
        let (id, checkpoint) = (node.constraint, node.checkpoint);
        ctx.rewind_to(checkpoint);

        let candidate = match ctx.state.selection.tail_mut() {
            Some(node) => {
                let candidate = node
                    .generator
                    .next_candidate(&ctx.lattice, &ctx.state.faces, id);
                if node.first_tried.is_none() {
                    node.first_tried.clone_from(&candidate);
                }
                candidate
            }
            None => None,
        };
        let Some(candidate) = candidate else {
            ctx.state.selection.pop();
            ctx.statistics.increment_counter(Counters::Backtracks);
            continue;
        };

        let total = ctx.statistics.record_tried_code();
        if let Some(limit) = ctx.limits.work_limit {
            if total > limit {
                return Err(EncodeError::WorkLimitExceeded(limit));
            }
        }

        if let Err(conflict) = check_candidate(&ctx.lattice, &ctx.state.faces, id, &candidate) {
            ctx.statistics.record_conflict(conflict);
            continue;
        }
        let first_tried = ctx
            .state
            .selection
            .tail()
            .and_then(|node| node.first_tried.clone());
        log::trace!(
            "constraint {} accepts {} (seed {:?}, first tried {:?})",
            id,
            candidate,
            ctx.face(id).seed,
            first_tried
        );
        ctx.update_face(id, |face| {
            face.cur_dim = candidate.dimension();
            face.current = Some(candidate);
            face.first_tried = first_tried;
        });

        if let Err(conflict) = derive_free_faces(ctx, id) {
            ctx.statistics.record_conflict(conflict);
            continue;
        }

        match select_next(&ctx.lattice, &ctx.state.faces, id) {
            Some(next) => push_selection(ctx, next),
            None => {
                log::debug!(
                    "attempt succeeded after {} tried codes",
                    ctx.statistics.attempt_tried_codes()
                );
                return Ok(true);
            }
        }
    }
}

/// Clear every face for a new attempt; the universe gets the whole cube.
fn reset_faces(ctx: &mut SearchContext) {
    let dimension = ctx.state.dimension;
    for id in 0..ctx.lattice.len() {
        let mut face = ctx.face(id).cleared();
        if id == UNIVERSE {
            face.cur_dim = dimension;
            face.current = Some(Code::full(dimension));
        }
        ctx.set_face(id, face);
    }
}

/// Select `id`: record its seed, then remember the trail length.
fn push_selection(ctx: &mut SearchContext, id: ConstraintId) {
    let (generator, seed) =
        FaceGenerator::new(&ctx.lattice, &ctx.state.faces, id, ctx.state.dimension);
    log::trace!("select constraint {} ({})", id, ctx.face(id).category);
    ctx.update_face(id, |face| face.seed = seed);
    let checkpoint = ctx.trail.len();
    ctx.state.selection.push(id, checkpoint, generator);
}
