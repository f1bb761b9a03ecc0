// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! FaceAssignmentPredicate - runs one face-assignment attempt.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::search::assign_faces;

/// Deterministic: succeeds when the current configuration has an
/// assignment, fails otherwise. A fatal error is stored in the context and
/// suspends the engine.
#[derive(Debug, Default)]
pub struct FaceAssignmentPredicate;

impl Predicate for FaceAssignmentPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match assign_faces(ctx) {
            Ok(true) => PredicateResult::Success,
            Ok(false) => PredicateResult::Failure,
            Err(error) => {
                log::debug!("face assignment aborted: {}", error);
                ctx.fatal = Some(error);
                PredicateResult::Suspend
            }
        }
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "FaceAssignment"
    }
}
