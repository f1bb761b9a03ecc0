// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ConfigurationPredicate - fixes the face dimension of every universe child.
//!
//! Round 0 lists the category-1 constraints. Round `r` then offers one
//! choice per dimension in `[min_dim, max_dim]` of the `r`th constraint,
//! so the engine walks the cartesian product with the last constraint
//! varying fastest.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::error::EncodeError;
use crate::memo::{Category, ConstraintId};

#[derive(Debug, Default)]
pub struct ConfigurationPredicate {
    /// Category-1 constraints, in id order.
    constraints: Vec<ConstraintId>,
}

impl ConfigurationPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of configurations, or `None` when it does not fit in a u64.
    fn configuration_count(ctx: &SearchContext, constraints: &[ConstraintId]) -> Option<u64> {
        constraints.iter().try_fold(1u64, |total, &id| {
            let face = ctx.face(id);
            let width = (face.max_dim + 1).checked_sub(face.min_dim)?;
            total.checked_mul(u64::try_from(width).ok()?)
        })
    }
}

impl Predicate for ConfigurationPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == 0 {
            self.constraints = ctx
                .state
                .faces
                .faces
                .iter()
                .enumerate()
                .filter(|(_, face)| face.category == Category::UniverseChild)
                .map(|(id, _)| id)
                .collect();
            let Some(count) = Self::configuration_count(ctx, &self.constraints) else {
                ctx.fatal = Some(EncodeError::ConfigurationOverflow {
                    dimension: ctx.state.dimension,
                });
                return PredicateResult::Suspend;
            };
            log::debug!(
                "{} configurations of {} universe children at dimension {}",
                count,
                self.constraints.len(),
                ctx.state.dimension
            );
        }

        let Some(&id) = self.constraints.get(round) else {
            return PredicateResult::Success;
        };
        let face = ctx.face(id);
        match (face.max_dim + 1).saturating_sub(face.min_dim) {
            0 => PredicateResult::Failure,
            width => PredicateResult::Choices(width),
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let id = self.constraints[round];
        ctx.update_face(id, |face| face.cur_dim = face.min_dim + choice);
        if round + 1 == self.constraints.len() {
            log::debug!(
                "configuration {:?}",
                self.constraints
                    .iter()
                    .map(|&id| ctx.face(id).cur_dim)
                    .collect::<Vec<_>>()
            );
        }
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Configuration"
    }
}
