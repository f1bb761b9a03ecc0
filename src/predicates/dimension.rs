// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DimensionPredicate - chooses the hypercube dimension.
//!
//! Choice `i` tries dimension `start + i`, so dimensions are tried in
//! increasing order and the first success is the smallest one the search
//! can handle.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::memo::classify;
use crate::state::Counters;

/// Tries each hypercube dimension in `[start, max]`.
///
/// A dimension is rejected outright when classification raises it (that
/// larger dimension gets its own choice) or leaves a category-1 constraint
/// with an empty range.
#[derive(Debug)]
pub struct DimensionPredicate {
    start: usize,
    max: usize,
}

impl DimensionPredicate {
    pub fn new(start: usize, max: usize) -> Self {
        Self { start, max }
    }
}

impl Predicate for DimensionPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if self.max < self.start {
            return PredicateResult::Failure;
        }
        PredicateResult::Choices(self.max - self.start + 1)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        let dimension = self.start + choice;
        let classification = classify(&ctx.lattice, dimension);
        if classification.dimension != dimension || !classification.is_feasible() {
            log::debug!("dimension {} skipped", dimension);
            return PredicateResult::Failure;
        }

        log::info!("trying dimension {}", dimension);
        ctx.statistics.increment_counter(Counters::Dimensions);
        ctx.apply_classification(&classification);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Dimension"
    }
}
