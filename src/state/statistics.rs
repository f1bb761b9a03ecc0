// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by additional methods.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::propagation::Conflict;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Hypercube dimensions tried.
    Dimensions,
    /// Face-dimension configurations handed to the face search.
    Configurations,
    /// Face-assignment attempts started.
    Attempts,
    /// Candidate faces produced by the generators.
    TriedCodes,
    /// Constraints whose candidates ran out.
    Backtracks,
    /// Category-2 faces derived without enumeration.
    InducedFaces,
}

const COUNT: usize = Counters::COUNT + Conflict::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; COUNT],
    /// Tried codes since the start of the current attempt.
    attempt_tried_codes: u64,
}

/// Totals reported with an encoding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkSummary {
    pub dimensions: u64,
    pub configurations: u64,
    pub attempts: u64,
    pub tried_codes: u64,
    pub backtracks: u64,
    pub induced_faces: u64,
    pub conflicts: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count a rejected candidate under its reason.
    pub(crate) fn record_conflict(&mut self, conflict: Conflict) {
        self.stats[Counters::COUNT + conflict as usize] += 1;
    }

    /// Start counting tried codes for a new attempt.
    pub(crate) fn start_attempt(&mut self) {
        self.increment_counter(Counters::Attempts);
        self.attempt_tried_codes = 0;
    }

    /// Count one candidate face. Returns the running total.
    pub(crate) fn record_tried_code(&mut self) -> u64 {
        self.increment_counter(Counters::TriedCodes);
        self.attempt_tried_codes += 1;
        self.get(Counters::TriedCodes)
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// How often candidates were rejected for this reason.
    pub fn conflicts(&self, conflict: Conflict) -> u64 {
        self.stats[Counters::COUNT + conflict as usize]
    }

    /// Rejected candidates over all reasons.
    pub fn total_conflicts(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }

    pub fn attempt_tried_codes(&self) -> u64 {
        self.attempt_tried_codes
    }

    pub fn summary(&self) -> WorkSummary {
        WorkSummary {
            dimensions: self.get(Counters::Dimensions),
            configurations: self.get(Counters::Configurations),
            attempts: self.get(Counters::Attempts),
            tried_codes: self.get(Counters::TriedCodes),
            backtracks: self.get(Counters::Backtracks),
            induced_faces: self.get(Counters::InducedFaces),
            conflicts: self.total_conflicts(),
        }
    }
}

#[derive(Debug)]
struct CountingPredicate {
    filter: fn(&SearchContext) -> bool,
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            let statistics = &mut ctx.statistics;
            statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_independent() {
        let mut statistics = Statistics::new();
        statistics.increment_counter(Counters::Backtracks);
        statistics.record_conflict(Conflict::DuplicateFace);
        statistics.record_conflict(Conflict::DuplicateFace);
        statistics.record_conflict(Conflict::DisjointRelations);

        assert_eq!(statistics.get(Counters::Backtracks), 1);
        assert_eq!(statistics.get(Counters::Attempts), 0);
        assert_eq!(statistics.conflicts(Conflict::DuplicateFace), 2);
        assert_eq!(statistics.total_conflicts(), 3);
    }

    #[test]
    fn test_attempt_tried_codes_reset() {
        let mut statistics = Statistics::new();
        statistics.start_attempt();
        statistics.record_tried_code();
        statistics.record_tried_code();
        assert_eq!(statistics.attempt_tried_codes(), 2);

        statistics.start_attempt();
        assert_eq!(statistics.record_tried_code(), 3);
        assert_eq!(statistics.attempt_tried_codes(), 1);
        assert_eq!(statistics.summary().attempts, 2);
    }
}
