// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail system to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution follows a WAM-like model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to the most recent entry in choice mode
//! 6. If Suspend: pause and return control to caller
//!
//! Entries that succeeded deterministically are not choice points, so
//! backtracking passes straight through them.
//!
//! # Example
//!
//! ```
//! use face_encode::context::SearchContext;
//! use face_encode::engine::EngineBuilder;
//! use face_encode::geometry::SymbolSet;
//! use face_encode::limits::Limits;
//! use face_encode::memo::Lattice;
//! use face_encode::predicates::{DimensionPredicate, SuspendPredicate};
//!
//! let relations: Vec<SymbolSet> = vec!["1100".parse().unwrap(), "0011".parse().unwrap()];
//! let lattice = Lattice::build(4, &relations, &Limits::default()).unwrap();
//! let mut ctx = SearchContext::new(lattice, Limits::default());
//!
//! // All programs must end with FAIL or SUSPEND
//! let engine = EngineBuilder::new()
//!     .add(Box::new(DimensionPredicate::new(2, 4)))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! if let Some(_engine) = engine.search(&mut ctx) {
//!     assert_eq!(ctx.state.dimension, 2);
//! }
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const INITIAL_STACK_SIZE: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn call(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. The search terminates when:
    /// - A predicate returns Suspend (paused for inspection)
    /// - Backtracking passes the first predicate (failure)
    ///
    /// Prefer [`EngineBuilder`], which guarantees the program ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search to find one solution.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - the solution is in `ctx`
    /// - `None` if exhausted (backtracked past first predicate) - search is complete
    ///
    /// Success is indicated via side effects (state in `ctx`), not by the
    /// return value: programs never "complete", they either fail or suspend.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or SUSPEND).
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return None; // Empty is exhausted
        }

        self.stack.push(StackEntry::call(0, 0, ctx.trail.len()));

        loop {
            // Backtracked past the first predicate: search exhausted.
            let entry = self.stack.last_mut()?;

            ctx.rewind_to(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                // Call mode: try_pred
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => self.backtrack(),
                    PredicateResult::Choices(n) => {
                        let trail_checkpoint = ctx.trail.len();
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = trail_checkpoint;
                        }
                    }
                    PredicateResult::Suspend => {
                        // Pause execution, return engine for resumption
                        return Some(self);
                    }
                }
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    self.backtrack();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Pop the failed entry and every deterministic entry below it.
    fn backtrack(&mut self) {
        self.stack.pop();
        while self.stack.last().is_some_and(|entry| !entry.in_choice_mode) {
            self.stack.pop();
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.stack.last().map_or(0, |entry| entry.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::call(next_index, 0, ctx.trail.len()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        if let Some(current) = self.stack.last() {
            let entry = StackEntry::call(current.predicate_index, current.round + 1, ctx.trail.len());
            self.stack.push(entry);
        }
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builds a [`SearchEngine`] program that is guaranteed to end in a
/// terminal predicate.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// End the program with a FAIL or SUSPEND predicate.
    pub fn terminal<P: TerminalPredicate + 'static>(self, predicate: Box<P>) -> TerminatedBuilder {
        let mut predicates = self.predicates;
        predicates.push(predicate);
        TerminatedBuilder { predicates }
    }
}

/// A complete program, ready to build.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::Limits;
    use crate::memo::{Lattice, UNIVERSE};
    use crate::predicates::{FailPredicate, SuspendPredicate};

    fn context() -> SearchContext {
        let lattice = Lattice::build(3, &[], &Limits::default()).unwrap();
        SearchContext::new(lattice, Limits::default())
    }

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Writes the choice into the universe's minimum dimension, through the trail.
    #[derive(Debug)]
    struct ChooseMinDim(usize);

    impl Predicate for ChooseMinDim {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.0)
        }

        fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
            assert_eq!(ctx.face(UNIVERSE).min_dim, 0, "trail not rewound");
            ctx.update_face(UNIVERSE, |face| face.min_dim = choice + 1);
            PredicateResult::Success
        }
    }

    /// Succeeds only once the universe minimum reaches the target.
    #[derive(Debug)]
    struct RequireMinDim(usize);

    impl Predicate for RequireMinDim {
        fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            if ctx.face(UNIVERSE).min_dim == self.0 {
                PredicateResult::Success
            } else {
                PredicateResult::Failure
            }
        }
    }

    /// Runs for a fixed number of rounds.
    #[derive(Debug)]
    struct Rounds(usize);

    impl Predicate for Rounds {
        fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
            if round < self.0 {
                PredicateResult::SuccessSamePredicate
            } else {
                PredicateResult::Success
            }
        }
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx);
        assert!(engine.is_some()); // Suspended - engine returned
        let engine = engine.unwrap();
        assert_eq!(engine.statistics(), (2, 0)); // AlwaysSucceed + Suspend, no retries
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .terminal(Box::new(FailPredicate))
            .build();

        let result = engine.search(&mut ctx);
        assert!(result.is_none()); // Exhausted - engine consumed
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![]);

        let result = engine.search(&mut ctx);
        assert!(result.is_none()); // Empty is exhausted
    }

    #[test]
    fn test_backtracking_rewinds_trail() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(ChooseMinDim(4)))
            .add(Box::new(RequireMinDim(3)))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        assert_eq!(ctx.face(UNIVERSE).min_dim, 3);
        // Choices 0, 1, 2 retried; RequireMinDim tried three times plus Suspend.
        assert_eq!(engine.statistics(), (5, 3));
    }

    #[test]
    fn test_backtracking_skips_deterministic_entries() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(ChooseMinDim(2)))
            .add(Box::new(AlwaysSucceed))
            .add(Box::new(Rounds(2)))
            .terminal(Box::new(FailPredicate))
            .build();

        // Each choice runs AlwaysSucceed once and Rounds three times before failing.
        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(ctx.trail.len(), 0);
    }

    #[test]
    fn test_multi_round_predicate() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(Rounds(3)))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).unwrap();
        // Rounds(0, 1, 2, 3) + Suspend
        assert_eq!(engine.statistics(), (5, 0));
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![
            Box::new(AlwaysSucceed), // Missing terminal predicate!
        ]);

        let _ = engine.search(&mut ctx); // Should panic
    }
}
