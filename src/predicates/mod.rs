// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! The outer driver is a predicate program:
//!
//! ```text
//! Dimension → Configuration → count → FaceAssignment → Suspend
//! ```
//!
//! # Organization
//!
//! - `dimension`: [`DimensionPredicate`] chooses the hypercube dimension
//! - `configuration`: [`ConfigurationPredicate`] chooses each category-1
//!   face dimension, one round per constraint
//! - `assign`: [`FaceAssignmentPredicate`] runs the face search
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod assign;
pub mod configuration;
pub mod dimension;

// Re-export main predicates for convenience
pub use assign::FaceAssignmentPredicate;
pub use configuration::ConfigurationPredicate;
pub use dimension::DimensionPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. It's a terminal predicate
/// that ends a search path without success, similar to Prolog's `fail.` built-in.
///
/// # Usage
///
/// Use `FailPredicate` to explicitly terminate unsuccessful search paths:
/// - As a terminal predicate to mark unsatisfiable branches
/// - To force exploration of all alternatives
///
/// # Example
///
/// ```
/// use face_encode::context::SearchContext;
/// use face_encode::engine::EngineBuilder;
/// use face_encode::limits::Limits;
/// use face_encode::memo::Lattice;
/// use face_encode::predicates::{DimensionPredicate, FailPredicate};
///
/// let lattice = Lattice::build(3, &[], &Limits::default()).unwrap();
/// let mut ctx = SearchContext::new(lattice, Limits::default());
/// let engine = EngineBuilder::new()
///     .add(Box::new(DimensionPredicate::new(2, 3)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust both dimensions then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
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
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution.
///
/// The driver ends its program with this: reaching it means every earlier
/// predicate succeeded, and the solution is left in the context.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
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
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
