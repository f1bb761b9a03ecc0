// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Public entry point.
//!
//! [`encode`] builds the lattice, estimates the dimension floor and runs the
//! predicate program
//!
//! ```text
//! Dimension → Configuration → count → FaceAssignment → Suspend
//! ```
//!
//! on the backtracking engine. A suspended engine carries either a
//! solution or a fatal error in the context; an exhausted one means no
//! encoding exists up to the maximum dimension.

use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::error::EncodeError;
use crate::geometry::{Code, SymbolSet};
use crate::limits::Limits;
use crate::memo::{classify, lower_bound, Lattice};
use crate::predicates::{
    ConfigurationPredicate, DimensionPredicate, FaceAssignmentPredicate, SuspendPredicate,
};
use crate::state::{Counters, Statistics, WorkSummary};

/// Receives the final code of each symbol.
pub trait SymbolTable {
    fn symbol_count(&self) -> usize;
    fn set_code(&mut self, index: usize, code: &Code);
}

impl SymbolTable for Vec<Option<Code>> {
    fn symbol_count(&self) -> usize {
        self.len()
    }

    fn set_code(&mut self, index: usize, code: &Code) {
        if let Some(slot) = self.get_mut(index) {
            *slot = Some(code.clone());
        }
    }
}

/// Face given to one lattice constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedFace {
    pub members: SymbolSet,
    pub face: Code,
    /// Where this constraint's generator started, if it was generated.
    pub seed: Option<Code>,
    /// First candidate the generator offered in the accepted attempt.
    pub first_tried: Option<Code>,
}

/// A successful encoding.
#[derive(Debug, Clone)]
pub struct Encoding {
    /// Hypercube dimension, which is also the code length.
    pub dimension: usize,
    /// Dimension floor from the lower-bound estimate.
    pub lower_bound: usize,
    /// One vertex per symbol, in symbol order.
    pub codes: Vec<Code>,
    /// Every lattice constraint with its face, universe first.
    pub faces: Vec<AssignedFace>,
    /// True when intersection generation hit its cap.
    pub truncated: bool,
    pub work: WorkSummary,
}

impl Encoding {
    /// Write each symbol's code into `table`. Symbols beyond the table's
    /// size are ignored.
    pub fn copy_codes_into(&self, table: &mut impl SymbolTable) {
        let count = table.symbol_count().min(self.codes.len());
        for (index, code) in self.codes.iter().take(count).enumerate() {
            table.set_code(index, code);
        }
    }

    /// True if the caller wants longer codes than were found, so the cube
    /// has to be expanded afterwards.
    pub fn requires_expansion(&self, target_code_length: usize) -> bool {
        target_code_length > self.dimension
    }
}

/// Find a face-embedding encoding of `symbol_count` symbols satisfying
/// every relation in `relations`.
///
/// Each relation is a set of symbols that must occupy a face of the
/// hypercube containing no other symbol. Dimensions are tried in increasing
/// order from the lower bound, so the result uses the smallest dimension
/// the search finds.
pub fn encode(
    symbol_count: usize,
    relations: &[SymbolSet],
    limits: &Limits,
) -> Result<Encoding, EncodeError> {
    let lattice = Lattice::build(symbol_count, relations, limits)?;
    let bound = lower_bound(&lattice);
    let start = classify(&lattice, bound).dimension;
    log::info!("lower bound {}, starting at dimension {}", bound, start);

    if start > limits.max_dimension {
        return Err(EncodeError::DimensionLimit {
            required: start,
            limit: limits.max_dimension,
        });
    }
    let max = symbol_count.max(start).min(limits.max_dimension);

    let mut ctx = SearchContext::new(lattice, *limits);
    let engine = EngineBuilder::new()
        .add(Box::new(DimensionPredicate::new(start, max)))
        .add(Box::new(ConfigurationPredicate::new()))
        .add(Statistics::counting_predicate(Counters::Configurations, None))
        .add(Box::new(FaceAssignmentPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let Some(engine) = engine.search(&mut ctx) else {
        log::info!("no encoding up to dimension {}", max);
        return Err(EncodeError::Unsatisfiable(max));
    };
    if let Some(error) = ctx.fatal.take() {
        return Err(error);
    }
    let (tries, retries) = engine.statistics();
    log::debug!("engine: {} tries, {} retries", tries, retries);

    let encoding = collect(&ctx, bound)?;
    log::info!(
        "encoded {} symbols in dimension {} after {} tried codes",
        symbol_count,
        encoding.dimension,
        encoding.work.tried_codes
    );
    Ok(encoding)
}

fn collect(ctx: &SearchContext, lower_bound: usize) -> Result<Encoding, EncodeError> {
    let lattice = &ctx.lattice;
    let faces = (0..lattice.len())
        .map(|id| {
            let state = ctx.face(id);
            let face = state
                .current
                .clone()
                .ok_or(EncodeError::IncompleteAssignment { constraint: id })?;
            Ok(AssignedFace {
                members: lattice.members(id).clone(),
                face,
                seed: state.seed.clone(),
                first_tried: state.first_tried.clone(),
            })
        })
        .collect::<Result<Vec<_>, EncodeError>>()?;
    let codes = (0..lattice.symbol_count())
        .map(|symbol| faces[lattice.singleton(symbol)].face.clone())
        .collect();

    Ok(Encoding {
        dimension: ctx.state.dimension,
        lower_bound,
        codes,
        faces,
        truncated: lattice.truncated(),
        work: ctx.statistics.summary(),
    })
}
