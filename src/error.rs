// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for face encoding.
//!
//! Only fatal conditions are represented here. Exhausting a face-dimension
//! configuration or a whole hypercube dimension is part of normal search
//! and never reaches the caller.

use crate::memo::ConstraintId;
use thiserror::Error;

/// Fatal errors that abort an encoding run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// There are no symbols to encode.
    #[error("symbol set is empty")]
    NoSymbols,

    /// A relation does not have one bit per symbol.
    #[error("constraint {index} has width {found}, expected {expected}")]
    WidthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A relation contains no symbols.
    #[error("constraint {0} is empty")]
    EmptyConstraint(usize),

    /// The number of face-dimension configurations does not fit in a u64.
    #[error("face-dimension configurations overflow at dimension {dimension}")]
    ConfigurationOverflow { dimension: usize },

    /// No assignment exists at any dimension up to the given one.
    #[error("no encoding found up to dimension {0}")]
    Unsatisfiable(usize),

    /// The configured work limit on tried codes was exceeded.
    #[error("work limit of {0} tried codes exceeded")]
    WorkLimitExceeded(u64),

    /// The lattice needs a larger hypercube than the configured ceiling.
    #[error("dimension {required} exceeds the limit of {limit}")]
    DimensionLimit { required: usize, limit: usize },

    /// Search reported success but a constraint holds no face.
    #[error("constraint {constraint} has no face after a successful search")]
    IncompleteAssignment { constraint: ConstraintId },
}

/// Errors from parsing codes and relations out of text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Character outside the accepted alphabet.
    #[error("invalid character {found:?} at position {position}")]
    InvalidCharacter { position: usize, found: char },
}
