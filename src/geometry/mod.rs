// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for face encoding.
//!
//! This module contains type-safe representations of the encoding primitives:
//! - Trit: One coordinate of a face (0, 1 or free)
//! - Code: A face of the boolean hypercube, as a string of trits
//! - SymbolSet: Bitset of symbols, the member set of a constraint

pub mod code;
pub mod symbol_set;
pub mod trit;

// Re-export for convenience
pub use code::Code;
pub use symbol_set::SymbolSet;
pub use trit::Trit;
