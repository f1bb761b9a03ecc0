// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SymbolSet type for representing constraint relations as bitsets.
//!
//! A SymbolSet is the member set of a face constraint: bit i is set when
//! symbol i belongs to the constraint. The width (number of symbols) is
//! fixed at construction, and the bits are stored in as many u64 words as
//! needed.
//!
//! # Examples
//!
//! ```
//! use face_encode::geometry::SymbolSet;
//!
//! let a: SymbolSet = "1110".parse().unwrap();
//! let b: SymbolSet = "0111".parse().unwrap();
//!
//! assert_eq!(a.len(), 3);
//! assert_eq!(a.intersection(&b).to_string(), "0110");
//! assert!(a.intersection(&b).is_proper_subset(&a));
//! ```

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// A set of symbols represented as a bitset of fixed width.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolSet {
    words: Vec<u64>,
    width: usize,
}

impl SymbolSet {
    fn word_count(width: usize) -> usize {
        width.div_ceil(64)
    }

    /// Create an empty set over `width` symbols.
    pub fn empty(width: usize) -> Self {
        Self {
            words: vec![0; Self::word_count(width)],
            width,
        }
    }

    /// Create the set of all `width` symbols.
    pub fn full(width: usize) -> Self {
        let mut set = Self::empty(width);
        let complete_words = width / 64;
        for word in set.words.iter_mut().take(complete_words) {
            *word = u64::MAX;
        }
        let remaining_bits = width % 64;
        if remaining_bits > 0 {
            set.words[complete_words] = (1u64 << remaining_bits) - 1;
        }
        set
    }

    /// Create the set holding only `symbol`.
    pub fn singleton(width: usize, symbol: usize) -> Self {
        let mut set = Self::empty(width);
        set.insert(symbol);
        set
    }

    /// Create a set from the given symbol indices.
    pub fn from_symbols(width: usize, symbols: &[usize]) -> Self {
        let mut set = Self::empty(width);
        for &symbol in symbols {
            set.insert(symbol);
        }
        set
    }

    /// Number of symbols the set ranges over.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Check if the set contains a specific symbol.
    ///
    /// # Panics
    ///
    /// Panics if `symbol >= width`.
    pub fn contains(&self, symbol: usize) -> bool {
        assert!(
            symbol < self.width,
            "symbol out of range: {} >= {}",
            symbol,
            self.width
        );
        (self.words[symbol / 64] >> (symbol % 64)) & 1 != 0
    }

    /// Insert a symbol into the set.
    ///
    /// # Panics
    ///
    /// Panics if `symbol >= width`.
    pub fn insert(&mut self, symbol: usize) {
        assert!(
            symbol < self.width,
            "symbol out of range: {} >= {}",
            symbol,
            self.width
        );
        self.words[symbol / 64] |= 1u64 << (symbol % 64);
    }

    /// Get the number of symbols in the set (population count).
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Symbols present in both sets.
    pub fn intersection(&self, other: &SymbolSet) -> SymbolSet {
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| a & b)
            .collect();
        SymbolSet {
            words,
            width: self.width.min(other.width),
        }
    }

    /// Size of the intersection, without building it.
    pub fn intersection_len(&self, other: &SymbolSet) -> usize {
        self.words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    /// True if every member of `self` is in `other`.
    pub fn is_subset(&self, other: &SymbolSet) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .all(|(a, b)| a & !b == 0)
    }

    /// True if `self` is a subset of `other` and the two differ.
    pub fn is_proper_subset(&self, other: &SymbolSet) -> bool {
        self != other && self.is_subset(other)
    }

    /// Iterate over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(move |&symbol| self.contains(symbol))
    }
}

impl FromStr for SymbolSet {
    type Err = ParseError;

    /// Parse a string of `0`/`1`, symbol 0 first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let width = s.chars().count();
        let mut set = SymbolSet::empty(width);
        for (position, c) in s.chars().enumerate() {
            match c {
                '1' => set.insert(position),
                '0' => {}
                found => return Err(ParseError::InvalidCharacter { position, found }),
            }
        }
        Ok(set)
    }
}

impl fmt::Display for SymbolSet {
    /// Format as a bit string, symbol 0 first, e.g. "1100".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in 0..self.width {
            write!(f, "{}", if self.contains(symbol) { '1' } else { '0' })?;
        }
        Ok(())
    }
}
