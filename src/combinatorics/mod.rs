// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combinatorial generators over face codes.
//!
//! All generators are stateless and deterministic: given a code they return
//! the next code in a fixed order, cycling back to the start after the last
//! one. The search keeps its own counters to know when a cycle is complete.
//!
//! - [`combinations`]: next placement of the free coordinates, lexicographic
//! - [`counting`]: next value of the fixed coordinates, binary counting
//! - [`gray_min_change`]: next placement in revolving-door (minimal change) order
//! - [`LexCursor`]: every face of one dimension, composing the first two

pub mod gray;
pub mod lex;

pub use gray::gray_min_change;
pub use lex::{combinations, counting, LexCursor};

/// Binomial coefficient C(n, k), saturating at `u64::MAX`.
///
/// Built row by row with Pascal's identity C(n, k) = C(n-1, k-1) + C(n-1, k).
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut row = vec![0u64; k + 1];
    row[0] = 1;
    for i in 1..=n {
        for j in (1..=k.min(i)).rev() {
            row[j] = row[j].saturating_add(row[j - 1]);
        }
    }
    row[k]
}

/// Number of `k`-dimensional faces of the `d`-cube: C(d, k) * 2^(d-k).
pub fn face_count(d: usize, k: usize) -> u64 {
    if k > d {
        return 0;
    }
    let placements = binomial(d, k);
    match 1u64.checked_shl((d - k) as u32) {
        Some(values) => placements.saturating_mul(values),
        None => u64::MAX,
    }
}

/// Smallest face dimension able to hold `cardinality` vertices:
/// `ceil(log2(round_up_pow2(cardinality)))`.
pub fn level(cardinality: usize) -> usize {
    cardinality.max(1).next_power_of_two().trailing_zeros() as usize
}
