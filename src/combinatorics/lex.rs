// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lexicographic face enumeration.
//!
//! A face of dimension k in the n-cube is the choice of which k coordinates
//! are free plus a value for each of the n-k fixed coordinates. The two
//! choices are enumerated independently:
//!
//! - [`combinations`] moves the free coordinates to the lexicographically
//!   next k-subset of positions, replaying the fixed values left to right
//!   into the remaining slots. It cycles after C(n, k) calls.
//! - [`counting`] keeps the free coordinates and adds one to the fixed
//!   coordinates read as a binary number, most significant bit first. It
//!   cycles after 2^(n-k) calls.
//!
//! [`LexCursor`] composes them to visit all C(n, k) * 2^(n-k) faces once.

use crate::combinatorics::binomial;
use crate::geometry::{Code, Trit};

/// Rebuild a code from free positions and fixed values in slot order.
pub(crate) fn place(width: usize, free: &[usize], fixed_values: &[Trit]) -> Code {
    let mut trits = vec![Trit::DontCare; width];
    let mut values = fixed_values.iter();
    let mut free_iter = free.iter().peekable();
    for (slot, trit) in trits.iter_mut().enumerate() {
        if free_iter.peek() == Some(&&slot) {
            free_iter.next();
        } else if let Some(&value) = values.next() {
            *trit = value;
        }
    }
    Code::from_trits(trits)
}

/// Next placement of the free coordinates in lexicographic order.
///
/// # Example
///
/// ```
/// use face_encode::combinatorics::combinations;
/// use face_encode::geometry::Code;
///
/// let code: Code = "**01".parse().unwrap();
/// assert_eq!(combinations(&code).to_string(), "*0*1");
/// ```
pub fn combinations(code: &Code) -> Code {
    let width = code.width();
    let mut free = code.free_positions();
    let k = free.len();
    if k == 0 || k == width {
        return code.clone();
    }
    let fixed_values: Vec<Trit> = code.trits().iter().copied().filter(|t| t.is_fixed()).collect();

    // Rightmost position that can still move right.
    match (0..k).rev().find(|&i| free[i] < width - k + i) {
        Some(i) => {
            free[i] += 1;
            for j in i + 1..k {
                free[j] = free[i] + (j - i);
            }
        }
        None => {
            for (i, position) in free.iter_mut().enumerate() {
                *position = i;
            }
        }
    }
    place(width, &free, &fixed_values)
}

/// Next value of the fixed coordinates, as a binary counter.
///
/// # Example
///
/// ```
/// use face_encode::combinatorics::counting;
/// use face_encode::geometry::Code;
///
/// let code: Code = "0*1".parse().unwrap();
/// assert_eq!(counting(&code).to_string(), "1*0");
/// assert_eq!(counting(&"1*1".parse().unwrap()).to_string(), "0*0");
/// ```
pub fn counting(code: &Code) -> Code {
    let mut next = code.clone();
    for trit in next.trits_mut().iter_mut().rev() {
        match *trit {
            Trit::One => *trit = Trit::Zero,
            Trit::Zero => {
                *trit = Trit::One;
                break;
            }
            Trit::DontCare => {}
        }
    }
    next
}

/// Cursor over every face of one dimension of the n-cube.
///
/// Starting from a seed, the cursor first yields the seed itself, then
/// cycles the fixed values with [`counting`]; after each full counting
/// cycle it moves the free coordinates with [`combinations`]. After
/// `C(n, k) * 2^(n-k)` faces it is exhausted and returns `None`.
#[derive(Debug, Clone)]
pub struct LexCursor {
    current: Code,
    comb_index: u64,
    comb_total: u64,
    count_index: u64,
    count_total: u64,
    started: bool,
    exhausted: bool,
}

impl LexCursor {
    pub fn new(seed: Code) -> Self {
        let width = seed.width();
        let k = seed.dimension();
        let count_total = 1u64.checked_shl((width - k) as u32).unwrap_or(u64::MAX);
        Self {
            current: seed,
            comb_index: 0,
            comb_total: binomial(width, k),
            count_index: 0,
            count_total,
            started: false,
            exhausted: false,
        }
    }

    /// Total number of faces this cursor visits.
    pub fn total(&self) -> u64 {
        self.comb_total.saturating_mul(self.count_total)
    }

    /// Position of the free-coordinate placement, `0..C(n, k)`.
    pub fn comb_index(&self) -> u64 {
        self.comb_index
    }

    /// Position of the fixed-coordinate value, `0..2^(n-k)`.
    pub fn count_index(&self) -> u64 {
        self.count_index
    }
}

impl Iterator for LexCursor {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current.clone());
        }

        self.count_index += 1;
        self.current = counting(&self.current);
        if self.count_index < self.count_total {
            return Some(self.current.clone());
        }

        // Counting has wrapped back to the seed values: move the free coordinates.
        self.count_index = 0;
        self.comb_index += 1;
        if self.comb_index >= self.comb_total {
            self.exhausted = true;
            return None;
        }
        self.current = combinations(&self.current);
        Some(self.current.clone())
    }
}
