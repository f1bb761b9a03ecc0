// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimal-change enumeration of free-coordinate placements.
//!
//! Revolving-door order (Knuth, TAOCP 7.2.1.3, Algorithm R): consecutive
//! k-subsets differ by moving exactly one element. The current subset is
//! the whole state, so each step is computed from the code alone.

use crate::combinatorics::lex::place;
use crate::geometry::{Code, Trit};

/// Next placement of the free coordinates in revolving-door order.
///
/// Fixed values are replayed left to right into the non-free slots, as in
/// [`combinations`](crate::combinatorics::combinations). Cycles after
/// C(n, k) calls, starting from the wildcard-prefix placement.
///
/// # Example
///
/// ```
/// use face_encode::combinatorics::gray_min_change;
/// use face_encode::geometry::Code;
///
/// let mut code = Code::wildcard_prefix(4, 2);
/// let mut order = vec![code.to_string()];
/// for _ in 0..5 {
///     code = gray_min_change(&code);
///     order.push(code.to_string());
/// }
/// assert_eq!(order, vec!["**00", "0**0", "*0*0", "00**", "0*0*", "*00*"]);
/// ```
pub fn gray_min_change(code: &Code) -> Code {
    let n = code.width();
    let free = code.free_positions();
    let t = free.len();
    if t == 0 || t == n {
        return code.clone();
    }
    let fixed_values: Vec<Trit> = code.trits().iter().copied().filter(|t| t.is_fixed()).collect();

    // 1-based c[1..=t], with sentinel c[t+1] = n.
    let mut c = Vec::with_capacity(t + 2);
    c.push(0);
    c.extend_from_slice(&free);
    c.push(n);

    let next = if revolve(&mut c, t) {
        c[1..=t].to_vec()
    } else {
        (0..t).collect()
    };
    place(n, &next, &fixed_values)
}

/// One step of Algorithm R. Returns false when the sequence is finished.
fn revolve(c: &mut [usize], t: usize) -> bool {
    let mut j;
    let mut try_decrease;
    if t % 2 == 1 {
        if c[1] + 1 < c[2] {
            c[1] += 1;
            return true;
        }
        j = 2;
        try_decrease = true;
    } else {
        if c[1] > 0 {
            c[1] -= 1;
            return true;
        }
        j = 2;
        try_decrease = false;
    }

    loop {
        if j > t {
            return false;
        }
        if try_decrease {
            // c[j] == c[j-1] + 1 here.
            if c[j] >= j {
                c[j] = c[j - 1];
                c[j - 1] = j - 2;
                return true;
            }
            j += 1;
            try_decrease = false;
        } else {
            // c[j-1] == j - 2 here.
            if c[j] + 1 < c[j + 1] {
                c[j - 1] = c[j];
                c[j] += 1;
                return true;
            }
            j += 1;
            try_decrease = true;
        }
    }
}
