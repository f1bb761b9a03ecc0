// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lower bound on the hypercube dimension.
//!
//! Three necessary conditions, applied in order, each raising the dimension
//! until it holds. All three are monotone in the dimension, so a later
//! criterion never invalidates an earlier one. None of them is sufficient.
//!
//! 1. **Face count**: a level-i constraint needs its own i-face, so the
//!    cube must have at least as many i-faces as there are level-i constraints.
//! 2. **Neighbours**: a face of dimension m has d-m directions to grow in,
//!    one per immediate father at least. m is the constraint's minimum
//!    face dimension, which can exceed its level.
//! 3. **Imaginary vertices**: a constraint of cardinality c occupies a face
//!    of 2^level(c) vertices, leaving `2^level(c) - c` vertices that must be
//!    spares (codes of no symbol). A spare can fill holes in at most d
//!    constraints at once.

use crate::combinatorics::{face_count, level};
use crate::memo::classify::min_dims;
use crate::memo::{Lattice, UNIVERSE};

/// Smallest dimension satisfying all three criteria.
pub fn lower_bound(lattice: &Lattice) -> usize {
    let d = face_count_bound(lattice);
    let d = neighbour_bound(lattice, d);
    let d = imaginary_bound(lattice, d);
    log::info!("lower bound: dimension {}", d);
    d
}

/// Criterion 1, starting from the universe level.
pub fn face_count_bound(lattice: &Lattice) -> usize {
    let mut d = lattice.top_level();

    // A non-universe constraint at level l needs an l-face strictly inside the cube.
    let deepest = lattice
        .constraints()
        .iter()
        .filter(|c| c.id != UNIVERSE)
        .map(|c| c.level)
        .max();
    if let Some(deepest) = deepest {
        d = d.max(deepest + 1);
    }

    let counts: Vec<u64> = lattice
        .levels()
        .iter()
        .map(|ids| ids.iter().filter(|&&id| id != UNIVERSE).count() as u64)
        .collect();
    while !counts
        .iter()
        .enumerate()
        .all(|(i, &count)| count == 0 || face_count(d, i) >= count)
    {
        d += 1;
    }
    d
}

/// Criterion 2: `d - min_dim(c) >= fathers(c)` for every non-universe
/// constraint, where `min_dim` is the bottom-up raised minimum.
pub fn neighbour_bound(lattice: &Lattice, start: usize) -> usize {
    let minima = min_dims(lattice);
    lattice
        .constraints()
        .iter()
        .filter(|c| c.id != UNIVERSE)
        .map(|c| minima[c.id] + c.fathers.len())
        .fold(start, usize::max)
}

/// Criterion 3: enough spare vertices for the imaginary fillers.
pub fn imaginary_bound(lattice: &Lattice, start: usize) -> usize {
    let deficits: Vec<usize> = lattice
        .constraints()
        .iter()
        .filter(|c| c.id != UNIVERSE)
        .map(|c| deficit(c.cardinality))
        .filter(|&deficit| deficit > 0)
        .collect();
    let n = lattice.symbol_count() as u64;

    let mut d = start;
    loop {
        let required = imaginary_vertices(&deficits, d);
        let spares = spare_vertices(d, n);
        if spares < required || (spares == required && packing_violated(lattice)) {
            d += 1;
            continue;
        }
        return d;
    }
}

/// Vertices left empty on the smallest face holding `cardinality` symbols.
pub fn deficit(cardinality: usize) -> usize {
    (1usize << level(cardinality)) - cardinality
}

fn spare_vertices(d: usize, n: u64) -> u64 {
    match 1u64.checked_shl(d as u32) {
        Some(vertices) => vertices.saturating_sub(n),
        None => u64::MAX,
    }
}

/// Greedy densest packing: each spare vertex fills one hole in each of up to
/// `d` constraints, largest deficits first. Returns the number of spares used.
pub fn imaginary_vertices(deficits: &[usize], d: usize) -> u64 {
    let mut remaining: Vec<usize> = deficits.iter().copied().filter(|&x| x > 0).collect();
    if d == 0 {
        return if remaining.is_empty() { 0 } else { u64::MAX };
    }
    let mut rounds = 0u64;
    while !remaining.is_empty() {
        remaining.sort_unstable_by(|a, b| b.cmp(a));
        for deficit in remaining.iter_mut().take(d) {
            *deficit -= 1;
        }
        remaining.retain(|&x| x > 0);
        rounds += 1;
    }
    rounds
}

/// With no spare to waste, two same-size constraints whose overlap plus the
/// shared deficit is not a power of two cannot both be packed.
fn packing_violated(lattice: &Lattice) -> bool {
    let candidates: Vec<_> = lattice
        .constraints()
        .iter()
        .filter(|c| c.id != UNIVERSE && deficit(c.cardinality) > 0)
        .collect();
    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            if a.cardinality != b.cardinality {
                continue;
            }
            let overlap = a.members.intersection_len(&b.members);
            if overlap > 0 && !(overlap + deficit(a.cardinality)).is_power_of_two() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SymbolSet;
    use crate::limits::Limits;

    fn build(n: usize, strings: &[&str]) -> Lattice {
        let relations: Vec<SymbolSet> = strings.iter().map(|s| s.parse().unwrap()).collect();
        Lattice::build(n, &relations, &Limits::default()).unwrap()
    }

    #[test]
    fn test_deficit() {
        assert_eq!(deficit(1), 0);
        assert_eq!(deficit(3), 1);
        assert_eq!(deficit(5), 3);
        assert_eq!(deficit(8), 0);
    }

    #[test]
    fn test_imaginary_vertices() {
        assert_eq!(imaginary_vertices(&[], 3), 0);
        assert_eq!(imaginary_vertices(&[1, 1], 3), 1);
        assert_eq!(imaginary_vertices(&[1, 1, 1, 1], 3), 2);
        assert_eq!(imaginary_vertices(&[3], 4), 3);
        assert_eq!(imaginary_vertices(&[3, 1, 1], 2), 3);
    }

    #[test]
    fn test_empty_relations() {
        assert_eq!(lower_bound(&build(3, &[])), 2);
        assert_eq!(lower_bound(&build(4, &[])), 2);
        assert_eq!(lower_bound(&build(5, &[])), 3);
    }

    #[test]
    fn test_disjoint_pairs() {
        assert_eq!(lower_bound(&build(4, &["1100", "0011"])), 2);
    }

    #[test]
    fn test_constraint_at_top_level_needs_extra_dimension() {
        // A 3-set needs a square; the universe of 4 symbols then needs a cube.
        let lattice = build(4, &["1110"]);
        assert_eq!(face_count_bound(&lattice), 3);
        assert!(lower_bound(&lattice) > 2);
    }

    #[test]
    fn test_neighbour_bound_counts_fathers() {
        let lattice = build(4, &["1110", "0111"]);
        // The intersection 0110 has two fathers and level 1.
        assert_eq!(neighbour_bound(&lattice, 2), 3);
        assert_eq!(lower_bound(&lattice), 3);
    }

    #[test]
    fn test_neighbour_bound_uses_raised_minimum() {
        // 11110000 has level 2 but sits on a chain of sons, so its face
        // needs dimension 3; it has three fathers.
        let lattice = build(
            8,
            &["11000000", "11100000", "11110000", "11111000", "11110100", "11110010"],
        );
        assert_eq!(face_count_bound(&lattice), 4);
        assert_eq!(neighbour_bound(&lattice, 4), 6);
        assert_eq!(lower_bound(&lattice), 6);
    }

    #[test]
    fn test_packing_condition_raises_dimension() {
        // Two overlapping 3-sets over 7 symbols: one spare, exactly needed,
        // and overlap 2 + deficit 1 is not a power of two.
        let lattice = build(7, &["1110000", "0111000"]);
        assert_eq!(neighbour_bound(&lattice, face_count_bound(&lattice)), 3);
        assert_eq!(imaginary_bound(&lattice, 3), 4);
    }

    #[test]
    fn test_packing_condition_satisfied() {
        let lattice = build(7, &["1110000", "0000111"]);
        assert_eq!(lower_bound(&lattice), 3);
    }

    #[test]
    fn test_spares_exhausted() {
        // 8 symbols fill the 3-cube; any 3-set needs a spare.
        let lattice = build(8, &["11100000"]);
        assert_eq!(imaginary_bound(&lattice, 3), 4);
    }
}
