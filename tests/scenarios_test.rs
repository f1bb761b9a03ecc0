// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end encodings of small, hand-checked instances.

mod common;

use common::{face_of, relations, verify};
use face_encode::{encode, Code, EncodeError, Limits, SymbolSet};

#[test]
fn test_disjoint_pairs() {
    let rels = relations(&["1100", "0011"]);
    let encoding = encode(4, &rels, &Limits::default()).unwrap();
    assert_eq!(encoding.dimension, 2);
    verify(&encoding, 4, &rels).unwrap();

    let left = face_of(&encoding, "1100").unwrap();
    let right = face_of(&encoding, "0011").unwrap();
    assert_eq!(left.dimension(), 1);
    assert_eq!(right.dimension(), 1);
    assert!(left.intersection(&right).is_none());
}

#[test]
fn test_universe_relation_gets_whole_cube() {
    let rels = relations(&["111"]);
    let encoding = encode(3, &rels, &Limits::default()).unwrap();
    assert_eq!(encoding.dimension, 2);
    assert_eq!(face_of(&encoding, "111"), Some(Code::full(2)));
    // The relation merged with the universe.
    assert_eq!(encoding.faces.len(), 4);
    verify(&encoding, 3, &rels).unwrap();
}

#[test]
fn test_overlapping_triples() {
    let rels = relations(&["1110", "0111"]);
    let encoding = encode(4, &rels, &Limits::default()).unwrap();
    assert_eq!(encoding.dimension, 3);
    verify(&encoding, 4, &rels).unwrap();

    let a = face_of(&encoding, "1110").unwrap();
    let b = face_of(&encoding, "0111").unwrap();
    let meet = face_of(&encoding, "0110").unwrap();
    let shared = a.intersection(&b).unwrap();
    assert!(shared.dimension() >= 1);
    assert!(a.properly_contains(&meet));
    assert!(b.properly_contains(&meet));
}

#[test]
fn test_triple_needs_spare_vertex() {
    let rels = relations(&["1110"]);
    let encoding = encode(4, &rels, &Limits::default()).unwrap();
    assert!(encoding.lower_bound > 2);
    assert!(encoding.dimension > 2);
    verify(&encoding, 4, &rels).unwrap();
}

#[test]
fn test_no_relations() {
    let encoding = encode(3, &[], &Limits::default()).unwrap();
    assert_eq!(encoding.dimension, 2);
    // Universe plus one singleton per symbol.
    assert_eq!(encoding.faces.len(), 4);
    verify(&encoding, 3, &[]).unwrap();

    let encoding = encode(8, &[], &Limits::default()).unwrap();
    assert_eq!(encoding.dimension, 3);
    verify(&encoding, 8, &[]).unwrap();
}

#[test]
fn test_single_symbol() {
    let encoding = encode(1, &[], &Limits::default()).unwrap();
    assert_eq!(encoding.dimension, 0);
    assert_eq!(encoding.codes, vec![Code::full(0)]);
}

#[test]
fn test_nested_relations() {
    let rels = relations(&["11110000", "11000000", "00001111"]);
    let encoding = encode(8, &rels, &Limits::default()).unwrap();
    assert_eq!(encoding.dimension, 3);
    verify(&encoding, 8, &rels).unwrap();
    let outer = face_of(&encoding, "11110000").unwrap();
    let inner = face_of(&encoding, "11000000").unwrap();
    assert!(outer.properly_contains(&inner));
}

#[test]
fn test_lower_bound_uses_raised_minimum() {
    // The chain below 11110000 raises its minimum from level 2 to 3, and
    // with three fathers it needs a 6-cube.
    let rels = relations(&[
        "11000000", "11100000", "11110000", "11111000", "11110100", "11110010",
    ]);
    let encoding = encode(8, &rels, &Limits::default()).unwrap();
    assert_eq!(encoding.lower_bound, 6);
    assert_eq!(encoding.dimension, 6);
    assert_eq!(encoding.work.dimensions, 1);
    verify(&encoding, 8, &rels).unwrap();
}

#[test]
fn test_configuration_count_overflow_is_fatal() {
    let rels: Vec<SymbolSet> = (0..70)
        .map(|i| SymbolSet::from_symbols(140, &[2 * i, 2 * i + 1]))
        .collect();
    assert_eq!(
        encode(140, &rels, &Limits::default()).unwrap_err(),
        EncodeError::ConfigurationOverflow { dimension: 8 }
    );
}

#[test]
fn test_results_are_repeatable() {
    let rels = relations(&["11100", "00111", "10001"]);
    let limits = Limits::default().with_work_limit(200_000);
    let first = encode(5, &rels, &limits);
    let second = encode(5, &rels, &limits);
    match (first, second) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a.codes, b.codes);
            assert_eq!(a.work, b.work);
            verify(&a, 5, &rels).unwrap();
        }
        (a, b) => assert_eq!(a.err(), b.err()),
    }
}

#[test]
fn test_invalid_inputs_are_fatal() {
    assert_eq!(
        encode(3, &relations(&["1100"]), &Limits::default()).unwrap_err(),
        EncodeError::WidthMismatch {
            index: 0,
            expected: 3,
            found: 4
        }
    );
    assert_eq!(
        encode(2, &relations(&["11", "00"]), &Limits::default()).unwrap_err(),
        EncodeError::EmptyConstraint(1)
    );
}

#[test]
fn test_work_limit_is_fatal() {
    let rels = relations(&["1110"]);
    let limits = Limits::default().with_work_limit(1);
    assert_eq!(
        encode(4, &rels, &limits).unwrap_err(),
        EncodeError::WorkLimitExceeded(1)
    );
}

#[test]
fn test_truncated_lattice_is_reported() {
    let rels = relations(&["11100", "01110", "00111", "10011"]);
    let limits = Limits::new(1, Some(200_000), 63);
    match encode(5, &rels, &limits) {
        Ok(encoding) => {
            assert!(encoding.truncated);
            verify(&encoding, 5, &rels).unwrap();
        }
        Err(error) => assert!(matches!(
            error,
            EncodeError::Unsatisfiable(_) | EncodeError::WorkLimitExceeded(_)
        )),
    }
}
