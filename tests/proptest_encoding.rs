// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property-based tests for encodings and face enumeration.

mod common;

use proptest::prelude::*;
use std::collections::HashSet;

use common::verify;
use face_encode::combinatorics::{binomial, LexCursor};
use face_encode::{encode, Code, EncodeError, Limits, SymbolSet};

/// Up to four non-empty relations over `symbols` symbols.
fn instance() -> impl Strategy<Value = (usize, Vec<SymbolSet>)> {
    relations_over(2..=5, 4)
}

/// Instances small enough to search exhaustively.
fn small_instance() -> impl Strategy<Value = (usize, Vec<SymbolSet>)> {
    relations_over(2..=4, 3)
}

fn relations_over(
    symbols: std::ops::RangeInclusive<usize>,
    max_relations: usize,
) -> impl Strategy<Value = (usize, Vec<SymbolSet>)> {
    symbols.prop_flat_map(move |symbols| {
        let relation = prop::collection::vec(any::<bool>(), symbols)
            .prop_filter("relation must be non-empty", |bits| bits.iter().any(|&b| b))
            .prop_map(move |bits| {
                let members: Vec<usize> = bits
                    .iter()
                    .enumerate()
                    .filter(|(_, &b)| b)
                    .map(|(i, _)| i)
                    .collect();
                SymbolSet::from_symbols(symbols, &members)
            });
        (Just(symbols), prop::collection::vec(relation, 0..=max_relations))
    })
}

fn limits() -> Limits {
    Limits::default().with_work_limit(20_000)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn encodings_are_sound((symbols, relations) in instance()) {
        match encode(symbols, &relations, &limits()) {
            Ok(encoding) => {
                prop_assert!(verify(&encoding, symbols, &relations).is_ok());
                prop_assert!(encoding.dimension >= encoding.lower_bound);
                prop_assert!(encoding.dimension <= symbols.max(encoding.lower_bound));
            }
            Err(error) => prop_assert!(matches!(
                error,
                EncodeError::Unsatisfiable(_) | EncodeError::WorkLimitExceeded(_)
            )),
        }
    }

    #[test]
    fn small_instances_always_encode((symbols, relations) in small_instance()) {
        let encoding = encode(symbols, &relations, &Limits::default());
        prop_assert!(encoding.is_ok(), "{:?}", encoding.err());
        let encoding = encoding.unwrap();
        prop_assert!(verify(&encoding, symbols, &relations).is_ok());
        prop_assert!(encoding.dimension <= symbols.max(encoding.lower_bound));
    }

    #[test]
    fn encodings_are_deterministic((symbols, relations) in instance()) {
        let first = encode(symbols, &relations, &limits());
        let second = encode(symbols, &relations, &limits());
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.dimension, b.dimension);
                prop_assert_eq!(a.codes, b.codes);
                prop_assert_eq!(a.work, b.work);
            }
            (a, b) => prop_assert_eq!(a.err(), b.err()),
        }
    }

    #[test]
    fn lex_cursor_visits_every_face_once(width in 1usize..=6, k in 0usize..=6) {
        prop_assume!(k <= width);
        let cursor = LexCursor::new(Code::wildcard_prefix(width, k));
        let expected = binomial(width, k) << (width - k);
        prop_assert_eq!(cursor.total(), expected);

        let faces: Vec<Code> = cursor.collect();
        let distinct: HashSet<&Code> = faces.iter().collect();
        prop_assert_eq!(faces.len() as u64, expected);
        prop_assert_eq!(distinct.len(), faces.len());
        prop_assert!(faces.iter().all(|f| f.width() == width && f.dimension() == k));
    }
}
