// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use face_encode::{Code, Encoding, SymbolSet};
use std::collections::HashSet;

/// Parse relations written as bit strings, symbol 0 leftmost.
pub fn relations(strings: &[&str]) -> Vec<SymbolSet> {
    strings.iter().map(|s| s.parse().unwrap()).collect()
}

/// Check that `encoding` is a face embedding of `relations`.
///
/// Every symbol gets a distinct vertex, and the face of every lattice
/// constraint (the relations among them) contains exactly the codes of its
/// members.
pub fn verify(encoding: &Encoding, symbol_count: usize, relations: &[SymbolSet]) -> Result<(), String> {
    let d = encoding.dimension;
    if encoding.codes.len() != symbol_count {
        return Err(format!("{} codes for {} symbols", encoding.codes.len(), symbol_count));
    }
    let mut seen = HashSet::new();
    for (symbol, code) in encoding.codes.iter().enumerate() {
        if code.width() != d || !code.is_vertex() {
            return Err(format!("symbol {} has code {}", symbol, code));
        }
        if !seen.insert(code.clone()) {
            return Err(format!("code {} used twice", code));
        }
    }

    match encoding.faces.first() {
        Some(universe) if universe.face == Code::full(d) => {}
        other => return Err(format!("universe face is {:?}", other)),
    }

    for assigned in &encoding.faces {
        for (symbol, code) in encoding.codes.iter().enumerate() {
            if assigned.face.contains(code) != assigned.members.contains(symbol) {
                return Err(format!(
                    "face {} of {} and code {} of symbol {} disagree",
                    assigned.face, assigned.members, code, symbol
                ));
            }
        }
    }

    for relation in relations {
        if !encoding.faces.iter().any(|f| &f.members == relation) {
            return Err(format!("relation {} has no face", relation));
        }
    }
    Ok(())
}

/// Face assigned to the constraint with these members.
pub fn face_of(encoding: &Encoding, members: &str) -> Option<Code> {
    let members: SymbolSet = members.parse().ok()?;
    encoding
        .faces
        .iter()
        .find(|f| f.members == members)
        .map(|f| f.face.clone())
}
