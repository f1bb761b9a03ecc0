// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Code type for representing faces of a boolean hypercube.
//!
//! A face of the d-cube is written as a string of `d` trits. Fixed
//! coordinates pin the face to one side of the cube, free (`*`) coordinates
//! span it. The dimension of the face is the number of free coordinates.
//!
//! # Examples
//!
//! ```
//! use face_encode::geometry::Code;
//!
//! let wide: Code = "1**".parse().unwrap();
//! let narrow: Code = "10*".parse().unwrap();
//!
//! assert_eq!(wide.dimension(), 2);
//! assert!(wide.properly_contains(&narrow));
//! assert_eq!(wide.intersection(&narrow), Some(narrow.clone()));
//! assert_eq!(format!("{}", narrow), "10*");
//! ```

use crate::error::ParseError;
use crate::geometry::Trit;
use std::fmt;
use std::str::FromStr;

/// A face of the hypercube, one trit per coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Code(Vec<Trit>);

impl Code {
    /// The whole hypercube: every coordinate free.
    pub fn full(width: usize) -> Self {
        Self(vec![Trit::DontCare; width])
    }

    /// A `dimension`-face whose free coordinates come first and whose fixed
    /// coordinates are all zero, e.g. `**000`.
    ///
    /// This is the starting point of the lexicographic face enumeration.
    pub fn wildcard_prefix(width: usize, dimension: usize) -> Self {
        let dimension = dimension.min(width);
        let mut trits = vec![Trit::DontCare; dimension];
        trits.resize(width, Trit::Zero);
        Self(trits)
    }

    pub fn from_trits(trits: Vec<Trit>) -> Self {
        Self(trits)
    }

    pub fn trits(&self) -> &[Trit] {
        &self.0
    }

    pub(crate) fn trits_mut(&mut self) -> &mut [Trit] {
        &mut self.0
    }

    /// Number of coordinates (the hypercube dimension).
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Number of free coordinates (the face dimension).
    pub fn dimension(&self) -> usize {
        self.0.iter().filter(|t| !t.is_fixed()).count()
    }

    /// True if every coordinate is fixed.
    pub fn is_vertex(&self) -> bool {
        self.0.iter().all(|t| t.is_fixed())
    }

    /// Number of hypercube vertices on this face, saturating.
    pub fn vertex_count(&self) -> u64 {
        1u64.checked_shl(self.dimension() as u32).unwrap_or(u64::MAX)
    }

    /// Positions of the free coordinates, ascending.
    pub fn free_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_fixed())
            .map(|(i, _)| i)
            .collect()
    }

    /// True if `other` lies on this face (equality included).
    pub fn contains(&self, other: &Code) -> bool {
        self.width() == other.width()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(&mine, &theirs)| mine == Trit::DontCare || mine == theirs)
    }

    /// True if `other` lies on this face and differs from it.
    pub fn properly_contains(&self, other: &Code) -> bool {
        self != other && self.contains(other)
    }

    /// The common sub-face, or `None` when the faces are disjoint.
    pub fn intersection(&self, other: &Code) -> Option<Code> {
        if self.width() != other.width() {
            return None;
        }
        let mut trits = Vec::with_capacity(self.width());
        for (&mine, &theirs) in self.0.iter().zip(&other.0) {
            let trit = match (mine, theirs) {
                (Trit::DontCare, t) | (t, Trit::DontCare) => t,
                (a, b) if a == b => a,
                _ => return None,
            };
            trits.push(trit);
        }
        Some(Code(trits))
    }

    /// Embed a code of the sub-cube spanned by this face.
    ///
    /// The fixed coordinates of `self` are kept, and its free coordinates
    /// are filled left to right with the trits of `sub`. `sub` must have
    /// one trit per free coordinate of `self`.
    pub fn embed(&self, sub: &Code) -> Code {
        let mut inner = sub.0.iter();
        let trits = self
            .0
            .iter()
            .map(|&t| {
                if t.is_fixed() {
                    t
                } else {
                    inner.next().copied().unwrap_or(Trit::DontCare)
                }
            })
            .collect();
        Code(trits)
    }
}

impl FromStr for Code {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(i, c)| Trit::from_char(i, c))
            .collect::<Result<Vec<_>, _>>()
            .map(Code)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trit in &self.0 {
            write!(f, "{}", trit.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn test_wildcard_prefix() {
        assert_eq!(Code::wildcard_prefix(5, 2), code("**000"));
        assert_eq!(Code::wildcard_prefix(3, 0), code("000"));
        assert_eq!(Code::wildcard_prefix(2, 2), code("**"));
    }

    #[test]
    fn test_dimension_and_vertices() {
        assert_eq!(code("1*0*").dimension(), 2);
        assert_eq!(code("1*0*").vertex_count(), 4);
        assert!(code("101").is_vertex());
        assert!(!code("1*1").is_vertex());
        assert_eq!(code("1*0*").free_positions(), vec![1, 3]);
    }

    #[test]
    fn test_containment() {
        assert!(code("***").contains(&code("***")));
        assert!(!code("***").properly_contains(&code("***")));
        assert!(code("1**").properly_contains(&code("1*0")));
        assert!(!code("1*0").contains(&code("1**")));
        assert!(!code("0**").contains(&code("1*0")));
    }

    #[test]
    fn test_intersection() {
        assert_eq!(code("**0").intersection(&code("*0*")), Some(code("*00")));
        assert_eq!(code("**0").intersection(&code("**1")), None);
    }

    #[test]
    fn test_embed() {
        let parent = code("1*0*");
        assert_eq!(parent.embed(&code("01")), code("1001"));
        assert_eq!(parent.embed(&code("*1")), code("1*01"));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(code("01*").to_string(), "01*");
        assert_eq!(code("0-1").to_string(), "0*1");
        assert!("01x".parse::<Code>().is_err());
    }
}
