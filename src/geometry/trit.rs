// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Three-valued coordinate of a hypercube face.

use crate::error::ParseError;
use std::fmt;

/// One coordinate of a face: fixed to 0, fixed to 1, or free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trit {
    Zero,
    One,
    DontCare,
}

impl Trit {
    /// True for `Zero` and `One`.
    pub fn is_fixed(self) -> bool {
        !matches!(self, Trit::DontCare)
    }

    /// The character used in textual codes.
    pub fn to_char(self) -> char {
        match self {
            Trit::Zero => '0',
            Trit::One => '1',
            Trit::DontCare => '*',
        }
    }

    /// Parse one character. `-` is accepted as a synonym for `*`.
    pub fn from_char(position: usize, c: char) -> Result<Self, ParseError> {
        match c {
            '0' => Ok(Trit::Zero),
            '1' => Ok(Trit::One),
            '*' | '-' => Ok(Trit::DontCare),
            found => Err(ParseError::InvalidCharacter { position, found }),
        }
    }

    /// The fixed value flipped; `DontCare` is unchanged.
    pub fn flip(self) -> Self {
        match self {
            Trit::Zero => Trit::One,
            Trit::One => Trit::Zero,
            Trit::DontCare => Trit::DontCare,
        }
    }
}

impl From<bool> for Trit {
    fn from(bit: bool) -> Self {
        if bit {
            Trit::One
        } else {
            Trit::Zero
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
