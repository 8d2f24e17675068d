//! Single WhyBin digit.
//!
//! A digit holds one of six symbolic values, written `0 1 i j w n`.
//! The values carry no ordinary numeric meaning beyond 0 and 1; their
//! arithmetic is defined entirely by the lookup tables in [`tables`].
//!
//! [`tables`]: crate::whybin::tables

use std::fmt;
use serde::{Serialize, Deserialize};

/// A single WhyBin digit.
///
/// Represented as a `u8` index 0..=5 so the sum and product tables can be
/// indexed directly by digit value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Digit {
    /// `0`
    D0 = 0,
    /// `1`
    D1 = 1,
    /// `i`
    Di = 2,
    /// `j`
    Dj = 3,
    /// `w`
    Dw = 4,
    /// `n`
    Dn = 5,
}

impl Digit {
    /// All six digit values in canonical order: 0, 1, i, j, w, n.
    pub const ALL: [Digit; 6] = [
        Digit::D0,
        Digit::D1,
        Digit::Di,
        Digit::Dj,
        Digit::Dw,
        Digit::Dn,
    ];

    /// Canonical printable symbol for each digit, by index.
    pub const SYMBOLS: [char; 6] = ['0', '1', 'i', 'j', 'w', 'n'];

    /// Create a digit from a raw table index.
    ///
    /// In debug mode, panics on an out-of-range index.
    /// In release mode, normalizes invalid values to `D0`.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Digit::D0,
            1 => Digit::D1,
            2 => Digit::Di,
            3 => Digit::Dj,
            4 => Digit::Dw,
            5 => Digit::Dn,
            _ => {
                #[cfg(debug_assertions)]
                panic!("Invalid digit index: {} (must be 0..=5)", index);
                #[cfg(not(debug_assertions))]
                Digit::D0
            }
        }
    }

    /// Get the raw table index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Map a printable symbol to a digit.
    ///
    /// The letter digits are accepted case-insensitively; any other
    /// character yields `None`.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Digit::D0),
            '1' => Some(Digit::D1),
            'i' | 'I' => Some(Digit::Di),
            'j' | 'J' => Some(Digit::Dj),
            'w' | 'W' => Some(Digit::Dw),
            'n' | 'N' => Some(Digit::Dn),
            _ => None,
        }
    }

    /// Canonical printable symbol for this digit.
    #[inline]
    pub const fn to_char(self) -> char {
        Self::SYMBOLS[self as usize]
    }

    /// Returns true if this digit is the zero digit.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Digit::D0)
    }
}

impl Default for Digit {
    fn default() -> Self {
        Digit::D0
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
