//! Arbitrary-length WhyBin numbers.
//!
//! A [`Number`] is an immutable, normalized sequence of digits. Digits are
//! stored least-significant first; text renders most-significant first, as
//! conventional positional notation.

use std::fmt;
use std::str::FromStr;
use serde::Serialize;
use thiserror::Error;
use crate::whybin::Digit;

/// Errors that can occur when constructing a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberError {
    /// A character in the input string is not a WhyBin digit.
    #[error("invalid digit symbol: '{0}' (expected one of 0 1 i j w n)")]
    InvalidSymbol(char),
    /// An integer input does not name a single digit.
    #[error("unsupported value: {0} (only single-digit values 0..=5 exist)")]
    UnsupportedValue(u64),
}

/// Digit order of a raw input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitOrder {
    /// Least-significant digit first.
    LsbFirst,
    /// Most-significant digit first (the order of printed text).
    MsbFirst,
}

/// An arbitrary-length WhyBin number.
///
/// Always normalized: most-significant zero digits are stripped on
/// construction, and the zero value is the single digit `[0]`, never an
/// empty sequence. Equality and hashing follow the normalized digits.
/// Arithmetic never mutates a `Number`; it builds new ones.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Number {
    /// Digits stored from least significant (index 0) upward.
    digits: Vec<Digit>,
}

impl Number {
    /// The zero value.
    pub fn zero() -> Self {
        Self { digits: vec![Digit::D0] }
    }

    /// Parse from text, most-significant digit first, e.g. `"1i0j"`.
    pub fn parse(s: &str) -> Result<Self, NumberError> {
        let mut digits = Vec::with_capacity(s.len());
        for c in s.chars() {
            match Digit::from_char(c) {
                Some(d) => digits.push(d),
                None => return Err(NumberError::InvalidSymbol(c)),
            }
        }
        Ok(Self::from_digits(digits, DigitOrder::MsbFirst))
    }

    /// Construct from a small integer naming a single digit (0..=5).
    ///
    /// The WhyBin digits are not decimal digits, so there is no general
    /// integer conversion; anything past the last digit index is an error.
    pub fn from_u64(value: u64) -> Result<Self, NumberError> {
        if value > 5 {
            return Err(NumberError::UnsupportedValue(value));
        }
        Ok(Self::from(Digit::from_index(value as u8)))
    }

    /// Construct from a raw digit sequence in the given order.
    ///
    /// The sequence is normalized: most-significant zeros are stripped and
    /// an all-zero (or empty) input becomes the canonical zero.
    pub fn from_digits(digits: impl IntoIterator<Item = Digit>, order: DigitOrder) -> Self {
        let mut digits: Vec<Digit> = digits.into_iter().collect();
        if order == DigitOrder::MsbFirst {
            digits.reverse();
        }
        while digits.last().is_some_and(|d| d.is_zero()) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(Digit::D0);
        }
        Self { digits }
    }

    /// The normalized digits, least-significant first.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Digit at position `index` (0 = least significant).
    /// Positions past the end read as the zero digit.
    #[inline]
    pub fn digit(&self, index: usize) -> Digit {
        self.digits.get(index).copied().unwrap_or(Digit::D0)
    }

    /// Number of digits in the normalized representation.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if this is the zero value.
    pub fn is_zero(&self) -> bool {
        self.digits == [Digit::D0]
    }
}

impl From<Digit> for Number {
    fn from(digit: Digit) -> Self {
        Self::from_digits([digit], DigitOrder::LsbFirst)
    }
}

impl FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits.iter().rev() {
            write!(f, "{}", d.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use Digit::{D0, D1, Di, Dj, Dw};

    #[test]
    fn test_zero_is_canonical() {
        assert_eq!(Number::zero().digits(), &[D0]);
        assert_eq!(Number::zero().to_string(), "0");
        assert!(Number::zero().is_zero());
    }

    #[test]
    fn test_parse_msb_first() {
        let n = Number::parse("1i0j").unwrap();
        // LSB first internally: j, 0, i, 1.
        assert_eq!(n.digits(), &[Dj, D0, Di, D1]);
        assert_eq!(n.to_string(), "1i0j");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Number::parse("WIJN").unwrap(), Number::parse("wijn").unwrap());
    }

    #[test]
    fn test_parse_invalid_symbol() {
        assert_eq!(Number::parse("1x0"), Err(NumberError::InvalidSymbol('x')));
        assert_eq!(Number::parse("2"), Err(NumberError::InvalidSymbol('2')));
    }

    #[test]
    fn test_leading_zeros_stripped() {
        assert_eq!(Number::parse("000n1").unwrap(), Number::parse("n1").unwrap());
        assert_eq!(Number::parse("00").unwrap(), Number::zero());
        assert_eq!(Number::parse("").unwrap(), Number::zero());
    }

    #[test]
    fn test_normalization_idempotent() {
        let stripped = Number::parse("w0i").unwrap();
        let padded = Number::from_digits([D0, D0, Dw, D0, Di], DigitOrder::MsbFirst);
        assert_eq!(padded, stripped);
        assert_eq!(
            Number::from_digits(stripped.digits().to_vec(), DigitOrder::LsbFirst),
            stripped
        );
    }

    #[test]
    fn test_digit_order_tags_agree() {
        let lsb = Number::from_digits([Dj, Di, D1], DigitOrder::LsbFirst);
        let msb = Number::from_digits([D1, Di, Dj], DigitOrder::MsbFirst);
        assert_eq!(lsb, msb);
        assert_eq!(lsb.to_string(), "1ij");
    }

    #[test]
    fn test_from_u64() {
        assert_eq!(Number::from_u64(0).unwrap(), Number::zero());
        assert_eq!(Number::from_u64(1).unwrap().to_string(), "1");
        assert_eq!(Number::from_u64(5).unwrap().to_string(), "n");
        assert_eq!(Number::from_u64(6), Err(NumberError::UnsupportedValue(6)));
    }

    #[test]
    fn test_digit_reads_zero_past_end() {
        let n = Number::parse("1i").unwrap();
        assert_eq!(n.digit(0), Di);
        assert_eq!(n.digit(1), D1);
        assert_eq!(n.digit(7), D0);
    }

    #[test]
    fn test_equality_over_normalized_digits() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Number::parse("0jn").unwrap());
        assert!(set.contains(&Number::parse("jn").unwrap()));
        assert!(!set.contains(&Number::parse("nj").unwrap()));
    }

    proptest! {
        #[test]
        fn prop_parse_display_roundtrip(indices in prop::collection::vec(0u8..6, 0..12)) {
            let digits: Vec<Digit> = indices.iter().map(|&i| Digit::from_index(i)).collect();
            let n = Number::from_digits(digits, DigitOrder::MsbFirst);
            let reparsed = Number::parse(&n.to_string()).unwrap();
            prop_assert_eq!(reparsed, n);
        }

        #[test]
        fn prop_display_never_has_leading_zero(indices in prop::collection::vec(0u8..6, 0..12)) {
            let digits: Vec<Digit> = indices.iter().map(|&i| Digit::from_index(i)).collect();
            let text = Number::from_digits(digits, DigitOrder::LsbFirst).to_string();
            prop_assert!(text == "0" || !text.starts_with('0'));
        }
    }
}
