//! WhyBin numeral system primitives.
//!
//! This module provides the core types for the six-symbol digit algebra:
//! - [`Digit`] - a single WhyBin digit (0, 1, i, j, w, n)
//! - [`tables`] - the sum-with-carry and product lookup tables
//! - [`Number`] - an arbitrary-length normalized digit sequence
//! - [`arith`] - addition and multiplication over [`Number`]

mod digit;
mod number;
pub mod tables;
pub mod arith;

pub use digit::Digit;
pub use number::{Number, NumberError, DigitOrder};
pub use tables::{DigitSum, digit_sum, digit_mul};
pub use arith::{add, multiply};
