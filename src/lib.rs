//! # WhyBin
//!
//! Arithmetic over a custom six-symbol numeral system ("WhyBin" digits:
//! `0 1 i j w n`), defined entirely by digit-pair lookup tables rather
//! than conventional positional rules.
//!
//! The crate exists to probe an algebraic question: does this digit
//! algebra distribute, i.e. does `(x + y) * z == x * z + y * z` hold for
//! every digit triple? The [`survey`] module sweeps all 216 ordered
//! triples and records the answer per triple.

pub mod whybin;
pub mod survey;

// Re-export commonly used types
pub use whybin::{Digit, DigitSum, Number, NumberError, DigitOrder};
pub use whybin::{add, multiply, digit_sum, digit_mul};
pub use survey::{SurveyReport, TripleOutcome};
