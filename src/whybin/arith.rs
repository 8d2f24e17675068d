//! Multi-digit WhyBin arithmetic.
//!
//! Addition is a ripple-carry walk over both operands driven entirely by
//! the sum table. Multiplication is the algebra's restricted form: every
//! digit of the first operand is multiplied by the *least-significant*
//! digit of the second, one output digit per input digit. Higher digits of
//! the second operand never participate. That asymmetry is part of the
//! operation under study, not an omission — the whole point of the
//! distributivity survey is to probe this exact operation.

use crate::whybin::{Digit, Number, DigitOrder};
use crate::whybin::tables::{digit_sum, digit_mul};

/// Add two numbers, producing a new normalized number.
pub fn add(a: &Number, b: &Number) -> Number {
    let width = a.len().max(b.len());
    let mut out = Vec::with_capacity(width + 1);
    let mut carry = Digit::D0;

    for i in 0..width {
        // Positions past an operand's end read as the zero digit.
        let entry = digit_sum(a.digit(i), b.digit(i), carry);
        out.push(entry.sum);
        carry = entry.carry;
    }

    // Fold the pending carry into one final position. The table resolves
    // every carry against 0 + 0 without carrying again; a violation here
    // means the table itself cannot terminate addition.
    let last = digit_sum(Digit::D0, Digit::D0, carry);
    debug_assert!(
        last.carry.is_zero(),
        "sum table does not terminate for carry {}",
        carry
    );
    out.push(last.sum);

    Number::from_digits(out, DigitOrder::LsbFirst)
}

/// Multiply two numbers, producing a new normalized number.
///
/// Only `b`'s least-significant digit is consulted; one product digit is
/// emitted per digit of `a`, plus a trailing `0 * 0` digit.
pub fn multiply(a: &Number, b: &Number) -> Number {
    let b0 = b.digit(0);
    let mut out = Vec::with_capacity(a.len() + 1);

    for &da in a.digits() {
        out.push(digit_mul(da, b0));
    }
    out.push(digit_mul(Digit::D0, Digit::D0));

    Number::from_digits(out, DigitOrder::LsbFirst)
}

impl std::ops::Add for &Number {
    type Output = Number;

    fn add(self, other: &Number) -> Number {
        add(self, other)
    }
}

impl std::ops::Mul for &Number {
    type Output = Number;

    fn mul(self, other: &Number) -> Number {
        multiply(self, other)
    }
}

impl std::ops::Add for Number {
    type Output = Number;

    fn add(self, other: Number) -> Number {
        add(&self, &other)
    }
}

impl std::ops::Mul for Number {
    type Output = Number;

    fn mul(self, other: Number) -> Number {
        multiply(&self, &other)
    }
}
