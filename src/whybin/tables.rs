//! The WhyBin digit algebra tables.
//!
//! Sum-with-carry and product are pure table lookups; nothing in this
//! algebra is computed from digit values. The tables are transcribed from
//! the defining data and are the sole source of truth — entries for the
//! digits beyond 0/1 do not follow base-6 carry rules.
//!
//! Index order follows the defining data: `SUM_TABLE[carry][b][a]` and
//! `MUL_TABLE[b][a]`. Use [`digit_sum`] and [`digit_mul`] rather than
//! indexing the tables directly.

use serde::{Serialize, Deserialize};
use crate::whybin::Digit;

/// The result of adding two digits plus an incoming carry digit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DigitSum {
    /// Carry digit fed into the next more-significant position.
    pub carry: Digit,
    /// Sum digit emitted at the current position.
    pub sum: Digit,
}

/// Shorthand for building table entries.
const fn s(carry: Digit, sum: Digit) -> DigitSum {
    DigitSum { carry, sum }
}

use Digit::{D0, D1, Di, Dj, Dw, Dn};

/// Full sum-with-carry table: `SUM_TABLE[carry][b][a]` gives the carry and
/// sum digits for `a + b` with incoming carry `carry`. All 216 entries.
pub const SUM_TABLE: [[[DigitSum; 6]; 6]; 6] = [
    // carry 0
    [
        [s(D0, D0), s(D0, D1), s(D0, Di), s(D0, Dj), s(D0, Dw), s(D0, Dn)],
        [s(D0, D1), s(D1, D0), s(D0, Dj), s(D1, Di), s(D0, D0), s(D0, Di)],
        [s(D0, Di), s(D0, Dj), s(D0, D0), s(D0, D1), s(D0, Dn), s(D0, Dw)],
        [s(D0, Dj), s(D1, Di), s(D0, D1), s(D1, D0), s(D0, Di), s(D0, D0)],
        [s(D0, Dw), s(D0, D0), s(D0, Dn), s(D0, Di), s(Dw, D0), s(Dw, Di)],
        [s(D0, Dn), s(D0, Di), s(D0, Dw), s(D0, D0), s(Dw, Di), s(Dw, D0)],
    ],
    // carry 1
    [
        [s(D0, D1), s(D1, D0), s(D0, Dj), s(D1, Di), s(D0, D0), s(D0, Di)],
        [s(D1, D0), s(D1, D1), s(D1, Di), s(D1, Dj), s(D0, D1), s(D0, Dj)],
        [s(D0, Dj), s(D1, Di), s(D0, D1), s(D1, D0), s(D0, Dn), s(D0, D0)],
        [s(D1, Di), s(D1, Dj), s(D1, D0), s(D1, D1), s(D0, Di), s(D0, D1)],
        [s(D0, D0), s(D0, D1), s(D0, Di), s(D0, Dj), s(Dw, D0), s(D0, Dn)],
        [s(D0, Di), s(D0, Dj), s(D0, D0), s(D0, D1), s(D0, Dn), s(D0, Dw)],
    ],
    // carry i
    [
        [s(D0, Di), s(D0, Dj), s(D0, D0), s(D0, D1), s(D0, Dn), s(D0, Dw)],
        [s(D0, Dj), s(D1, Di), s(D0, D1), s(D1, D0), s(D0, Di), s(D0, D0)],
        [s(D0, D0), s(D0, D1), s(D0, Di), s(D0, Dj), s(D0, Dw), s(D0, Dn)],
        [s(D0, D1), s(D1, D0), s(D0, Dj), s(D1, Di), s(D0, D0), s(D0, Di)],
        [s(D0, Dn), s(D0, Di), s(D0, Dw), s(D0, D0), s(Dw, Di), s(Dw, D0)],
        [s(D0, Dw), s(D0, D0), s(D0, Dn), s(D0, Di), s(Dw, D0), s(Dw, Di)],
    ],
    // carry j
    [
        [s(D0, Dj), s(D1, Di), s(D0, Di), s(D1, D0), s(D0, Di), s(D1, D0)],
        [s(D1, Di), s(D1, Dj), s(D1, D0), s(D1, D1), s(D0, Dj), s(D0, D1)],
        [s(D0, D1), s(D1, D0), s(D0, Dj), s(D1, Di), s(D0, D0), s(D0, Di)],
        [s(D1, D0), s(D1, D1), s(D1, Di), s(D1, Dj), s(D0, D1), s(D0, Dj)],
        [s(D0, Di), s(D0, Dj), s(D0, D0), s(D0, D1), s(D0, Dn), s(D0, Dw)],
        [s(Dw, D0), s(D0, D1), s(D0, Di), s(D0, Dj), s(D0, Dw), s(D0, Dn)],
    ],
    // carry w
    [
        [s(D0, Dw), s(D0, D0), s(D0, Dn), s(D0, Di), s(Dw, D0), s(Dw, Di)],
        [s(D0, D0), s(D0, D1), s(D0, Di), s(D0, Dj), s(D0, Dw), s(D0, Dn)],
        [s(D0, Dn), s(D0, Di), s(D0, Dw), s(D0, D0), s(Dw, Di), s(Dw, D0)],
        [s(D0, Di), s(D0, Dj), s(D0, D0), s(D0, D1), s(D0, Dn), s(D0, Dw)],
        [s(Dw, D0), s(D0, Dw), s(Dw, Di), s(D0, Dn), s(Dw, D1), s(Dw, Dj)],
        [s(Dw, Dj), s(D0, Dn), s(Dw, D0), s(D0, Dw), s(Dw, Dj), s(Dw, D1)],
    ],
    // carry n
    [
        [s(D0, Dn), s(D0, Di), s(D0, Dw), s(D0, Dj), s(Dw, Di), s(Dw, D0)],
        [s(D0, Di), s(D0, Dj), s(D0, D0), s(D0, D1), s(D0, Dn), s(D0, Dw)],
        [s(D0, Dw), s(D0, D0), s(D0, Dn), s(D0, Di), s(Dw, D0), s(Dw, Di)],
        [s(D0, Dj), s(D0, D1), s(D0, Di), s(D0, Dj), s(D0, Dw), s(D0, Dn)],
        [s(Dw, Di), s(D0, Dn), s(Dw, D0), s(D0, Dw), s(Dw, Dj), s(Dw, D1)],
        [s(Dw, D0), s(D0, Dw), s(Dw, Di), s(D0, Dn), s(Dw, D1), s(Dw, Dj)],
    ],
];

/// Full product table: `MUL_TABLE[b][a]` gives the digit `a * b`.
/// All 36 entries; the zero row and zero column absorb.
pub const MUL_TABLE: [[Digit; 6]; 6] = [
    [D0, D0, D0, D0, D0, D0],
    [D0, D1, D0, D1, Dw, Dw],
    [D0, D0, Di, Di, D0, Di],
    [D0, D1, Di, Dj, Dw, Dn],
    [D0, Dw, D0, Dw, D1, D1],
    [D0, Dw, Di, Dn, D1, Dj],
];

/// Add two digits with an incoming carry digit.
#[inline]
pub const fn digit_sum(a: Digit, b: Digit, carry: Digit) -> DigitSum {
    SUM_TABLE[carry.index()][b.index()][a.index()]
}

/// Multiply two digits. Never carries.
#[inline]
pub const fn digit_mul(a: Digit, b: Digit) -> Digit {
    MUL_TABLE[b.index()][a.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_table_defined_for_all_triples() {
        // 216 entries, every one reachable through the lookup.
        for carry in Digit::ALL {
            for a in Digit::ALL {
                for b in Digit::ALL {
                    let entry = digit_sum(a, b, carry);
                    assert!(entry.carry.index() < 6);
                    assert!(entry.sum.index() < 6);
                }
            }
        }
    }

    #[test]
    fn test_carry_resolution_terminates() {
        // Folding any pending carry into 0 + 0 must not produce a new
        // carry, or addition could never emit its final digit.
        for carry in Digit::ALL {
            let entry = digit_sum(D0, D0, carry);
            assert!(
                entry.carry.is_zero(),
                "carry {} does not resolve: 0 + 0 + {} carries {}",
                carry, carry, entry.carry
            );
        }
    }

    #[test]
    fn test_carry_free_plane_is_symmetric() {
        // With no incoming carry, a + b and b + a read the same entry.
        for a in Digit::ALL {
            for b in Digit::ALL {
                assert_eq!(
                    digit_sum(a, b, D0),
                    digit_sum(b, a, D0),
                    "{} + {} differs from {} + {}",
                    a, b, b, a
                );
            }
        }
    }

    #[test]
    fn test_zero_addend_is_identity() {
        for d in Digit::ALL {
            let entry = digit_sum(d, D0, D0);
            assert_eq!(entry.sum, d);
            assert!(entry.carry.is_zero());
        }
    }

    #[test]
    fn test_known_sum_entries() {
        // 1 + 1 = 10: carry 1, sum 0.
        assert_eq!(digit_sum(D1, D1, D0), s(D1, D0));
        // j + 1 = 1i: carry 1, sum i.
        assert_eq!(digit_sum(Dj, D1, D0), s(D1, Di));
        // w + w = w0: carry w, sum 0.
        assert_eq!(digit_sum(Dw, Dw, D0), s(Dw, D0));
    }

    #[test]
    fn test_zero_absorbs_in_product() {
        for d in Digit::ALL {
            assert!(digit_mul(D0, d).is_zero(), "0 * {} should be 0", d);
            assert!(digit_mul(d, D0).is_zero(), "{} * 0 should be 0", d);
        }
    }

    #[test]
    fn test_known_product_entries() {
        assert_eq!(digit_mul(Dw, Dw), D1);
        assert_eq!(digit_mul(D1, Dj), D1);
        assert_eq!(digit_mul(Di, Dj), Di);
        assert_eq!(digit_mul(Dj, Dj), Dj);
        assert_eq!(digit_mul(Dn, D1), Dw);
        assert_eq!(digit_mul(Dn, Dn), Dj);
    }
}
