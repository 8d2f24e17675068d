//! Distributivity survey over the digit algebra.
//!
//! Enumerates every ordered digit triple (x, y, z), computes
//! `(x + y) * z` and `x * z + y * z`, and records whether the two agree.
//! Distributivity is the open question this crate exists to probe, so the
//! survey records actual outcomes per triple instead of asserting the law.

use std::io::Write;
use std::path::Path;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::whybin::{Digit, Number, add, multiply};

/// Outcome of the distributivity check for one ordered digit triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripleOutcome {
    pub x: Digit,
    pub y: Digit,
    pub z: Digit,
    /// Rendering of `(x + y) * z`.
    pub lhs: String,
    /// Rendering of `x * z + y * z`.
    pub rhs: String,
    /// Whether the two sides are equal.
    pub holds: bool,
}

/// Results of a full sweep over all 216 ordered digit triples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyReport {
    pub outcomes: Vec<TripleOutcome>,
    /// Count of triples where the two sides differ.
    pub violations: usize,
}

impl SurveyReport {
    /// True if every triple satisfied distributivity.
    pub fn holds_universally(&self) -> bool {
        self.violations == 0
    }

    /// Write the report to disk as JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), SurveyError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = std::fs::File::create(path.as_ref())
            .map_err(|e| SurveyError::Io(e.to_string()))?;
        file.write_all(json.as_bytes())
            .map_err(|e| SurveyError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur when persisting a survey report.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Check one triple: `(x + y) * z` against `x * z + y * z`.
pub fn check_triple(x: Digit, y: Digit, z: Digit) -> TripleOutcome {
    let (nx, ny, nz) = (Number::from(x), Number::from(y), Number::from(z));
    let lhs = multiply(&add(&nx, &ny), &nz);
    let rhs = add(&multiply(&nx, &nz), &multiply(&ny, &nz));
    let holds = lhs == rhs;
    TripleOutcome {
        x,
        y,
        z,
        lhs: lhs.to_string(),
        rhs: rhs.to_string(),
        holds,
    }
}

/// Sweep all 216 ordered digit triples.
pub fn run() -> SurveyReport {
    let mut outcomes = Vec::with_capacity(6 * 6 * 6);
    for x in Digit::ALL {
        for y in Digit::ALL {
            for z in Digit::ALL {
                outcomes.push(check_triple(x, y, z));
            }
        }
    }
    let violations = outcomes.iter().filter(|o| !o.holds).count();
    SurveyReport { outcomes, violations }
}
