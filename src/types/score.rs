//! Fixed-point scores for classification tables.
//!
//! ## Overview
//!
//! Grading tables are usually written in decimal (`"59.5"`, `"89.99"`).
//! Comparing decimals through floating point gives different answers for
//! values that are not exactly representable, so scores are stored as
//! `u64` scaled by 100 (two fractional digits) and parsed with
//! `rust_decimal`.
//!
//! ## Examples
//!
//! ```
//! use sorted_index::types::Score;
//!
//! let score: Score = "89.5".parse().unwrap();
//! assert_eq!(score.raw(), 8_950);
//! assert_eq!(score.to_string(), "89.50");
//! assert!(score < Score::from_whole(90));
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::{IndexError, Result};

/// Scaling factor: two fractional digits.
pub const SCALE: u64 = 100;

/// A non-negative decimal score with two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u64);

impl Score {
    /// Lowest representable score
    pub const ZERO: Score = Score(0);

    /// Largest representable score
    pub const MAX: Score = Score(u64::MAX);

    /// Create a score from its scaled representation (`8_950` is `89.50`).
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Score(raw)
    }

    /// Create a score with no fractional part.
    #[inline]
    pub const fn from_whole(whole: u32) -> Self {
        Score(whole as u64 * SCALE)
    }

    /// Scaled representation
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Parse a decimal string.
    ///
    /// Digits past the second fractional place are rounded half-to-even.
    ///
    /// # Errors
    ///
    /// [`IndexError::InvalidScore`] for unparsable, negative or
    /// out-of-range input.
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_index::types::Score;
    ///
    /// assert_eq!(Score::parse("60").unwrap(), Score::from_whole(60));
    /// assert_eq!(Score::parse("0.125").unwrap().raw(), 12);
    /// assert!(Score::parse("-1").is_err());
    /// assert!(Score::parse("abc").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let decimal =
            Decimal::from_str(s.trim()).map_err(|_| IndexError::InvalidScore(s.to_string()))?;
        Self::from_decimal(decimal).ok_or_else(|| IndexError::InvalidScore(s.to_string()))
    }

    /// Convert a `Decimal`, or `None` if it is negative or out of range.
    pub fn from_decimal(d: Decimal) -> Option<Self> {
        if d.is_zero() {
            return Some(Score::ZERO);
        }
        if d.is_sign_negative() {
            return None;
        }

        let scaled = d.checked_mul(Decimal::from(SCALE))?;
        scaled.round_dp(0).to_u64().map(Score)
    }

    /// Exact decimal value
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(SCALE)
    }
}

impl FromStr for Score {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self> {
        Score::parse(s)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}.{:02}", self.0 / SCALE, self.0 % SCALE))
    }
}

impl From<u32> for Score {
    fn from(whole: u32) -> Self {
        Score::from_whole(whole)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
