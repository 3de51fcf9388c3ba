//! Error types for sorted-index operations.
//!
//! The binary searches themselves cannot fail. Errors come from the places
//! where caller input is checked: owning constructors that validate
//! ordering, bounded searches, label tables and score parsing.

use thiserror::Error;

/// Errors returned by sorted-index operations.
///
/// Every variant except [`IndexError::Encoding`] is an invalid-input error:
/// the caller handed over something that breaks a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The sequence is not in non-decreasing order.
    ///
    /// `position` is the first index whose element is smaller than its
    /// predecessor.
    #[error("invalid input: sequence is not ordered at position {position}")]
    Unordered {
        /// First out-of-order position
        position: usize,
    },

    /// Search bounds do not describe a sub-range of the sequence.
    #[error("invalid input: bounds [{lo}, {hi}) out of range for length {len}")]
    InvalidBounds {
        /// Lower bound (inclusive)
        lo: usize,
        /// Upper bound (exclusive)
        hi: usize,
        /// Length of the searched sequence
        len: usize,
    },

    /// A classification table needs exactly one more label than breakpoints.
    #[error("invalid input: {breakpoints} breakpoints need {} labels, got {labels}", .breakpoints + 1)]
    LabelCount {
        /// Number of breakpoints
        breakpoints: usize,
        /// Number of labels supplied
        labels: usize,
    },

    /// A score string could not be parsed or is out of range.
    #[error("invalid input: bad score {0:?}")]
    InvalidScore(String),

    /// SSZ encoding of a key failed while computing a digest.
    #[error("encoding failed: {0}")]
    Encoding(String),
}

impl IndexError {
    /// Returns `true` for errors caused by a violated input precondition.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, IndexError::Encoding(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IndexError>;

// ============================================================================
// Unit Tests
// ============================================================================
