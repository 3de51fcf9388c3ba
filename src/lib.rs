//! # Sorted Index
//!
//! Binary search over ordered sequences: insertion points, order-preserving
//! insertion and breakpoint classification.
//!
//! ## Architecture
//!
//! - **Search**: stateless leftmost/rightmost bisection and insertion over
//!   caller-owned slices and vectors
//! - **Index**: [`SortedIndex`], an owned sequence that keeps itself ordered
//! - **Classify**: breakpoint tables mapping values to buckets
//! - **Types**: decimal [`Score`](types::Score) and the
//!   [`IndexDigest`](types::IndexDigest) fingerprint
//!
//! ## Ordering Contract
//!
//! The free functions in [`search`] and [`classify`](mod@classify) trust their input: an
//! unordered slice gives a meaningless index, never a panic. Owning types
//! ([`SortedIndex::from_sorted`], [`Classifier::new`]) check the order once
//! at construction and reject bad input with [`IndexError::Unordered`].
//!
//! ## Example
//!
//! ```
//! use sorted_index::{insert_sorted, locate_leftmost, locate_rightmost};
//!
//! let mut seq = vec![1, 4, 5, 6, 8, 12, 15, 20, 21, 23, 23, 26, 29, 30];
//! assert_eq!(locate_leftmost(&seq, &23), 9);
//! assert_eq!(locate_rightmost(&seq, &23), 11);
//!
//! insert_sorted(&mut seq, 22);
//! assert_eq!(seq[9], 22);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error type and result alias
pub mod error;

/// Binary search and insertion over ordered slices
pub mod search;

/// Owned ordered sequences
pub mod index;

/// Breakpoint classification
pub mod classify;

/// Supporting value types: Score, IndexDigest
pub mod types;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{IndexError, Result};
pub use search::{
    insert_sorted, insert_sorted_with, locate_leftmost, locate_leftmost_by_key,
    locate_leftmost_in, locate_rightmost, locate_rightmost_by_key, locate_rightmost_in, TieBreak,
};
pub use index::SortedIndex;
pub use classify::{classify, classify_label, Classifier};
