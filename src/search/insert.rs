//! Order-preserving insertion into a `Vec`.
//!
//! Insertion is one binary search followed by `Vec::insert`, which shifts
//! the tail: O(log n) comparisons plus O(n) moves.

use crate::search::bisect::{locate_leftmost, locate_rightmost};

/// Where a new key lands relative to existing equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieBreak {
    /// Before any equal keys
    Leftmost,
    /// After any equal keys (stable append)
    #[default]
    Rightmost,
}

impl TieBreak {
    /// Insertion point for `key` in `seq` under this tie-break.
    #[inline]
    pub fn locate<T: Ord>(self, seq: &[T], key: &T) -> usize {
        match self {
            TieBreak::Leftmost => locate_leftmost(seq, key),
            TieBreak::Rightmost => locate_rightmost(seq, key),
        }
    }
}

/// Inserts `key` after any equal elements and returns the index it landed at.
///
/// # Example
///
/// ```
/// use sorted_index::insert_sorted;
///
/// let mut seq = Vec::new();
/// for key in [5, 2, 8, 2] {
///     insert_sorted(&mut seq, key);
/// }
/// assert_eq!(seq, vec![2, 2, 5, 8]);
/// ```
#[inline]
pub fn insert_sorted<T: Ord>(seq: &mut Vec<T>, key: T) -> usize {
    insert_sorted_with(seq, key, TieBreak::Rightmost)
}

/// Inserts `key` at the insertion point chosen by `tie_break`.
///
/// Returns the index the key landed at. The vector stays ordered (given it
/// was ordered before) and grows by exactly one.
pub fn insert_sorted_with<T: Ord>(seq: &mut Vec<T>, key: T, tie_break: TieBreak) -> usize {
    let index = tie_break.locate(seq, &key);
    seq.insert(index, key);
    index
}

// ============================================================================
// Unit Tests
// ============================================================================
