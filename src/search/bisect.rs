//! Leftmost and rightmost insertion-point search.
//!
//! ## Algorithm
//!
//! Both searches narrow a half-open range `[lo, hi)` until it is empty:
//!
//! ```text
//! leftmost:  seq[mid] >= key  ->  hi = mid   else lo = mid + 1
//! rightmost: seq[mid] >  key  ->  hi = mid   else lo = mid + 1
//! ```
//!
//! The returned `lo` splits the slice into a prefix that compares below the
//! key (strictly for leftmost, non-strictly for rightmost) and a suffix that
//! compares at or above it.
//!
//! ## Preconditions
//!
//! The slice must already be ordered. This is not checked: an unordered
//! slice yields some index in `[lo, hi]` with no further meaning.

use std::cmp::Ordering;

use crate::error::{IndexError, Result};

/// Shared half-open bisection loop.
///
/// `goes_right(probe)` returns `true` when the answer lies strictly after
/// `probe`.
#[inline]
fn bisect<T, F>(seq: &[T], mut lo: usize, mut hi: usize, mut goes_right: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    while lo < hi {
        // lo + (hi - lo) / 2 cannot overflow
        let mid = lo + (hi - lo) / 2;
        if goes_right(&seq[mid]) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

fn check_bounds(len: usize, lo: usize, hi: usize) -> Result<()> {
    if lo > hi || hi > len {
        return Err(IndexError::InvalidBounds { lo, hi, len });
    }
    Ok(())
}

// ============================================================================
// Whole-slice search
// ============================================================================

/// Returns the leftmost insertion point for `key` in `seq`.
///
/// Every element before the returned index is `< key`; every element from
/// it onward is `>= key`. Inserting at this index places `key` before any
/// equal elements.
///
/// # Example
///
/// ```
/// use sorted_index::locate_leftmost;
///
/// let seq = [1, 4, 5, 6, 8, 12, 15, 20, 21, 23, 23, 26, 29, 30];
/// assert_eq!(locate_leftmost(&seq, &23), 9);
/// assert_eq!(locate_leftmost(&seq, &0), 0);
/// assert_eq!(locate_leftmost(&seq, &31), seq.len());
/// ```
#[inline]
pub fn locate_leftmost<T: Ord>(seq: &[T], key: &T) -> usize {
    bisect(seq, 0, seq.len(), |probe| probe < key)
}

/// Returns the rightmost insertion point for `key` in `seq`.
///
/// Every element before the returned index is `<= key`; every element from
/// it onward is `> key`. Inserting at this index places `key` after any
/// equal elements.
///
/// # Example
///
/// ```
/// use sorted_index::locate_rightmost;
///
/// let seq = [1, 4, 5, 6, 8, 12, 15, 20, 21, 23, 23, 26, 29, 30];
/// assert_eq!(locate_rightmost(&seq, &23), 11);
/// ```
#[inline]
pub fn locate_rightmost<T: Ord>(seq: &[T], key: &T) -> usize {
    bisect(seq, 0, seq.len(), |probe| probe <= key)
}

// ============================================================================
// Bounded search
// ============================================================================

/// Leftmost insertion point for `key` within `seq[lo..hi]`.
///
/// The returned index is absolute (relative to `seq`, not to `lo`) and lies
/// in `[lo, hi]`.
///
/// # Errors
///
/// [`IndexError::InvalidBounds`] if `lo > hi` or `hi > seq.len()`.
///
/// # Example
///
/// ```
/// use sorted_index::locate_leftmost_in;
///
/// let seq = [1, 2, 2, 2, 3];
/// // Only the tail is searched, so the answer cannot be below 3
/// assert_eq!(locate_leftmost_in(&seq, &2, 3, 5).unwrap(), 3);
/// ```
pub fn locate_leftmost_in<T: Ord>(seq: &[T], key: &T, lo: usize, hi: usize) -> Result<usize> {
    check_bounds(seq.len(), lo, hi)?;
    Ok(bisect(seq, lo, hi, |probe| probe < key))
}

/// Rightmost insertion point for `key` within `seq[lo..hi]`.
///
/// # Errors
///
/// [`IndexError::InvalidBounds`] if `lo > hi` or `hi > seq.len()`.
pub fn locate_rightmost_in<T: Ord>(seq: &[T], key: &T, lo: usize, hi: usize) -> Result<usize> {
    check_bounds(seq.len(), lo, hi)?;
    Ok(bisect(seq, lo, hi, |probe| probe <= key))
}

// ============================================================================
// Key-projected search
// ============================================================================

/// Leftmost insertion point, comparing `f(element)` against `key`.
///
/// `seq` must be ordered by `f`. Mirrors [`slice::binary_search_by_key`].
///
/// # Example
///
/// ```
/// use sorted_index::locate_leftmost_by_key;
///
/// let people = [("ana", 19), ("bo", 23), ("cy", 23), ("di", 31)];
/// assert_eq!(locate_leftmost_by_key(&people, &23, |p| p.1), 1);
/// ```
pub fn locate_leftmost_by_key<T, B, F>(seq: &[T], key: &B, mut f: F) -> usize
where
    B: Ord,
    F: FnMut(&T) -> B,
{
    bisect(seq, 0, seq.len(), |probe| f(probe).cmp(key) == Ordering::Less)
}

/// Rightmost insertion point, comparing `f(element)` against `key`.
///
/// # Example
///
/// ```
/// use sorted_index::locate_rightmost_by_key;
///
/// let people = [("ana", 19), ("bo", 23), ("cy", 23), ("di", 31)];
/// assert_eq!(locate_rightmost_by_key(&people, &23, |p| p.1), 3);
/// ```
pub fn locate_rightmost_by_key<T, B, F>(seq: &[T], key: &B, mut f: F) -> usize
where
    B: Ord,
    F: FnMut(&T) -> B,
{
    bisect(seq, 0, seq.len(), |probe| f(probe).cmp(key) != Ordering::Greater)
}

/// Returns the first position where `seq[i - 1] > seq[i]`, or `None` if the
/// slice is ordered.
pub fn first_unordered<T: Ord>(seq: &[T]) -> Option<usize> {
    seq.windows(2).position(|w| w[0] > w[1]).map(|i| i + 1)
}

// ============================================================================
// Unit Tests
// ============================================================================
