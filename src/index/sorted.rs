//! Owned ordered sequence.
//!
//! ## Invariant
//!
//! `keys[i] <= keys[i + 1]` for every adjacent pair. Every constructor either
//! checks it ([`SortedIndex::from_sorted`]), establishes it
//! ([`SortedIndex::from_unsorted`], `FromIterator`) or starts empty; the
//! only mutation is insertion at a located position.
//!
//! ## Example
//!
//! ```
//! use sorted_index::{SortedIndex, TieBreak};
//!
//! let mut index = SortedIndex::with_capacity(16);
//! for key in [5, 2, 8, 2] {
//!     index.insert(key);
//! }
//!
//! assert_eq!(index.as_slice(), &[2, 2, 5, 8]);
//! assert_eq!(index.count(&2), 2);
//! assert_eq!(index.insert_with(2, TieBreak::Leftmost), 0);
//! ```

use std::ops::Index;
use std::slice;

use ssz_rs::SimpleSerialize;

use crate::error::{IndexError, Result};
use crate::search::{first_unordered, locate_leftmost, locate_rightmost, TieBreak};
use crate::types::IndexDigest;

/// An ordered sequence of keys with logarithmic search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortedIndex<K> {
    /// Keys in non-decreasing order
    keys: Vec<K>,
}

impl<K: Ord> Default for SortedIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> SortedIndex<K> {
    /// Create an empty index
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Create an empty index with room for `capacity` keys
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_index::SortedIndex;
    ///
    /// let index: SortedIndex<u64> = SortedIndex::with_capacity(1_000);
    /// assert!(index.capacity() >= 1_000);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
        }
    }

    /// Take ownership of an already-ordered vector.
    ///
    /// # Errors
    ///
    /// [`IndexError::Unordered`] naming the first position whose key is
    /// smaller than its predecessor.
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_index::{IndexError, SortedIndex};
    ///
    /// assert!(SortedIndex::from_sorted(vec![1, 1, 4]).is_ok());
    /// assert_eq!(
    ///     SortedIndex::from_sorted(vec![1, 3, 2]),
    ///     Err(IndexError::Unordered { position: 2 })
    /// );
    /// ```
    pub fn from_sorted(keys: Vec<K>) -> Result<Self> {
        if let Some(position) = first_unordered(&keys) {
            return Err(IndexError::Unordered { position });
        }
        Ok(Self { keys })
    }

    /// Sort `keys` (stably) and take ownership.
    pub fn from_unsorted(mut keys: Vec<K>) -> Self {
        keys.sort();
        Self { keys }
    }

    // ========================================================================
    // Size
    // ========================================================================

    /// Number of keys
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the index holds no keys
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Allocated capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.keys.capacity()
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert `key` after any equal keys. Returns the index it landed at.
    #[inline]
    pub fn insert(&mut self, key: K) -> usize {
        self.insert_with(key, TieBreak::Rightmost)
    }

    /// Insert `key` at the insertion point chosen by `tie_break`.
    ///
    /// Returns the index the key landed at.
    pub fn insert_with(&mut self, key: K, tie_break: TieBreak) -> usize {
        let index = tie_break.locate(&self.keys, &key);
        self.keys.insert(index, key);
        index
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Leftmost insertion point for `key`
    #[inline]
    pub fn locate_leftmost(&self, key: &K) -> usize {
        locate_leftmost(&self.keys, key)
    }

    /// Rightmost insertion point for `key`
    #[inline]
    pub fn locate_rightmost(&self, key: &K) -> usize {
        locate_rightmost(&self.keys, key)
    }

    /// Check whether an equal key is present
    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Index of the first key equal to `key`, if any
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_index::SortedIndex;
    ///
    /// let index: SortedIndex<_> = [23, 1, 23, 30].into_iter().collect();
    /// assert_eq!(index.position(&23), Some(1));
    /// assert_eq!(index.position(&22), None);
    /// ```
    pub fn position(&self, key: &K) -> Option<usize> {
        let index = self.locate_leftmost(key);
        match self.keys.get(index) {
            Some(found) if found == key => Some(index),
            _ => None,
        }
    }

    /// Number of keys equal to `key`
    pub fn count(&self, key: &K) -> usize {
        self.locate_rightmost(key) - self.locate_leftmost(key)
    }

    /// Keys within the closed interval `[lo, hi]`.
    ///
    /// Empty when `lo > hi`.
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_index::SortedIndex;
    ///
    /// let index = SortedIndex::from_sorted(vec![1, 3, 5, 7, 9, 11]).unwrap();
    /// assert_eq!(index.range(&3, &7), &[3, 5, 7]);
    /// assert_eq!(index.range(&8, &2), &[] as &[i32]);
    /// ```
    pub fn range(&self, lo: &K, hi: &K) -> &[K] {
        if lo > hi {
            return &[];
        }
        let start = self.locate_leftmost(lo);
        let end = self.locate_rightmost(hi);
        &self.keys[start..end]
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Key at `index`, or `None` if out of bounds
    #[inline]
    pub fn get(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    /// Smallest key
    #[inline]
    pub fn first(&self) -> Option<&K> {
        self.keys.first()
    }

    /// Largest key
    #[inline]
    pub fn last(&self) -> Option<&K> {
        self.keys.last()
    }

    /// Iterate keys in order
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// Keys as an ordered slice
    #[inline]
    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }

    /// Give up ownership of the ordered keys
    #[inline]
    pub fn into_vec(self) -> Vec<K> {
        self.keys
    }
}

impl<K: Ord + SimpleSerialize> SortedIndex<K> {
    /// Fingerprint of the current contents.
    ///
    /// Two indexes with equal keys in equal order have equal digests.
    ///
    /// # Errors
    ///
    /// [`IndexError::Encoding`] if a key fails to SSZ-encode.
    pub fn digest(&self) -> Result<IndexDigest> {
        IndexDigest::compute(&self.keys)
    }
}

impl<K: Ord> FromIterator<K> for SortedIndex<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<K: Ord> Extend<K> for SortedIndex<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> Index<usize> for SortedIndex<K> {
    type Output = K;

    fn index(&self, index: usize) -> &K {
        &self.keys[index]
    }
}

impl<K> AsRef<[K]> for SortedIndex<K> {
    fn as_ref(&self) -> &[K] {
        &self.keys
    }
}

impl<'a, K> IntoIterator for &'a SortedIndex<K> {
    type Item = &'a K;
    type IntoIter = slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl<K> IntoIterator for SortedIndex<K> {
    type Item = K;
    type IntoIter = std::vec::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
