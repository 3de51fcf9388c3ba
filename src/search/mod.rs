//! Binary search and insertion over ordered slices.
//!
//! ## Components
//!
//! - [`bisect`]: leftmost/rightmost insertion points (whole slice, bounded,
//!   key-projected)
//! - [`insert`]: order-preserving insertion into a `Vec`
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Locate (leftmost/rightmost) | O(log n) |
//! | Insert | O(log n) search + O(n) shift |
//!
//! These functions are stateless and take the sequence as an explicit
//! argument. They trust the caller that the sequence is ordered; use
//! [`SortedIndex`](crate::SortedIndex) when the ordering should be checked
//! and owned.
//!
//! ## Example
//!
//! ```
//! use sorted_index::search::{insert_sorted_with, locate_leftmost, locate_rightmost, TieBreak};
//!
//! let mut seq = vec![1, 3, 3, 5];
//! assert_eq!(locate_leftmost(&seq, &3), 1);
//! assert_eq!(locate_rightmost(&seq, &3), 3);
//!
//! insert_sorted_with(&mut seq, 3, TieBreak::Leftmost);
//! assert_eq!(seq, vec![1, 3, 3, 3, 5]);
//! ```

pub mod bisect;
pub mod insert;

pub use bisect::{
    first_unordered, locate_leftmost, locate_leftmost_by_key, locate_leftmost_in,
    locate_rightmost, locate_rightmost_by_key, locate_rightmost_in,
};
pub use insert::{insert_sorted, insert_sorted_with, TieBreak};
