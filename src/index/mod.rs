//! Owned ordered sequences.
//!
//! [`SortedIndex`] wraps a `Vec` and keeps it ordered. Construction checks
//! or establishes the order once, so later searches stay O(log n) and never
//! need to re-validate.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Locate / contains / count | O(log n) |
//! | Range | O(log n) |
//! | Insert | O(log n) + O(n) shift |
//! | `from_sorted` | O(n) |
//! | `from_unsorted` | O(n log n) |

mod sorted;

pub use sorted::SortedIndex;
