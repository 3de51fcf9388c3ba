//! Mapping scalar values into discrete buckets.
//!
//! A classification table is an ordered list of breakpoints. A value's
//! category is the rightmost insertion point of the value among the
//! breakpoints, so a value equal to a breakpoint falls into the higher
//! bucket.
//!
//! ## Example
//!
//! ```
//! use sorted_index::classify::Classifier;
//!
//! let table = Classifier::new(vec![60, 70, 80, 90], "FDCBA".chars().collect()).unwrap();
//! let grades: String = [33, 99, 77, 70, 89, 90, 100]
//!     .iter()
//!     .map(|score| *table.label(score))
//!     .collect();
//! assert_eq!(grades, "FACCBAA");
//! ```

mod table;

pub use table::{classify, classify_label, Classifier};
