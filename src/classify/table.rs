//! Breakpoint classification.
//!
//! ## Boundaries
//!
//! With breakpoints `b0 < b1 < ... < bn-1`, category `i` covers
//! `[b(i-1), b(i))`: every category is closed on the left. A value equal to
//! a breakpoint belongs to the higher category.
//!
//! ```text
//!   F      D      C      B      A
//! -----|------|------|------|------
//!     60     70     80     90
//! ```

use crate::error::{IndexError, Result};
use crate::search::{first_unordered, locate_rightmost};
use crate::types::Score;

/// Category index of `value` against ordered `breakpoints`.
///
/// Returns a value in `0..=breakpoints.len()`. The breakpoints are not
/// checked for order.
///
/// # Example
///
/// ```
/// use sorted_index::classify;
///
/// let breakpoints = [60, 70, 80, 90];
/// assert_eq!(classify(&breakpoints, &59), 0);
/// assert_eq!(classify(&breakpoints, &85), 3);
/// assert_eq!(classify(&breakpoints, &90), 4);
/// ```
#[inline]
pub fn classify<T: Ord>(breakpoints: &[T], value: &T) -> usize {
    locate_rightmost(breakpoints, value)
}

/// Label of the category `value` falls into.
///
/// # Errors
///
/// [`IndexError::LabelCount`] unless there is exactly one more label than
/// breakpoints.
///
/// # Example
///
/// ```
/// use sorted_index::classify_label;
///
/// let grades: Vec<char> = "FDCBA".chars().collect();
/// assert_eq!(classify_label(&[60, 70, 80, 90], &grades, &85), Ok(&'B'));
/// ```
pub fn classify_label<'a, T: Ord, L>(breakpoints: &[T], labels: &'a [L], value: &T) -> Result<&'a L> {
    check_label_count(breakpoints.len(), labels.len())?;
    Ok(&labels[classify(breakpoints, value)])
}

fn check_label_count(breakpoints: usize, labels: usize) -> Result<()> {
    if labels != breakpoints + 1 {
        return Err(IndexError::LabelCount { breakpoints, labels });
    }
    Ok(())
}

/// A validated classification table.
///
/// Holds ordered breakpoints and one label per category. Both are checked
/// when the table is built, so lookups cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier<T, L> {
    /// Thresholds in non-decreasing order
    breakpoints: Vec<T>,

    /// `breakpoints.len() + 1` labels, lowest category first
    labels: Vec<L>,
}

impl<T: Ord, L> Classifier<T, L> {
    /// Build a table.
    ///
    /// # Errors
    ///
    /// - [`IndexError::LabelCount`] if `labels.len() != breakpoints.len() + 1`
    /// - [`IndexError::Unordered`] if the breakpoints are not ordered
    pub fn new(breakpoints: Vec<T>, labels: Vec<L>) -> Result<Self> {
        check_label_count(breakpoints.len(), labels.len())?;
        if let Some(position) = first_unordered(&breakpoints) {
            return Err(IndexError::Unordered { position });
        }
        Ok(Self { breakpoints, labels })
    }

    /// Category index of `value`, in `0..self.categories()`
    #[inline]
    pub fn category(&self, value: &T) -> usize {
        classify(&self.breakpoints, value)
    }

    /// Label of the category `value` falls into
    #[inline]
    pub fn label(&self, value: &T) -> &L {
        &self.labels[self.category(value)]
    }

    /// Number of categories
    #[inline]
    pub fn categories(&self) -> usize {
        self.labels.len()
    }

    /// Breakpoints, lowest first
    #[inline]
    pub fn breakpoints(&self) -> &[T] {
        &self.breakpoints
    }

    /// Labels, lowest category first
    #[inline]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }
}

impl Classifier<Score, char> {
    /// Grading table from decimal breakpoints and one label per character.
    ///
    /// # Errors
    ///
    /// [`IndexError::InvalidScore`] for a bad breakpoint string, plus the
    /// errors of [`Classifier::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_index::Classifier;
    /// use sorted_index::types::Score;
    ///
    /// let grades = Classifier::grades(&["60", "70", "80", "90"], "FDCBA").unwrap();
    /// assert_eq!(grades.label(&Score::from_whole(85)), &'B');
    /// assert_eq!(grades.label(&"59.99".parse().unwrap()), &'F');
    /// ```
    pub fn grades(breakpoints: &[&str], labels: &str) -> Result<Self> {
        let breakpoints = breakpoints
            .iter()
            .map(|s| Score::parse(s))
            .collect::<Result<Vec<_>>>()?;
        Self::new(breakpoints, labels.chars().collect())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
