//! Comparator factories: lexicographic and numeric.
//!
//! Each factory takes an options structure and returns a comparator that
//! projects both operands through an optional [`KeyPath`], normalizes them and
//! compares them in ascending or descending order.
//!
//! Options deserialize from JSON with camelCase field names; every field is
//! optional.
//!
//! ```
//! use pathsort::compare::LexicOptions;
//!
//! let options: LexicOptions =
//!     serde_json::from_str(r#"{ "path": ["name", 0], "ignoreCase": true }"#).unwrap();
//! assert!(options.ignore_case);
//! assert!(!options.descending);
//! ```

use crate::core::{Comparator, SortKey};
use crate::error::{SortError, SortResult};
use crate::path::KeyPath;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Options for [`comparator_lexic`].
///
/// Defaults: no path (compare elements whole), case-sensitive, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LexicOptions {
    pub path: Option<KeyPath>,
    pub ignore_case: bool,
    pub descending: bool,
}

impl LexicOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<KeyPath>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }
}

/// Options for [`comparator_numeric`].
///
/// Defaults: no path (compare elements whole), signed, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumericOptions {
    pub path: Option<KeyPath>,
    pub ignore_sign: bool,
    pub descending: bool,
}

impl NumericOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<KeyPath>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn ignore_sign(mut self, ignore_sign: bool) -> Self {
        self.ignore_sign = ignore_sign;
        self
    }

    pub fn descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }
}

/// Compares the string representations of two projections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicComparator {
    options: LexicOptions,
}

impl LexicComparator {
    pub fn options(&self) -> &LexicOptions {
        &self.options
    }
}

impl<T: SortKey + ?Sized> Comparator<T> for LexicComparator {
    fn compare(&self, a: &T, b: &T) -> SortResult<Ordering> {
        let path = self.options.path.as_ref();
        let x = a.text(path)?;
        let y = b.text(path)?;

        let order = if self.options.ignore_case {
            x.to_uppercase().cmp(&y.to_uppercase())
        } else {
            x.cmp(&y)
        };

        Ok(directed(order, self.options.descending))
    }
}

/// Compares the numeric values of two projections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericComparator {
    options: NumericOptions,
}

impl NumericComparator {
    pub fn options(&self) -> &NumericOptions {
        &self.options
    }
}

impl<T: SortKey + ?Sized> Comparator<T> for NumericComparator {
    fn compare(&self, a: &T, b: &T) -> SortResult<Ordering> {
        let path = self.options.path.as_ref();
        let mut x = a.number(path)?;
        let mut y = b.number(path)?;

        if self.options.ignore_sign {
            x = x.abs();
            y = y.abs();
        }

        // NaN is the only value without an ordering.
        let order = x.partial_cmp(&y).ok_or_else(|| {
            SortError::InvalidArgument(format!("cannot order {x} against {y}: NaN is not comparable"))
        })?;

        Ok(directed(order, self.options.descending))
    }
}

#[inline]
fn directed(order: Ordering, descending: bool) -> Ordering {
    if descending { order.reverse() } else { order }
}

/// Builds a lexicographic comparator.
///
/// Both operands are projected through `options.path` (or used whole),
/// converted to text, uppercased when `ignore_case` is set and compared in
/// ordinal order. Values equal after normalization compare equal.
///
/// ```
/// use pathsort::compare::{LexicOptions, comparator_lexic};
/// use pathsort::core::Comparator;
///
/// let cmp = comparator_lexic(LexicOptions::new().ignore_case(true));
/// assert_eq!(cmp.sign("bmw", "Ford").unwrap(), -1);
/// assert_eq!(cmp.sign("five", "FIVE").unwrap(), 0);
/// ```
pub fn comparator_lexic(options: LexicOptions) -> LexicComparator {
    LexicComparator { options }
}

/// Builds a numeric comparator.
///
/// Both operands are projected through `options.path` (or used whole), made
/// absolute when `ignore_sign` is set and compared numerically. A non-numeric
/// projection or a NaN operand is an [`SortError::InvalidArgument`].
///
/// ```
/// use pathsort::compare::{NumericOptions, comparator_numeric};
/// use pathsort::core::Comparator;
///
/// let cmp = comparator_numeric(NumericOptions::new().ignore_sign(true));
/// assert_eq!(cmp.sign(&-7i32, &3i32).unwrap(), 1);
/// assert!(cmp.compare(&f64::NAN, &1.0).is_err());
/// ```
pub fn comparator_numeric(options: NumericOptions) -> NumericComparator {
    NumericComparator { options }
}
