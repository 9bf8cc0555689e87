//! # Pathsort
//!
//! `pathsort` is a small library of stable, comparator-driven sorts for
//! in-memory collections, together with a path-based accessor that lets a
//! comparator reach a value nested inside arbitrarily deep mappings and
//! sequences.
//!
//! ## Key Features
//!
//! - **Key paths**: A [`KeyPath`] is an ordered list of keys and indices.
//!   [`resolve`] follows it into a [`serde_json::Value`].
//! - **Comparator factories**: [`comparator_lexic`] and [`comparator_numeric`]
//!   build comparators from an options structure (path, case or sign folding,
//!   direction).
//! - **Stable sorts**: [`bubble_sort`], [`merge_sort`] and the top-K
//!   [`partial_sort`] never mutate their input and keep equal elements in
//!   their original order.
//! - **Custom types**: Implement [`SortKey`] to make a type readable by the
//!   built-in comparators, or pass any `Fn(&T, &T) -> Ordering` as a
//!   [`Comparator`].
//!
//! ## Usage
//!
//! ### Sorting records by a nested field
//!
//! ```rust
//! use pathsort::prelude::*;
//! use serde_json::json;
//!
//! let people = vec![
//!     json!({ "name": "tom", "scores": [3, 9] }),
//!     json!({ "name": "Ann", "scores": [7, 1] }),
//!     json!({ "name": "bob", "scores": [5, 4] }),
//! ];
//!
//! let by_second_score = comparator_numeric(NumericOptions::new().path(key_path!["scores", 1]));
//! let sorted = merge_sort(&people, &by_second_score).unwrap();
//! assert_eq!(sorted[0]["name"], "Ann");
//!
//! let by_name = comparator_lexic(LexicOptions::new().path("name").ignore_case(true));
//! let sorted = bubble_sort(&people, &by_name, None).unwrap();
//! assert_eq!(sorted[2]["name"], "tom");
//! ```
//!
//! ### Top-K
//!
//! ```rust
//! use pathsort::prelude::*;
//!
//! let data = vec![6, 5, 6, 1, 2, 3, 0, 4];
//! let top = partial_sort(&data, &comparator_numeric(NumericOptions::new()), Some(2)).unwrap();
//! assert_eq!(&top[..2], &[0, 1]);
//! ```
//!
//! ## Errors
//!
//! Comparators built by this crate fail with [`SortError`] when a key path
//! does not resolve or a projection has the wrong shape. Sorts stop at the
//! first failure and return it.

pub mod algo;
pub mod compare;
pub mod core;
pub mod error;
pub mod path;

pub use algo::{bubble_sort, is_sorted, merge_sort, partial_sort, sort_copy};
pub use compare::{
    LexicComparator, LexicOptions, NumericComparator, NumericOptions, comparator_lexic,
    comparator_numeric,
};
pub use crate::core::{Comparator, Reversed, SortKey};
pub use error::{SortError, SortResult};
pub use path::{KeyPath, PathStep, resolve};

pub mod prelude {
    pub use crate::algo::{bubble_sort, is_sorted, merge_sort, partial_sort, sort_copy};
    pub use crate::compare::{LexicOptions, NumericOptions, comparator_lexic, comparator_numeric};
    pub use crate::core::{Comparator, Reversed, SortKey};
    pub use crate::error::{SortError, SortResult};
    pub use crate::key_path;
    pub use crate::path::{KeyPath, PathStep, resolve};
}
