//! Error types shared by the accessor, the comparators and the sorts.

use crate::path::KeyPath;
use thiserror::Error;

/// Result type for every fallible operation in this crate.
pub type SortResult<T> = Result<T, SortError>;

/// Errors raised while projecting or comparing values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortError {
    /// An argument has the wrong shape, e.g. a scalar where a mapping or
    /// sequence was expected, or a non-numeric value given to a numeric comparator.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The key path has no value at `step` (absent key or index out of range).
    #[error("key path `{path}` has no value at step {step}")]
    UndefinedProjection { path: KeyPath, step: usize },
}
