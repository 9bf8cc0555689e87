//! Core traits for pathsort.
//!
//! This module defines:
//! - [`SortKey`]: how a comparator reads text or a number out of an element.
//! - [`Comparator`]: the tri-state comparison every sort is driven by.
//! - [`Reversed`]: a comparator adaptor inverting the order of another.

use crate::error::{SortError, SortResult};
use crate::path::{KeyPath, kind_of, resolve};
use serde_json::Value;
use std::borrow::Cow;
use std::cmp::Ordering;

/// A trait for reading comparable projections out of an element.
///
/// The built-in comparators call [`SortKey::text`] (lexicographic) or
/// [`SortKey::number`] (numeric), passing the key path they were configured
/// with. Composite values follow the path; scalars only accept an empty one.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use pathsort::core::SortKey;
/// use pathsort::error::SortResult;
/// use pathsort::path::KeyPath;
/// use std::borrow::Cow;
///
/// struct Track {
///     title: String,
///     seconds: u32,
/// }
///
/// impl SortKey for Track {
///     fn text(&self, _path: Option<&KeyPath>) -> SortResult<Cow<'_, str>> {
///         Ok(Cow::Borrowed(&self.title))
///     }
///
///     fn number(&self, _path: Option<&KeyPath>) -> SortResult<f64> {
///         Ok(f64::from(self.seconds))
///     }
/// }
/// ```
pub trait SortKey {
    /// Returns the string representation of the projection at `path`.
    fn text(&self, path: Option<&KeyPath>) -> SortResult<Cow<'_, str>>;

    /// Returns the numeric value of the projection at `path`.
    ///
    /// Numbers compare as `f64`. Integers beyond 2^53 in magnitude round to
    /// the nearest representable value, so neighbouring large `i64`, `u64`
    /// or `usize` values may compare equal.
    fn number(&self, path: Option<&KeyPath>) -> SortResult<f64>;
}

impl SortKey for Value {
    fn text(&self, path: Option<&KeyPath>) -> SortResult<Cow<'_, str>> {
        let value = project(self, path)?;
        Ok(match value {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Null => Cow::Borrowed("null"),
            // Numbers and booleans display bare; composites as compact JSON.
            other => Cow::Owned(other.to_string()),
        })
    }

    fn number(&self, path: Option<&KeyPath>) -> SortResult<f64> {
        let value = project(self, path)?;
        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| {
                SortError::InvalidArgument(format!("number {n} is not representable as f64"))
            }),
            other => Err(SortError::InvalidArgument(format!(
                "expected a number, found {}",
                kind_of(other)
            ))),
        }
    }
}

fn project<'a>(value: &'a Value, path: Option<&KeyPath>) -> SortResult<&'a Value> {
    match path {
        Some(path) => resolve(value, path),
        None => Ok(value),
    }
}

// Scalars have nothing to index into.
fn reject_path(path: Option<&KeyPath>) -> SortResult<()> {
    match path {
        Some(path) if !path.is_empty() => Err(SortError::InvalidArgument(format!(
            "key path `{path}` cannot be applied to a scalar"
        ))),
        _ => Ok(()),
    }
}

impl SortKey for str {
    fn text(&self, path: Option<&KeyPath>) -> SortResult<Cow<'_, str>> {
        reject_path(path)?;
        Ok(Cow::Borrowed(self))
    }

    fn number(&self, path: Option<&KeyPath>) -> SortResult<f64> {
        reject_path(path)?;
        Err(SortError::InvalidArgument(format!(
            "expected a number, found the string {self:?}"
        )))
    }
}

impl SortKey for String {
    fn text(&self, path: Option<&KeyPath>) -> SortResult<Cow<'_, str>> {
        self.as_str().text(path)
    }

    fn number(&self, path: Option<&KeyPath>) -> SortResult<f64> {
        self.as_str().number(path)
    }
}

impl<T: SortKey + ?Sized> SortKey for &T {
    fn text(&self, path: Option<&KeyPath>) -> SortResult<Cow<'_, str>> {
        (**self).text(path)
    }

    fn number(&self, path: Option<&KeyPath>) -> SortResult<f64> {
        (**self).number(path)
    }
}

macro_rules! impl_sort_key_for_numbers {
    ($($ty:ty),*) => {
        $(
            impl SortKey for $ty {
                fn text(&self, path: Option<&KeyPath>) -> SortResult<Cow<'_, str>> {
                    reject_path(path)?;
                    Ok(Cow::Owned(self.to_string()))
                }

                fn number(&self, path: Option<&KeyPath>) -> SortResult<f64> {
                    reject_path(path)?;
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_sort_key_for_numbers!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// A comparison function over two elements of the same shape.
///
/// Every closure `Fn(&T, &T) -> Ordering` is a comparator that never fails.
/// The comparators built by [`crate::compare`] read elements through
/// [`SortKey`] and fail when a projection is missing or has the wrong shape.
///
/// ```
/// use pathsort::core::Comparator;
/// use std::cmp::Ordering;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"a").unwrap(), Ordering::Greater);
/// assert_eq!(by_len.sign(&"a", &"ab").unwrap(), -1);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> SortResult<Ordering>;

    /// Compares `a` with `b`, returning exactly one of -1, 0 or +1.
    fn sign(&self, a: &T, b: &T) -> SortResult<i32> {
        Ok(self.compare(a, b)? as i32)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> SortResult<Ordering> {
        Ok(self(a, b))
    }
}

/// Inverts the order produced by the wrapped comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> SortResult<Ordering> {
        self.0.compare(a, b).map(Ordering::reverse)
    }
}
