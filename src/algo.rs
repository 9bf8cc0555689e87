//! Sorting algorithms (bubble sort, merge sort and partial sort).
//!
//! Every sort borrows its input, returns a freshly allocated `Vec` and is
//! driven by a [`Comparator`]. Elements that compare equal keep their original
//! relative order. The first comparator error aborts the sort and is returned.

use crate::core::Comparator;
use crate::error::SortResult;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Sorts a copy of `items` with a stable bubble sort.
///
/// Pass `i` sweeps from the back towards position `i`, swapping neighbours
/// that are strictly out of order, so after it position `i` holds its final
/// value. With `limit = Some(k)` only the first `k` passes run: the first `k`
/// positions hold the `k` smallest elements in order, the rest keep no ordering
/// guarantee. `None` (or a limit at least the length) sorts fully.
///
/// # Examples
///
/// ```
/// use pathsort::bubble_sort;
/// use pathsort::compare::{NumericOptions, comparator_numeric};
///
/// let data = vec![6, 5, 6, 1, 2, 3, 0, 4];
/// let cmp = comparator_numeric(NumericOptions::new());
///
/// assert_eq!(bubble_sort(&data, &cmp, None).unwrap(), vec![0, 1, 2, 3, 4, 5, 6, 6]);
/// assert_eq!(bubble_sort(&data, &cmp, Some(2)).unwrap(), vec![0, 1, 6, 5, 6, 2, 3, 4]);
/// ```
pub fn bubble_sort<T, C>(items: &[T], comparator: &C, limit: Option<usize>) -> SortResult<Vec<T>>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let mut sorted = items.to_vec();
    let len = sorted.len();
    let passes = limit.map_or(len, |k| k.min(len));
    trace!(len, ?limit, "bubble sort");

    for settled in 0..passes {
        let mut swapped = false;
        for j in (settled + 1..len).rev() {
            if comparator.compare(&sorted[j - 1], &sorted[j])? == Ordering::Greater {
                sorted.swap(j - 1, j);
                swapped = true;
            }
        }

        // Nothing moved: the unsettled tail is already in order.
        if !swapped {
            debug!(len, passes = settled + 1, "bubble sort finished early");
            break;
        }
    }

    Ok(sorted)
}

/// Sorts a copy of `items` with a stable top-down merge sort.
///
/// The input is split at `len / 2`, both halves are sorted recursively and
/// merged, taking from the left half on ties.
///
/// # Examples
///
/// ```
/// use pathsort::merge_sort;
/// use pathsort::compare::{LexicOptions, comparator_lexic};
///
/// let cars = vec!["Volvo", "Ford", "BMW", "Mazda"];
/// let sorted = merge_sort(&cars, &comparator_lexic(LexicOptions::new())).unwrap();
///
/// assert_eq!(sorted, vec!["BMW", "Ford", "Mazda", "Volvo"]);
/// assert_eq!(cars, vec!["Volvo", "Ford", "BMW", "Mazda"]);
/// ```
pub fn merge_sort<T, C>(items: &[T], comparator: &C) -> SortResult<Vec<T>>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    trace!(len = items.len(), "merge sort");
    merge_sort_slice(items, comparator)
}

fn merge_sort_slice<T, C>(items: &[T], comparator: &C) -> SortResult<Vec<T>>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    if items.len() <= 1 {
        return Ok(items.to_vec());
    }

    let mid = items.len() / 2;
    let left = merge_sort_slice(&items[..mid], comparator)?;
    let right = merge_sort_slice(&items[mid..], comparator)?;

    merge(left, right, comparator)
}

/// Merges two sorted runs, preferring `left` on ties.
fn merge<T, C>(left: Vec<T>, right: Vec<T>, comparator: &C) -> SortResult<Vec<T>>
where
    C: Comparator<T> + ?Sized,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if comparator.compare(l, r)? == Ordering::Greater {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

/// Returns a copy of `items` whose first `k` positions hold the `k` smallest
/// elements in comparator order.
///
/// The remaining positions hold the leftover elements in unspecified order.
/// `None` sorts fully. Equal elements among the first `k` keep their original
/// relative order.
///
/// ```
/// use pathsort::partial_sort;
/// use pathsort::compare::{NumericOptions, comparator_numeric};
///
/// let data = vec![3, 5, 6, 1, 2, 3, 0, 4];
/// let cmp = comparator_numeric(NumericOptions::new().descending(true));
/// let top = partial_sort(&data, &cmp, Some(2)).unwrap();
///
/// assert_eq!(&top[..2], &[6, 5]);
/// ```
pub fn partial_sort<T, C>(items: &[T], comparator: &C, k: Option<usize>) -> SortResult<Vec<T>>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    bubble_sort(items, comparator, k)
}

/// Sorts a copy of `items` with a stable sort, leaving `items` untouched.
///
/// The general-purpose entry point when no particular algorithm is wanted.
/// It is driven by the same merge as [`merge_sort`] rather than
/// `slice::sort_by`, which may panic once a failing comparator stops
/// describing a total order. The first comparator error is returned.
pub fn sort_copy<T, C>(items: &[T], comparator: &C) -> SortResult<Vec<T>>
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    trace!(len = items.len(), "sort copy");
    merge_sort_slice(items, comparator)
}

/// Returns `true` if no adjacent pair of `items` is out of order.
pub fn is_sorted<T, C>(items: &[T], comparator: &C) -> SortResult<bool>
where
    C: Comparator<T> + ?Sized,
{
    for pair in items.windows(2) {
        if comparator.compare(&pair[0], &pair[1])? == Ordering::Greater {
            return Ok(false);
        }
    }
    Ok(true)
}
