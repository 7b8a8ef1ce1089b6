//! Array helpers.
//!
//! Set-like operations (`array_intersect`, `array_union`,
//! `array_difference`, `array_unique`) keep first-occurrence order and
//! only need `PartialEq`, so they are O(n·m); script arrays are small.

use std::collections::BTreeMap;

use rand::Rng;

use crate::error::{Result, UtilError};
use crate::random::SeededRandom;

/// Splits `items` into consecutive chunks of `size`; the last chunk may
/// be shorter.
///
/// # Errors
/// Returns `InvalidArgument` if `size == 0`.
///
/// # Examples
/// ```
/// use u_toolkit::collections::array_chunk;
/// let chunks = array_chunk(&[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn array_chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(UtilError::invalid("size", "chunk size must be at least 1"));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Elements of `a` that also appear in `b`, without duplicates.
///
/// # Examples
/// ```
/// use u_toolkit::collections::array_intersect;
/// assert_eq!(array_intersect(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
/// ```
pub fn array_intersect<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for item in a {
        if b.contains(item) && !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Distinct elements of `a` followed by distinct new elements of `b`.
pub fn array_union<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = array_unique(a);
    for item in b {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Elements of `a` that do not appear in `b` (duplicates in `a` kept).
pub fn array_difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| !b.contains(item)).cloned().collect()
}

/// Removes duplicates, keeping the first occurrence.
pub fn array_unique<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Concatenates one level of nesting.
pub fn array_flatten<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    nested.iter().flatten().cloned().collect()
}

/// Rotates left by `steps`; negative steps rotate right. Steps wrap
/// around the length.
///
/// # Examples
/// ```
/// use u_toolkit::collections::array_rotate;
/// assert_eq!(array_rotate(&[1, 2, 3, 4], 1), vec![2, 3, 4, 1]);
/// assert_eq!(array_rotate(&[1, 2, 3, 4], -1), vec![4, 1, 2, 3]);
/// ```
pub fn array_rotate<T: Clone>(items: &[T], steps: i64) -> Vec<T> {
    let mut out = items.to_vec();
    if out.is_empty() {
        return out;
    }
    let shift = steps.rem_euclid(out.len() as i64) as usize;
    out.rotate_left(shift);
    out
}

/// Integers from `start` (inclusive) to `end` (exclusive) by `step`.
///
/// # Errors
/// Returns `InvalidArgument` if `step == 0`.
pub fn array_range(start: i64, end: i64, step: i64) -> Result<Vec<i64>> {
    if step == 0 {
        return Err(UtilError::invalid("step", "must not be zero"));
    }
    let mut out = Vec::new();
    let mut current = start;
    while (step > 0 && current < end) || (step < 0 && current > end) {
        out.push(current);
        current = match current.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(out)
}

/// Sum with Neumaier compensation.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1).
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn array_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Arithmetic mean.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
pub fn array_average(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(array_sum(data) / data.len() as f64)
}

/// Median (mean of the two middle values for even lengths).
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn array_median(data: &[f64]) -> Option<f64> {
    if data.is_empty() || data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Smallest value; `None` if empty or any value is NaN.
pub fn array_min(data: &[f64]) -> Option<f64> {
    if data.iter().any(|x| x.is_nan()) {
        return None;
    }
    data.iter().copied().reduce(f64::min)
}

/// Largest value; `None` if empty or any value is NaN.
pub fn array_max(data: &[f64]) -> Option<f64> {
    if data.iter().any(|x| x.is_nan()) {
        return None;
    }
    data.iter().copied().reduce(f64::max)
}

/// Occurrence count per distinct element.
pub fn array_count<T: Ord + Clone>(items: &[T]) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}

/// Shuffled copy using the pinned [`SeededRandom`] sequence; the same
/// seed always produces the same order.
pub fn array_shuffle_seeded<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut out = items.to_vec();
    SeededRandom::new(seed).shuffle(&mut out);
    out
}

/// `count` distinct positions drawn without replacement, in draw order.
///
/// # Errors
/// Returns `InvalidArgument` if `count` exceeds the number of items.
pub fn array_sample<T: Clone, R: Rng>(items: &[T], count: usize, rng: &mut R) -> Result<Vec<T>> {
    if count > items.len() {
        return Err(UtilError::invalid(
            "count",
            format!("cannot draw {count} from {} items", items.len()),
        ));
    }
    // Partial Fisher-Yates over the index list
    let mut indices: Vec<usize> = (0..items.len()).collect();
    for i in 0..count {
        let j = rng.random_range(i..indices.len());
        indices.swap(i, j);
    }
    Ok(indices[..count].iter().map(|&i| items[i].clone()).collect())
}
