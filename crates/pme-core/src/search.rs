//! Binary search over sorted series.
//!
//! Every function assumes its input is sorted ascending by the comparison
//! key. On unsorted input the result is unspecified.
//!
//! Ties on the key are broken by position:
//!
//! | Function | Boundary | Returns |
//! |----------|----------|---------|
//! | [`find_eq`] / [`index`] | bisect left | leftmost equal element |
//! | [`find_lt`] | bisect left | rightmost element `< x` |
//! | [`find_le`] | bisect right | rightmost element `<= x` |
//! | [`find_gt`] | bisect right | leftmost element `> x` |
//! | [`find_ge`] | bisect left | leftmost element `>= x` |
//!
//! Each has a `*_by_key` twin that compares a key extracted from composite
//! records, e.g. the `date` of a [`crate::types::BenchmarkValue`]. A miss is
//! `None`, never an error.
//!
//! ```rust
//! use pme_core::search::{find_ge, find_le, find_lt};
//!
//! let a = [1, 3, 3, 5];
//! assert_eq!(find_lt(&a, &3), Some(&1));
//! assert_eq!(find_le(&a, &4), Some(&3));
//! assert_eq!(find_ge(&a, &6), None);
//! ```

/// Returns the first position whose element is not less than `x`.
pub fn bisect_left<T: PartialOrd>(seq: &[T], x: &T) -> usize {
    seq.partition_point(|item| item < x)
}

/// Returns the first position whose element is greater than `x`.
pub fn bisect_right<T: PartialOrd>(seq: &[T], x: &T) -> usize {
    seq.partition_point(|item| item <= x)
}

/// Returns the first position whose key is not less than `x`.
pub fn bisect_left_by_key<T, K, F>(seq: &[T], x: &K, key: F) -> usize
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    seq.partition_point(|item| key(item) < *x)
}

/// Returns the first position whose key is greater than `x`.
pub fn bisect_right_by_key<T, K, F>(seq: &[T], x: &K, key: F) -> usize
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    seq.partition_point(|item| key(item) <= *x)
}

/// Element just before an insertion point.
fn before<T>(seq: &[T], boundary: usize) -> Option<&T> {
    boundary.checked_sub(1).map(|i| &seq[i])
}

/// Position of the leftmost element equal to `x`.
pub fn index<T: PartialOrd>(seq: &[T], x: &T) -> Option<usize> {
    let i = bisect_left(seq, x);
    (i < seq.len() && seq[i] == *x).then_some(i)
}

/// Leftmost element equal to `x`.
pub fn find_eq<'a, T: PartialOrd>(seq: &'a [T], x: &T) -> Option<&'a T> {
    index(seq, x).map(|i| &seq[i])
}

/// Rightmost element strictly less than `x`.
pub fn find_lt<'a, T: PartialOrd>(seq: &'a [T], x: &T) -> Option<&'a T> {
    before(seq, bisect_left(seq, x))
}

/// Rightmost element less than or equal to `x`.
pub fn find_le<'a, T: PartialOrd>(seq: &'a [T], x: &T) -> Option<&'a T> {
    before(seq, bisect_right(seq, x))
}

/// Leftmost element strictly greater than `x`.
pub fn find_gt<'a, T: PartialOrd>(seq: &'a [T], x: &T) -> Option<&'a T> {
    seq.get(bisect_right(seq, x))
}

/// Leftmost element greater than or equal to `x`.
pub fn find_ge<'a, T: PartialOrd>(seq: &'a [T], x: &T) -> Option<&'a T> {
    seq.get(bisect_left(seq, x))
}

/// Position of the leftmost record whose key equals `x`.
pub fn index_by_key<T, K, F>(seq: &[T], x: &K, key: F) -> Option<usize>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let i = bisect_left_by_key(seq, x, &key);
    (i < seq.len() && key(&seq[i]) == *x).then_some(i)
}

/// Leftmost record whose key equals `x`.
pub fn find_eq_by_key<'a, T, K, F>(seq: &'a [T], x: &K, key: F) -> Option<&'a T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    index_by_key(seq, x, key).map(|i| &seq[i])
}

/// Rightmost record whose key is strictly less than `x`.
pub fn find_lt_by_key<'a, T, K, F>(seq: &'a [T], x: &K, key: F) -> Option<&'a T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    before(seq, bisect_left_by_key(seq, x, key))
}

/// Rightmost record whose key is less than or equal to `x`.
pub fn find_le_by_key<'a, T, K, F>(seq: &'a [T], x: &K, key: F) -> Option<&'a T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    before(seq, bisect_right_by_key(seq, x, key))
}

/// Leftmost record whose key is strictly greater than `x`.
pub fn find_gt_by_key<'a, T, K, F>(seq: &'a [T], x: &K, key: F) -> Option<&'a T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    seq.get(bisect_right_by_key(seq, x, key))
}

/// Leftmost record whose key is greater than or equal to `x`.
pub fn find_ge_by_key<'a, T, K, F>(seq: &'a [T], x: &K, key: F) -> Option<&'a T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    seq.get(bisect_left_by_key(seq, x, key))
}

/// Contiguous run of records whose key equals `x`.
///
/// Empty when no record has that key.
pub fn sublist_by_key<'a, T, K, F>(seq: &'a [T], x: &K, key: F) -> &'a [T]
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let start = bisect_left_by_key(seq, x, &key);
    let end = bisect_right_by_key(seq, x, &key);
    &seq[start..end.max(start)]
}

/// Run of records matching a primary and, optionally, a secondary sort factor.
///
/// `seq` must be sorted by the primary key, and within each primary run by
/// the secondary key. The primary run is located first; when
/// `secondary_value` is given, the matching sub-run inside it is returned.
///
/// # Example
///
/// ```rust
/// use pme_core::search::sublist_by_factors;
///
/// let rows = [(1, 'a'), (2, 'a'), (2, 'b'), (2, 'b'), (3, 'a')];
///
/// let twos = sublist_by_factors(&rows, &2, |r| r.0, None, |r| r.1);
/// assert_eq!(twos.len(), 3);
///
/// let two_b = sublist_by_factors(&rows, &2, |r| r.0, Some(&'b'), |r| r.1);
/// assert_eq!(two_b, &[(2, 'b'), (2, 'b')]);
///
/// assert!(sublist_by_factors(&rows, &4, |r| r.0, None, |r| r.1).is_empty());
/// ```
pub fn sublist_by_factors<'a, T, P, PF, S, SF>(
    seq: &'a [T],
    primary_value: &P,
    primary_key: PF,
    secondary_value: Option<&S>,
    secondary_key: SF,
) -> &'a [T]
where
    P: PartialOrd,
    PF: Fn(&T) -> P,
    S: PartialOrd,
    SF: Fn(&T) -> S,
{
    let run = sublist_by_key(seq, primary_value, primary_key);
    match secondary_value {
        Some(value) => sublist_by_key(run, value, secondary_key),
        None => run,
    }
}
