use alloc::vec::Vec;

use bounds::{Ordered, Slice};

use crate::error::SliceOpsError;

/// Reports whether two sequences are equal: the same length and all
/// elements equal. If the lengths are different, `equal` returns false.
/// Otherwise, the elements are compared in index order, and the comparison
/// stops at the first unequal pair.
///
/// Equality is the element type's native equality. Floating point NaNs are
/// not considered equal, so a sequence containing NaN is not equal to
/// itself.
///
/// ```
/// assert!(sliceops::equal(&vec![1, 2, 3], &[1, 2, 3]));
/// assert!(!sliceops::equal(&[1, 2], &[1, 2, 3]));
/// ```
pub fn equal<T, S1, S2>(s1: &S1, s2: &S2) -> bool
where
    T: PartialEq,
    S1: Slice<T> + ?Sized,
    S2: Slice<T> + ?Sized,
{
    let (a, b) = (s1.as_slice(), s2.as_slice());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Reports whether two sequences are equal using a predicate on each pair
/// of elements. If the lengths are different, `equal_by` returns false.
/// Otherwise, the elements are compared in index order, and the comparison
/// stops at the first pair for which `eq` returns false.
pub fn equal_by<T1, T2, S1, S2, F>(s1: &S1, s2: &S2, mut eq: F) -> bool
where
    S1: Slice<T1> + ?Sized,
    S2: Slice<T2> + ?Sized,
    F: FnMut(&T1, &T2) -> bool,
{
    let (a, b) = (s1.as_slice(), s2.as_slice());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| eq(x, y))
}

/// Compares the elements of `s1` and `s2` lexicographically.
///
/// The elements are compared sequentially starting at index 0, until one
/// element is not equal to the other. The result of comparing the first
/// non-matching elements is the result of the comparison. If both
/// sequences are equal until one of them ends, the shorter sequence is
/// considered less than the longer one.
///
/// The result is 0 if `s1 == s2`, -1 if `s1 < s2`, and +1 if `s1 > s2`.
/// Returns `i32` rather than `Ordering` so the result shape matches
/// [`compare_by`], which forwards caller-produced integers verbatim.
///
/// ```
/// assert_eq!(sliceops::compare(&[1, 2], &[1, 2, 3]), -1);
/// assert_eq!(sliceops::compare(&[1, 3], &[1, 2, 3]), 1);
/// assert_eq!(sliceops::compare(&[1, 2], &[1, 2]), 0);
/// ```
pub fn compare<T, S1, S2>(s1: &S1, s2: &S2) -> i32
where
    T: Ordered,
    S1: Slice<T> + ?Sized,
    S2: Slice<T> + ?Sized,
{
    let (a, b) = (s1.as_slice(), s2.as_slice());
    let common = a.len().min(b.len());

    for i in 0..common {
        if a[i] == b[i] {
            continue;
        }
        // NaN pairs are neither equal nor less-than and fall through to +1,
        // the same result the unordered comparison gives in the source
        // semantics.
        return if a[i] < b[i] { -1 } else { 1 };
    }

    length_tiebreak(a.len(), b.len())
}

/// Like [`compare`], but uses a comparison function on each pair of
/// elements. The comparisons stop after the first time `cmp` returns
/// nonzero, and that result is returned verbatim (it is not clamped to
/// -1/0/+1). If `cmp` always returns 0 the result falls back to the
/// length tiebreak: 0 for equal lengths, -1 if `s1` is shorter, +1 if
/// longer.
pub fn compare_by<T, S1, S2, F>(s1: &S1, s2: &S2, mut cmp: F) -> i32
where
    S1: Slice<T> + ?Sized,
    S2: Slice<T> + ?Sized,
    F: FnMut(&T, &T) -> i32,
{
    let (a, b) = (s1.as_slice(), s2.as_slice());
    let common = a.len().min(b.len());

    for i in 0..common {
        let v = cmp(&a[i], &b[i]);
        if v != 0 {
            return v;
        }
    }

    length_tiebreak(a.len(), b.len())
}

fn length_tiebreak(len1: usize, len2: usize) -> i32 {
    match len1.cmp(&len2) {
        core::cmp::Ordering::Less => -1,
        core::cmp::Ordering::Equal => 0,
        core::cmp::Ordering::Greater => 1,
    }
}

/// Returns the index of the first occurrence of `v` in `s`, or `None` if
/// `v` is not present.
///
/// ```
/// assert_eq!(sliceops::index(&[10, 20, 30], &20), Some(1));
/// assert_eq!(sliceops::index(&[10, 20, 30], &99), None);
/// ```
pub fn index<T, S>(s: &S, v: &T) -> Option<usize>
where
    T: PartialEq,
    S: Slice<T> + ?Sized,
{
    s.as_slice().iter().position(|x| x == v)
}

/// Returns the index of the first element satisfying `pred`, or `None` if
/// none does.
pub fn index_by<T, S, F>(s: &S, pred: F) -> Option<usize>
where
    S: Slice<T> + ?Sized,
    F: FnMut(&T) -> bool,
{
    s.as_slice().iter().position(pred)
}

/// Reports whether `v` is present in `s`, under the same equality rules as
/// [`index`].
pub fn contains<T, S>(s: &S, v: &T) -> bool
where
    T: PartialEq,
    S: Slice<T> + ?Sized,
{
    s.as_slice().iter().any(|x| x == v)
}

/// Inserts `values` into `s` at index `i`, returning the modified
/// sequence. In the returned sequence `r`, `r[i]` is the first value;
/// elements before `i` and from `i` onward are preserved (the latter
/// shifted right).
///
/// Spare capacity is reused when it covers the growth; otherwise the
/// storage is reallocated once, sized to the new length.
///
/// # Panics
///
/// Panics if `i > s.len()`.
///
/// ```
/// let s = sliceops::insert(vec![1, 2, 3], 1, &[8, 9]);
/// assert_eq!(s, [1, 8, 9, 2, 3]);
/// ```
pub fn insert<T: Clone>(s: Vec<T>, i: usize, values: &[T]) -> Vec<T> {
    assert!(
        i <= s.len(),
        "insert index {i} out of range for length {}",
        s.len()
    );
    splice_at(s, i, values)
}

/// Fallible variant of [`insert`].
///
/// # Errors
///
/// Returns `SliceOpsError::IndexOutOfBounds` if `i > s.len()`. The
/// sequence is consumed either way.
pub fn try_insert<T: Clone>(s: Vec<T>, i: usize, values: &[T]) -> Result<Vec<T>, SliceOpsError> {
    if i > s.len() {
        return Err(SliceOpsError::IndexOutOfBounds {
            index: i,
            length: s.len(),
        });
    }
    Ok(splice_at(s, i, values))
}

fn splice_at<T: Clone>(mut s: Vec<T>, i: usize, values: &[T]) -> Vec<T> {
    s.splice(i..i, values.iter().cloned());
    s
}

/// Removes the elements `s[i..j]` from `s`, returning the modified
/// sequence. The tail is shifted left in place; no new storage is
/// allocated, and the cost is proportional to the number of elements
/// after `j`, not to the size of the removed range.
///
/// # Panics
///
/// Panics unless `i <= j <= s.len()`.
///
/// ```
/// let s = sliceops::delete(vec![1, 2, 3, 4, 5], 1, 3);
/// assert_eq!(s, [1, 4, 5]);
/// ```
pub fn delete<T>(s: Vec<T>, i: usize, j: usize) -> Vec<T> {
    assert!(
        i <= j && j <= s.len(),
        "delete range {i}..{j} out of range for length {}",
        s.len()
    );
    drain_range(s, i, j)
}

/// Fallible variant of [`delete`].
///
/// # Errors
///
/// Returns `SliceOpsError::InvalidRange` unless `i <= j <= s.len()`.
pub fn try_delete<T>(s: Vec<T>, i: usize, j: usize) -> Result<Vec<T>, SliceOpsError> {
    if i > j || j > s.len() {
        return Err(SliceOpsError::InvalidRange {
            start: i,
            end: j,
            length: s.len(),
        });
    }
    Ok(drain_range(s, i, j))
}

fn drain_range<T>(mut s: Vec<T>, i: usize, j: usize) -> Vec<T> {
    s.drain(i..j);
    s
}

/// Returns a copy of the sequence in fresh storage, preserving the
/// source's capacity. The elements are copied with `clone`, so for
/// reference-bearing element types the referents are shared, not
/// deep-copied.
#[allow(clippy::ptr_arg)] // &[T] has no capacity to preserve
pub fn clone_of<T: Clone>(s: &Vec<T>) -> Vec<T> {
    let mut s2 = Vec::with_capacity(s.capacity());
    s2.extend_from_slice(s);
    s2
}

/// Replaces consecutive runs of equal elements with a single copy, like
/// the Unix `uniq` command. Only adjacent duplicates collapse; equal
/// elements separated by a different element both survive. The contents
/// are rearranged in place and the sequence is truncated to the new
/// length; no new storage is allocated.
///
/// ```
/// let s = sliceops::compact(vec![1, 1, 2, 2, 2, 3, 1]);
/// assert_eq!(s, [1, 2, 3, 1]);
/// ```
pub fn compact<T: PartialEq>(mut s: Vec<T>) -> Vec<T> {
    if s.len() <= 1 {
        return s;
    }
    let mut j = 1;
    for i in 1..s.len() {
        if s[i] == s[j - 1] {
            continue;
        }
        s.swap(j, i);
        j += 1;
    }
    s.truncate(j);
    s
}

/// Like [`compact`], but adjacency is decided by `eq(current, last_kept)`.
pub fn compact_by<T, F>(mut s: Vec<T>, mut eq: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if s.len() <= 1 {
        return s;
    }
    let mut j = 1;
    for i in 1..s.len() {
        if eq(&s[i], &s[j - 1]) {
            continue;
        }
        s.swap(j, i);
        j += 1;
    }
    s.truncate(j);
    s
}

/// Grows the sequence's capacity, if necessary, to guarantee space for
/// another `n` elements. After `grow(s, n)`, at least `n` elements can be
/// appended without another reallocation. Length and contents are
/// unchanged.
///
/// # Panics
///
/// Panics if the new capacity overflows or the allocation fails.
pub fn grow<T>(mut s: Vec<T>, n: usize) -> Vec<T> {
    s.reserve(n);
    s
}

/// Fallible variant of [`grow`].
///
/// # Errors
///
/// Returns `SliceOpsError::CapacityOverflow` if the new capacity
/// overflows or the allocation fails; the sequence is consumed either
/// way.
pub fn try_grow<T>(mut s: Vec<T>, n: usize) -> Result<Vec<T>, SliceOpsError> {
    s.try_reserve(n)
        .map_err(|_| SliceOpsError::CapacityOverflow { additional: n })?;
    Ok(s)
}

/// Removes unused capacity from the sequence, so that capacity equals
/// length. Unlike the other capacity operations this may move the
/// elements to a smaller allocation; a later append beyond the current
/// length always reallocates.
pub fn clip<T>(mut s: Vec<T>) -> Vec<T> {
    s.shrink_to_fit();
    s
}
