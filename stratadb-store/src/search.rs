//! Generic binary search over monotonic positional data.

use std::cmp::Ordering;
use std::ops::Range;

/// Binary-search `range` for the position a probe reports as matching.
///
/// The probe receives a candidate position and reports where the target
/// sorts relative to the data there: [`Ordering::Less`] means the target
/// lies below the candidate (the lower half is searched next),
/// [`Ordering::Greater`] above it, and [`Ordering::Equal`] means found.
///
/// The data source must be monotonic over `range`: once the probe reports
/// `Less` at some position it must report `Less` at every later one. Any
/// positional source with that property works — a sorted slice, a key
/// index, a computed sequence — nothing here depends on how positions are
/// backed.
///
/// Returns the matching position, or `None` when the probe never reports
/// `Equal`. `None` cannot be confused with any valid position; no
/// insertion point is reported because no caller in this store needs one.
pub fn binary_search<F>(range: Range<usize>, mut probe: F) -> Option<usize>
where
    F: FnMut(usize) -> Ordering,
{
    let Range { start: mut lo, end: mut hi } = range;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match probe(mid) {
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}
