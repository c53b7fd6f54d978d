use crate::error::{Result, Violation};
use crate::position::Position;
use std::ops::Range;

pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

/// Fails with `NotSorted` naming the first element smaller than its
/// predecessor.
pub(crate) fn ensure_sorted<T: Ord>(input: &'static str, seq: &[T]) -> Result<()> {
    match seq.windows(2).position(|w| w[0] > w[1]) {
        Some(i) => Err(Violation::NotSorted {
            input,
            index: i + 1,
        }
        .into()),
        None => Ok(()),
    }
}

/// Copies the smallest elements of `src[range]` into the front of `dst` in
/// ascending order.
///
/// As many elements are copied as fit: `min(range.len(), dst.len())`. Only
/// elements inside `range` take part. Returns the position past the last
/// element written; the rest of `dst` is left alone.
pub fn partial_sort_copy<T: Ord + Clone>(
    src: &[T],
    range: Range<usize>,
    dst: &mut [T],
) -> Result<Position> {
    if range.start > range.end || range.end > src.len() {
        return Err(Violation::RangeOutOfBounds {
            start: range.start,
            end: range.end,
            len: src.len(),
        }
        .into());
    }

    let mut smallest = src[range].to_vec();
    let n = smallest.len().min(dst.len());
    if n < smallest.len() {
        smallest.select_nth_unstable(n);
        smallest.truncate(n);
    }
    smallest.sort();

    dst[..n].clone_from_slice(&smallest);
    Ok(Position::from_index(n, dst.len()))
}
