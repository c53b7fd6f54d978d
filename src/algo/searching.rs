use super::sorting::ensure_sorted;
use crate::error::Result;
use crate::position::Position;
use std::ops::Range;

// =============================================================================
// mismatch
// =============================================================================

/// Positions of the first pair of elements that differ.
///
/// Comparison stops at the shorter input. When no pair differs both positions
/// point at that length, which is `End` for an input that was fully consumed.
pub fn mismatch<T: PartialEq>(first: &[T], second: &[T]) -> (Position, Position) {
    let i = first
        .iter()
        .zip(second)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| first.len().min(second.len()));
    (
        Position::from_index(i, first.len()),
        Position::from_index(i, second.len()),
    )
}

// =============================================================================
// equal_range
// =============================================================================

/// The run of elements equal to `target` in a sorted sequence.
///
/// An absent target gives an empty range at the index where it would be
/// inserted.
pub fn equal_range<T: Ord>(seq: &[T], target: &T) -> Result<Range<usize>> {
    ensure_sorted("sequence", seq)?;
    let lower = seq.partition_point(|x| x < target);
    let upper = lower + seq[lower..].partition_point(|x| x <= target);
    Ok(lower..upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;
    use proptest::prelude::*;

    #[test]
    fn test_mismatch_values() {
        let a = [5, 3, 7, 9];
        let b = [5, 3, 2, 9];
        let (pa, pb) = mismatch(&a, &b);
        assert_eq!((pa, pb), (Position::At(2), Position::At(2)));
        assert_eq!(pa.get(&a), Some(&7));
        assert_eq!(pb.get(&b), Some(&2));
    }

    #[test]
    fn test_mismatch_identical() {
        let a = [1, 2, 3];
        assert_eq!(mismatch(&a, &a), (Position::End, Position::End));
    }

    #[test]
    fn test_mismatch_stops_at_shorter() {
        let a = [1, 2];
        let b = [1, 2, 3, 4];
        assert_eq!(mismatch(&a, &b), (Position::End, Position::At(2)));
        assert_eq!(mismatch(&b, &a), (Position::At(2), Position::End));
    }

    #[test]
    fn test_mismatch_idempotent() {
        let a = [5, 3, 7, 9];
        let b = [5, 3, 2, 9];
        assert_eq!(mismatch(&a, &b), mismatch(&a, &b));
        assert_eq!(a, [5, 3, 7, 9]);
        assert_eq!(b, [5, 3, 2, 9]);
    }

    #[test]
    fn test_equal_range_present() {
        let seq = [3, 3, 4, 4, 4, 5, 7];
        assert_eq!(equal_range(&seq, &4).unwrap(), 2..5);
        assert_eq!(equal_range(&seq, &3).unwrap(), 0..2);
        assert_eq!(equal_range(&seq, &7).unwrap(), 6..7);
    }

    #[test]
    fn test_equal_range_absent_gives_insertion_point() {
        let seq = [3, 3, 4, 4, 4, 5, 7];
        assert_eq!(equal_range(&seq, &6).unwrap(), 6..6);
        assert_eq!(equal_range(&seq, &1).unwrap(), 0..0);
        assert_eq!(equal_range(&seq, &9).unwrap(), 7..7);
    }

    #[test]
    fn test_equal_range_rejects_unsorted() {
        let err = equal_range(&[3, 5, 4], &4).unwrap_err();
        assert_eq!(
            err.violation(),
            &Violation::NotSorted {
                input: "sequence",
                index: 2
            }
        );
    }

    #[test]
    fn test_equal_range_idempotent() {
        let seq = [3, 3, 4, 4, 4, 5, 7];
        assert_eq!(equal_range(&seq, &4), equal_range(&seq, &4));
    }

    proptest! {
        #[test]
        fn test_equal_range_matches_linear_scan(mut seq in prop::collection::vec(0i32..10, 0..16), target in 0i32..10) {
            seq.sort();
            let range = equal_range(&seq, &target).unwrap();
            prop_assert_eq!(range.start, seq.iter().filter(|&&x| x < target).count());
            prop_assert_eq!(range.len(), seq.iter().filter(|&&x| x == target).count());
        }
    }
}
