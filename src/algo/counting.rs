use crate::position::Position;

// =============================================================================
// count_if
// =============================================================================

/// Counts the elements for which `pred` returns true.
pub fn count_if<T, P>(seq: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    seq.iter().filter(|x| pred(*x)).count()
}

// =============================================================================
// minmax_element
// =============================================================================

/// Positions of the smallest and the largest element, found in one pass.
///
/// Ties go to the first smallest and the last largest element. An empty
/// sequence yields `(End, End)`.
pub fn minmax_element<T: Ord>(seq: &[T]) -> (Position, Position) {
    let Some(first) = seq.first() else {
        return (Position::End, Position::End);
    };

    let mut min = (0, first);
    let mut max = (0, first);
    for (i, x) in seq.iter().enumerate().skip(1) {
        if x < min.1 {
            min = (i, x);
        }
        if x >= max.1 {
            max = (i, x);
        }
    }
    (Position::At(min.0), Position::At(max.0))
}

/// Values of the smallest and the largest element, `None` when empty.
pub fn minmax<T: Ord + Clone>(seq: &[T]) -> Option<(T, T)> {
    let (min, max) = minmax_element(seq);
    Some((min.get(seq)?.clone(), max.get(seq)?.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_count_if_greater_than_threshold() {
        let seq = [5, 3, 7, 2, 1];
        assert_eq!(count_if(&seq, |&x| x > 2), 3);
        assert_eq!(count_if(&seq, |&x| x > 100), 0);
        assert_eq!(count_if(&[] as &[i32], |&x| x > 0), 0);
    }

    #[test]
    fn test_minmax_values() {
        assert_eq!(minmax(&[5, 3, 7, 2, 1]), Some((1, 7)));
        assert_eq!(minmax(&[4]), Some((4, 4)));
        assert_eq!(minmax::<i32>(&[]), None);
    }

    #[test]
    fn test_minmax_ties() {
        // first minimum, last maximum
        let seq = [2, 9, 1, 9, 1];
        assert_eq!(minmax_element(&seq), (Position::At(2), Position::At(3)));
    }

    #[test]
    fn test_minmax_empty() {
        assert_eq!(
            minmax_element::<i32>(&[]),
            (Position::End, Position::End)
        );
    }

    #[test]
    fn test_minmax_idempotent() {
        let seq = [5, 3, 7, 2, 1];
        assert_eq!(minmax_element(&seq), minmax_element(&seq));
        assert_eq!(seq, [5, 3, 7, 2, 1]);
    }

    proptest! {
        #[test]
        fn test_count_if_matches_filter(seq in prop::collection::vec(-50i32..50, 0..16), t in -50i32..50) {
            let expected = seq.iter().filter(|&&x| x > t).count();
            prop_assert_eq!(count_if(&seq, |&x| x > t), expected);
        }

        #[test]
        fn test_minmax_matches_iterator(seq in prop::collection::vec(any::<i32>(), 1..16)) {
            let (min, max) = minmax(&seq).unwrap();
            prop_assert_eq!(min, *seq.iter().min().unwrap());
            prop_assert_eq!(max, *seq.iter().max().unwrap());
        }
    }
}
