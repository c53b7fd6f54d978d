use super::sorting::ensure_sorted;
use crate::error::{Result, Violation};
use crate::position::Position;

/// Walks two sorted inputs and hands every element present in exactly one of
/// them to `emit`, in ascending order. Duplicates are matched one for one.
fn walk_symmetric<'a, T: Ord>(first: &'a [T], second: &'a [T], mut emit: impl FnMut(&'a T)) {
    let (mut i, mut j) = (0, 0);
    while i < first.len() && j < second.len() {
        if first[i] < second[j] {
            emit(&first[i]);
            i += 1;
        } else if second[j] < first[i] {
            emit(&second[j]);
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
    first[i..].iter().for_each(&mut emit);
    second[j..].iter().for_each(&mut emit);
}

/// Writes the symmetric difference of two sorted inputs into the front of
/// `dst`.
///
/// Both inputs must be sorted ascending and `dst` must hold every output
/// element; the check runs before anything is written. Slots after the
/// returned end position keep their previous values.
pub fn set_symmetric_difference<T: Ord + Clone>(
    first: &[T],
    second: &[T],
    dst: &mut [T],
) -> Result<Position> {
    ensure_sorted("first", first)?;
    ensure_sorted("second", second)?;

    let mut required = 0;
    walk_symmetric(first, second, |_| required += 1);
    if required > dst.len() {
        return Err(Violation::DestinationTooSmall {
            required,
            available: dst.len(),
        }
        .into());
    }

    let mut written = 0;
    walk_symmetric(first, second, |x| {
        dst[written] = x.clone();
        written += 1;
    });
    Ok(Position::from_index(written, dst.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_difference_with_duplicates() {
        let mut dst = [0; 8];
        let end = set_symmetric_difference(&[1, 2, 3], &[1, 1, 2, 4], &mut dst).unwrap();
        assert_eq!(end, Position::At(3));
        assert_eq!(&dst[..3], &[1, 3, 4]);
        assert_eq!(&dst[3..], &[0; 5]);
    }

    #[test]
    fn test_symmetric_difference_disjoint_and_equal() {
        let mut dst = [0; 4];
        let end = set_symmetric_difference(&[1, 3], &[2, 4], &mut dst).unwrap();
        assert_eq!(end, Position::End);
        assert_eq!(dst, [1, 2, 3, 4]);

        let mut dst = [9; 2];
        let end = set_symmetric_difference(&[1, 2], &[1, 2], &mut dst).unwrap();
        assert_eq!(end, Position::At(0));
        assert_eq!(dst, [9, 9]);
    }

    #[test]
    fn test_symmetric_difference_rejects_unsorted() {
        let mut dst = [0; 8];
        let err = set_symmetric_difference(&[1, 2, 3], &[4, 1], &mut dst).unwrap_err();
        assert_eq!(
            err.violation(),
            &Violation::NotSorted {
                input: "second",
                index: 1
            }
        );
        assert_eq!(dst, [0; 8]);
    }

    #[test]
    fn test_symmetric_difference_destination_too_small() {
        let mut dst = [0; 2];
        let err = set_symmetric_difference(&[1, 2, 3], &[1, 1, 2, 4], &mut dst).unwrap_err();
        assert_eq!(
            err.violation(),
            &Violation::DestinationTooSmall {
                required: 3,
                available: 2
            }
        );
        assert_eq!(dst, [0, 0]);
    }
}
