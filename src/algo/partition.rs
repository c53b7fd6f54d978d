use crate::error::{Result, Violation};
use crate::position::Position;

/// Index of the first element that satisfies `pred` after an element that
/// does not, i.e. the element that breaks the partition.
fn first_out_of_place<T, P>(seq: &[T], pred: &mut P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    let boundary = seq.iter().position(|x| !pred(x))?;
    seq[boundary..]
        .iter()
        .position(|x| pred(x))
        .map(|offset| boundary + offset)
}

/// True when every element satisfying `pred` comes before every element that
/// does not.
pub fn is_partitioned<T, P>(seq: &[T], mut pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    first_out_of_place(seq, &mut pred).is_none()
}

/// Position of the first element for which `pred` is false.
///
/// The sequence must already be partitioned by `pred`; a sequence that is not
/// is reported as a precondition violation naming the offending element.
/// Returns `End` when every element satisfies `pred`.
pub fn partition_point<T, P>(seq: &[T], mut pred: P) -> Result<Position>
where
    P: FnMut(&T) -> bool,
{
    if let Some(index) = first_out_of_place(seq, &mut pred) {
        return Err(Violation::NotPartitioned { index }.into());
    }

    // validated above, so the binary search is well defined
    let point = seq.partition_point(|x| pred(x));
    Ok(Position::from_index(point, seq.len()))
}
