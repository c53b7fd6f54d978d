use crate::error::{Result, Violation};
use crate::position::Position;

// =============================================================================
// copy_backward
// =============================================================================

/// Copies `src` into `dst` so that the last copied element lands just before
/// index `d_last`.
///
/// Returns the position in `dst` of the first copied element. Elements of
/// `dst` outside `d_last - src.len()..d_last` are left alone.
pub fn copy_backward<T: Clone>(src: &[T], dst: &mut [T], d_last: usize) -> Result<Position> {
    if d_last > dst.len() {
        return Err(Violation::RangeOutOfBounds {
            start: d_last.saturating_sub(src.len()),
            end: d_last,
            len: dst.len(),
        }
        .into());
    }
    if src.len() > d_last {
        return Err(Violation::DestinationTooSmall {
            required: src.len(),
            available: d_last,
        }
        .into());
    }

    let start = d_last - src.len();
    for (slot, value) in dst[start..d_last].iter_mut().rev().zip(src.iter().rev()) {
        *slot = value.clone();
    }
    Ok(Position::from_index(start, dst.len()))
}

/// `copy_backward` into the tail of `dst`.
pub fn copy_to_end<T: Clone>(src: &[T], dst: &mut [T]) -> Result<Position> {
    let end = dst.len();
    copy_backward(src, dst, end)
}

// =============================================================================
// generate_n
// =============================================================================

/// Overwrites the first `count` elements with successive calls to `gen`.
///
/// Returns the position just past the last generated element.
pub fn generate_n<T, G>(seq: &mut [T], count: usize, mut gen: G) -> Result<Position>
where
    G: FnMut() -> T,
{
    if count > seq.len() {
        return Err(Violation::CountExceedsLength {
            count,
            len: seq.len(),
        }
        .into());
    }

    for slot in &mut seq[..count] {
        *slot = gen();
    }
    Ok(Position::from_index(count, seq.len()))
}
