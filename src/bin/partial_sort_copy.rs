//! partial_sort_copy: the smallest elements of a sub-range, sorted into a buffer.
//!
//! Run with: cargo run --bin partial_sort_copy

use itertools::Itertools;
use sequence_demos::algo::partial_sort_copy;

fn main() -> anyhow::Result<()> {
    let source = [5, 7, 4, 2, 8, 6, 1, 9];
    let mut destination = [0; 3];

    // only source[1..7] takes part
    partial_sort_copy(&source, 1..7, &mut destination)?;
    println!("{}", destination.iter().join(" "));
    Ok(())
}
