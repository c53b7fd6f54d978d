//! equal_range: bounds of the run equal to a value in a sorted sequence.
//!
//! Run with: cargo run --bin equal_range

use sequence_demos::algo::equal_range;

fn main() -> anyhow::Result<()> {
    let seq = [3, 3, 4, 4, 4, 5, 7];

    let range = equal_range(&seq, &4)?;
    println!("{} {}", range.start, range.end);
    Ok(())
}
