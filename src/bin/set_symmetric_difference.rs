//! set_symmetric_difference: elements found in exactly one of two sorted inputs.
//!
//! Run with: cargo run --bin set_symmetric_difference

use itertools::Itertools;
use sequence_demos::algo::set_symmetric_difference;

fn main() -> anyhow::Result<()> {
    let first = [1, 2, 3];
    let second = [1, 1, 2, 4];
    let mut destination = [0; 8];

    let end = set_symmetric_difference(&first, &second, &mut destination)?;
    let written = end.resolve(destination.len());

    println!("{}", destination[..written].iter().join(" "));
    Ok(())
}
