//! copy_backward: copy a sequence so it ends at a given slot of another.
//!
//! Run with: cargo run --bin copy_backward

use itertools::Itertools;
use sequence_demos::algo::copy_backward;

fn main() -> anyhow::Result<()> {
    let source = [1, 2, 3, 4];
    let mut destination = [0; 4];

    let end = destination.len();
    let first = copy_backward(&source, &mut destination, end)?;
    // first points at the 1 in the destination

    println!("{}", source.iter().join(" "));
    println!("{}", destination.iter().join(" "));
    match first.get(&destination) {
        Some(value) => println!("{}", value),
        None => println!("{}", first),
    }
    println!();
    Ok(())
}
