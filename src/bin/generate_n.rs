//! generate_n: overwrite the first N elements with generated values.
//!
//! Run with: cargo run --bin generate_n

use itertools::Itertools;
use sequence_demos::algo::generate_n;

fn main() -> anyhow::Result<()> {
    let mut seq = [0; 8];

    let mut next = 0;
    let counter = || {
        next += 1;
        next
    };

    generate_n(&mut seq, 5, counter)?;
    println!("{}", seq.iter().join(" "));
    Ok(())
}
