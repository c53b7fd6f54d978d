//! partition_point: where a partitioned sequence switches from true to false.
//!
//! Run with: cargo run --bin partition_point

use sequence_demos::algo::partition_point;

fn main() -> anyhow::Result<()> {
    // evens first, then odds
    let seq = [2, 4, 6, 8, 1, 3, 5, 7];

    let point = partition_point(&seq, |&x| x % 2 == 0)?;
    println!("{}", point);
    Ok(())
}
