//! mismatch: the first pair of elements that differ.
//!
//! Run with: cargo run --bin mismatch

use sequence_demos::algo::mismatch;

fn main() {
    let first = [5, 3, 7, 9];
    let second = [5, 3, 2, 9];

    let (a, b) = mismatch(&first, &second);
    match (a.get(&first), b.get(&second)) {
        (Some(x), Some(y)) => println!("{} {}", x, y),
        _ => println!("end end"),
    }
}
