//! count_if: how many elements satisfy a predicate.
//!
//! Run with: cargo run --bin count_if

use sequence_demos::algo::count_if;

fn main() {
    let seq = [5, 3, 7, 2, 1];

    // any closure taking one element works as the predicate
    let greater_than_two = |&x: &i32| x > 2;

    let count = count_if(&seq, greater_than_two);
    println!("{}", count);
}
