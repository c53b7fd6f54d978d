//! is_heap_until: first element that breaks the max-heap property.
//!
//! Run with: cargo run --bin is_heap_until

use sequence_demos::algo::is_heap_until;

fn main() {
    let seq = [5, 4, 2, 3, 1, 200];

    let until = is_heap_until(&seq);
    println!("{}", until);
}
