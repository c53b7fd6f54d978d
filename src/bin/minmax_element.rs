//! minmax_element: smallest and largest element in a single pass.
//!
//! Run with: cargo run --bin minmax_element

use sequence_demos::algo::minmax_element;

fn main() {
    let seq = [5, 3, 7, 2, 1];

    let (min, max) = minmax_element(&seq);
    if let (Some(min), Some(max)) = (min.get(&seq), max.get(&seq)) {
        println!("{} {}", min, max);
    }
}
