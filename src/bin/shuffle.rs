//! shuffle: random permutation driven by an explicit generator.
//!
//! Run with: cargo run --bin shuffle

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sequence_demos::algo::shuffle;

fn main() {
    let mut seq = [1, 2, 3, 4, 5, 6, 7, 8];

    // swap in StdRng::seed_from_u64(..) for a repeatable order
    let mut rng = StdRng::from_entropy();
    shuffle(&mut seq, &mut rng);

    println!("{}", seq.iter().join(" "));
}
