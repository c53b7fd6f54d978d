use rand::seq::SliceRandom;
use rand::Rng;

/// Permutes `seq` uniformly at random using the given generator.
///
/// Pass a seeded `StdRng` for a reproducible order.
pub fn shuffle<T, R>(seq: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    seq.shuffle(rng);
}
