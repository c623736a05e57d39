//! Random input vectors for the measurement drivers.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::iter::repeat_with;

/// Returns `length` integers drawn uniformly from the whole `i32` range.
///
/// Every call produces an independent vector; reductions over it must
/// use wrapping arithmetic since the values span the full range.
pub fn random_vector(length: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    repeat_with(|| rng.gen()).take(length).collect()
}

/// Deterministic variant of [`random_vector`] for tests and benches.
pub fn seeded_vector(length: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    repeat_with(|| rng.gen()).take(length).collect()
}
