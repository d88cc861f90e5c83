//! Benchmark inputs for the wordpack packed arrays.
//!
//! - [`scatter_profile`]: seeded pseudo-random vectors in a unit square
//! - [`int_grid_profile`]: row-major integer grid coordinates
//! - [`access_pattern`]: seeded random index sequence for gather benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordpack_array::{IntVector2Array, Vector2Array};
use wordpack_core::{IntVector2, Vector2};

/// Element counts used by every array benchmark.
pub const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// `n` vectors with both components drawn uniformly from `[0, 1)`.
pub fn scatter_profile(n: usize, seed: u64) -> Vector2Array {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Vector2Array::from_fn(n, |_| Vector2::new(rng.random(), rng.random()))
}

/// Coordinates of a `width` x `height` grid in row-major order.
pub fn int_grid_profile(width: u32, height: u32) -> IntVector2Array {
    let n = width as usize * height as usize;
    IntVector2Array::from_fn(n, |i| {
        IntVector2::new((i % width as usize) as i32, (i / width as usize) as i32)
    })
}

/// `count` indices drawn uniformly from `0..len`.
pub fn access_pattern(len: usize, count: usize, seed: u64) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0..len)).collect()
}
