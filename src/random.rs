//! Seeded random sources.
//!
//! Every ant owns its own generator. Generators are derived from a single
//! run seed so that a seeded run is reproducible no matter how rayon
//! schedules the ants.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Derives the seed of an independent stream from a base seed.
///
/// SplitMix64 finalizer over `base + (stream + 1) * golden-gamma`, so nearby
/// stream indices map to uncorrelated seeds.
pub fn derive_seed(base: u64, stream: u64) -> u64 {
    let mut z = base.wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
