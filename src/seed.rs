//! Deterministic per-trial seed derivation.
//!
//! Each seeded trial gets its own RNG, seeded from `(base seed, trial index)`,
//! so results do not depend on the order in which trials execute. Not
//! cryptographic.

/// Seed for trial `index` of a run started with `seed`.
#[must_use]
pub fn trial_seed(seed: u64, index: u64) -> u64 {
    splitmix64(seed ^ splitmix64(index ^ 0x5345_4352)) // "SECR"
}

/// Seed for the run at search window `window` within a sweep started with `seed`.
#[must_use]
pub fn window_seed(seed: u64, window: usize) -> u64 {
    splitmix64(seed ^ splitmix64(window as u64 ^ 0x5357_4550)) // "SWEP"
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
