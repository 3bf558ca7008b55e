#![forbid(unsafe_code)]

//! Deterministic per-item pseudo-randomness.
//!
//! Carousel items get a small "scattered on a table" rotation. The value must
//! be identical on every render and every reload, so it is derived from the
//! item identity with a fixed integer mixer instead of a runtime RNG.
//!
//! # Invariants
//!
//! 1. [`unit`] returns a value in `[0.0, 1.0)`.
//! 2. Same input → bit-identical output, on every platform (integer-only mixing).

use crate::item::ItemId;

/// SplitMix64 finalizer. Bijective on `u64`, good avalanche.
#[inline]
const fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Hash an integer seed into `[0.0, 1.0)`.
#[must_use]
pub fn unit(seed: u64) -> f64 {
    // Top 53 bits fill an f64 mantissa exactly.
    (mix64(seed) >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Hash an integer seed into `[-1.0, 1.0)`.
#[must_use]
pub fn signed_unit(seed: u64) -> f64 {
    unit(seed) * 2.0 - 1.0
}

/// Seeded unit value for an item identity.
#[must_use]
pub fn item_unit(id: ItemId) -> f64 {
    unit(u64::from(id.get()))
}
