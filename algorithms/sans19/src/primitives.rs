//! Mixing Primitives
//!
//! Two pure functions drive every state update: the 64-bit avalanche `mix`
//! and the 16-bit `blend16` used to perturb the tail.

use crate::constants::{AVALANCHE_ROTATION, AVALANCHE_SHIFT, LOW16_MASK};

// =============================================================================
// AVALANCHE
// =============================================================================

/// 64-bit avalanche step keyed by `key`.
///
/// A zero rotation amount is redirected to `(v % 64) + 1`. That only happens
/// when `key % 64 == 0`, and then the product `v * key` is itself a multiple
/// of 64, so the redirected rotation is always 1.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn mix(value: u64, key: u64) -> u64 {
    let mut v = value;
    v ^= v >> AVALANCHE_SHIFT;

    let shift = key % 30;
    if shift != 0 {
        v ^= v << shift;
    }

    v ^= v.rotate_left(AVALANCHE_ROTATION);
    v = v.wrapping_mul(key);

    let mut rotation = key % 64;
    if rotation == 0 {
        rotation = (v % 64) + 1;
    }
    // rotation <= 64, the cast cannot truncate
    v ^ v.rotate_right(rotation as u32)
}

// =============================================================================
// BLEND
// =============================================================================

/// Fold a 64-bit word down to 16 bits under `key`.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn blend16(sans: u64, key: u64) -> u16 {
    let mut s = sans;
    s ^= key >> 32;
    s ^= s >> 35;
    s = (s & LOW16_MASK).wrapping_mul(key | 1) & LOW16_MASK;
    s ^= s >> (key % 64);
    (s & LOW16_MASK) as u16
}
