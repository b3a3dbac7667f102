//! SANS19 Constants
//!
//! Every initial word is derived from two module-level seeds:
//!
//! ```text
//! words = [CONST * CONST, PRIME, !CONST, CONST * PRIME]   (mod 2^64)
//! ```
//!
//! Changing any value here changes every digest. The vector table in
//! `selftest.rs` and `tests/test_vectors.json` is bound to this exact set.

// =============================================================================
// SEEDS
// =============================================================================

/// Prime seed, also the key of the second accumulator and the blend primitive.
pub const PRIME: u64 = 9_953_261;

/// Base mixing constant.
pub const CONST: u64 = 0x772F_AD1E;

// =============================================================================
// OUTPUT SIZES
// =============================================================================

/// Short digest size in bytes (four words plus six tail bytes).
pub const HASH_SIZE: usize = 38;

/// Wide digest size in bytes (four words).
pub const WIDE_HASH_SIZE: usize = 32;

/// Number of tail bytes appended to the short digest.
pub const TAIL_BYTES: usize = HASH_SIZE - WIDE_HASH_SIZE;

// =============================================================================
// INITIAL STATE
// =============================================================================

/// Number of 64-bit accumulators.
pub const NUM_WORDS: usize = 4;

/// Starting value of the secondary accumulator.
pub const INITIAL_TAIL: u64 = 19;

/// Starting value of the rolling 16-bit mix key.
pub const INITIAL_MIX_KEY: u16 = 38;

/// Initial accumulator words.
pub const INITIAL_WORDS: [u64; NUM_WORDS] = [
    CONST.wrapping_mul(CONST),
    PRIME,
    !CONST,
    CONST.wrapping_mul(PRIME),
];

// =============================================================================
// MIXING PARAMETERS
// =============================================================================

/// Right-shift applied first by the avalanche primitive.
pub const AVALANCHE_SHIFT: u32 = 27;

/// Left rotation folded in by the avalanche primitive.
pub const AVALANCHE_ROTATION: u32 = 31;

/// Shift selector range (`0..=15`).
pub const SHIFT_MASK: u64 = 0x0F;

/// Low 16 bits of a word.
pub const LOW16_MASK: u64 = 0xFFFF;

/// Per-word key offset used by the short finalizer (`CONST + i * 31`).
pub const FINALIZE_KEY_STEP: u64 = 31;

/// Rounds run by the wide finalizer.
pub const WIDE_ROUNDS: usize = 19;

/// Rotation applied when a word is folded back into the tail (wide path).
pub const WIDE_TAIL_ROTATION: u32 = 19;

/// Shift applied to a word before it is folded into the tail (wide path).
pub const WIDE_TAIL_SHIFT: u32 = 7;

/// Rotation applied to the mix key after every absorbed byte.
pub const MIX_KEY_ROTATION: u32 = 5;

// =============================================================================
// COMPILE-TIME CHECKS
// =============================================================================

const _: () = assert!(HASH_SIZE == NUM_WORDS * 8 + TAIL_BYTES);
const _: () = assert!(WIDE_HASH_SIZE == NUM_WORDS * 8);
const _: () = assert!(TAIL_BYTES == 6);
