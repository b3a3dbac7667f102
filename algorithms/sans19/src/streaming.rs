//! Streaming Hasher
//!
//! The SANS19 engine: four 64-bit accumulators, a tail accumulator, a rolling
//! 16-bit mix key and a 4-bit shift selector.
//!
//! The per-byte index restarts at zero on every `update` call, so the digest
//! depends on how the input was split. `update(b"ab")` and
//! `update(b"a"); update(b"b")` produce different digests.

use crate::constants::{
    CONST, FINALIZE_KEY_STEP, HASH_SIZE, INITIAL_MIX_KEY, INITIAL_TAIL, INITIAL_WORDS, LOW16_MASK,
    MIX_KEY_ROTATION, NUM_WORDS, PRIME, SHIFT_MASK, TAIL_BYTES, WIDE_HASH_SIZE, WIDE_ROUNDS,
    WIDE_TAIL_ROTATION, WIDE_TAIL_SHIFT,
};
use crate::primitives::{blend16, mix};
use crate::types::CacheMode;

#[cfg(feature = "digest-trait")]
use digest::typenum::{U32, U38};
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, HashMarker, OutputSizeUser, Reset, Update};

#[cfg(not(feature = "std"))]
use alloc::string::String;

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Incremental SANS19 engine.
///
/// Not chunk-invariant: feed data with the same call boundaries every time
/// you expect the same digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sans19Hasher {
    /// Primary mixing state
    words: [u64; NUM_WORDS],
    /// Secondary running accumulator
    tail: u64,
    /// Total bytes absorbed (wrapping)
    length: u64,
    /// Rolling key, re-derived per call and perturbed per byte
    mix_key: u16,
    /// Shift amount in `0..=15`
    shift_sel: u8,
    short_cache: Option<[u8; HASH_SIZE]>,
    wide_cache: Option<[u8; WIDE_HASH_SIZE]>,
}

impl Sans19Hasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a fresh engine.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new() -> Self {
        Self {
            words: INITIAL_WORDS,
            tail: INITIAL_TAIL,
            length: 0,
            mix_key: INITIAL_MIX_KEY,
            shift_sel: (INITIAL_WORDS[2] & SHIFT_MASK) as u8,
            short_cache: None,
            wide_cache: None,
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Absorb `data`.
    ///
    /// An empty slice still advances the mix key.
    #[allow(clippy::cast_possible_truncation)]
    pub fn update(&mut self, data: &[u8]) {
        let n = data.len() as u64;
        self.length = self.length.wrapping_add(n);

        let sel = ((self.tail ^ u64::from(self.shift_sel)) % 4) as usize;
        self.mix_key = (u64::from(self.mix_key)
            .wrapping_add(self.words[sel])
            .wrapping_add(n)
            & LOW16_MASK) as u16;

        for (i, &byte) in data.iter().enumerate() {
            self.absorb_byte(byte, i as u64);
        }
    }

    /// Mix one byte at call-local position `i`.
    #[allow(clippy::cast_possible_truncation)]
    fn absorb_byte(&mut self, byte: u8, i: u64) {
        let b = u64::from(byte);
        let key = u64::from(self.mix_key);
        let w = &mut self.words;

        let kmix = key ^ (w[3 - (i % 4) as usize] >> 16);

        w[0] = mix(w[0] ^ b ^ kmix, CONST);
        w[1] = mix(w[1].wrapping_add(b).wrapping_add(key), PRIME);
        w[2] = mix(w[2] ^ (b << (i % 8)), CONST.wrapping_add(i) ^ kmix);
        w[3] = mix(w[3] ^ b.wrapping_add(i), (CONST ^ PRIME).wrapping_add(key));

        let blend = blend16(w[((b ^ key) % 4) as usize], PRIME);
        self.shift_sel = ((u64::from(self.shift_sel) ^ b.wrapping_add(key)) & SHIFT_MASK) as u8;
        self.tail ^= b | u64::from(blend >> self.shift_sel);

        self.mix_key = (self.mix_key.rotate_left(MIX_KEY_ROTATION) ^ (kmix as u16))
            .wrapping_add(u16::from(byte));
    }

    // =========================================================================
    // FINALIZATION
    // =========================================================================

    /// Derive the 38-byte digest.
    ///
    /// The first call mutates the state and caches the result. Later calls
    /// return the cached bytes, even after more `update` calls, until
    /// [`reset_cache`](Self::reset_cache) clears it.
    pub fn finalize_short(&mut self) -> [u8; HASH_SIZE] {
        if let Some(digest) = self.short_cache {
            return digest;
        }

        for (i, word) in (0u64..).zip(self.words.iter_mut()) {
            *word ^= self.length;
            *word = mix(*word, CONST.wrapping_add(i * FINALIZE_KEY_STEP));
        }
        self.fold_length_into_tail();

        let mut out = [0u8; HASH_SIZE];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        let folded = self.tail ^ ((self.tail >> 48) << 16);
        out[WIDE_HASH_SIZE..].copy_from_slice(&folded.to_be_bytes()[..TAIL_BYTES]);

        self.short_cache = Some(out);
        out
    }

    /// Derive the 32-byte digest.
    ///
    /// Runs from whatever state is current, including any mutation left by a
    /// prior [`finalize_short`](Self::finalize_short). Cached like the short
    /// digest.
    #[allow(clippy::cast_possible_truncation)]
    pub fn finalize_wide(&mut self) -> [u8; WIDE_HASH_SIZE] {
        if let Some(digest) = self.wide_cache {
            return digest;
        }

        self.fold_length_into_tail();
        for _ in 0..WIDE_ROUNDS {
            for word in &mut self.words {
                *word ^= self.length;
                *word = mix(*word, self.tail);
                self.tail = (self.tail ^ (*word >> WIDE_TAIL_SHIFT)).rotate_left(WIDE_TAIL_ROTATION);
                self.mix_key = ((self.tail ^ *word) & LOW16_MASK) as u16;
            }
        }

        let mut out = [0u8; WIDE_HASH_SIZE];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        self.wide_cache = Some(out);
        out
    }

    fn fold_length_into_tail(&mut self) {
        self.tail ^= self.length & LOW16_MASK;
        self.tail = mix(self.tail, CONST ^ PRIME);
    }

    /// Short digest as 76 lowercase hex characters.
    pub fn hexdigest(&mut self) -> String {
        hex::encode(self.finalize_short())
    }

    /// Wide digest as 64 lowercase hex characters.
    pub fn hexdigest_wide(&mut self) -> String {
        hex::encode(self.finalize_wide())
    }

    // =========================================================================
    // RESET
    // =========================================================================

    /// Invalidate one or both finalize caches.
    ///
    /// The mixing state is left as is, so the next finalize call derives a
    /// digest from everything absorbed so far on top of the previous
    /// finalization's mutation.
    pub fn reset_cache(&mut self, mode: CacheMode) {
        if mode.clears_short() {
            self.short_cache = None;
        }
        if mode.clears_wide() {
            self.wide_cache = None;
        }
    }

    /// Return to the freshly constructed state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Total bytes absorbed so far.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.length
    }

    /// Whether no bytes have been absorbed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for Sans19Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for Sans19Hasher {
    type OutputSize = U38;
}

#[cfg(feature = "digest-trait")]
impl Update for Sans19Hasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for Sans19Hasher {
    fn finalize_into(mut self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.finalize_short());
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Sans19Hasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for Sans19Hasher {}

// =============================================================================
// WIDE DIGEST ADAPTER
// =============================================================================

/// `digest`-compatible view producing the 32-byte wide digest.
#[cfg(feature = "digest-trait")]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sans19Wide(Sans19Hasher);

#[cfg(feature = "digest-trait")]
impl Sans19Wide {
    /// Create a fresh wide-digest hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self(Sans19Hasher::new())
    }

    /// Access the underlying engine.
    #[must_use]
    pub const fn inner(&self) -> &Sans19Hasher {
        &self.0
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for Sans19Wide {
    type OutputSize = U32;
}

#[cfg(feature = "digest-trait")]
impl Update for Sans19Wide {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for Sans19Wide {
    fn finalize_into(mut self, out: &mut Output<Self>) {
        out.copy_from_slice(&self.0.finalize_wide());
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Sans19Wide {
    fn reset(&mut self) {
        self.0.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for Sans19Wide {}
