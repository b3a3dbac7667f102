//! Public API Layer
//!
//! One-shot helpers. Each absorbs the whole input in a single `update` call,
//! which is the only split that matches the recorded vectors.

use crate::constants::{HASH_SIZE, WIDE_HASH_SIZE};
use crate::streaming::Sans19Hasher;
use subtle::ConstantTimeEq;

#[cfg(not(feature = "std"))]
use alloc::string::String;

// =============================================================================
// HASHING
// =============================================================================

/// Compute the 38-byte SANS19 digest.
///
/// # Example
/// ```rust
/// let digest = sans19::hash(b"sans19");
/// assert_eq!(digest.len(), 38);
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> [u8; HASH_SIZE] {
    let mut hasher = Sans19Hasher::new();
    hasher.update(input);
    hasher.finalize_short()
}

/// Compute the 32-byte wide SANS19 digest.
///
/// # Example
/// ```rust
/// let digest = sans19::hash_wide(b"sans19");
/// assert_eq!(digest.len(), 32);
/// ```
#[must_use]
#[inline]
pub fn hash_wide(input: &[u8]) -> [u8; WIDE_HASH_SIZE] {
    let mut hasher = Sans19Hasher::new();
    hasher.update(input);
    hasher.finalize_wide()
}

/// Compute the short digest as lowercase hex.
///
/// # Example
/// ```rust
/// assert_eq!(
///     sans19::hexdigest(b""),
///     "0c456ff7e1f868b1dfff984ad91c12b9cb5aade6ecb3a67613007a7159f009034df241b34a46"
/// );
/// ```
#[must_use]
pub fn hexdigest(input: &[u8]) -> String {
    hex::encode(hash(input))
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Check `input` against a short digest in constant time.
///
/// This is an integrity check, not authentication. SANS19 is not a
/// cryptographic hash.
#[must_use]
pub fn verify(input: &[u8], expected: &[u8; HASH_SIZE]) -> bool {
    hash(input).ct_eq(expected).into()
}

/// Check `input` against a wide digest in constant time.
#[must_use]
pub fn verify_wide(input: &[u8], expected: &[u8; WIDE_HASH_SIZE]) -> bool {
    hash_wide(input).ct_eq(expected).into()
}
