#![cfg_attr(not(feature = "std"), no_std)]

//! # SANS19
//!
//! Small streaming digest producing a 38-byte short fingerprint and a
//! 32-byte wide fingerprint.
//!
//! **Not cryptographic.** Use it for checksums and fingerprints where an
//! adversary is not part of the picture.

//! # Usage
//! ```rust
//! use sans19::{CacheMode, Hasher};
//!
//! // 1. One-shot
//! let digest = sans19::hash(b"sans19");
//! assert!(sans19::verify(b"sans19", &digest));
//!
//! // 2. Streaming. Call boundaries are part of the input.
//! let mut hasher = Hasher::new();
//! hasher.update(b"sans19");
//! assert_eq!(hasher.finalize_short(), digest);
//!
//! // 3. Finalized digests are cached until explicitly invalidated.
//! hasher.update(b"more");
//! assert_eq!(hasher.finalize_short(), digest);
//! hasher.reset_cache(CacheMode::Short);
//! assert_ne!(hasher.finalize_short(), digest);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod constants;
mod oneshot;
pub mod primitives;
mod selftest;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use constants::{HASH_SIZE, WIDE_HASH_SIZE};
#[cfg(feature = "digest-trait")]
pub use digest;
pub use oneshot::{hash, hash_wide, hexdigest, verify, verify_wide};
pub use selftest::{self_test, self_test_report, SELF_TEST_VECTORS};
#[cfg(feature = "digest-trait")]
pub use streaming::Sans19Wide as WideHasher;
pub use streaming::Sans19Hasher as Hasher;
pub use types::{CacheMode, SelfTestFailure};
