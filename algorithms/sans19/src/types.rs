//! Shared types used across the SANS19 library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// CACHE CONTROL
// =============================================================================

/// Selects which finalize cache `Sans19Hasher::reset_cache` invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    /// The 38-byte short digest cache.
    Short,
    /// The 32-byte wide digest cache.
    Wide,
    /// Both caches.
    Both,
}

impl CacheMode {
    /// Whether this mode clears the short digest cache.
    #[must_use]
    pub const fn clears_short(self) -> bool {
        matches!(self, Self::Short | Self::Both)
    }

    /// Whether this mode clears the wide digest cache.
    #[must_use]
    pub const fn clears_wide(self) -> bool {
        matches!(self, Self::Wide | Self::Both)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// A self-test vector whose digest drifted from the recorded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfTestFailure {
    index: usize,
    input: &'static str,
}

impl SelfTestFailure {
    /// Create a new `SelfTestFailure` for the vector at `index`.
    pub const fn new(index: usize, input: &'static str) -> Self {
        Self { index, input }
    }

    /// Position of the failing vector in the table.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Input of the failing vector.
    #[must_use]
    pub const fn input(&self) -> &'static str {
        self.input
    }
}

impl fmt::Display for SelfTestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Long inputs are clipped on a char boundary.
        let preview: &str = match self.input.char_indices().nth(32) {
            Some((end, _)) => &self.input[..end],
            None => self.input,
        };
        write!(
            f,
            "SANS19 self-test vector #{} ({:?}) produced an unexpected digest",
            self.index, preview
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for SelfTestFailure {}
