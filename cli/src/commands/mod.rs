//! CLI Commands
//!
//! All sans19 CLI commands organized as separate modules.

mod check;
mod hash;

pub use check::check_mode;
pub use hash::{hash_file, DigestKind, OutputFormat};
