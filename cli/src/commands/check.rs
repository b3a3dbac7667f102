//! Check Command
//!
//! Verify checksums from file (like sha256sum -c). The digest variant of each
//! line follows from its hex length. `sans19 --checksum FILE` writes lines in
//! this format.

use super::hash::{digest_file, DigestKind};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// =============================================================================
// PARSING
// =============================================================================

/// One `hash  filename` line.
#[derive(Debug, PartialEq, Eq)]
struct Entry {
    expected: String,
    kind: DigestKind,
    path: PathBuf,
}

/// Parse a checksum line. Blank lines and `#` comments yield `Ok(None)`.
fn parse_line(line: &str) -> Result<Option<Entry>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    // Format: "hash  filename" (two spaces)
    let Some((hash, path)) = line.split_once("  ") else {
        return Err(format!("Invalid format: {line}"));
    };

    let expected = hash.trim().to_ascii_lowercase();
    let kind = DigestKind::from_hex_len(expected.len())
        .ok_or_else(|| format!("Unknown digest length {}: {line}", expected.len()))?;

    Ok(Some(Entry {
        expected,
        kind,
        path: PathBuf::from(path.trim()),
    }))
}

// =============================================================================
// CHECK
// =============================================================================

fn check_entry(entry: &Entry) -> Result<(), String> {
    match digest_file(&entry.path, entry.kind) {
        Ok(digest) if hex::encode(&digest) == entry.expected => Ok(()),
        Ok(_) => Err(String::new()),
        Err(e) => Err(format!(" ({e:#})")),
    }
}

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &Path) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        match parse_line(&line?) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {}
            Err(msg) => warn!("{msg}"),
        }
    }
    debug!(count = entries.len(), "verifying checksums");

    // Each file gets its own engine; results keep the input order.
    let results: Vec<Result<(), String>> = entries.par_iter().map(check_entry).collect();

    let total = entries.len();
    let mut failed = 0;
    for (entry, result) in entries.iter().zip(&results) {
        match result {
            Ok(()) => println!("{}: OK", entry.path.display()),
            Err(reason) => {
                println!("{}: FAILED{reason}", entry.path.display());
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
        Ok(())
    } else {
        anyhow::bail!("{failed} of {total} checksums did NOT match")
    }
}
