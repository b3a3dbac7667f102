//! Hash Command
//!
//! Whole-file digesting. The file is absorbed in one `update` call because
//! SANS19 digests depend on call boundaries; reading in buffered chunks
//! would print a different digest than `sans19::hash` on the same bytes.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum DigestKind {
    /// 38-byte digest (76 hex characters)
    Short,
    /// 32-byte wide digest (64 hex characters)
    Wide,
}

impl DigestKind {
    /// Infer the variant from the length of a hex digest.
    pub const fn from_hex_len(len: usize) -> Option<Self> {
        match len {
            l if l == sans19::HASH_SIZE * 2 => Some(Self::Short),
            l if l == sans19::WIDE_HASH_SIZE * 2 => Some(Self::Wide),
            _ => None,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Short => "SANS19 Hash",
            Self::Wide => "SANS19 Wide",
        }
    }
}

/// Digest `data` in a single update call.
pub fn digest_bytes(data: &[u8], kind: DigestKind) -> Vec<u8> {
    let mut hasher = sans19::Hasher::new();
    hasher.update(data);
    match kind {
        DigestKind::Short => hasher.finalize_short().to_vec(),
        DigestKind::Wide => hasher.finalize_wide().to_vec(),
    }
}

/// Read a whole file and digest it.
pub fn digest_file(path: &Path, kind: DigestKind) -> Result<Vec<u8>> {
    let data =
        std::fs::read(path).with_context(|| format!("Could not open file {}", path.display()))?;
    debug!(path = %path.display(), bytes = data.len(), ?kind, "digesting file");
    Ok(digest_bytes(&data, kind))
}

/// How the digest is written to stdout.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    /// `SANS19 Hash: <hex>`
    Labelled,
    /// Digest bytes only.
    Raw,
    /// `<hex>  <path>`, readable by the `check` command.
    Checksum,
}

impl OutputFormat {
    /// Whether stdout carries only digest output in this format.
    pub const fn is_machine_readable(self) -> bool {
        !matches!(self, Self::Labelled)
    }
}

/// Write one digest to `out` in the requested format.
pub fn write_digest<W: Write>(
    out: &mut W,
    path: &Path,
    digest: &[u8],
    kind: DigestKind,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Labelled => writeln!(out, "{}: {}", kind.label(), hex::encode(digest)),
        OutputFormat::Raw => out.write_all(digest),
        OutputFormat::Checksum => writeln!(out, "{}  {}", hex::encode(digest), path.display()),
    }
}

/// Hash one file and print the digest.
pub fn hash_file(path: &Path, kind: DigestKind, format: OutputFormat) -> Result<()> {
    let digest = digest_file(path, kind)?;

    let mut stdout = std::io::stdout().lock();
    write_digest(&mut stdout, path, &digest, kind, format)
        .and_then(|()| stdout.flush())
        .context("Failed to write digest to stdout")?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_hex_len() {
        assert_eq!(DigestKind::from_hex_len(76), Some(DigestKind::Short));
        assert_eq!(DigestKind::from_hex_len(64), Some(DigestKind::Wide));
        assert_eq!(DigestKind::from_hex_len(40), None);
    }

    #[test]
    fn test_digest_bytes_matches_library() {
        assert_eq!(digest_bytes(b"sans19", DigestKind::Short), sans19::hash(b"sans19"));
        assert_eq!(
            digest_bytes(b"sans19", DigestKind::Wide),
            sans19::hash_wide(b"sans19")
        );
    }

    #[test]
    fn test_digest_file_reads_whole_file() {
        let path = std::env::temp_dir().join(format!("sans19-cli-{}.txt", std::process::id()));
        std::fs::write(&path, b"YOUR TAKING TOO LONG").unwrap();

        let digest = digest_file(&path, DigestKind::Short).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            hex::encode(digest),
            "df716e09b3e77def0ac1d45c5a8a162c4f64ddad71f917196bbfa2b26ef3423540dcb632c94b"
        );
    }

    #[test]
    fn test_raw_output_is_digest_only() {
        let digest = digest_bytes(b"sans19", DigestKind::Short);
        let mut out = Vec::new();
        write_digest(&mut out, Path::new("s.txt"), &digest, DigestKind::Short, OutputFormat::Raw)
            .unwrap();
        assert_eq!(out.len(), sans19::HASH_SIZE);
        assert_eq!(out, sans19::hash(b"sans19"));

        let wide = digest_bytes(b"sans19", DigestKind::Wide);
        let mut out = Vec::new();
        write_digest(&mut out, Path::new("s.txt"), &wide, DigestKind::Wide, OutputFormat::Raw)
            .unwrap();
        assert_eq!(out.len(), sans19::WIDE_HASH_SIZE);
    }

    #[test]
    fn test_labelled_output() {
        let digest = digest_bytes(b"sans19", DigestKind::Short);
        let mut out = Vec::new();
        write_digest(&mut out, Path::new("s.txt"), &digest, DigestKind::Short, OutputFormat::Labelled)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "SANS19 Hash: 8688f8a19ba65ea8ec1b4b0987e8e4c49852811e1a1b7a6a6ac7f5fe2224644c174aff0d4dc0\n"
        );
    }

    #[test]
    fn test_machine_readable_formats() {
        assert!(!OutputFormat::Labelled.is_machine_readable());
        assert!(OutputFormat::Raw.is_machine_readable());
        assert!(OutputFormat::Checksum.is_machine_readable());
    }

    #[test]
    fn test_digest_file_missing() {
        let err = digest_file(Path::new("/nonexistent/sans19/input"), DigestKind::Short)
            .unwrap_err();
        assert!(err.to_string().contains("Could not open file"));
    }
}
