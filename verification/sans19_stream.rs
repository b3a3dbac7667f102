//! # `PractRand` Stream Generator
//!
//! Writes an endless stream of SANS19 digests of an incrementing 64-bit
//! counter to stdout, for piping into `RNG_test stdin`.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use tracing::{debug, info};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Variant {
    /// 38-byte digests
    Short,
    /// 32-byte wide digests
    Wide,
}

/// Command-line options.
#[derive(Parser)]
#[command(name = "sans19_stream")]
#[command(about = "Stream SANS19 digests of a counter for PractRand", long_about = None)]
struct Cli {
    /// Input size in bytes, or `cyclic` to rotate through 8/16/32/64
    #[arg(default_value = "8")]
    mode: String,

    /// Digest variant to emit
    #[arg(short, long, value_enum, default_value_t = Variant::Short)]
    digest: Variant,

    /// Stop after this many digests (runs forever by default)
    #[arg(short, long)]
    count: Option<u64>,
}

/// Entry point for the `PractRand` stream generator.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .without_time()
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(mode = %cli.mode, digest = ?cli.digest, "streaming digests");

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    let mut counter: u64 = 0;

    while cli.count.is_none_or(|limit| counter < limit) {
        let size = match cli.mode.as_str() {
            // Cycle through 8, 16, 32, 64 bytes
            "cyclic" => 8 << (counter % 4),
            s => s.parse::<usize>().unwrap_or(8),
        };

        let counter_bytes = counter.to_le_bytes();
        let input: Vec<u8> = (0..size).map(|i| counter_bytes[i % 8]).collect();

        let written = match cli.digest {
            Variant::Short => handle.write_all(&sans19::hash(&input)),
            Variant::Wide => handle.write_all(&sans19::hash_wide(&input)),
        };
        if written.is_err() {
            // Reader closed the pipe.
            debug!(counter, "output closed");
            break;
        }

        counter = counter.wrapping_add(1);
    }

    handle.flush().ok();
    Ok(())
}
