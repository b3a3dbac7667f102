//! SANS19 CLI
//!
//! Digest a file and print the result.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_file, DigestKind, OutputFormat};
use std::path::PathBuf;
use tracing::Level;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "sans19")]
#[command(about = "SANS19 digest (not cryptographic)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Write the raw digest bytes to stdout instead of hex
    #[arg(long, conflicts_with = "checksum")]
    raw: bool,

    /// Print `<hex>  <path>` lines for the check command
    #[arg(long)]
    checksum: bool,

    /// Digest variant to compute
    #[arg(short, long, value_enum, default_value_t = DigestKind::Short)]
    digest: DigestKind,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    const fn output_format(&self) -> OutputFormat {
        if self.raw {
            OutputFormat::Raw
        } else if self.checksum {
            OutputFormat::Checksum
        } else {
            OutputFormat::Labelled
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    // Reported before anything else, even on usage errors.
    let self_test = sans19::self_test_report();
    let status = if self_test.is_ok() {
        "Self-test passed"
    } else {
        "Self-test failed"
    };

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            println!("{status}");
            if e.use_stderr() {
                let _ = e.print();
                std::process::exit(1);
            }
            e.exit()
        }
    };

    // Keep stdout to the digest alone when it is meant for a pipe or a checksum file.
    if cli.output_format().is_machine_readable() {
        eprintln!("{status}");
    } else {
        println!("{status}");
    }

    init_tracing(cli.verbose);
    if let Err(failure) = self_test {
        tracing::warn!(%failure, "digests may not match other builds");
    }

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file)?,
        None => {
            let Some(file) = &cli.file else {
                eprintln!("Error: No file specified");
                eprintln!("Usage: sans19 <FILE> [--raw | --checksum] or sans19 --help");
                std::process::exit(1);
            };

            hash_file(file, cli.digest, cli.output_format())?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .without_time()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
