//! LZNP command-line tool.
//!
//! `lznp <INPUT> <OUTPUT>` decompresses an LZNP container. The format is
//! decode-only; there is no corresponding compressor. Exit code 0 on
//! success, 1 on any usage, I/O, or format error.

use clap::Parser;
use retropak_core::Result;
use retropak_lznp::{declared_size, unpack};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lznp")]
#[command(version, about = "LZNP decompression tool")]
struct Cli {
    /// Input file (LZNP container)
    input: PathBuf,

    /// Output file
    output: PathBuf,
}

fn main() -> ExitCode {
    // Usage errors exit 1, matching the tool's documented contract.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = fs::read(&cli.input)?;

    let size = declared_size(&input)?;
    println!("Decompressed size: {} bytes", size);

    let data = unpack(&input)?;
    fs::write(&cli.output, &data)?;
    println!(
        "Decompression complete. Output written to {}",
        cli.output.display()
    );

    Ok(())
}
