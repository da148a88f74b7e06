//! VRAM-WAD command-line tool.
//!
//! `vramwad -c <INPUT> <OUTPUT>` compresses a file into a VRAM-WAD
//! container; `vramwad -d <INPUT> <OUTPUT>` decompresses one. Exit code 0
//! on success, 1 on any usage, I/O, or format error.

use clap::{ArgGroup, Parser};
use retropak_core::Result;
use retropak_vramwad::{pack, unpack};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "vramwad")]
#[command(version, about = "VRAM-WAD compression tool")]
#[command(group(ArgGroup::new("mode").required(true)))]
struct Cli {
    /// Compress INPUT into a VRAM-WAD container
    #[arg(short = 'c', group = "mode")]
    compress: bool,

    /// Decompress a VRAM-WAD container
    #[arg(short = 'd', group = "mode")]
    decompress: bool,

    /// Input file
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

    if cli.compress {
        let packed = pack(&input)?;
        fs::write(&cli.output, &packed)?;
        println!(
            "Compression complete: {} -> {} bytes. Output written to {}",
            input.len(),
            packed.len(),
            cli.output.display()
        );
    } else {
        let data = unpack(&input)?;
        fs::write(&cli.output, &data)?;
        println!(
            "Decompression complete. Output written to {}",
            cli.output.display()
        );
    }

    Ok(())
}
