//! OxiHuff CLI - The Oxidized Huffman coder
//!
//! A Pure Rust Huffman compressor for arbitrary byte streams.

mod utils;

use clap::{Parser, Subcommand};
use oxihuff::{compress_stream, decompress_stream};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use utils::{create_progress_bar, default_compressed_name, default_decompressed_name};

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(
    author,
    version,
    about = "The Oxidized Huffman coder - Pure Rust stream compression"
)]
#[command(long_about = "
OxiHuff is a Pure Rust implementation of classic Huffman stream
compression. The compressed file carries its own code tree, so no
side-channel metadata is needed to decompress.

Examples:
  oxihuff compress notes.txt
  oxihuff compress notes.txt archived.ohf
  oxihuff decompress notes.txt.ohf
  oxihuff decompress archived.ohf notes.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (defaults to the input name plus .ohf)
        output: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output file (defaults to the input name without .ohf)
        output: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            verbose,
            progress,
        } => cmd_compress(&input, output.as_deref(), verbose, progress),
        Commands::Decompress {
            input,
            output,
            verbose,
            progress,
        } => cmd_decompress(&input, output.as_deref(), verbose, progress),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(
    input: &Path,
    output: Option<&Path>,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_compressed_name(input));

    println!("Compressing {} to {}", input.display(), output.display());

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(&output)?);

    let pb = create_progress_bar(1, progress);
    pb.set_message("Compressing");

    compress_stream(reader, writer)?;

    pb.inc(1);
    pb.finish_with_message("Done");

    if verbose {
        let original_size = std::fs::metadata(input)?.len();
        let compressed_size = std::fs::metadata(&output)?.len();
        println!("  Original size: {} bytes", original_size);
        println!("  Compressed size: {} bytes", compressed_size);
        if original_size > 0 {
            println!(
                "  Compression ratio: {:.1}%",
                (1.0 - compressed_size as f64 / original_size as f64) * 100.0
            );
        }
    }

    Ok(())
}

fn cmd_decompress(
    input: &Path,
    output: Option<&Path>,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_decompressed_name(input));

    println!("Decompressing {} to {}", input.display(), output.display());

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(&output)?);

    let pb = create_progress_bar(1, progress);
    pb.set_message("Decompressing");

    decompress_stream(reader, writer)?;

    pb.inc(1);
    pb.finish_with_message("Done");

    if verbose {
        let compressed_size = std::fs::metadata(input)?.len();
        let restored_size = std::fs::metadata(&output)?.len();
        println!("  Compressed size: {} bytes", compressed_size);
        println!("  Restored size: {} bytes", restored_size);
    }

    Ok(())
}
