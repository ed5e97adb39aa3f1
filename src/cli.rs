// Command-line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "merfish-io",
    version,
    about = "Inspect MERFISH probe-design inputs: transcripts, codebooks and FPKM tables",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a FASTA file
    Fasta {
        /// Sequences (FASTA format, optionally gzipped)
        #[arg(value_name = "FASTA")]
        path: PathBuf,
    },

    /// Summarize a MERlin codebook
    Codebook {
        /// Codebook file (comma-delimited)
        #[arg(value_name = "CODEBOOK")]
        path: PathBuf,

        /// Print every barcode row
        #[arg(short, long)]
        barcodes: bool,
    },

    /// Join transcript sequences with their FPKM values
    Transcriptome {
        /// Transcript sequences (FASTA format)
        #[arg(short = 'f', long, value_name = "FASTA")]
        fasta: PathBuf,

        /// Cufflinks FPKM tracking file (tab-separated)
        #[arg(short = 'e', long, value_name = "FPKM")]
        fpkm: PathBuf,

        /// Write the merged table to this TSV file
        #[arg(short = 'o', long, value_name = "TSV")]
        output: Option<PathBuf>,
    },
}

/// Styled terminal output helpers.
pub mod fmt {
    use console::style;
    use std::fmt::Display;

    pub fn header(text: impl Display) -> String {
        style(text).bold().underlined().to_string()
    }

    pub fn param_aligned(name: impl Display, width: usize) -> String {
        format!("{:<width$}", style(name).cyan(), width = width)
    }

    pub fn progress(text: impl Display) -> String {
        format!("{} {}", style("→").blue().bold(), text)
    }

    pub fn success(text: impl Display) -> String {
        format!("{} {}", style("✓").green().bold(), text)
    }
}
