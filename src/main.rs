use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use merfish_io::cli::{Cli, Command, fmt};
use merfish_io::io::delimited::write_delimited;
use merfish_io::{load_codebook, load_fasta, load_transcriptome};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Fasta { path } => summarize_fasta(&path),
        Command::Codebook { path, barcodes } => summarize_codebook(&path, barcodes),
        Command::Transcriptome {
            fasta,
            fpkm,
            output,
        } => merge_transcriptome(&fasta, &fpkm, output.as_deref()),
    }
}

fn summarize_fasta(path: &Path) -> Result<()> {
    let sequences = load_fasta(path)
        .with_context(|| format!("Failed to load FASTA file: {}", path.display()))?;

    eprintln!("{}", fmt::header("FASTA Summary"));
    eprintln!("{}: {}", fmt::param_aligned("File", 16), path.display());
    eprintln!("{}: {}", fmt::param_aligned("Records", 16), sequences.len());
    eprintln!("{}: {}", fmt::param_aligned("Total length", 16), sequences.total_length());

    Ok(())
}

fn summarize_codebook(path: &Path, show_barcodes: bool) -> Result<()> {
    let codebook = load_codebook(path)
        .with_context(|| format!("Failed to load codebook: {}", path.display()))?;

    eprintln!("{}", fmt::header("Codebook Summary"));
    eprintln!("{}: {}", fmt::param_aligned("Name", 16), codebook.codebook_name);
    eprintln!("{}: {}", fmt::param_aligned("Version", 16), codebook.version);
    eprintln!("{}: {}", fmt::param_aligned("Bits", 16), codebook.bit_count());
    eprintln!("{}: {}", fmt::param_aligned("Barcodes", 16), codebook.barcodes.len());

    if show_barcodes {
        println!("name\tid\tbarcode_str");
        for barcode in &codebook.barcodes {
            println!("{}\t{}\t{}", barcode.name, barcode.id, barcode.barcode_str);
        }
    }

    Ok(())
}

fn merge_transcriptome(fasta: &Path, fpkm: &Path, output: Option<&Path>) -> Result<()> {
    eprintln!("{}", fmt::progress("Merging transcripts with FPKM values..."));
    let transcriptome = load_transcriptome(fasta, fpkm).context("Failed to load transcriptome")?;

    eprintln!(
        "{}: {}",
        fmt::param_aligned("Transcripts kept", 16),
        transcriptome.len()
    );
    if let Some(genes) = transcriptome.distinct_count("gene_id") {
        eprintln!("{}: {}", fmt::param_aligned("Genes kept", 16), genes);
    }

    if let Some(output) = output {
        write_delimited(&transcriptome, output, b'\t')
            .with_context(|| format!("Failed to write {}", output.display()))?;
        eprintln!(
            "{}",
            fmt::success(format!("Output written to {}", output.display()))
        );
    }

    Ok(())
}
