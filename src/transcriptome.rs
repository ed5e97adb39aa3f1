use crate::error::{LoadError, Result};
use crate::io::{load_fasta, read_delimited};
use crate::models::Table;
use log::info;
use std::path::Path;

/// Column the transcript sequences and expression values are joined on.
pub const TRANSCRIPT_ID: &str = "transcript_id";

/// Transcript id column of a Cufflinks `.fpkm_tracking` file.
pub const TRACKING_ID: &str = "tracking_id";

pub const GENE_ID: &str = "gene_id";

/// Transcripts joined with their expression values.
///
/// Columns are `transcript_id`, `description` and `sequence` followed by the
/// remaining FPKM tracking columns.
pub type TranscriptomeTable = Table;

/// Loads transcript sequences and their FPKM values into a single table.
///
/// Only transcripts present in both files are kept. Load counts are reported
/// through the `log` facade at info level.
///
/// # Arguments
/// * `fasta_path` - Transcript sequences (FASTA, optionally gzipped)
/// * `fpkm_path` - Tab-separated FPKM tracking table with a header row
///
/// # Errors
/// Any error from either file, or [`LoadError::MissingColumn`] when the FPKM
/// table lacks `tracking_id` or `gene_id`.
pub fn load_transcriptome(fasta_path: &Path, fpkm_path: &Path) -> Result<TranscriptomeTable> {
    let mut transcripts = load_fasta(fasta_path)?.into_table();
    info!("Loaded {} transcripts.", transcripts.len());
    let renamed = transcripts.rename_column("id", TRANSCRIPT_ID);
    debug_assert!(renamed, "sequence tables always have an id column");

    let mut fpkms = read_delimited(fpkm_path, b'\t')?;
    let genes = fpkms
        .distinct_count(GENE_ID)
        .ok_or_else(|| LoadError::missing_column(fpkm_path, GENE_ID))?;
    info!(
        "Loaded FPKMs for {} transcripts of {} genes.",
        fpkms.len(),
        genes
    );
    if !fpkms.rename_column(TRACKING_ID, TRANSCRIPT_ID) {
        return Err(LoadError::missing_column(fpkm_path, TRACKING_ID));
    }

    let transcriptome = transcripts
        .inner_join(&fpkms, TRANSCRIPT_ID)
        .expect("both tables have a transcript_id column after renaming");
    info!(
        "Kept {} transcripts of {} genes after merging.",
        transcriptome.len(),
        transcriptome.distinct_count(GENE_ID).unwrap_or(0)
    );

    Ok(transcriptome)
}
