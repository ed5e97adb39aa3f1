//! Loaders for MERFISH probe-design inputs.
//!
//! Reads transcript FASTA files, MERlin codebooks and Cufflinks FPKM tracking
//! tables into in-memory tables, and joins transcripts with their expression
//! values.

pub mod cli;
pub mod error;
pub mod io;
pub mod models;
pub mod transcriptome;

pub use error::{ErrorKind, LoadError, Result};
pub use io::{load_codebook, load_fasta};
pub use models::{BarcodeRecord, BarcodeTable, Codebook, SequenceRecord, SequenceTable, Table};
pub use transcriptome::{TranscriptomeTable, load_transcriptome};
