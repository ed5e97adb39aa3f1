//! I/O module for reading the pipeline's input files.
//!
//! Provides loaders for FASTA, MERlin codebook and delimited (TSV/CSV) files.
//! Every loader accepts plain or gzip-compressed input.

pub mod codebook;
pub mod delimited;
pub mod fasta;

use crate::error::{LoadError, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

// Re-export main types
pub use codebook::load_codebook;
pub use delimited::read_delimited;
pub use fasta::load_fasta;

/// Open a file for buffered reading, decompressing it if it is gzip-compressed.
///
/// The file handle is owned by the returned reader and closed when it is dropped.
pub(crate) fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;

    // Check if file is gzip-compressed by reading magic bytes
    let mut buffered = BufReader::new(file);
    let is_compressed = is_gzip_compressed(&mut buffered).map_err(|e| LoadError::io(path, e))?;

    let reader: Box<dyn BufRead> = if is_compressed {
        // Use MultiGzDecoder which handles both regular gzip and BGZF
        Box::new(BufReader::new(MultiGzDecoder::new(buffered)))
    } else {
        Box::new(buffered)
    };

    Ok(reader)
}

/// Read a whole (possibly compressed) file into memory.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
    let mut reader = open_input(path)?;
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| LoadError::io(path, e))?;
    Ok(buf)
}

/// Helper function to check if a file is gzip-compressed
fn is_gzip_compressed<R: Read>(reader: &mut BufReader<R>) -> std::io::Result<bool> {
    let buffer = reader.fill_buf()?;

    // Check for gzip magic bytes (0x1f 0x8b)
    Ok(buffer.len() >= 2 && buffer[0] == 0x1f && buffer[1] == 0x8b)
}
