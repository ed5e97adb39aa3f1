//! MERlin codebook loading.
//!
//! A codebook is a comma-delimited text file with a header block followed by
//! a barcode table:
//!
//! ```text
//! version,1.0
//! codebook_name,M22E1
//! bit_names,RS0015,RS0083,RS0095
//! name,id,barcode_str
//! Gad1,ENSMUST00000094934,101
//! ```
//!
//! The first row whose first field is `name` separates the two blocks.
//! Unknown header keys are ignored, and a file without the `name` row loads
//! with an empty barcode table.

use crate::error::{LoadError, Result};
use crate::io::open_input;
use crate::models::{BarcodeRecord, Codebook};
use log::debug;
use std::path::Path;

const VERSION_KEY: &str = "version";
const CODEBOOK_NAME_KEY: &str = "codebook_name";
const BIT_NAMES_KEY: &str = "bit_names";
const TABLE_MARKER: &str = "name";

/// Load a MERlin-style codebook.
///
/// # Errors
/// * [`LoadError::Io`] if the file cannot be read
/// * [`LoadError::Format`] if a barcode row has fewer than three fields or a
///   `version`/`codebook_name` row has no value
pub fn load_codebook(path: &Path) -> Result<Codebook> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(open_input(path)?);

    let mut codebook = Codebook::default();
    let mut in_header = true;

    for result in reader.records() {
        let record = result.map_err(|e| LoadError::from_csv(path, e))?;
        let line = record.position().map(|p| p.line());

        // Whitespace-only lines trim down to a single empty field
        if record.iter().all(str::is_empty) {
            continue;
        }

        if in_header {
            match &record[0] {
                VERSION_KEY => codebook.version = header_value(path, line, &record)?,
                CODEBOOK_NAME_KEY => codebook.codebook_name = header_value(path, line, &record)?,
                BIT_NAMES_KEY => {
                    codebook.bit_names = record.iter().skip(1).map(str::to_string).collect();
                }
                TABLE_MARKER => in_header = false,
                _ => {}
            }
            continue;
        }

        if record.len() < 3 {
            return Err(LoadError::format(
                path,
                line,
                format!("barcode row needs 3 fields, found {}", record.len()),
            ));
        }
        codebook.barcodes.push(BarcodeRecord {
            name: record[0].to_string(),
            id: record[1].to_string(),
            barcode_str: record[2].to_string(),
        });
    }

    if in_header {
        debug!(
            "No '{TABLE_MARKER}' row found in {}, barcode table is empty",
            path.display()
        );
    }
    debug!(
        "Read codebook '{}' with {} bits and {} barcodes from {}",
        codebook.codebook_name,
        codebook.bit_count(),
        codebook.barcodes.len(),
        path.display()
    );

    Ok(codebook)
}

fn header_value(path: &Path, line: Option<u64>, record: &csv::StringRecord) -> Result<String> {
    record
        .get(1)
        .map(str::to_string)
        .ok_or_else(|| LoadError::format(path, line, format!("'{}' has no value", &record[0])))
}
