//! Generic delimited-table reading and writing.

use crate::error::{LoadError, Result};
use crate::io::open_input;
use crate::models::Table;
use std::path::Path;

/// Read a delimited file whose first row holds the column names.
///
/// Fields may be quoted with `"`. Every row must have as many fields as the
/// header row.
///
/// # Errors
/// * [`LoadError::Io`] if the file cannot be read
/// * [`LoadError::Format`] on a row with the wrong number of fields or
///   invalid UTF-8
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(open_input(path)?);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::from_csv(path, e))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| LoadError::from_csv(path, e))?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    Ok(Table::new(columns, rows))
}

/// Write a table as a delimited file with a header row.
pub fn write_delimited(table: &Table, path: &Path, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| LoadError::from_csv(path, e))?;

    writer
        .write_record(table.columns())
        .map_err(|e| LoadError::from_csv(path, e))?;
    for row in table.rows() {
        writer
            .write_record(row)
            .map_err(|e| LoadError::from_csv(path, e))?;
    }
    writer.flush().map_err(|e| LoadError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::io::test_util::write_file;

    const FPKM: &str = "tracking_id\tgene_id\tFPKM\nT1\tG1\t12.5\nT2\tG1\t0\nT4\tG2\t3.25\n";

    #[test]
    fn test_read_tsv() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "genes.fpkm_tracking", FPKM);

        let table = read_delimited(&path, b'\t').unwrap();
        assert_eq!(table.columns(), ["tracking_id", "gene_id", "FPKM"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(2, "FPKM"), Some("3.25"));
        assert_eq!(table.distinct_count("gene_id"), Some(2));
    }

    #[test]
    fn test_ragged_row_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "bad.tsv", "a\tb\n1\t2\n3\n");

        let err = read_delimited(&path, b'\t').unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(matches!(err, LoadError::Format { line: Some(3), .. }));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_file(dir.path(), "in.tsv", FPKM);
        let output = dir.path().join("out.tsv");

        let table = read_delimited(&input, b'\t').unwrap();
        write_delimited(&table, &output, b'\t').unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), FPKM);
    }
}
