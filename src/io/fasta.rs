//! FASTA file loading using noodles.

use crate::error::{LoadError, Result};
use crate::io::read_input;
use crate::models::{SequenceRecord, SequenceTable};
use log::debug;
use noodles::fasta;
use std::path::Path;

/// Load every record of a FASTA file, in file order.
///
/// Gzip-compressed files are detected and decompressed. An empty file yields
/// an empty table.
///
/// # Errors
/// * [`LoadError::Io`] if the file cannot be read
/// * [`LoadError::Format`] if the first non-blank line is not a `>` header or
///   a header or sequence is not valid UTF-8
///
/// `description` is the header line without `>` and trailing whitespace;
/// `id` is its text up to the first whitespace, possibly empty.
///
/// # Example
/// ```no_run
/// use merfish_io::io::load_fasta;
/// use std::path::Path;
///
/// let transcripts = load_fasta(Path::new("transcripts.fasta"))?;
/// for record in &transcripts {
///     println!("{}: {} nt", record.id, record.sequence.len());
/// }
/// # Ok::<(), merfish_io::LoadError>(())
/// ```
pub fn load_fasta(path: &Path) -> Result<SequenceTable> {
    let content = read_input(path)?;

    let Some(start) = first_record_start(&content) else {
        debug!("{} contains no FASTA records", path.display());
        return Ok(SequenceTable::default());
    };
    if content[start] != b'>' {
        return Err(LoadError::format(
            path,
            Some(count_lines(&content[..start]) + 1),
            "expected a '>' record header",
        ));
    }

    let mut reader = fasta::io::Reader::new(&content[start..]);
    let mut records = Vec::new();
    let mut definition = String::new();
    let mut residues = Vec::new();

    // Line of the current record header, tracked from the bytes consumed so far
    let mut line = count_lines(&content[..start]) + 1;
    let mut counted = start;

    loop {
        let consumed = content.len() - reader.get_ref().len();
        line += count_lines(&content[counted..consumed]);
        counted = consumed;

        definition.clear();
        let n = reader
            .read_definition(&mut definition)
            .map_err(|e| LoadError::format(path, Some(line), format!("invalid record header: {e}")))?;
        if n == 0 {
            break;
        }
        let Some(header) = definition.strip_prefix('>') else {
            return Err(LoadError::format(path, Some(line), "expected a '>' record header"));
        };

        let description = header.trim_end().to_string();
        let id = description
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();

        reader
            .read_sequence(&mut residues)
            .map_err(|e| LoadError::format(path, Some(line), format!("invalid sequence: {e}")))?;
        let sequence = String::from_utf8(std::mem::take(&mut residues)).map_err(|_| {
            LoadError::format(path, Some(line), format!("sequence of '{id}' is not valid UTF-8"))
        })?;

        records.push(SequenceRecord {
            id,
            description,
            sequence,
        });
    }

    debug!("Read {} FASTA records from {}", records.len(), path.display());
    Ok(SequenceTable::new(records))
}

/// Offset of the first non-whitespace byte, if any.
fn first_record_start(content: &[u8]) -> Option<usize> {
    content.iter().position(|b| !b.is_ascii_whitespace())
}

fn count_lines(bytes: &[u8]) -> u64 {
    bytes.iter().filter(|&&b| b == b'\n').count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::io::test_util::{write_file, write_gz_file};

    const FASTA: &str = ">T1 gene=GeneA len=8\nACGT\nACGT\n>T2\nGGCC\n>T3 gene=GeneC\nA\nC\nG\n";

    #[test]
    fn test_load_records_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "t.fasta", FASTA);

        let table = load_fasta(&path).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.ids().collect::<Vec<_>>(), ["T1", "T2", "T3"]);

        let first = &table.records()[0];
        assert_eq!(first.description, "T1 gene=GeneA len=8");
        assert_eq!(first.sequence, "ACGTACGT");

        let second = &table.records()[1];
        assert_eq!(second.description, "T2");
        assert_eq!(second.sequence, "GGCC");

        assert_eq!(table.records()[2].sequence, "ACG");
        assert_eq!(table.total_length(), 15);
    }

    #[test]
    fn test_load_twice_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "t.fasta", FASTA);
        assert_eq!(load_fasta(&path).unwrap(), load_fasta(&path).unwrap());
    }

    #[test]
    fn test_gzip_matches_plain() {
        let dir = tempfile::tempdir().unwrap();
        let plain = write_file(dir.path(), "t.fasta", FASTA);
        let gz = write_gz_file(dir.path(), "t.fasta.gz", FASTA);
        assert_eq!(load_fasta(&plain).unwrap(), load_fasta(&gz).unwrap());
    }

    #[test]
    fn test_leading_blank_lines_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "t.fasta", "\n\n>T1\nAC\n");
        let table = load_fasta(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].sequence, "AC");
    }

    #[test]
    fn test_missing_marker_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "t.fasta", "\nACGT\n>T1\nAC\n");

        let err = load_fasta(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(matches!(err, LoadError::Format { line: Some(2), .. }));
    }

    #[test]
    fn test_description_keeps_header_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "t.fasta",
            ">T1\tgene=A  len=4\nACGT\n>T2  gene=B\nAC\n>T3 desc \nA\n>T4 \r\nC\n",
        );

        let table = load_fasta(&path).unwrap();
        let described: Vec<(&str, &str)> = table
            .iter()
            .map(|r| (r.id.as_str(), r.description.as_str()))
            .collect();
        assert_eq!(
            described,
            [
                ("T1", "T1\tgene=A  len=4"),
                ("T2", "T2  gene=B"),
                ("T3", "T3 desc"),
                ("T4", "T4"),
            ]
        );
        assert_eq!(table.records()[3].sequence, "C");
    }

    #[test]
    fn test_empty_header_has_empty_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "t.fasta", ">\nACGT\n>T2\nGG\n");

        let table = load_fasta(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].id, "");
        assert_eq!(table.records()[0].description, "");
        assert_eq!(table.records()[0].sequence, "ACGT");
    }

    #[test]
    fn test_invalid_utf8_header_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.fasta");
        std::fs::write(&path, b">T1\nACGT\nAC\n>T\xff2 bad\nGG\n").unwrap();

        let err = load_fasta(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(matches!(err, LoadError::Format { line: Some(4), .. }));
    }

    #[test]
    fn test_invalid_utf8_sequence_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.fasta");
        std::fs::write(&path, b">T1\nAC\xfeGT\n").unwrap();

        let err = load_fasta(&path).unwrap_err();
        assert!(matches!(err, LoadError::Format { line: Some(1), .. }));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "t.fasta", "");
        assert!(load_fasta(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_fasta(&dir.path().join("missing.fasta")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
