//! Error types for the loaders.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Broad category of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file could not be opened or read
    Io,
    /// The file was read but its contents are malformed
    Format,
}

/// Errors raised while loading an input file.
///
/// No loader returns a partial table: any error aborts the whole call.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File missing, unreadable or permission denied
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed content
    #[error("Invalid format in {}{}: {message}", path.display(), line_suffix(*line))]
    Format {
        /// File being read
        path: PathBuf,
        /// 1-based line number, when known
        line: Option<u64>,
        /// What was wrong
        message: String,
    },

    /// A required column is absent from a tabular file
    #[error("Column '{column}' not found in {}", path.display())]
    MissingColumn {
        /// File being read
        path: PathBuf,
        /// Name of the missing column
        column: String,
    },
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, line: Option<u64>, message: impl Into<String>) -> Self {
        LoadError::Format {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn missing_column(path: &Path, column: &str) -> Self {
        LoadError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        }
    }

    /// Maps a `csv` error onto the taxonomy: I/O failures stay I/O,
    /// everything else (ragged rows, bad UTF-8) is a format error.
    pub(crate) fn from_csv(path: &Path, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        match err.into_kind() {
            csv::ErrorKind::Io(source) => LoadError::io(path, source),
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => LoadError::format(
                path,
                line,
                format!("expected {expected_len} fields, found {len}"),
            ),
            csv::ErrorKind::Utf8 { err, .. } => {
                LoadError::format(path, line, format!("invalid UTF-8: {err}"))
            }
            other => LoadError::format(path, line, format!("{other:?}")),
        }
    }

    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::Io { .. } => ErrorKind::Io,
            LoadError::Format { .. } | LoadError::MissingColumn { .. } => ErrorKind::Format,
        }
    }

    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Format { path, .. }
            | LoadError::MissingColumn { path, .. } => path,
        }
    }
}

fn line_suffix(line: Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let path = Path::new("a.txt");
        let io = LoadError::io(path, std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(io.kind(), ErrorKind::Io);
        assert_eq!(LoadError::format(path, None, "bad").kind(), ErrorKind::Format);
        assert_eq!(
            LoadError::missing_column(path, "gene_id").kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn test_format_message_includes_line() {
        let err = LoadError::format(Path::new("codebook.csv"), Some(7), "too few fields");
        assert_eq!(
            err.to_string(),
            "Invalid format in codebook.csv at line 7: too few fields"
        );
        let err = LoadError::format(Path::new("x.fa"), None, "no marker");
        assert_eq!(err.to_string(), "Invalid format in x.fa: no marker");
    }
}
