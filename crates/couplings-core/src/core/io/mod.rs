pub mod contact_csv;
pub mod coupling_csv;
pub mod traits;

use thiserror::Error;

/// A non-fatal diagnostic for a single skipped input row.
///
/// Malformed rows are an expected condition in real coupling datasets; the
/// parsers report them alongside the successfully built container instead
/// of aborting the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number in the source file, 0 when unknown.
    pub line: u64,
    pub reason: String,
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Fatal failures while reading a dataset file. Per-row problems are never
/// fatal; they surface as [`ParseWarning`]s instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required column '{0}' in header")]
    MissingColumn(&'static str),
}
