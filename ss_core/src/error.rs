use serde_json;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, crate::error::ErrorCore>;

#[derive(Debug, Error)]
pub enum ErrorCore {
    #[error("Failed to parse JSON {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Sentence list '{0}' is empty")]
    EmptySentenceList(String),

    #[error("Dimension mismatch: expected {expected}, found {found} (vector {index} of list {list})")]
    DimensionMismatch {
        list: &'static str,
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Similarity matrix shape {rows}x{cols} does not match {len} scores")]
    MatrixShape { rows: usize, cols: usize, len: usize },

    #[error("Row {row} is out of range for a matrix with {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },
}
