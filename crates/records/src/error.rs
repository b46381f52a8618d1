use core_types::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to open record file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}, field '{field}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Invalid record: {0}")]
    Record(#[from] CoreError),
}

impl RecordError {
    /// True when the input itself is bad, as opposed to the file being unreadable.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, RecordError::InvalidNumber { .. } | RecordError::Record(_))
    }
}
