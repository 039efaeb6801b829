//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading CSV text.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read standard input.
    #[error("failed to read standard input: {0}")]
    StdinRead(#[source] std::io::Error),

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path} (only UTF-8 is supported)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File bytes are not valid UTF-8.
    #[error("{path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    /// No CSV content after trimming whitespace.
    #[error("no CSV content: paste CSV text or provide a file first")]
    EmptyInput,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
