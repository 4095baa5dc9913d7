//! Error types for table ingestion.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not UTF-8 (legacy cp949/euc-kr exports must be converted first).
    #[error("{path} is not valid UTF-8")]
    Encoding { path: PathBuf },

    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// No non-empty record to use as the header.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    #[error("failed to write CSV: {0}")]
    CsvWrite(#[from] csv::Error),

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    #[error(transparent)]
    Model(#[from] popnorm_model::ModelError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
