use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column '{column}' has {actual} values, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("empty keyword in {role} keyword set")]
    EmptyKeyword { role: &'static str },
    #[error("read keyword file {path}: {source}")]
    KeywordIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse keyword config: {0}")]
    KeywordParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
