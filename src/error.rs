use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to open file {path}: {source}")]
    FileOpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Failed to compile address pattern: {0}")]
    PatternError(#[from] regex::Error),
}
