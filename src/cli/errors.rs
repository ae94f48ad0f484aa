use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file not found: {path:?}")]
    MissingInput { path: PathBuf },

    #[error("Config file not found: {path:?}")]
    MissingConfig { path: PathBuf },

    #[error("{invalid} of {lines} lines could not be decoded")]
    InvalidLines { invalid: usize, lines: usize },

    #[error(transparent)]
    Numerus(#[from] numerus::Error),
}
