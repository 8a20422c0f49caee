//! Error types for NieR.EXPer
//!
//! Uses `thiserror` for library errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for EXPer operations
pub type ExperResult<T> = Result<T, ExperError>;

/// Main error type for EXPer operations
#[derive(Error, Debug)]
pub enum ExperError {
    /// Slot file does not exist at save/load time
    #[error("slot not found: {path}")]
    SlotNotFound { path: PathBuf },

    /// Slot path does not end in a file name
    #[error("cannot infer file name from slot path '{path}'")]
    NoFileName { path: PathBuf },

    /// Slot path has no containing directory
    #[error("cannot infer directory from slot path '{path}'")]
    NoDirectory { path: PathBuf },

    /// Invalid configuration TOML
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
