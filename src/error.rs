//! Error types for the publishing pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library
#[derive(Error, Debug)]
pub enum Error {
    #[error("entry file not found: {0:?}")]
    FileNotFound(PathBuf),

    #[error("invalid entry format: expected a title and a body separated by `---` lines")]
    Format,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read entry list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read site config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
