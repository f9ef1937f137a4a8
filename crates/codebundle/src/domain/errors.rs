//! Domain-specific errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BundleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("No valid languages specified.")]
    NoValidLanguages,
    #[error("No matching files found under {}.", .root.display())]
    NoFilesFound { root: PathBuf },
}
