//! Errors reported by the command line tool

use std::path::PathBuf;

use thiserror::Error;

use crate::error::BadcError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Invalid configuration in {0}: {1}")]
    ConfigError(PathBuf, String),

    #[error("Validation failed: {0}")]
    ValidationError(BadcError),

    #[error(transparent)]
    Badc(#[from] BadcError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
