//! Error types for topofetch
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },
}

/// Transfer errors
#[derive(Error, Debug)]
pub enum TransferError {
    /// Network error (DNS, connection refused, protocol failure)
    #[error("Network error fetching '{url}': {error}")]
    Network { url: String, error: String },

    /// Server answered with a non-success status
    #[error("Server returned HTTP {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// IO error while writing the response body
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

/// Settings file errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read the settings file
    #[error("Failed to read settings file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Settings file is not valid TOML
    #[error("Failed to parse settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
