//! # Error Handling
//!
//! This module defines the centralized error type for `rulestitch`. It uses
//! `thiserror` to build an `Error` enum covering every failure that can escape
//! the engine as a hard error.
//!
//! Note that most problems met while resolving a single document are *not*
//! errors in this sense. Missing include targets, unreadable files and
//! circular includes are recorded in the document's own diagnostics so that a
//! sweep over a whole rule tree always completes. The variants below cover the
//! remaining surfaces:
//!
//! - Configuration reading and writing.
//! - Library installation (git clones, local copies).
//! - Output adapters (JSON serialization).
//! - Wrapped errors from I/O, YAML, JSON and glob parsing.

use thiserror::Error;

/// Main error type for rulestitch operations
#[derive(Error, Debug)]
pub enum Error {
    /// The persisted configuration file could not be parsed.
    ///
    /// Includes an optional hint about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The persisted configuration file could not be written.
    #[error("Configuration write error for {path}: {message}")]
    ConfigWrite { path: String, message: String },

    /// A rule library could not be installed.
    #[error("Library install error for {source_uri}: {message}")]
    Library { source_uri: String, message: String },

    /// An error occurred while cloning a Git repository.
    #[error("Git clone error for {url}{}: {message}", r#ref.as_ref().map(|r| format!("@{}", r)).unwrap_or_default())]
    GitClone {
        url: String,
        r#ref: Option<String>,
        message: String,
    },

    /// An error occurred with a filesystem operation.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
