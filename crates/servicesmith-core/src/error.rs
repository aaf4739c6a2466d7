//! Error handling for the servicesmith generation library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! # Examples
//!
//! ```
//! use servicesmith_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     // Operations that might fail...
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for servicesmith generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for servicesmith generation operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required option is missing or invalid
    #[error("validation error: {0}")]
    Validation(String),

    /// Source file could not be read or is not valid Rust
    #[error("parse error: {0}")]
    Parse(String),

    /// Requested template identifier is not in the catalog
    #[error("unknown template - {0}")]
    UnknownTemplate(String),

    /// Template error
    #[error("template error: {0}")]
    Template(String),

    /// Template engine error
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Rendered output was rejected by the source formatter
    #[error("format error: {0}")]
    Format(String),

    /// Scaffolding destination already exists
    #[error("directory {0} already exists")]
    ExistingDestination(PathBuf),
}

impl Error {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Self::Template(msg.into())
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Validation(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Validation(s)
    }
}
