//! Error types shared across Clipsheet crates.

use std::path::PathBuf;

/// Top-level error type for Clipsheet operations.
///
/// Validation violations are not errors; they are reported as data by the
/// processing core. This type covers the failures around it: unreadable
/// input, malformed edits, bad configuration.
#[derive(Debug, thiserror::Error)]
pub enum ClipsheetError {
    #[error("Clip error: {message}")]
    Clip { message: String },

    #[error("Edit error: {message}")]
    Edit { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ClipsheetError.
pub type ClipsheetResult<T> = Result<T, ClipsheetError>;

impl ClipsheetError {
    pub fn clip(msg: impl Into<String>) -> Self {
        Self::Clip {
            message: msg.into(),
        }
    }

    pub fn edit(msg: impl Into<String>) -> Self {
        Self::Edit {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
