//! Error handling module for the ztok CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the ztok CLI application.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Error when the configuration cannot be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be used.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// One or more files did not pass the scan.
    #[error("Scan failed: {0}")]
    Scan(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ToolError.
pub type Result<T> = std::result::Result<T, ToolError>;
