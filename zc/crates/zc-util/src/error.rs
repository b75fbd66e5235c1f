//! Core error types for zc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for line index operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start offset
        start: usize,
        /// End offset, less than `start`
        end: usize,
    },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Source length in bytes
        file_len: usize,
        /// Requested start offset
        span_start: usize,
        /// Requested end offset
        span_end: usize,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (0-based)
        line: usize,
        /// Number of lines in the file
        max_lines: usize,
    },

    /// Line offsets are not a valid table
    #[error("Invalid line table: {0}")]
    InvalidLineTable(String),
}

/// Result type alias for line index operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
