//! zc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Foundation types shared by the zc front end crates:
//!
//! - [`span`] - byte ranges with line/column, and the [`LineIndex`] built
//!   from a line-offset table.
//! - [`diagnostic`] - severity levels, diagnostic codes and a collecting
//!   [`Handler`].
//! - [`error`] - error types for the utilities in this crate.
//
// LINE INDEX:
// -----------
// The scanner records one entry per newline while it walks the source:
//
// ```
// source:   "ab\ncd\n\nef"
// offsets:   0    3    6  7
//            ^    ^    ^  ^
//            line 0    2  3
//                 1
// ```
//
// Translating an offset back to (line, column) is a binary search for the
// last line start <= offset; the column is the byte distance from it.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{LineIndex, Span};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
