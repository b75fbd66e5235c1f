//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations as
//! byte offsets plus the line/column where the range starts, and the
//! [`LineIndex`] used to translate offsets back to line/column.
//!
//! Lines and columns are 0-based throughout the front end; renderers add 1
//! when printing them for humans.
//!
//! # Examples
//!
//! ```
//! use zc_util::span::Span;
//!
//! // A token covering bytes 10..20 that starts on line 1, column 5
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//! ```

mod line_index;

pub use line_index::LineIndex;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end)
/// - Line and column numbers of `start` (for human-readable output)
///
/// # Examples
///
/// ```
/// use zc_util::span::Span;
///
/// // Create a span with byte offsets and line/column info
/// let span = Span::new(10, 20, 1, 5);
///
/// // Create a point span (single location)
/// let point = Span::point(42, 3, 0);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number of `start` (0-based)
    pub line: u32,
    /// Column number of `start` (0-based, in bytes)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use zc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (0-based)
    /// * `column` - Column number (0-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single location.
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Check if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}
