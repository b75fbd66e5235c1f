//! Line index for translating byte offsets into line/column coordinates.
//!
//! The [`LineIndex`] wraps the table of line-start offsets produced while
//! scanning a buffer: offset 0 first, then the offset just past every
//! `\n`.

use std::ops::Range;

use crate::error::{SourceMapError, SourceMapResult};

/// Precomputed line start offsets for one source buffer
///
/// # Examples
///
/// ```
/// use zc_util::span::LineIndex;
///
/// let index = LineIndex::new(b"line1\nline2\nline3");
/// assert_eq!(index.line_count(), 3);
/// assert_eq!(index.offset_to_line_col(8), (1, 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Compute the line table of a buffer.
    pub fn new(content: &[u8]) -> Self {
        let mut line_starts = Vec::new();
        line_starts.push(0);

        for (i, &byte) in content.iter().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }

        Self { line_starts }
    }

    /// Wrap a line table recorded elsewhere (e.g. by the scanner).
    ///
    /// The table must start with 0 and be strictly increasing.
    ///
    /// # Examples
    ///
    /// ```
    /// use zc_util::span::LineIndex;
    ///
    /// assert!(LineIndex::from_offsets(vec![0, 4, 9]).is_ok());
    /// assert!(LineIndex::from_offsets(vec![3]).is_err());
    /// assert!(LineIndex::from_offsets(vec![0, 4, 4]).is_err());
    /// ```
    pub fn from_offsets(line_starts: Vec<usize>) -> SourceMapResult<Self> {
        match line_starts.first() {
            Some(0) => {},
            Some(first) => {
                return Err(SourceMapError::InvalidLineTable(format!(
                    "first line starts at {} instead of 0",
                    first
                )))
            },
            None => return Err(SourceMapError::InvalidLineTable("table is empty".to_string())),
        }

        if let Some(pair) = line_starts.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(SourceMapError::InvalidLineTable(format!(
                "line start {} does not follow {}",
                pair[1], pair[0]
            )));
        }

        Ok(Self { line_starts })
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The raw line-start table.
    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.line_starts
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    ///
    /// Returns `None` if the line number is out of bounds.
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to 0-based (line, column) coordinates
    ///
    /// Column is measured in bytes from the start of the line.
    pub fn offset_to_line_col(&self, offset: usize) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            // insert_point is never 0 because the table starts at 0
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let column = offset - self.line_starts[line];
        (line as u32, column as u32)
    }

    /// Byte range of a line, excluding its terminating newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use zc_util::span::LineIndex;
    ///
    /// let source = b"ab\ncde\n";
    /// let index = LineIndex::new(source);
    /// assert_eq!(index.line_range(1, source.len()).unwrap(), 3..6);
    /// assert_eq!(index.line_range(2, source.len()).unwrap(), 7..7);
    /// ```
    pub fn line_range(&self, line: usize, content_len: usize) -> SourceMapResult<Range<usize>> {
        let start = self
            .line_start(line)
            .ok_or(SourceMapError::InvalidLineNumber {
                line,
                max_lines: self.line_count(),
            })?;
        let end = match self.line_start(line + 1) {
            Some(next) => next - 1,
            None => content_len,
        };

        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > content_len {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: content_len,
                span_start: start,
                span_end: end,
            });
        }

        Ok(start..end)
    }

    /// Get a specific source line (0-indexed), without `\n` or a trailing `\r`.
    pub fn line_text<'s>(&self, content: &'s [u8], line: usize) -> SourceMapResult<&'s [u8]> {
        let range = self.line_range(line, content.len())?;
        let text = &content[range];
        Ok(text.strip_suffix(b"\r").unwrap_or(text))
    }
}
