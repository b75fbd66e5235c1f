//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while stepping through the source one byte at a time. It tracks 0-based
//! line/column information and records the offset of every line start as
//! newlines are consumed.

/// A location in the source: byte offset plus 0-based line and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    /// Byte offset into the source
    pub offset: usize,
    /// Line number (0-based)
    pub line: u32,
    /// Column number (0-based, in bytes)
    pub column: u32,
}

/// A cursor for traversing source code byte by byte.
///
/// The cursor only moves forward. Lookahead is done with [`Cursor::peek`],
/// which never consumes; the scanner decides per byte whether to consume it
/// with [`Cursor::bump`] or leave it for the next state.
///
/// # Example
///
/// ```
/// use zc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"a\nb");
/// assert_eq!(cursor.peek(), Some(b'a'));
/// cursor.bump();
/// cursor.bump();
/// assert_eq!((cursor.line(), cursor.column()), (1, 0));
/// assert_eq!(cursor.line_offsets(), &[0, 2]);
/// ```
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (0-based).
    line: u32,

    /// Current column number (0-based, in bytes).
    column: u32,

    /// Offset of every line start seen so far; always starts with 0.
    line_offsets: Vec<usize>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 0,
            column: 0,
            line_offsets: vec![0],
        }
    }

    /// Returns the byte under the cursor without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.position).copied()
    }

    /// Consumes one byte, updating line/column tracking.
    ///
    /// Returns `None` (and does nothing) at end of input.
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.position += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 0;
            self.line_offsets.push(self.position);
        } else {
            self.column += 1;
        }
        Some(b)
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line (0-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column (0-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Snapshot of the current location.
    #[inline]
    pub fn mark(&self) -> Position {
        Position {
            offset: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// The full source buffer.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Line starts recorded so far.
    pub fn line_offsets(&self) -> &[usize] {
        &self.line_offsets
    }

    /// Consumes the cursor, returning the recorded line starts.
    pub fn into_line_offsets(self) -> Vec<usize> {
        self.line_offsets
    }
}
