//! Scan error types.

use std::fmt;

use thiserror::Error;
use zc_util::{Diagnostic, DiagnosticCode, Span};

/// Displays a byte as a quoted character, escaping anything unprintable.
struct ByteDisplay(u8);

impl fmt::Display for ByteDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            b'\n' => f.write_str("'\\n'"),
            b'\t' => f.write_str("'\\t'"),
            b'\r' => f.write_str("'\\r'"),
            b'\'' => f.write_str("'\\''"),
            b if b.is_ascii_graphic() || b == b' ' => write!(f, "'{}'", b as char),
            b => write!(f, "'\\x{:02x}'", b),
        }
    }
}

/// What went wrong during a scan.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LexErrorKind {
    /// Byte not allowed in the current state
    #[error("invalid character: {}", ByteDisplay(*.0))]
    InvalidCharacter(u8),

    /// Digit outside the literal's radix
    #[error("invalid digit {} for base {radix}", ByteDisplay(*.digit))]
    InvalidDigit {
        /// The offending byte
        digit: u8,
        /// Radix in effect
        radix: u32,
    },

    /// Input ended inside a string literal or its escape
    #[error("unterminated string")]
    UnterminatedString,

    /// Input ended inside a character literal or its escape
    #[error("unterminated character literal")]
    UnterminatedChar,

    /// Input ended after a radix prefix or exponent marker with no digits
    #[error("unterminated number literal")]
    UnterminatedNumber,

    /// Raw newline inside a quoted string
    #[error("newline not allowed in string literal")]
    NewlineInString,

    /// `\u`/`\U` escape above `0x10FFFF`
    #[error("unicode value out of range: 0x{0:x}")]
    UnicodeOutOfRange(u32),

    /// Escape encodes to more than one byte inside a character literal
    #[error("unicode value too large for character literal: 0x{0:x}")]
    CharLiteralTooLarge(u32),

    /// Input ended inside a line string marker
    #[error("unexpected end of file")]
    UnexpectedEof,
}

impl LexErrorKind {
    /// Diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexErrorKind::InvalidCharacter(_) => DiagnosticCode::E_LEX_INVALID_CHARACTER,
            LexErrorKind::InvalidDigit { .. } => DiagnosticCode::E_LEX_INVALID_DIGIT,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEX_UNTERMINATED_STRING,
            LexErrorKind::UnterminatedChar => DiagnosticCode::E_LEX_UNTERMINATED_CHAR,
            LexErrorKind::UnterminatedNumber => DiagnosticCode::E_LEX_UNTERMINATED_NUMBER,
            LexErrorKind::NewlineInString => DiagnosticCode::E_LEX_NEWLINE_IN_STRING,
            LexErrorKind::UnicodeOutOfRange(_) => DiagnosticCode::E_LEX_UNICODE_OUT_OF_RANGE,
            LexErrorKind::CharLiteralTooLarge(_) => DiagnosticCode::E_LEX_CHAR_TOO_LARGE,
            LexErrorKind::UnexpectedEof => DiagnosticCode::E_LEX_UNEXPECTED_EOF,
        }
    }
}

/// The error that stopped a scan, with the location it is reported at.
///
/// The location is the start of the token being built when the error hit,
/// or the offending byte if no token was open.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{}:{}: {kind}", .line + 1, .column + 1)]
pub struct ScanError {
    /// Line (0-based)
    pub line: u32,
    /// Column (0-based)
    pub column: u32,
    /// Byte offset
    pub offset: usize,
    /// What went wrong
    pub kind: LexErrorKind,
}

impl ScanError {
    /// The error message without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Zero-length span at the reported location.
    pub fn span(&self) -> Span {
        Span::point(self.offset, self.line, self.column)
    }

    /// Converts into a coded error diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.message(), self.span()).with_code(self.kind.code())
    }
}
