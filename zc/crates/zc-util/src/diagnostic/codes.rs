//! Diagnostic codes for categorizing front end errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages.
//!
//! # Examples
//!
//! ```
//! use zc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_INVALID_CHARACTER;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Codes print as `{prefix}{number}` with the number padded to four digits.
/// Scanner errors live in the `E1xxx` range, scanner warnings in `W1xxx`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// ```
    /// use zc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 7);
    /// assert_eq!(code.as_str(), "W0007");
    /// ```
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix of this code
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier of this code
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // SCANNER ERRORS (E1001-E1999)
    // =========================================================================

    /// E1001: byte that cannot start or continue a token here
    pub const E_LEX_INVALID_CHARACTER: Self = Self::new("E", 1001);
    /// E1002: digit outside the literal's radix
    pub const E_LEX_INVALID_DIGIT: Self = Self::new("E", 1002);
    /// E1003: string literal not closed before end of input
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 1003);
    /// E1004: character literal not closed before end of input
    pub const E_LEX_UNTERMINATED_CHAR: Self = Self::new("E", 1004);
    /// E1005: radix prefix or exponent without digits
    pub const E_LEX_UNTERMINATED_NUMBER: Self = Self::new("E", 1005);
    /// E1006: raw newline inside a quoted string
    pub const E_LEX_NEWLINE_IN_STRING: Self = Self::new("E", 1006);
    /// E1007: unicode escape above U+10FFFF
    pub const E_LEX_UNICODE_OUT_OF_RANGE: Self = Self::new("E", 1007);
    /// E1008: unicode escape that does not fit a character literal
    pub const E_LEX_CHAR_TOO_LARGE: Self = Self::new("E", 1008);
    /// E1009: input ended inside a line string prefix
    pub const E_LEX_UNEXPECTED_EOF: Self = Self::new("E", 1009);

    // =========================================================================
    // SCANNER WARNINGS (W1001-W1999)
    // =========================================================================

    /// W1001: number literal does not fit its representation
    pub const W_LEX_NUMBER_OVERFLOW: Self = Self::new("W", 1001);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
