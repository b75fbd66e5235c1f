//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, rendering, and collecting
//! front end diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use zc_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
//! use zc_util::span::Span;
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     Diagnostic::error("unterminated string", Span::point(0, 0, 0))
//!         .with_code(DiagnosticCode::E_LEX_UNTERMINATED_STRING),
//! );
//!
//! assert!(handler.has_errors());
//! ```

mod codes;

pub use codes::DiagnosticCode;

use crate::span::{LineIndex, Span};
use std::cell::RefCell;
use std::fmt;
use std::fmt::Write as _;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use zc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops the file from being accepted
    Error,
    /// A warning that doesn't stop anything
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use zc_util::diagnostic::Diagnostic;
    /// use zc_util::span::Span;
    ///
    /// let diag = Diagnostic::warning("number literal overflows u64", Span::DUMMY)
    ///     .with_note("the literal keeps its exact value");
    /// assert_eq!(diag.notes.len(), 1);
    /// ```
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Render the diagnostic against the file it points into.
    ///
    /// Lines and columns are printed 1-based. The offending source line is
    /// quoted with a caret under the span start when it can be resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use zc_util::diagnostic::{Diagnostic, DiagnosticCode};
    /// use zc_util::span::{LineIndex, Span};
    ///
    /// let source = b"const s = \"abc";
    /// let index = LineIndex::new(source);
    /// let diag = Diagnostic::error("unterminated string", Span::point(10, 0, 10))
    ///     .with_code(DiagnosticCode::E_LEX_UNTERMINATED_STRING);
    ///
    /// let text = diag.render("main.zc", source, &index);
    /// assert!(text.starts_with("error[E1003]: unterminated string\n"));
    /// assert!(text.contains("--> main.zc:1:11"));
    /// ```
    pub fn render(&self, file: &str, source: &[u8], index: &LineIndex) -> String {
        let line_no = (self.span.line + 1).to_string();
        let gutter = " ".repeat(line_no.len());

        let mut out = String::new();
        let _ = writeln!(out, "{}", self);
        let _ = writeln!(
            out,
            "{}--> {}:{}:{}",
            gutter,
            file,
            self.span.line + 1,
            self.span.column + 1
        );

        if let Ok(text) = index.line_text(source, self.span.line as usize) {
            let text = String::from_utf8_lossy(text);
            let _ = writeln!(out, "{} |", gutter);
            let _ = writeln!(out, "{} | {}", line_no, text);
            let _ = writeln!(
                out,
                "{} | {}^",
                gutter,
                " ".repeat(self.span.column as usize)
            );
        }

        for note in &self.notes {
            let _ = writeln!(out, "{} = note: {}", gutter, note);
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts. One handler serves one thread; collect per file and merge
/// afterwards when checking files in parallel.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Take all diagnostics out of the handler, leaving it empty.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
