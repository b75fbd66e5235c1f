//! Scanner module.
//!
//! The scanner is a byte-at-a-time state machine. The driver loop peeks the
//! next byte and hands it to the current state, which either consumes it or
//! holds it so the state it switched to sees the same byte again. Holding is
//! the only form of lookahead; nothing is ever pushed back.
//!
//! A token is opened when its first byte is seen and committed to the output
//! only when its final transition fires. A `//` cancels the open `/` token
//! instead of retracting an emitted one.
//!
//! The transitions are split by concern:
//! - `symbol` - identifiers, keywords and the `c` prefix
//! - `number` - integer and float literals, float construction
//! - `string` - quoted strings, escapes, character literals, line strings
//! - `operator` - punctuation and greedy operator extension
//! - `comment` - line comments

mod comment;
mod number;
mod operator;
mod string;
mod symbol;

use tracing::{debug, trace};
use zc_util::{LineIndex, SourceMapResult};

use crate::cursor::{Cursor, Position};
use crate::error::{LexErrorKind, ScanError};
use crate::token::{StrLit, Token, TokenData, TokenKind};
use crate::unicode::{is_ident_start, is_whitespace};

use number::NumberLit;
use string::{CharCode, EscapeTarget};

pub use number::build_radix_float;

/// Result of scanning one buffer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tokenized {
    /// Tokens in source order; the last one is always `Eof`
    pub tokens: Vec<Token>,
    /// Offset 0, then the offset after every `\n`
    pub line_offsets: Vec<usize>,
    /// The error that stopped the scan, if any
    pub error: Option<ScanError>,
}

impl Tokenized {
    /// Check if the scan finished without error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Line index over the recorded line starts.
    pub fn line_index(&self) -> SourceMapResult<LineIndex> {
        LineIndex::from_offsets(self.line_offsets.clone())
    }

    /// 0-based line and column of a byte offset.
    pub fn location(&self, offset: usize) -> (u32, u32) {
        let line = self
            .line_offsets
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let start = self.line_offsets.get(line).copied().unwrap_or(0);
        (line as u32, offset.saturating_sub(start) as u32)
    }

    /// Tokens whose number literal overflowed its representation.
    pub fn overflowed(&self) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .filter(|token| token.num_lit().is_some_and(|lit| lit.overflow))
    }
}

/// What the driver does with the byte a state was shown.
enum Step {
    /// Advance past the byte
    Consume,
    /// Leave the byte for the next state
    Hold,
}

/// Scanner states. Each variant carries the data only it needs.
enum State {
    Start,
    Symbol(Vec<u8>),
    SymbolFirstC,
    Zero,
    Number(NumberLit),
    /// Integer followed by `.`; remembers where the dot is in case a second
    /// dot turns it into `..`.
    NumberDot(NumberLit, Position),
    FloatFraction(NumberLit),
    FloatExponentUnsigned(NumberLit),
    FloatExponentNumber(NumberLit),
    String(StrLit),
    StringEscape(EscapeTarget),
    CharCode(CharCode),
    CharLiteral,
    CharLiteralEnd(u8),
    LineStringStart(StrLit),
    LineString(StrLit),
    /// Line string whose last line ended; holds the offset of that newline.
    LineStringEnd(StrLit, usize),
    LineStringContinue(StrLit),
    LineStringContinueC(StrLit),
    Operator(TokenKind),
    LineComment,
    Error,
}

/// The token currently being built.
struct Pending {
    kind: TokenKind,
    start: Position,
}

/// Scanner for one source buffer.
///
/// # Example
///
/// ```
/// use zc_lex::{Scanner, TokenKind};
///
/// let result = Scanner::new(b"const x = 1;\n").run();
/// let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::KwConst,
///         TokenKind::Symbol,
///         TokenKind::Eq,
///         TokenKind::NumberLiteral,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: State,
    pending: Option<Pending>,
    tokens: Vec<Token>,
    error: Option<ScanError>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
            state: State::Start,
            pending: None,
            tokens: Vec::new(),
            error: None,
        }
    }

    /// Scans the whole buffer.
    ///
    /// Never panics and never stops early: after an error the remaining
    /// bytes are still walked so the line table is complete.
    pub fn run(mut self) -> Tokenized {
        while let Some(byte) = self.cursor.peek() {
            if let Step::Consume = self.step(byte) {
                self.cursor.bump();
            }
        }
        self.finish();

        let eof = self.eof_token();
        self.tokens.push(eof);

        debug!(
            bytes = self.cursor.source().len(),
            tokens = self.tokens.len(),
            lines = self.cursor.line_offsets().len(),
            failed = self.error.is_some(),
            "scan finished"
        );

        Tokenized {
            tokens: self.tokens,
            line_offsets: self.cursor.into_line_offsets(),
            error: self.error,
        }
    }

    fn step(&mut self, byte: u8) -> Step {
        match std::mem::replace(&mut self.state, State::Start) {
            State::Start => self.start(byte),
            State::Symbol(text) => self.symbol(text, byte),
            State::SymbolFirstC => self.symbol_first_c(byte),
            State::Zero => self.zero(byte),
            State::Number(lit) => self.number(lit, byte),
            State::NumberDot(lit, dot) => self.number_dot(lit, dot, byte),
            State::FloatFraction(lit) => self.float_fraction(lit, byte),
            State::FloatExponentUnsigned(lit) => self.float_exponent_unsigned(lit, byte),
            State::FloatExponentNumber(lit) => self.float_exponent_number(lit, byte),
            State::String(lit) => self.string(lit, byte),
            State::StringEscape(target) => self.string_escape(target, byte),
            State::CharCode(code) => self.char_code(code, byte),
            State::CharLiteral => self.char_literal(byte),
            State::CharLiteralEnd(value) => self.char_literal_end(value, byte),
            State::LineStringStart(lit) => self.line_string_start(lit, byte),
            State::LineString(lit) => self.line_string(lit, byte),
            State::LineStringEnd(lit, end) => self.line_string_end(lit, end, byte),
            State::LineStringContinue(lit) => self.line_string_continue(lit, byte),
            State::LineStringContinueC(lit) => self.line_string_continue_c(lit, byte),
            State::Operator(kind) => self.operator(kind, byte),
            State::LineComment => self.line_comment(byte),
            State::Error => {
                self.state = State::Error;
                Step::Consume
            },
        }
    }

    fn start(&mut self, byte: u8) -> Step {
        match byte {
            b if is_whitespace(b) => {},
            b'c' => {
                self.begin(TokenKind::Symbol);
                self.state = State::SymbolFirstC;
            },
            b if is_ident_start(b) => {
                self.begin(TokenKind::Symbol);
                self.state = State::Symbol(vec![b]);
            },
            b'0' => {
                self.begin(TokenKind::NumberLiteral);
                self.state = State::Zero;
            },
            b'1'..=b'9' => {
                self.begin(TokenKind::NumberLiteral);
                self.state = State::Number(NumberLit::decimal(byte - b'0'));
            },
            b'"' => {
                self.begin(TokenKind::StringLiteral);
                self.state = State::String(StrLit::new(false));
            },
            b'\'' => {
                self.begin(TokenKind::CharLiteral);
                self.state = State::CharLiteral;
            },
            b'\\' => {
                self.begin(TokenKind::StringLiteral);
                self.state = State::LineStringStart(StrLit::new(false));
            },
            b => match operator::start_kind(b) {
                Some((kind, true)) => {
                    self.begin(kind);
                    self.emit_through(TokenData::None);
                },
                Some((kind, false)) => {
                    self.begin(kind);
                    self.state = State::Operator(kind);
                },
                None => return self.fail(LexErrorKind::InvalidCharacter(b)),
            },
        }
        Step::Consume
    }

    /// Applies the end-of-input rule of the current state.
    fn finish(&mut self) {
        match std::mem::replace(&mut self.state, State::Start) {
            State::Start | State::LineComment | State::Error => {},
            State::Symbol(text) => self.emit_symbol(text),
            State::SymbolFirstC => self.emit_symbol(vec![b'c']),
            State::Zero => self.emit_number(NumberLit::decimal(0)),
            State::Number(lit)
            | State::FloatFraction(lit)
            | State::FloatExponentNumber(lit) => {
                if lit.is_complete() {
                    self.emit_number(lit);
                } else {
                    self.fail(LexErrorKind::UnterminatedNumber);
                }
            },
            State::NumberDot(lit, _) => self.emit_number(lit.into_float()),
            State::FloatExponentUnsigned(_) => {
                self.fail(LexErrorKind::UnterminatedNumber);
            },
            State::String(_) => {
                self.fail(LexErrorKind::UnterminatedString);
            },
            State::StringEscape(target) | State::CharCode(CharCode { target, .. }) => {
                self.fail(target.unterminated());
            },
            State::CharLiteral | State::CharLiteralEnd(_) => {
                self.fail(LexErrorKind::UnterminatedChar);
            },
            State::LineStringStart(_)
            | State::LineStringContinue(_)
            | State::LineStringContinueC(_) => {
                self.fail(LexErrorKind::UnexpectedEof);
            },
            State::LineString(lit) => self.emit_before(TokenData::Str(lit)),
            State::LineStringEnd(lit, end) => self.commit(TokenData::Str(lit), end),
            State::Operator(_) => self.emit_before(TokenData::None),
        }
    }

    fn eof_token(&self) -> Token {
        let at = if self.tokens.is_empty() {
            Position::default()
        } else {
            self.cursor.mark()
        };
        Token {
            kind: TokenKind::Eof,
            start_line: at.line,
            start_column: at.column,
            start_offset: at.offset,
            end_offset: at.offset,
            data: TokenData::None,
        }
    }

    /// Opens a token at the byte under the cursor.
    fn begin(&mut self, kind: TokenKind) {
        self.begin_at(kind, self.cursor.mark());
    }

    fn begin_at(&mut self, kind: TokenKind, start: Position) {
        self.pending = Some(Pending { kind, start });
    }

    /// Re-tags the open token.
    fn set_kind(&mut self, kind: TokenKind) {
        if let Some(pending) = &mut self.pending {
            pending.kind = kind;
        }
    }

    /// Drops the open token without emitting it.
    fn cancel(&mut self) {
        self.pending = None;
    }

    fn pending_start(&self) -> usize {
        self.pending
            .as_ref()
            .map_or(self.cursor.position(), |pending| pending.start.offset)
    }

    /// Commits the open token, ending at `end`.
    fn commit(&mut self, data: TokenData, end: usize) {
        if let Some(Pending { kind, start }) = self.pending.take() {
            self.tokens.push(Token {
                kind,
                start_line: start.line,
                start_column: start.column,
                start_offset: start.offset,
                end_offset: end,
                data,
            });
        }
    }

    /// Commits the open token including the byte under the cursor.
    fn emit_through(&mut self, data: TokenData) {
        let end = self.cursor.position() + 1;
        self.commit(data, end);
    }

    /// Commits the open token ending before the byte under the cursor.
    fn emit_before(&mut self, data: TokenData) {
        let end = self.cursor.position();
        self.commit(data, end);
    }

    /// Records the first error and enters the absorbing error state.
    fn fail(&mut self, kind: LexErrorKind) -> Step {
        let at = match self.pending.take() {
            Some(pending) => pending.start,
            None => self.cursor.mark(),
        };
        trace!(line = at.line, column = at.column, error = %kind, "scan error");

        if self.error.is_none() {
            self.error = Some(ScanError {
                line: at.line,
                column: at.column,
                offset: at.offset,
                kind,
            });
        }
        self.state = State::Error;
        Step::Consume
    }
}
