//! Token definitions.
//!
//! [`TokenKind`] is the contract with the parser: one variant per keyword,
//! one per operator or punctuation spelling, plus symbols, literals and
//! end of input. A [`Token`] adds the source position and, for literals,
//! the decoded payload.

use std::fmt;
use std::sync::LazyLock;

use zc_util::{FxHashMap, Span};

use crate::bignum::BigNum;

/// The kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// End of input
    Eof,
    /// Identifier that is not a keyword, or an `@"..."` quoted name
    Symbol,
    /// `"..."`, `c"..."` or a `\\` line string
    StringLiteral,
    /// `'x'`
    CharLiteral,
    /// Integer or float literal
    NumberLiteral,

    // ===== Keywords =====
    /// `align`
    KwAlign,
    /// `and`
    KwAnd,
    /// `asm`
    KwAsm,
    /// `async`
    KwAsync,
    /// `await`
    KwAwait,
    /// `break`
    KwBreak,
    /// `cancel`
    KwCancel,
    /// `catch`
    KwCatch,
    /// `comptime`
    KwComptime,
    /// `const`
    KwConst,
    /// `continue`
    KwContinue,
    /// `defer`
    KwDefer,
    /// `else`
    KwElse,
    /// `enum`
    KwEnum,
    /// `errdefer`
    KwErrdefer,
    /// `error`
    KwError,
    /// `export`
    KwExport,
    /// `extern`
    KwExtern,
    /// `false`
    KwFalse,
    /// `fn`
    KwFn,
    /// `for`
    KwFor,
    /// `if`
    KwIf,
    /// `inline`
    KwInline,
    /// `nakedcc`
    KwNakedcc,
    /// `noalias`
    KwNoalias,
    /// `null`
    KwNull,
    /// `or`
    KwOr,
    /// `packed`
    KwPacked,
    /// `pub`
    KwPub,
    /// `resume`
    KwResume,
    /// `return`
    KwReturn,
    /// `section`
    KwSection,
    /// `stdcallcc`
    KwStdcallcc,
    /// `struct`
    KwStruct,
    /// `suspend`
    KwSuspend,
    /// `switch`
    KwSwitch,
    /// `test`
    KwTest,
    /// `this`
    KwThis,
    /// `true`
    KwTrue,
    /// `try`
    KwTry,
    /// `undefined`
    KwUndefined,
    /// `union`
    KwUnion,
    /// `unreachable`
    KwUnreachable,
    /// `use`
    KwUse,
    /// `var`
    KwVar,
    /// `volatile`
    KwVolatile,
    /// `while`
    KwWhile,

    // ===== Punctuation =====
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `#`
    NumberSign,
    /// `~`
    Tilde,
    /// `@`
    AtSign,
    /// `?`
    Question,
    /// `??`
    QuestionQuestion,
    /// `?=`
    QuestionEq,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `...`
    Ellipsis,

    // ===== Operators =====
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `=>`
    FatArrow,
    /// `!`
    Bang,
    /// `!=`
    BangEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `<<`
    Shl,
    /// `<<=`
    ShlEq,
    /// `<<%`
    ShlPercent,
    /// `<<%=`
    ShlPercentEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `>>`
    Shr,
    /// `>>=`
    ShrEq,
    /// `+`
    Plus,
    /// `+=`
    PlusEq,
    /// `++`
    PlusPlus,
    /// `+%`
    PlusPercent,
    /// `+%=`
    PlusPercentEq,
    /// `-`
    Minus,
    /// `-=`
    MinusEq,
    /// `->`
    Arrow,
    /// `-%`
    MinusPercent,
    /// `-%=`
    MinusPercentEq,
    /// `*`
    Star,
    /// `*=`
    StarEq,
    /// `**`
    StarStar,
    /// `*%`
    StarPercent,
    /// `*%=`
    StarPercentEq,
    /// `/`
    Slash,
    /// `/=`
    SlashEq,
    /// `%`
    Percent,
    /// `%=`
    PercentEq,
    /// `%%`
    PercentPercent,
    /// `&`
    Amp,
    /// `&=`
    AmpEq,
    /// `&&`
    AmpAmp,
    /// `|`
    Pipe,
    /// `|=`
    PipeEq,
    /// `||`
    PipePipe,
    /// `^`
    Caret,
    /// `^=`
    CaretEq,
}

use TokenKind::*;

/// Every keyword with its spelling.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("align", KwAlign),
    ("and", KwAnd),
    ("asm", KwAsm),
    ("async", KwAsync),
    ("await", KwAwait),
    ("break", KwBreak),
    ("cancel", KwCancel),
    ("catch", KwCatch),
    ("comptime", KwComptime),
    ("const", KwConst),
    ("continue", KwContinue),
    ("defer", KwDefer),
    ("else", KwElse),
    ("enum", KwEnum),
    ("errdefer", KwErrdefer),
    ("error", KwError),
    ("export", KwExport),
    ("extern", KwExtern),
    ("false", KwFalse),
    ("fn", KwFn),
    ("for", KwFor),
    ("if", KwIf),
    ("inline", KwInline),
    ("nakedcc", KwNakedcc),
    ("noalias", KwNoalias),
    ("null", KwNull),
    ("or", KwOr),
    ("packed", KwPacked),
    ("pub", KwPub),
    ("resume", KwResume),
    ("return", KwReturn),
    ("section", KwSection),
    ("stdcallcc", KwStdcallcc),
    ("struct", KwStruct),
    ("suspend", KwSuspend),
    ("switch", KwSwitch),
    ("test", KwTest),
    ("this", KwThis),
    ("true", KwTrue),
    ("try", KwTry),
    ("undefined", KwUndefined),
    ("union", KwUnion),
    ("unreachable", KwUnreachable),
    ("use", KwUse),
    ("var", KwVar),
    ("volatile", KwVolatile),
    ("while", KwWhile),
];

/// Every punctuation and operator kind.
pub const OPERATORS: &[TokenKind] = &[
    LParen, RParen, LBrace, RBrace, LBracket, RBracket, Comma, Semicolon, Colon, NumberSign,
    Tilde, AtSign, Question, QuestionQuestion, QuestionEq, Dot, DotDot, Ellipsis, Eq, EqEq,
    FatArrow, Bang, BangEq, Lt, LtEq, Shl, ShlEq, ShlPercent, ShlPercentEq, Gt, GtEq, Shr,
    ShrEq, Plus, PlusEq, PlusPlus, PlusPercent, PlusPercentEq, Minus, MinusEq, Arrow,
    MinusPercent, MinusPercentEq, Star, StarEq, StarStar, StarPercent, StarPercentEq, Slash,
    SlashEq, Percent, PercentEq, PercentPercent, Amp, AmpEq, AmpAmp, Pipe, PipeEq, PipePipe,
    Caret, CaretEq,
];

static KEYWORD_TABLE: LazyLock<FxHashMap<&'static [u8], TokenKind>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|&(text, kind)| (text.as_bytes(), kind))
        .collect()
});

impl TokenKind {
    /// Looks up the keyword spelled by `text`.
    ///
    /// # Example
    ///
    /// ```
    /// use zc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword(b"const"), Some(TokenKind::KwConst));
    /// assert_eq!(TokenKind::keyword(b"constant"), None);
    /// ```
    pub fn keyword(text: &[u8]) -> Option<TokenKind> {
        KEYWORD_TABLE.get(text).copied()
    }

    /// Check if this kind is a keyword.
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }

    /// Check if this kind is punctuation or an operator.
    pub fn is_operator(self) -> bool {
        OPERATORS.contains(&self)
    }

    /// Fixed source text of keywords and operators; a descriptive name for
    /// the other kinds.
    pub fn spelling(self) -> &'static str {
        match self {
            Eof => "end of file",
            Symbol => "symbol",
            StringLiteral => "string literal",
            CharLiteral => "character literal",
            NumberLiteral => "number literal",

            LParen => "(",
            RParen => ")",
            LBrace => "{",
            RBrace => "}",
            LBracket => "[",
            RBracket => "]",
            Comma => ",",
            Semicolon => ";",
            Colon => ":",
            NumberSign => "#",
            Tilde => "~",
            AtSign => "@",
            Question => "?",
            QuestionQuestion => "??",
            QuestionEq => "?=",
            Dot => ".",
            DotDot => "..",
            Ellipsis => "...",
            Eq => "=",
            EqEq => "==",
            FatArrow => "=>",
            Bang => "!",
            BangEq => "!=",
            Lt => "<",
            LtEq => "<=",
            Shl => "<<",
            ShlEq => "<<=",
            ShlPercent => "<<%",
            ShlPercentEq => "<<%=",
            Gt => ">",
            GtEq => ">=",
            Shr => ">>",
            ShrEq => ">>=",
            Plus => "+",
            PlusEq => "+=",
            PlusPlus => "++",
            PlusPercent => "+%",
            PlusPercentEq => "+%=",
            Minus => "-",
            MinusEq => "-=",
            Arrow => "->",
            MinusPercent => "-%",
            MinusPercentEq => "-%=",
            Star => "*",
            StarEq => "*=",
            StarStar => "**",
            StarPercent => "*%",
            StarPercentEq => "*%=",
            Slash => "/",
            SlashEq => "/=",
            Percent => "%",
            PercentEq => "%=",
            PercentPercent => "%%",
            Amp => "&",
            AmpEq => "&=",
            AmpAmp => "&&",
            Pipe => "|",
            PipeEq => "|=",
            PipePipe => "||",
            Caret => "^",
            CaretEq => "^=",

            keyword => KEYWORDS
                .iter()
                .find(|&&(_, kind)| kind == keyword)
                .map(|&(text, _)| text)
                .unwrap_or("keyword"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// Decoded content of a string literal or symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrLit {
    /// Decoded bytes, escapes already applied
    pub bytes: Vec<u8>,
    /// Set for `c"..."` and `c\\` literals
    pub is_c_string: bool,
}

impl StrLit {
    /// An empty literal of the given flavor.
    pub fn new(is_c_string: bool) -> Self {
        Self {
            bytes: Vec::new(),
            is_c_string,
        }
    }
}

/// Value of a number literal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumLit {
    /// Integer or float value
    pub value: BigNum,
    /// The literal does not fit its representation
    pub overflow: bool,
}

/// Literal payload carried by a token.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TokenData {
    /// No payload (keywords, operators, end of input)
    #[default]
    None,
    /// String literal or symbol text
    Str(StrLit),
    /// Character literal byte
    Char(u8),
    /// Number literal value
    Num(NumLit),
}

/// A positioned token.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,
    /// Line of the first byte (0-based)
    pub start_line: u32,
    /// Column of the first byte (0-based)
    pub start_column: u32,
    /// Offset of the first byte
    pub start_offset: usize,
    /// Offset one past the last byte
    pub end_offset: usize,
    /// Literal payload
    pub data: TokenData,
}

impl Token {
    /// Source span of this token.
    pub fn span(&self) -> Span {
        Span::new(
            self.start_offset,
            self.end_offset,
            self.start_line,
            self.start_column,
        )
    }

    /// Raw source text of this token.
    pub fn text<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        source
            .get(self.start_offset..self.end_offset)
            .unwrap_or_default()
    }

    /// Decoded string or symbol bytes.
    pub fn str_lit(&self) -> Option<&StrLit> {
        match &self.data {
            TokenData::Str(lit) => Some(lit),
            _ => None,
        }
    }

    /// Decoded character literal byte.
    pub fn char_value(&self) -> Option<u8> {
        match self.data {
            TokenData::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Number literal value.
    pub fn num_lit(&self) -> Option<&NumLit> {
        match &self.data {
            TokenData::Num(lit) => Some(lit),
            _ => None,
        }
    }
}
