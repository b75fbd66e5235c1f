//! Operator and punctuation scanning.
//!
//! The open operator token's kind doubles as its state. [`extend`] is the
//! transition table: it says which byte turns a spelling into a longer
//! one, so `<` becomes `<<`, `<<%` and finally `<<%=` as long as the input
//! keeps matching. The first byte that does not extend the spelling ends
//! the token and is left for the next one.

use crate::error::LexErrorKind;
use crate::token::{StrLit, TokenData, TokenKind};
use crate::unicode::is_ident_continue;

use super::{Scanner, State, Step};

/// Kind of the token a byte starts in the initial state, and whether that
/// byte is already the whole token.
pub(super) fn start_kind(byte: u8) -> Option<(TokenKind, bool)> {
    use TokenKind::*;

    let started = match byte {
        b'(' => (LParen, true),
        b')' => (RParen, true),
        b'{' => (LBrace, true),
        b'}' => (RBrace, true),
        b'[' => (LBracket, true),
        b']' => (RBracket, true),
        b',' => (Comma, true),
        b';' => (Semicolon, true),
        b':' => (Colon, true),
        b'#' => (NumberSign, true),
        b'~' => (Tilde, true),
        b'?' => (Question, false),
        b'.' => (Dot, false),
        b'=' => (Eq, false),
        b'!' => (Bang, false),
        b'<' => (Lt, false),
        b'>' => (Gt, false),
        b'+' => (Plus, false),
        b'-' => (Minus, false),
        b'*' => (Star, false),
        b'/' => (Slash, false),
        b'%' => (Percent, false),
        b'&' => (Amp, false),
        b'|' => (Pipe, false),
        b'^' => (Caret, false),
        b'@' => (AtSign, false),
        _ => return None,
    };
    Some(started)
}

/// The longer spelling formed by appending `byte` to `kind`, if any.
pub(super) fn extend(kind: TokenKind, byte: u8) -> Option<TokenKind> {
    use TokenKind::*;

    let longer = match (kind, byte) {
        (Question, b'?') => QuestionQuestion,
        (Question, b'=') => QuestionEq,
        (Dot, b'.') => DotDot,
        (DotDot, b'.') => Ellipsis,
        (Eq, b'=') => EqEq,
        (Eq, b'>') => FatArrow,
        (Bang, b'=') => BangEq,
        (Lt, b'=') => LtEq,
        (Lt, b'<') => Shl,
        (Shl, b'=') => ShlEq,
        (Shl, b'%') => ShlPercent,
        (ShlPercent, b'=') => ShlPercentEq,
        (Gt, b'=') => GtEq,
        (Gt, b'>') => Shr,
        (Shr, b'=') => ShrEq,
        (Plus, b'=') => PlusEq,
        (Plus, b'+') => PlusPlus,
        (Plus, b'%') => PlusPercent,
        (PlusPercent, b'=') => PlusPercentEq,
        (Minus, b'=') => MinusEq,
        (Minus, b'>') => Arrow,
        (Minus, b'%') => MinusPercent,
        (MinusPercent, b'=') => MinusPercentEq,
        (Star, b'=') => StarEq,
        (Star, b'*') => StarStar,
        (Star, b'%') => StarPercent,
        (StarPercent, b'=') => StarPercentEq,
        (Slash, b'=') => SlashEq,
        (Percent, b'=') => PercentEq,
        (Percent, b'%') => PercentPercent,
        (Amp, b'=') => AmpEq,
        (Amp, b'&') => AmpAmp,
        (Pipe, b'=') => PipeEq,
        (Pipe, b'|') => PipePipe,
        (Caret, b'=') => CaretEq,
        _ => return None,
    };
    Some(longer)
}

impl Scanner<'_> {
    pub(super) fn operator(&mut self, kind: TokenKind, byte: u8) -> Step {
        if let Some(longer) = extend(kind, byte) {
            self.set_kind(longer);
            self.state = State::Operator(longer);
            return Step::Consume;
        }

        match (kind, byte) {
            (TokenKind::Slash, b'/') => {
                self.cancel();
                self.state = State::LineComment;
                Step::Consume
            },
            (TokenKind::AtSign, b'"') => {
                self.set_kind(TokenKind::Symbol);
                self.state = State::String(StrLit::new(false));
                Step::Consume
            },
            // no symbol may start with `%`
            (TokenKind::Percent, b) if is_ident_continue(b) => {
                self.fail(LexErrorKind::InvalidCharacter(b'%'))
            },
            _ => {
                self.emit_before(TokenData::None);
                Step::Hold
            },
        }
    }
}
