//! Symbol and keyword scanning.

use crate::token::{StrLit, TokenData, TokenKind};
use crate::unicode::is_ident_continue;

use super::{Scanner, State, Step};

impl Scanner<'_> {
    pub(super) fn symbol(&mut self, mut text: Vec<u8>, byte: u8) -> Step {
        if is_ident_continue(byte) {
            text.push(byte);
            self.state = State::Symbol(text);
            Step::Consume
        } else {
            self.emit_symbol(text);
            Step::Hold
        }
    }

    /// A leading `c` may open a C string (`c"`) or a C line string (`c\\`).
    pub(super) fn symbol_first_c(&mut self, byte: u8) -> Step {
        match byte {
            b'"' => {
                self.set_kind(TokenKind::StringLiteral);
                self.state = State::String(StrLit::new(true));
                Step::Consume
            },
            b'\\' => {
                self.set_kind(TokenKind::StringLiteral);
                self.state = State::LineStringStart(StrLit::new(true));
                Step::Consume
            },
            b if is_ident_continue(b) => {
                self.state = State::Symbol(vec![b'c', b]);
                Step::Consume
            },
            _ => {
                self.emit_symbol(vec![b'c']);
                Step::Hold
            },
        }
    }

    /// Commits the open symbol, re-tagged if it spells a keyword.
    pub(super) fn emit_symbol(&mut self, text: Vec<u8>) {
        match TokenKind::keyword(&text) {
            Some(keyword) => {
                self.set_kind(keyword);
                self.emit_before(TokenData::None);
            },
            None => self.emit_before(TokenData::Str(StrLit {
                bytes: text,
                is_c_string: false,
            })),
        }
    }
}
