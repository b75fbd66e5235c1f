//! String, character and line-string literal scanning.
//!
//! All three share one escape decoder. An escape remembers whether it
//! belongs to a string, whose buffer travels with it, or to a character
//! literal, which can only hold a single byte.

use crate::error::LexErrorKind;
use crate::token::{StrLit, TokenData};
use crate::unicode::{encode_utf8, hex_digit_to_value, is_ident_continue, is_whitespace, MAX_CODEPOINT};

use super::{Scanner, State, Step};

/// Largest value a `\u`/`\U` escape may have inside a character literal.
const MAX_CHAR_LITERAL: u32 = 0x7F;

/// Where a decoded escape goes.
#[derive(Debug)]
pub(super) enum EscapeTarget {
    Str(StrLit),
    Char,
}

impl EscapeTarget {
    /// Error for input that ends inside the escape.
    pub(super) fn unterminated(&self) -> LexErrorKind {
        match self {
            EscapeTarget::Str(_) => LexErrorKind::UnterminatedString,
            EscapeTarget::Char => LexErrorKind::UnterminatedChar,
        }
    }
}

/// A fixed-width hex escape in progress: `\x` (2), `\u` (4) or `\U` (6).
#[derive(Debug)]
pub(super) struct CharCode {
    pub(super) target: EscapeTarget,
    width: u8,
    digits: u8,
    value: u32,
}

impl Scanner<'_> {
    pub(super) fn string(&mut self, mut lit: StrLit, byte: u8) -> Step {
        match byte {
            b'"' => {
                self.emit_through(TokenData::Str(lit));
                Step::Consume
            },
            b'\n' => self.fail(LexErrorKind::NewlineInString),
            b'\\' => {
                self.state = State::StringEscape(EscapeTarget::Str(lit));
                Step::Consume
            },
            b => {
                lit.bytes.push(b);
                self.state = State::String(lit);
                Step::Consume
            },
        }
    }

    pub(super) fn string_escape(&mut self, target: EscapeTarget, byte: u8) -> Step {
        let decoded = match byte {
            b'x' => return self.begin_char_code(target, 2),
            b'u' => return self.begin_char_code(target, 4),
            b'U' => return self.begin_char_code(target, 6),
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'\\' | b'\'' | b'"' => byte,
            _ => return self.fail(LexErrorKind::InvalidCharacter(byte)),
        };
        self.resume_after_escape(target, &[decoded])
    }

    fn begin_char_code(&mut self, target: EscapeTarget, width: u8) -> Step {
        self.state = State::CharCode(CharCode {
            target,
            width,
            digits: 0,
            value: 0,
        });
        Step::Consume
    }

    pub(super) fn char_code(&mut self, mut code: CharCode, byte: u8) -> Step {
        let Some(digit) = hex_digit_to_value(byte) else {
            return if is_ident_continue(byte) {
                self.fail(LexErrorKind::InvalidDigit {
                    digit: byte,
                    radix: 16,
                })
            } else {
                self.fail(LexErrorKind::InvalidCharacter(byte))
            };
        };

        code.value = code.value * 16 + digit;
        code.digits += 1;
        if code.digits < code.width {
            self.state = State::CharCode(code);
            return Step::Consume;
        }

        // `\x` is a raw byte in both contexts
        if code.width == 2 {
            return self.resume_after_escape(code.target, &[code.value as u8]);
        }

        if code.value > MAX_CODEPOINT {
            return self.fail(LexErrorKind::UnicodeOutOfRange(code.value));
        }
        if matches!(code.target, EscapeTarget::Char) && code.value > MAX_CHAR_LITERAL {
            return self.fail(LexErrorKind::CharLiteralTooLarge(code.value));
        }
        match encode_utf8(code.value) {
            Some((buf, len)) => self.resume_after_escape(code.target, &buf[..len]),
            None => self.fail(LexErrorKind::UnicodeOutOfRange(code.value)),
        }
    }

    /// Delivers decoded bytes and returns to the literal the escape came from.
    fn resume_after_escape(&mut self, target: EscapeTarget, bytes: &[u8]) -> Step {
        match target {
            EscapeTarget::Str(mut lit) => {
                lit.bytes.extend_from_slice(bytes);
                self.state = State::String(lit);
            },
            EscapeTarget::Char => match bytes {
                [value] => self.state = State::CharLiteralEnd(*value),
                _ => {
                    let value = bytes.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32);
                    return self.fail(LexErrorKind::CharLiteralTooLarge(value));
                },
            },
        }
        Step::Consume
    }

    pub(super) fn char_literal(&mut self, byte: u8) -> Step {
        match byte {
            b'\'' | b'\n' => self.fail(LexErrorKind::InvalidCharacter(byte)),
            b'\\' => {
                self.state = State::StringEscape(EscapeTarget::Char);
                Step::Consume
            },
            b => {
                self.state = State::CharLiteralEnd(b);
                Step::Consume
            },
        }
    }

    pub(super) fn char_literal_end(&mut self, value: u8, byte: u8) -> Step {
        if byte == b'\'' {
            self.emit_through(TokenData::Char(value));
            Step::Consume
        } else {
            self.fail(LexErrorKind::InvalidCharacter(byte))
        }
    }

    /// After the first `\` of a line string; the second must follow.
    pub(super) fn line_string_start(&mut self, lit: StrLit, byte: u8) -> Step {
        if byte == b'\\' {
            self.state = State::LineString(lit);
            Step::Consume
        } else {
            self.fail(LexErrorKind::InvalidCharacter(byte))
        }
    }

    /// Raw bytes up to the end of the physical line.
    pub(super) fn line_string(&mut self, mut lit: StrLit, byte: u8) -> Step {
        if byte == b'\n' {
            let end = self.cursor.position();
            self.state = State::LineStringEnd(lit, end);
        } else {
            lit.bytes.push(byte);
            self.state = State::LineString(lit);
        }
        Step::Consume
    }

    /// Between lines: whitespace is skipped, and a continuation marker keeps
    /// the literal going. Anything else closes it at the last newline.
    pub(super) fn line_string_end(&mut self, lit: StrLit, end: usize, byte: u8) -> Step {
        match byte {
            b if is_whitespace(b) => {
                self.state = State::LineStringEnd(lit, end);
                Step::Consume
            },
            b'c' if lit.is_c_string => {
                self.state = State::LineStringContinueC(lit);
                Step::Consume
            },
            b'\\' if lit.is_c_string => self.fail(LexErrorKind::InvalidCharacter(byte)),
            b'\\' => {
                self.state = State::LineStringContinue(lit);
                Step::Consume
            },
            _ => {
                self.commit(TokenData::Str(lit), end);
                Step::Hold
            },
        }
    }

    pub(super) fn line_string_continue_c(&mut self, lit: StrLit, byte: u8) -> Step {
        if byte == b'\\' {
            self.state = State::LineStringContinue(lit);
            Step::Consume
        } else {
            self.fail(LexErrorKind::InvalidCharacter(byte))
        }
    }

    /// Second `\` of a continuation; the lines are joined with one newline.
    pub(super) fn line_string_continue(&mut self, mut lit: StrLit, byte: u8) -> Step {
        if byte == b'\\' {
            lit.bytes.push(b'\n');
            self.state = State::LineString(lit);
            Step::Consume
        } else {
            self.fail(LexErrorKind::InvalidCharacter(byte))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexErrorKind;
    use crate::token::TokenKind;
    use crate::{tokenize, Token};

    fn single(source: &str) -> Token {
        let result = tokenize(source.as_bytes());
        assert!(result.is_ok(), "{:?}", result.error);
        assert_eq!(result.tokens.len(), 2);
        result.tokens[0].clone()
    }

    fn error(source: &str) -> LexErrorKind {
        tokenize(source.as_bytes()).error.expect("scan should fail").kind
    }

    fn bytes(token: &Token) -> &[u8] {
        &token.str_lit().expect("string payload").bytes
    }

    #[test]
    fn test_simple_escapes() {
        let token = single(r#""\n\r\t\\\'\"""#);
        assert_eq!(bytes(&token), b"\n\r\t\\'\"");
    }

    #[test]
    fn test_hex_escape_is_raw_byte() {
        let token = single(r#""\xff\x41""#);
        assert_eq!(bytes(&token), &[0xFF, b'A']);
    }

    #[test]
    fn test_unicode_escapes_encode_utf8() {
        let token = single(r#""\u00e9\U01F600""#);
        assert_eq!(bytes(&token), "é😀".as_bytes());
    }

    #[test]
    fn test_unicode_out_of_range() {
        assert_eq!(error(r#""\U110000""#), LexErrorKind::UnicodeOutOfRange(0x110000));
    }

    #[test]
    fn test_bad_escapes() {
        assert_eq!(error(r#""\q""#), LexErrorKind::InvalidCharacter(b'q'));
        assert_eq!(
            error(r#""\x4g""#),
            LexErrorKind::InvalidDigit {
                digit: b'g',
                radix: 16
            }
        );
        assert_eq!(error(r#""\x4""#), LexErrorKind::InvalidCharacter(b'"'));
    }

    #[test]
    fn test_raw_bytes_pass_through() {
        let token = single("\"héllo\"");
        assert_eq!(bytes(&token), "héllo".as_bytes());
    }

    #[test]
    fn test_newline_in_string() {
        assert_eq!(error("\"ab\ncd\""), LexErrorKind::NewlineInString);
    }

    #[test]
    fn test_unterminated_inside_escape() {
        assert_eq!(error(r#""ab\"#), LexErrorKind::UnterminatedString);
        assert_eq!(error(r#""\u12"#), LexErrorKind::UnterminatedString);
        assert_eq!(error(r"'\x4"), LexErrorKind::UnterminatedChar);
    }

    #[test]
    fn test_c_string() {
        let token = single(r#"c"abc""#);
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert!(token.str_lit().unwrap().is_c_string);
        assert_eq!(bytes(&token), b"abc");
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(single("'a'").char_value(), Some(b'a'));
        assert_eq!(single(r"'\n'").char_value(), Some(b'\n'));
        assert_eq!(single(r"'\xff'").char_value(), Some(0xFF));
        assert_eq!(single(r"'A'").char_value(), Some(b'A'));
    }

    #[test]
    fn test_char_literal_errors() {
        assert_eq!(error("''"), LexErrorKind::InvalidCharacter(b'\''));
        assert_eq!(error("'ab'"), LexErrorKind::InvalidCharacter(b'b'));
        assert_eq!(error("'a"), LexErrorKind::UnterminatedChar);
        assert_eq!(error(r"'\u00e9'"), LexErrorKind::CharLiteralTooLarge(0xE9));
        // a multi-byte character written directly
        assert_eq!(error("'é'"), LexErrorKind::InvalidCharacter(0xA9));
    }

    #[test]
    fn test_line_string_joined() {
        let source = "\\\\one\n  \\\\two\n;";
        let result = tokenize(source.as_bytes());
        assert!(result.is_ok());
        let token = &result.tokens[0];
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(bytes(token), b"one\ntwo");
        // ends at the newline closing "two"
        assert_eq!(token.end_offset, 13);
        assert_eq!(result.tokens[1].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_line_string_at_eof() {
        let token = single("\\\\raw \"text\"");
        assert_eq!(bytes(&token), b"raw \"text\"");
        assert_eq!(token.end_offset, 12);
    }

    #[test]
    fn test_c_line_string() {
        let source = "c\\\\a\nc\\\\b\n";
        let result = tokenize(source.as_bytes());
        assert!(result.is_ok());
        let lit = result.tokens[0].str_lit().unwrap();
        assert!(lit.is_c_string);
        assert_eq!(lit.bytes, b"a\nb");
    }

    #[test]
    fn test_line_string_followed_by_symbol_c() {
        let result = tokenize(b"\\\\a\ncount");
        assert!(result.is_ok());
        assert_eq!(result.tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(result.tokens[1].kind, TokenKind::Symbol);
    }

    #[test]
    fn test_line_string_errors() {
        assert_eq!(error("\\x"), LexErrorKind::InvalidCharacter(b'x'));
        assert_eq!(error("\\"), LexErrorKind::UnexpectedEof);
        assert_eq!(error("\\\\a\n\\"), LexErrorKind::UnexpectedEof);
        assert_eq!(error("c\\\\a\n\\\\b"), LexErrorKind::InvalidCharacter(b'\\'));
    }
}
