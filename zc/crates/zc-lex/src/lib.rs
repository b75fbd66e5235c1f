//! zc-lex - Tokenizer for Zig source text
//!
//! This crate turns a byte buffer into a flat list of positioned tokens,
//! a table of line starts, and at most one error. It is the first stage of
//! the `zc` front end and has no knowledge of grammar.
//!
//! # Example Usage
//!
//! ```
//! use zc_lex::{tokenize, TokenKind};
//!
//! let result = tokenize(b"const x = 1;\n");
//! assert!(result.is_ok());
//! assert_eq!(result.tokens[0].kind, TokenKind::KwConst);
//! assert_eq!(result.tokens[3].num_lit().unwrap().value.as_u64(), Some(1));
//! assert_eq!(result.line_offsets, vec![0, 13]);
//! ```
//!
//! # Module Structure
//!
//! - [`scanner`] - The state machine and its transitions
//! - [`token`] - Token kinds, payloads and the keyword table
//! - [`bignum`] - Arbitrary precision integers for number literals
//! - [`cursor`] - Byte cursor with line tracking
//! - [`error`] - Scan errors and their diagnostic codes
//! - [`unicode`] - Byte classes, digit values and UTF-8 encoding
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Symbols whose spelling is reserved, such as `const`, `fn`, `while` and
//! `comptime`. The full list is [`KEYWORDS`].
//!
//! ## Symbols
//!
//! `[A-Za-z_][A-Za-z0-9_]*`, or any string after `@`: `@"while"` is a symbol
//! named `while`, not a keyword.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `0xFF`, `0b1010`, `0o777`
//! - **Float**: `3.14`, `1e10`, `0x1.8p1`
//! - **String**: `"a\tb"`, `c"text"`, and line strings `\\text`
//! - **Character**: `'a'`, `'\x41'`
//!
//! ## Operators
//!
//! Operators are matched greedily, so `<<%=` is one token. The full list is
//! [`OPERATORS`].
//!
//! # Errors
//!
//! The first error stops token production. The rest of the input is still
//! walked so the line table always covers the whole buffer.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bignum;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use bignum::{BigNum, BigUint, NumKind};
pub use cursor::{Cursor, Position};
pub use error::{LexErrorKind, ScanError};
pub use scanner::{build_radix_float, Scanner, Tokenized};
pub use token::{NumLit, StrLit, Token, TokenData, TokenKind, KEYWORDS, OPERATORS};

/// Tokenizes a whole buffer.
pub fn tokenize(source: &[u8]) -> Tokenized {
    Scanner::new(source).run()
}
