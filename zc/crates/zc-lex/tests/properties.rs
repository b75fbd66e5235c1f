//! Property tests for zc-lex

use proptest::prelude::*;
use zc_lex::{tokenize, LexErrorKind, Token, TokenKind, OPERATORS};

fn token_kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

// ------------------------------------------------------------------------
// TOTALITY - Any input scans, and the output is well formed
// ------------------------------------------------------------------------

#[test]
fn test_property_arbitrary_bytes() {
    proptest!(|(input in proptest::collection::vec(any::<u8>(), 0..256))| {
        let result = tokenize(&input);

        prop_assert_eq!(result.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        let newlines = input.iter().filter(|&&b| b == b'\n').count();
        prop_assert_eq!(result.line_offsets.len(), newlines + 1);

        for pair in result.tokens.windows(2) {
            prop_assert!(pair[0].start_offset <= pair[0].end_offset);
            prop_assert!(pair[0].end_offset <= pair[1].start_offset);
        }
        for token in &result.tokens {
            prop_assert!(token.end_offset <= input.len());
        }
    });
}

#[test]
fn test_property_line_table_over_literals() {
    proptest!(|(input in "[ -~\n\t]{0,200}")| {
        let result = tokenize(input.as_bytes());
        let newlines = input.bytes().filter(|&b| b == b'\n').count();
        prop_assert_eq!(result.line_offsets.len(), newlines + 1);
        prop_assert_eq!(result.line_offsets[0], 0);
        for &offset in &result.line_offsets[1..] {
            prop_assert_eq!(input.as_bytes()[offset - 1], b'\n');
        }
    });
}

// ------------------------------------------------------------------------
// OPERATORS - Maximal munch
// ------------------------------------------------------------------------

#[test]
fn test_property_operator_sequences() {
    proptest!(|(picks in proptest::collection::vec(0..OPERATORS.len(), 1..20))| {
        let ops: Vec<TokenKind> = picks.iter().map(|&i| OPERATORS[i]).collect();
        let source = ops
            .iter()
            .map(|op| op.spelling())
            .collect::<Vec<_>>()
            .join(" ");

        let result = tokenize(source.as_bytes());
        prop_assert!(result.is_ok());

        let mut expected = ops.clone();
        expected.push(TokenKind::Eof);
        prop_assert_eq!(token_kinds(&result.tokens), expected);
    });
}

#[test]
fn test_property_operator_before_symbol() {
    proptest!(|(pick in 0..OPERATORS.len(), name in "[a-z_][a-z0-9_]{0,8}")| {
        let op = OPERATORS[pick];
        // no symbol may start with `%`
        prop_assume!(!matches!(op, TokenKind::Percent));

        let source = format!("{}{}", op.spelling(), name);
        let result = tokenize(source.as_bytes());
        prop_assert!(result.is_ok(), "{:?}", result.error);
        prop_assert_eq!(result.tokens[0].kind, op);
        prop_assert_eq!(result.tokens[0].end_offset, op.spelling().len());
    });
}

// ------------------------------------------------------------------------
// NUMBERS - Values and digit validation
// ------------------------------------------------------------------------

#[test]
fn test_property_u64_round_trip() {
    proptest!(|(value in any::<u64>())| {
        for source in [
            value.to_string(),
            format!("0x{:x}", value),
            format!("0x{:X}", value),
            format!("0o{:o}", value),
            format!("0b{:b}", value),
        ] {
            let result = tokenize(source.as_bytes());
            prop_assert!(result.is_ok(), "{}", source);
            let num = result.tokens[0].num_lit().unwrap();
            prop_assert_eq!(num.value.as_u64(), Some(value));
            prop_assert!(!num.overflow);
        }
    });
}

/// Prefix and exponent marker of each radix.
const RADIXES: [(&str, u32, u8); 4] = [("0b", 2, b'e'), ("0o", 8, b'e'), ("", 10, b'e'), ("0x", 16, b'p')];

#[test]
fn test_property_invalid_digit_in_radix() {
    proptest!(|(which in 0..RADIXES.len(), digit in "[0-9a-zA-Z]")| {
        let (prefix, radix, marker) = RADIXES[which];
        let byte = digit.as_bytes()[0];
        let value = (byte as char).to_digit(36).unwrap_or(0);
        prop_assume!(value >= radix);
        prop_assume!(byte.to_ascii_lowercase() != marker);

        let source = format!("{}1{}", prefix, digit);
        let result = tokenize(source.as_bytes());
        prop_assert_eq!(
            result.error.map(|e| e.kind),
            Some(LexErrorKind::InvalidDigit { digit: byte, radix })
        );
    });
}

#[test]
fn test_property_non_identifier_ends_number() {
    proptest!(|(which in 0..RADIXES.len(), follow in "[;,)+ \n]")| {
        let (prefix, _, _) = RADIXES[which];
        let source = format!("{}1{}", prefix, follow);
        let result = tokenize(source.as_bytes());
        prop_assert!(result.is_ok());
        prop_assert_eq!(result.tokens[0].kind, TokenKind::NumberLiteral);
        prop_assert_eq!(result.tokens[0].end_offset, prefix.len() + 1);
        prop_assert_eq!(result.tokens[0].num_lit().unwrap().value.as_u64(), Some(1));
    });
}

// ------------------------------------------------------------------------
// STRINGS - Escapes decode to UTF-8
// ------------------------------------------------------------------------

fn decoded(source: &str) -> Vec<u8> {
    let result = tokenize(source.as_bytes());
    assert!(result.is_ok(), "{}: {:?}", source, result.error);
    result.tokens[0].str_lit().unwrap().bytes.clone()
}

#[test]
fn test_escape_round_trip_boundaries() {
    for cp in [0x24u32, 0x7FF, 0xFFFF, 0x10FFFF] {
        let direct = char::from_u32(cp).unwrap().to_string();
        assert_eq!(decoded(&format!("\"{}\"", direct)), direct.as_bytes());
        assert_eq!(decoded(&format!("\"\\U{:06x}\"", cp)), direct.as_bytes());
        if cp <= 0xFFFF {
            assert_eq!(decoded(&format!("\"\\u{:04x}\"", cp)), direct.as_bytes());
        }
    }
}

#[test]
fn test_property_escape_matches_direct() {
    proptest!(|(c in any::<char>())| {
        prop_assume!(c != '"' && c != '\\' && c != '\n');
        let direct = c.to_string();
        let escaped = decoded(&format!("\"\\U{:06X}\"", c as u32));
        prop_assert_eq!(escaped, decoded(&format!("\"{}\"", direct)));
    });
}

#[test]
fn test_property_arbitrary_string_literals() {
    proptest!(|(input in "[^\"\\\\\\n]{0,100}")| {
        let source = format!("\"{}\"", input);
        let result = tokenize(source.as_bytes());
        prop_assert!(result.is_ok());
        prop_assert_eq!(result.tokens.len(), 2);
        prop_assert_eq!(&result.tokens[0].str_lit().unwrap().bytes, &input.into_bytes());
    });
}

// ------------------------------------------------------------------------
// SYMBOLS
// ------------------------------------------------------------------------

#[test]
fn test_property_arbitrary_identifier_strings() {
    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
        let result = tokenize(input.as_bytes());
        prop_assert_eq!(result.tokens.len(), 2);
        let kind = result.tokens[0].kind;
        match TokenKind::keyword(input.as_bytes()) {
            Some(keyword) => {
                prop_assert_eq!(kind, keyword);
            },
            None => {
                prop_assert_eq!(kind, TokenKind::Symbol);
                prop_assert_eq!(&result.tokens[0].str_lit().unwrap().bytes, &input.into_bytes());
            },
        }
    });
}

#[test]
fn test_property_whitespace_is_skipped() {
    proptest!(|(spaces in 0..100usize)| {
        let whitespace = " ".repeat(spaces);
        let source = format!("{}const{}", whitespace, whitespace);
        let result = tokenize(source.as_bytes());
        prop_assert_eq!(token_kinds(&result.tokens), vec![TokenKind::KwConst, TokenKind::Eof]);
        prop_assert_eq!(result.tokens[0].start_column as usize, spaces);
    });
}
