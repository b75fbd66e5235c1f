//! Edge case tests for zc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexErrorKind, NumKind, Token, TokenKind, KEYWORDS};

    fn lex_all(source: &str) -> Vec<Token> {
        let result = tokenize(source.as_bytes());
        assert!(result.is_ok(), "{:?}", result.error);
        result.tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(|t| t.kind).collect()
    }

    fn error(source: &str) -> LexErrorKind {
        tokenize(source.as_bytes()).error.expect("scan should fail").kind
    }

    fn int(source: &str) -> u64 {
        let tokens = lex_all(source);
        tokens[0].num_lit().unwrap().value.as_u64().unwrap()
    }

    fn float(source: &str) -> f64 {
        let tokens = lex_all(source);
        let num = tokens[0].num_lit().unwrap();
        assert_eq!(num.value.kind(), NumKind::Float);
        num.value.as_f64()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("const {} = 1;", name));
        assert_eq!(t[1].str_lit().unwrap().bytes, name.as_bytes());
        assert_eq!(t[1].end_offset, 6 + 10000);
    }

    #[test]
    fn test_edge_all_keywords() {
        for &(text, kind) in KEYWORDS {
            assert_eq!(kinds(text), vec![kind, TokenKind::Eof], "{}", text);
            // a suffix turns it back into a symbol
            assert_eq!(kinds(&format!("{}_", text))[0], TokenKind::Symbol);
        }
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(kinds("Const")[0], TokenKind::Symbol);
        assert_eq!(kinds("WHILE")[0], TokenKind::Symbol);
    }

    #[test]
    fn test_edge_radix_literals() {
        assert_eq!(int("0x0"), 0);
        assert_eq!(int("0xFF"), 255);
        assert_eq!(int("0xff"), 255);
        assert_eq!(int("0b1010"), 10);
        assert_eq!(int("0o777"), 511);
        assert_eq!(int("007"), 7);
        assert_eq!(int("0"), 0);
    }

    #[test]
    fn test_edge_max_int() {
        let t = lex_all("18446744073709551615");
        let num = t[0].num_lit().unwrap();
        assert_eq!(num.value.as_u64(), Some(u64::MAX));
        assert!(!num.overflow);

        let t = lex_all("18446744073709551616");
        let num = t[0].num_lit().unwrap();
        assert!(num.overflow);
        assert_eq!(num.value.as_u64(), None);
        assert_eq!(num.value.to_string(), "18446744073709551616");
    }

    #[test]
    fn test_edge_decimal_floats() {
        assert_eq!(float("3.25"), 3.25);
        assert_eq!(float("1e10"), 1e10);
        assert_eq!(float("2.5e-3"), 2.5e-3);
        assert_eq!(float("1E+2"), 100.0);
        assert_eq!(float("0.5"), 0.5);
    }

    #[test]
    fn test_edge_float_overflow() {
        let t = lex_all("1e400");
        let num = t[0].num_lit().unwrap();
        assert!(num.overflow);
        assert_eq!(num.value.as_f64(), f64::INFINITY);

        let t = lex_all("1e-400");
        assert!(t[0].num_lit().unwrap().overflow);

        let t = lex_all("0e-400");
        assert!(!t[0].num_lit().unwrap().overflow);
    }

    #[test]
    fn test_edge_radix_floats() {
        assert_eq!(float("0x1.8p1"), 3.0);
        assert_eq!(float("0x10p-4"), 1.0);
        assert_eq!(float("0x0.8p0"), 0.5);
        assert_eq!(float("0b1.1"), 1.5);
        assert_eq!(float("0o1.4"), 1.5);
        assert_eq!(float("0b1e3"), 8.0);
    }

    #[test]
    fn test_edge_radix_float_overflow() {
        let t = lex_all("0x1p1024");
        let num = t[0].num_lit().unwrap();
        assert!(num.overflow);
        assert_eq!(num.value.as_f64(), f64::INFINITY);

        let t = lex_all("0x1p-99999999999");
        let num = t[0].num_lit().unwrap();
        assert!(num.overflow);
        assert_eq!(num.value.as_f64(), 0.0);
    }

    #[test]
    fn test_edge_radix_float_lowest_exponent() {
        let t = lex_all("0x1p-1023 0x1.8p-1023 0x1p-1024");
        let bits: Vec<(u64, bool)> = t[..3]
            .iter()
            .map(|t| {
                let num = t.num_lit().unwrap();
                (num.value.as_f64().to_bits(), num.overflow)
            })
            .collect();
        assert_eq!(bits, vec![(0, false), (1u64 << 51, false), (0, true)]);
    }

    #[test]
    fn test_edge_range_after_integer() {
        let t = lex_all("1..2");
        let seen: Vec<_> = t.iter().map(|t| t.kind).collect();
        assert_eq!(
            seen,
            vec![
                TokenKind::NumberLiteral,
                TokenKind::DotDot,
                TokenKind::NumberLiteral,
                TokenKind::Eof
            ]
        );
        assert_eq!((t[0].start_offset, t[0].end_offset), (0, 1));
        assert_eq!((t[1].start_offset, t[1].end_offset), (1, 3));
        assert_eq!(t[0].num_lit().unwrap().value.kind(), NumKind::Int);

        assert_eq!(kinds("0x1...")[1], TokenKind::Ellipsis);
    }

    #[test]
    fn test_edge_trailing_dot_is_float() {
        assert_eq!(float("1."), 1.0);
    }

    #[test]
    fn test_edge_number_then_punctuation() {
        assert_eq!(
            kinds("0b1;"),
            vec![TokenKind::NumberLiteral, TokenKind::Semicolon, TokenKind::Eof]
        );
        assert_eq!(
            kinds("f(1,2)"),
            vec![
                TokenKind::Symbol,
                TokenKind::LParen,
                TokenKind::NumberLiteral,
                TokenKind::Comma,
                TokenKind::NumberLiteral,
                TokenKind::RParen,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_edge_line_string() {
        let source = "\\\\hello\n  \\\\world\n;";
        let t = lex_all(source);
        assert_eq!(t[0].kind, TokenKind::StringLiteral);
        assert_eq!(t[0].str_lit().unwrap().bytes, b"hello\nworld");
        assert_eq!(t[0].end_offset, 17);
        assert_eq!(t[1].kind, TokenKind::Semicolon);
        assert_eq!(t[1].start_line, 2);
    }

    #[test]
    fn test_edge_line_string_at_eof() {
        let t = lex_all("\\\\abc");
        assert_eq!(t[0].str_lit().unwrap().bytes, b"abc");
        assert_eq!(t[0].end_offset, 5);

        let t = lex_all("\\\\abc\n");
        assert_eq!(t[0].end_offset, 5);
    }

    #[test]
    fn test_edge_c_line_string() {
        let t = lex_all("c\\\\a\nc\\\\b\n");
        let lit = t[0].str_lit().unwrap();
        assert!(lit.is_c_string);
        assert_eq!(lit.bytes, b"a\nb");
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_edge_quoted_symbol_escapes() {
        let t = lex_all(r#"@"a\x41 b""#);
        assert_eq!(t[0].kind, TokenKind::Symbol);
        assert_eq!(t[0].str_lit().unwrap().bytes, b"aA b");
    }

    #[test]
    fn test_edge_whitespace_variations() {
        let t = lex_all("a\r\n\tb");
        assert_eq!((t[1].start_line, t[1].start_column), (1, 1));
    }

    #[test]
    fn test_edge_tokens_ordered_and_disjoint() {
        let t = lex_all("const s = \"x\\ty\"; // tail\nvar c = 'q' +% 0x1p4;");
        for pair in t.windows(2) {
            assert!(pair[0].start_offset <= pair[0].end_offset);
            assert!(pair[0].end_offset <= pair[1].start_offset);
        }
    }

    #[test]
    fn test_edge_line_table_counts_every_newline() {
        let source = "\"a\"\n// x\n'\\n'\n\\\\raw\n\n";
        let result = tokenize(source.as_bytes());
        assert!(result.is_ok());
        let newlines = source.bytes().filter(|&b| b == b'\n').count();
        assert_eq!(result.line_offsets.len(), newlines + 1);
    }

    #[test]
    fn test_edge_overflowed_tokens() {
        let result = tokenize(b"1 99999999999999999999 2 1e999");
        let offsets: Vec<_> = result.overflowed().map(|t| t.start_offset).collect();
        assert_eq!(offsets, vec![2, 25]);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_invalid_digits() {
        assert_eq!(error("0b2"), LexErrorKind::InvalidDigit { digit: b'2', radix: 2 });
        assert_eq!(error("0o8"), LexErrorKind::InvalidDigit { digit: b'8', radix: 8 });
        assert_eq!(error("0xg"), LexErrorKind::InvalidDigit { digit: b'g', radix: 16 });
        assert_eq!(error("12a"), LexErrorKind::InvalidDigit { digit: b'a', radix: 10 });
        assert_eq!(error("0xp1"), LexErrorKind::InvalidDigit { digit: b'p', radix: 16 });
        assert_eq!(error("1e5x"), LexErrorKind::InvalidDigit { digit: b'x', radix: 10 });
    }

    #[test]
    fn test_err_incomplete_numbers() {
        assert_eq!(error("0x"), LexErrorKind::UnterminatedNumber);
        assert_eq!(error("1e"), LexErrorKind::UnterminatedNumber);
        assert_eq!(error("1e-"), LexErrorKind::UnterminatedNumber);
        assert_eq!(error("0x;"), LexErrorKind::InvalidCharacter(b';'));
        assert_eq!(error("1e;"), LexErrorKind::InvalidCharacter(b';'));
        assert_eq!(error("0x.8"), LexErrorKind::InvalidCharacter(b'.'));
    }

    #[test]
    fn test_err_number_position_is_literal_start() {
        let err = tokenize(b"x = 0b102;").error.unwrap();
        assert_eq!((err.line, err.column, err.offset), (0, 4, 4));
    }

    #[test]
    fn test_err_unterminated_string_position() {
        let err = tokenize(b"x\n  \"abc").error.unwrap();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!((err.line, err.column, err.offset), (1, 2, 4));
    }

    #[test]
    fn test_err_line_string_markers() {
        assert_eq!(error("\\"), LexErrorKind::UnexpectedEof);
        assert_eq!(error("\\x"), LexErrorKind::InvalidCharacter(b'x'));
        assert_eq!(error("\\\\a\n\\"), LexErrorKind::UnexpectedEof);
        assert_eq!(error("c\\\\a\n\\\\b"), LexErrorKind::InvalidCharacter(b'\\'));
    }

    #[test]
    fn test_err_invalid_chars() {
        assert_eq!(error("$"), LexErrorKind::InvalidCharacter(b'$'));
        assert_eq!(error("`"), LexErrorKind::InvalidCharacter(b'`'));
        assert_eq!(error("é"), LexErrorKind::InvalidCharacter(0xC3));
    }

    #[test]
    fn test_err_only_first_error_kept() {
        let result = tokenize(b"a $ \"open");
        let err = result.error.unwrap();
        assert_eq!(err.kind, LexErrorKind::InvalidCharacter(b'$'));
        let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Symbol, TokenKind::Eof]);
    }

    #[test]
    fn test_err_diagnostic_code() {
        let err = tokenize(b"\"abc").error.unwrap();
        let diag = err.to_diagnostic();
        assert_eq!(diag.code.unwrap().as_str(), "E1003");
        assert_eq!(diag.message, "unterminated string");
    }
}
