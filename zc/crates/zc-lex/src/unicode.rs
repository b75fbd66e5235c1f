//! Byte classification and code point encoding for the scanner.
//!
//! The scanner works on raw bytes. Identifiers are ASCII only; anything
//! beyond ASCII can appear only inside string, character and line-string
//! literals, where it is copied through untouched.

/// Largest code point a `\u`/`\U` escape may produce.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Whitespace between tokens: space, tab, carriage return, newline.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Checks if a byte may start a symbol.
///
/// # Example
///
/// ```
/// use zc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'_'));
/// assert!(!is_ident_start(b'1'));
/// assert!(!is_ident_start(b'%'));
/// ```
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte may continue a symbol: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Value of a byte read as a digit of any radix up to 36.
///
/// Letters count from 10 regardless of case, so a caller can tell a digit
/// that is merely too large for its radix (`2` in base 2, `g` in base 16)
/// from a byte that is no digit at all.
///
/// # Example
///
/// ```
/// use zc_lex::unicode::digit_value;
///
/// assert_eq!(digit_value(b'7'), Some(7));
/// assert_eq!(digit_value(b'f'), Some(15));
/// assert_eq!(digit_value(b'Z'), Some(35));
/// assert_eq!(digit_value(b'_'), None);
/// ```
#[inline]
pub fn digit_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u32),
        b'a'..=b'z' => Some((b - b'a') as u32 + 10),
        b'A'..=b'Z' => Some((b - b'A') as u32 + 10),
        _ => None,
    }
}

/// Converts a hex digit byte to its numeric value.
#[inline]
pub fn hex_digit_to_value(b: u8) -> Option<u32> {
    digit_value(b).filter(|&v| v < 16)
}

/// Encodes a code point as UTF-8, returning the buffer and the number of
/// bytes used.
///
/// Surrogate code points are encoded like any other three byte value;
/// escapes are not validated beyond the `0x10FFFF` ceiling.
///
/// # Example
///
/// ```
/// use zc_lex::unicode::encode_utf8;
///
/// let (buf, len) = encode_utf8(0x7FF).unwrap();
/// assert_eq!(&buf[..len], "\u{7FF}".as_bytes());
/// assert!(encode_utf8(0x110000).is_none());
/// ```
pub fn encode_utf8(codepoint: u32) -> Option<([u8; 4], usize)> {
    let mut buf = [0u8; 4];
    let len = match codepoint {
        0..=0x7F => {
            buf[0] = codepoint as u8;
            1
        },
        0x80..=0x7FF => {
            buf[0] = 0xC0 | (codepoint >> 6) as u8;
            buf[1] = 0x80 | (codepoint & 0x3F) as u8;
            2
        },
        0x800..=0xFFFF => {
            buf[0] = 0xE0 | (codepoint >> 12) as u8;
            buf[1] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
            buf[2] = 0x80 | (codepoint & 0x3F) as u8;
            3
        },
        0x10000..=MAX_CODEPOINT => {
            buf[0] = 0xF0 | (codepoint >> 18) as u8;
            buf[1] = 0x80 | ((codepoint >> 12) & 0x3F) as u8;
            buf[2] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
            buf[3] = 0x80 | (codepoint & 0x3F) as u8;
            4
        },
        _ => return None,
    };
    Some((buf, len))
}
