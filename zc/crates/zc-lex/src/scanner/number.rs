//! Number literal scanning.
//!
//! Integer literals accumulate into a [`BigNum`] as digits arrive. Floats
//! come in two flavors: decimal floats are converted from their source text,
//! while binary, octal and hex floats have their IEEE-754 bits assembled
//! directly from the accumulated mantissa and a binary exponent.

use crate::bignum::{BigNum, BigUint};
use crate::cursor::Position;
use crate::error::LexErrorKind;
use crate::token::{NumLit, TokenData, TokenKind};
use crate::unicode::{digit_value, is_ident_continue};

use super::{Scanner, State, Step};

/// Width of the IEEE-754 double fraction field.
const FRACTION_BITS: u32 = 52;
/// Exponent bias of an IEEE-754 double.
const EXPONENT_BIAS: i64 = 1023;

/// Everything a number literal accumulates while it is being scanned.
#[derive(Debug)]
pub(super) struct NumberLit {
    radix: u32,
    /// Integer and fraction digits, as one integer
    mantissa: BigNum,
    /// Sticky: the integer value stopped fitting a `u64`
    int_overflow: bool,
    /// Digits seen after the radix prefix
    digits: u32,
    is_float: bool,
    /// Binary exponent contributed by fraction digits of a non-decimal float
    fraction_exponent: i64,
    exponent_marker_seen: bool,
    exponent_negative: bool,
    exponent: BigNum,
    exponent_digits: u32,
}

impl NumberLit {
    /// A literal with a radix prefix and no digits yet.
    pub(super) fn with_radix(radix: u32) -> Self {
        Self {
            radix,
            mantissa: BigNum::zero(),
            int_overflow: false,
            digits: 0,
            is_float: false,
            fraction_exponent: 0,
            exponent_marker_seen: false,
            exponent_negative: false,
            exponent: BigNum::zero(),
            exponent_digits: 0,
        }
    }

    /// A decimal literal whose first digit is `digit`.
    pub(super) fn decimal(digit: u8) -> Self {
        let mut lit = Self::with_radix(10);
        lit.push_digit(digit as u32);
        lit
    }

    fn push_digit(&mut self, digit: u32) {
        self.int_overflow |= self.mantissa.multiply_by(self.radix);
        self.int_overflow |= self.mantissa.add(digit);
        self.digits += 1;
    }

    fn push_fraction_digit(&mut self, digit: u32) {
        // the mantissa of a float may grow past u64 freely
        self.mantissa.multiply_by(self.radix);
        self.mantissa.add(digit);
        self.fraction_exponent -= self.radix.trailing_zeros() as i64;
        self.digits += 1;
    }

    fn push_exponent_digit(&mut self, digit: u32) {
        self.exponent.multiply_by(10);
        self.exponent.add(digit);
        self.exponent_digits += 1;
    }

    /// `p`/`P` introduces the exponent of hex literals, `e`/`E` of all others.
    fn is_exponent_marker(&self, byte: u8) -> bool {
        match self.radix {
            16 => matches!(byte, b'p' | b'P'),
            _ => matches!(byte, b'e' | b'E'),
        }
    }

    /// Whether the literal may end here: a prefix or exponent marker
    /// without digits may not.
    pub(super) fn is_complete(&self) -> bool {
        if self.exponent_marker_seen {
            self.exponent_digits > 0
        } else {
            self.is_float || self.digits > 0
        }
    }

    pub(super) fn into_float(mut self) -> Self {
        self.is_float = true;
        self
    }

    /// Final value of the literal; `text` is its full source text.
    fn finish(self, text: &[u8]) -> NumLit {
        if !self.is_float {
            return NumLit {
                value: self.mantissa,
                overflow: self.int_overflow,
            };
        }

        if self.radix == 10 {
            let parsed = std::str::from_utf8(text)
                .ok()
                .and_then(|text| text.parse::<f64>().ok());
            return match parsed {
                Some(value) => NumLit {
                    value: BigNum::Float(value),
                    // out of range either way
                    overflow: value.is_infinite() || (value == 0.0 && !self.mantissa.is_zero()),
                },
                None => NumLit {
                    value: BigNum::Float(0.0),
                    overflow: true,
                },
            };
        }

        let mut exponent = self.fraction_exponent;
        if self.exponent_digits > 0 {
            match self.exponent.as_u64() {
                Some(magnitude) if magnitude < i32::MAX as u64 => {
                    let magnitude = magnitude as i64;
                    exponent += if self.exponent_negative {
                        -magnitude
                    } else {
                        magnitude
                    };
                },
                _ => {
                    let value = if self.exponent_negative || self.mantissa.is_zero() {
                        0.0
                    } else {
                        f64::INFINITY
                    };
                    return NumLit {
                        value: BigNum::Float(value),
                        overflow: true,
                    };
                },
            }
        }

        let zero = BigUint::zero();
        let mantissa = self.mantissa.as_int().unwrap_or(&zero);
        let (value, overflow) = build_radix_float(mantissa, exponent);
        NumLit {
            value: BigNum::Float(value),
            overflow,
        }
    }
}

/// Assembles `mantissa * 2^exponent` as an IEEE-754 double bit by bit.
///
/// The mantissa is normalized so its top set bit becomes the implicit
/// leading one; the next 52 bits form the fraction field and anything below
/// them is truncated. The normalized exponent must lie in `[-1023, 1023)`;
/// outside that range the literal overflows and the returned value is
/// `0.0` (too small) or infinity (too large).
///
/// The bits are assembled as-is with no subnormal handling. At exponent
/// -1023 the biased exponent field is 0, so the result is the subnormal
/// those bits spell rather than the exact value: `0x1p-1023` yields `0.0`
/// and `0x1.8p-1023` yields `2^-1023`, neither flagged as overflow.
///
/// Returns the value and whether it overflowed.
///
/// # Example
///
/// ```
/// use zc_lex::{build_radix_float, BigUint};
///
/// // 0x1.8p1 == 0x18 * 2^(1 - 4)
/// let (value, overflow) = build_radix_float(&BigUint::from_u64(0x18), -3);
/// assert_eq!(value, 3.0);
/// assert!(!overflow);
/// ```
pub fn build_radix_float(mantissa: &BigUint, exponent: i64) -> (f64, bool) {
    if mantissa.is_zero() {
        return (0.0, false);
    }

    let exponent = exponent.saturating_add(mantissa.bit_len() as i64 - 1);
    if exponent >= EXPONENT_BIAS {
        return (f64::INFINITY, true);
    }
    if exponent < -EXPONENT_BIAS {
        return (0.0, true);
    }

    let fraction = mantissa.leading_bits(FRACTION_BITS + 1) & ((1u64 << FRACTION_BITS) - 1);
    let biased = (exponent + EXPONENT_BIAS) as u64;
    (f64::from_bits((biased << FRACTION_BITS) | fraction), false)
}

impl Scanner<'_> {
    /// After a leading `0`: a radix prefix, or a plain decimal literal.
    pub(super) fn zero(&mut self, byte: u8) -> Step {
        let radix = match byte {
            b'b' => 2,
            b'o' => 8,
            b'x' => 16,
            _ => {
                self.state = State::Number(NumberLit::decimal(0));
                return Step::Hold;
            },
        };
        self.state = State::Number(NumberLit::with_radix(radix));
        Step::Consume
    }

    pub(super) fn number(&mut self, mut lit: NumberLit, byte: u8) -> Step {
        if byte == b'.' {
            if lit.digits == 0 {
                return self.fail(LexErrorKind::InvalidCharacter(byte));
            }
            self.state = State::NumberDot(lit, self.cursor.mark());
            return Step::Consume;
        }

        if lit.is_exponent_marker(byte) {
            if lit.digits == 0 {
                return self.fail(LexErrorKind::InvalidDigit {
                    digit: byte,
                    radix: lit.radix,
                });
            }
            lit.is_float = true;
            lit.exponent_marker_seen = true;
            self.state = State::FloatExponentUnsigned(lit);
            return Step::Consume;
        }

        match digit_value(byte) {
            Some(digit) if digit < lit.radix => {
                lit.push_digit(digit);
                self.state = State::Number(lit);
                Step::Consume
            },
            _ => self.end_of_digits(lit, byte),
        }
    }

    /// A `.` after integer digits: either a fraction follows, or a second
    /// `.` makes the dot part of a `..` operator.
    pub(super) fn number_dot(&mut self, lit: NumberLit, dot: Position, byte: u8) -> Step {
        if byte == b'.' {
            self.emit_number_at(lit, dot.offset);
            self.begin_at(TokenKind::DotDot, dot);
            self.state = State::Operator(TokenKind::DotDot);
            return Step::Consume;
        }

        self.state = State::FloatFraction(lit.into_float());
        Step::Hold
    }

    pub(super) fn float_fraction(&mut self, mut lit: NumberLit, byte: u8) -> Step {
        if lit.is_exponent_marker(byte) {
            lit.exponent_marker_seen = true;
            self.state = State::FloatExponentUnsigned(lit);
            return Step::Consume;
        }

        match digit_value(byte) {
            Some(digit) if digit < lit.radix => {
                lit.push_fraction_digit(digit);
                self.state = State::FloatFraction(lit);
                Step::Consume
            },
            _ => self.end_of_digits(lit, byte),
        }
    }

    pub(super) fn float_exponent_unsigned(&mut self, mut lit: NumberLit, byte: u8) -> Step {
        match byte {
            b'+' => {
                self.state = State::FloatExponentNumber(lit);
                Step::Consume
            },
            b'-' => {
                lit.exponent_negative = true;
                self.state = State::FloatExponentNumber(lit);
                Step::Consume
            },
            _ => {
                self.state = State::FloatExponentNumber(lit);
                Step::Hold
            },
        }
    }

    pub(super) fn float_exponent_number(&mut self, mut lit: NumberLit, byte: u8) -> Step {
        match digit_value(byte) {
            Some(digit) if digit < 10 => {
                lit.push_exponent_digit(digit);
                self.state = State::FloatExponentNumber(lit);
                Step::Consume
            },
            _ if is_ident_continue(byte) => self.fail(LexErrorKind::InvalidDigit {
                digit: byte,
                radix: 10,
            }),
            _ if !lit.is_complete() => self.fail(LexErrorKind::InvalidCharacter(byte)),
            _ => {
                self.emit_number(lit);
                Step::Hold
            },
        }
    }

    /// A byte that is not a digit of the literal's radix arrived. Identifier
    /// bytes are malformed digits; anything else ends the literal, unless no
    /// digit has been seen since the prefix.
    fn end_of_digits(&mut self, lit: NumberLit, byte: u8) -> Step {
        if is_ident_continue(byte) {
            return self.fail(LexErrorKind::InvalidDigit {
                digit: byte,
                radix: lit.radix,
            });
        }
        if !lit.is_complete() {
            return self.fail(LexErrorKind::InvalidCharacter(byte));
        }
        self.emit_number(lit);
        Step::Hold
    }

    /// Commits the open number token, ending before the current byte.
    pub(super) fn emit_number(&mut self, lit: NumberLit) {
        let end = self.cursor.position();
        self.emit_number_at(lit, end);
    }

    fn emit_number_at(&mut self, lit: NumberLit, end: usize) {
        let start = self.pending_start();
        let text = &self.cursor.source()[start..end];
        let value = lit.finish(text);
        self.commit(TokenData::Num(value), end);
    }
}
