//! Arbitrary-precision accumulator for number literals.
//!
//! Literal digits are folded in one at a time with
//! [`BigNum::multiply_by`] and [`BigNum::add`]. Both report whether the
//! value left the representable range, but accumulation always continues:
//! the scanner records the report on the token and leaves the rejection to
//! later stages.

use std::fmt;

/// Unbounded non-negative integer, stored as little-endian `u32` limbs.
///
/// The limb vector never has trailing zero limbs; zero is the empty vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigUint {
    limbs: Vec<u32>,
}

impl BigUint {
    /// Zero.
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Build from a `u64`.
    pub fn from_u64(value: u64) -> Self {
        let mut n = Self {
            limbs: vec![value as u32, (value >> 32) as u32],
        };
        n.normalize();
        n
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// `self *= factor`
    pub fn mul_small(&mut self, factor: u32) {
        if factor == 0 {
            self.limbs.clear();
            return;
        }
        let mut carry = 0u64;
        for limb in &mut self.limbs {
            let product = *limb as u64 * factor as u64 + carry;
            *limb = product as u32;
            carry = product >> 32;
        }
        if carry != 0 {
            self.limbs.push(carry as u32);
        }
    }

    /// `self += addend`
    pub fn add_small(&mut self, addend: u32) {
        let mut carry = addend as u64;
        for limb in &mut self.limbs {
            if carry == 0 {
                return;
            }
            let sum = *limb as u64 + carry;
            *limb = sum as u32;
            carry = sum >> 32;
        }
        if carry != 0 {
            self.limbs.push(carry as u32);
        }
    }

    /// `self /= divisor`, returning the remainder.
    fn div_rem_small(&mut self, divisor: u32) -> u32 {
        let mut rem = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let cur = (rem << 32) | *limb as u64;
            *limb = (cur / divisor as u64) as u32;
            rem = cur % divisor as u64;
        }
        self.normalize();
        rem as u32
    }

    /// Number of significant bits; zero for zero.
    pub fn bit_len(&self) -> u32 {
        match self.limbs.last() {
            Some(&top) => (self.limbs.len() as u32 - 1) * 32 + (32 - top.leading_zeros()),
            None => 0,
        }
    }

    fn bit(&self, index: u32) -> u64 {
        let limb = self.limbs[(index / 32) as usize];
        ((limb >> (index % 32)) & 1) as u64
    }

    /// The top `count` bits, left-aligned into the low `count` bits of the
    /// result.
    ///
    /// Shorter values are shifted up so their highest set bit lands at
    /// `count - 1`; longer values lose their low bits (truncation toward
    /// zero). `count` is clamped to 64.
    ///
    /// # Example
    ///
    /// ```
    /// use zc_lex::BigUint;
    ///
    /// let n = BigUint::from_u64(0b1011);
    /// assert_eq!(n.leading_bits(8), 0b1011_0000);
    /// assert_eq!(n.leading_bits(2), 0b10);
    /// ```
    pub fn leading_bits(&self, count: u32) -> u64 {
        let count = count.min(64);
        let len = self.bit_len();
        if len == 0 || count == 0 {
            return 0;
        }
        if len <= count {
            // len <= 64 here, so the value fits
            let value = self.to_u64().unwrap_or(0);
            return value << (count - len);
        }
        let mut out = 0u64;
        for index in (len - count..len).rev() {
            out = (out << 1) | self.bit(index);
        }
        out
    }

    /// The value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        match self.limbs.as_slice() {
            [] => Some(0),
            [lo] => Some(*lo as u64),
            [lo, hi] => Some(((*hi as u64) << 32) | *lo as u64),
            _ => None,
        }
    }

    /// Approximate value as `f64`.
    pub fn to_f64(&self) -> f64 {
        self.limbs
            .iter()
            .rev()
            .fold(0.0, |acc, &limb| acc * 4294967296.0 + limb as f64)
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(small) = self.to_u64() {
            return write!(f, "{}", small);
        }

        // Peel off base-1e9 chunks, least significant first.
        let mut rest = self.clone();
        let mut chunks = Vec::new();
        while !rest.is_zero() {
            chunks.push(rest.div_rem_small(1_000_000_000));
        }

        let mut iter = chunks.iter().rev();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for chunk in iter {
            write!(f, "{:09}", chunk)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BigUint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_u64() {
            Some(value) => serializer.serialize_u64(value),
            None => serializer.collect_str(self),
        }
    }
}

/// Which representation a [`BigNum`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumKind {
    /// Unbounded integer
    Int,
    /// IEEE-754 double
    Float,
}

/// Tagged integer-or-float value of a number literal.
///
/// # Example
///
/// ```
/// use zc_lex::BigNum;
///
/// let mut n = BigNum::zero();
/// for digit in [1, 2, 3] {
///     assert!(!n.multiply_by(10));
///     assert!(!n.add(digit));
/// }
/// assert_eq!(n.as_u64(), Some(123));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BigNum {
    /// Integer value
    Int(BigUint),
    /// Floating point value
    Float(f64),
}

impl Default for BigNum {
    fn default() -> Self {
        Self::zero()
    }
}

impl BigNum {
    /// A zero integer.
    pub fn zero() -> Self {
        BigNum::Int(BigUint::zero())
    }

    /// Which representation this value holds.
    pub fn kind(&self) -> NumKind {
        match self {
            BigNum::Int(_) => NumKind::Int,
            BigNum::Float(_) => NumKind::Float,
        }
    }

    /// `self *= factor`; returns `true` if the result no longer fits the
    /// representable range (`u64` for integers, finite for floats).
    pub fn multiply_by(&mut self, factor: u32) -> bool {
        match self {
            BigNum::Int(n) => {
                n.mul_small(factor);
                n.to_u64().is_none()
            },
            BigNum::Float(f) => {
                *f *= factor as f64;
                !f.is_finite()
            },
        }
    }

    /// `self += addend`; overflow is reported like [`BigNum::multiply_by`].
    pub fn add(&mut self, addend: u32) -> bool {
        match self {
            BigNum::Int(n) => {
                n.add_small(addend);
                n.to_u64().is_none()
            },
            BigNum::Float(f) => {
                *f += addend as f64;
                !f.is_finite()
            },
        }
    }

    /// Integer value as `u64`; `None` for floats and for integers that do
    /// not fit.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            BigNum::Int(n) => n.to_u64(),
            BigNum::Float(_) => None,
        }
    }

    /// Value as `f64`, converting integers.
    pub fn as_f64(&self) -> f64 {
        match self {
            BigNum::Int(n) => n.to_f64(),
            BigNum::Float(f) => *f,
        }
    }

    /// The integer magnitude, if this is an integer.
    pub fn as_int(&self) -> Option<&BigUint> {
        match self {
            BigNum::Int(n) => Some(n),
            BigNum::Float(_) => None,
        }
    }

    /// Check if the value is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            BigNum::Int(n) => n.is_zero(),
            BigNum::Float(f) => *f == 0.0,
        }
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigNum::Int(n) => write!(f, "{}", n),
            BigNum::Float(x) => write!(f, "{:?}", x),
        }
    }
}
