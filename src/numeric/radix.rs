// ============================================================================
// Radix Conversion
// Signed digit strings in bases 2-16 to exact arbitrary-precision integers
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;

/// Digit alphabet shared by every supported base. A digit's value is its
/// position in this string.
pub const DIGIT_ALPHABET: &str = "0123456789abcdef";

/// Numeric base validated to lie in `2..=16`.
///
/// Everything downstream of input acquisition takes a `Radix` rather than a
/// raw integer, so an out-of-range base can never reach the converter.
///
/// # Example
/// ```
/// use constant_term::numeric::Radix;
///
/// let hex = Radix::new(16).unwrap();
/// assert_eq!(hex.get(), 16);
/// assert!(Radix::new(17).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Radix(u32);

impl Radix {
    /// Smallest supported base
    pub const MIN: u32 = 2;

    /// Largest supported base (the alphabet stops at `f`)
    pub const MAX: u32 = 16;

    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEX: Self = Self(16);

    /// Validate a raw base.
    ///
    /// # Errors
    /// Returns `UnsupportedBase` if `base` is outside `2..=16`.
    #[inline]
    pub fn new(base: u32) -> NumericResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&base) {
            Ok(Self(base))
        } else {
            Err(NumericError::UnsupportedBase(base))
        }
    }

    /// The base as a plain integer.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Radix {
    type Error = NumericError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        Self::new(base)
    }
}

impl TryFrom<u64> for Radix {
    type Error = NumericError;

    fn try_from(base: u64) -> Result<Self, Self::Error> {
        u32::try_from(base)
            .map_err(|_| NumericError::UnsupportedBase(u32::MAX))
            .and_then(Self::new)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Radix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Radix {
    type Err = NumericError;

    /// Parse a base written as decimal text, e.g. `"16"` or `" 2 "`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_radix(s)
    }
}

/// Parse a base written as decimal text.
///
/// # Errors
/// - `MalformedBase` if the text is not a decimal integer
/// - `UnsupportedBase` if it is outside `2..=16`
pub fn parse_radix(text: &str) -> NumericResult<Radix> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::MalformedBase);
    }
    // All-digit text that doesn't fit u32 is certainly above 16.
    let base: u32 = text.parse().unwrap_or(u32::MAX);
    Radix::new(base)
}

// ============================================================================
// Conversion
// ============================================================================

/// Value of a single digit character in the given base (case-insensitive).
///
/// # Errors
/// Returns `InvalidDigit` naming the character and base if the character is
/// not in [`DIGIT_ALPHABET`] or its value is not below the base.
#[inline]
pub fn digit_value(ch: char, radix: Radix) -> NumericResult<u32> {
    let lower = ch.to_ascii_lowercase();
    DIGIT_ALPHABET
        .chars()
        .position(|d| d == lower)
        .map(|pos| pos as u32)
        .filter(|&value| value < radix.get())
        .ok_or(NumericError::InvalidDigit {
            digit: ch,
            base: radix.get(),
        })
}

/// Convert a signed digit string to an exact integer.
///
/// An optional leading `-` negates the result. Digits are folded left to
/// right as `acc * base + digit`, so the magnitude is unbounded. `"-0"` is
/// simply zero.
///
/// # Errors
/// - `EmptyDigits` if no digits follow the optional sign
/// - `InvalidDigit` on the first character that is not a valid digit
///
/// # Example
/// ```
/// use constant_term::numeric::{convert, Radix};
/// use num_bigint::BigInt;
///
/// assert_eq!(convert("ff", Radix::HEX).unwrap(), BigInt::from(255));
/// assert_eq!(convert("-11", Radix::BINARY).unwrap(), BigInt::from(-3));
/// ```
pub fn convert(digits: &str, radix: Radix) -> NumericResult<BigInt> {
    let (is_negative, body) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits),
    };

    if body.is_empty() {
        return Err(NumericError::EmptyDigits);
    }

    let base = radix.get();
    let mut acc = BigInt::zero();
    for ch in body.chars() {
        let value = digit_value(ch, radix)?;
        acc *= base;
        acc += value;
    }

    Ok(if is_negative { -acc } else { acc })
}

/// Same as [`convert`], validating a raw base first.
///
/// # Errors
/// Returns `UnsupportedBase` before looking at any digit if `base` is out of
/// range; otherwise the errors of [`convert`].
pub fn convert_str(digits: &str, base: u32) -> NumericResult<BigInt> {
    convert(digits, Radix::new(base)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_radix_bounds() {
        assert_eq!(Radix::new(2).unwrap(), Radix::BINARY);
        assert_eq!(Radix::new(16).unwrap(), Radix::HEX);
        assert_eq!(Radix::new(1), Err(NumericError::UnsupportedBase(1)));
        assert_eq!(Radix::new(0), Err(NumericError::UnsupportedBase(0)));
        assert_eq!(Radix::new(17), Err(NumericError::UnsupportedBase(17)));
        assert!(Radix::try_from(36u64).is_err());
        assert!(Radix::try_from(u64::MAX).is_err());
    }

    #[test]
    fn test_parse_radix() {
        assert_eq!(parse_radix("10").unwrap(), Radix::DECIMAL);
        assert_eq!(" 8 ".parse::<Radix>().unwrap(), Radix::OCTAL);
        assert_eq!(parse_radix("016").unwrap(), Radix::HEX);
        assert_eq!(parse_radix("ten"), Err(NumericError::MalformedBase));
        assert_eq!(parse_radix(""), Err(NumericError::MalformedBase));
        assert_eq!(parse_radix("-2"), Err(NumericError::MalformedBase));
        assert_eq!(parse_radix("20"), Err(NumericError::UnsupportedBase(20)));
        assert_eq!(
            parse_radix("99999999999999999999"),
            Err(NumericError::UnsupportedBase(u32::MAX))
        );
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value('0', Radix::BINARY).unwrap(), 0);
        assert_eq!(digit_value('a', Radix::HEX).unwrap(), 10);
        assert_eq!(digit_value('F', Radix::HEX).unwrap(), 15);
        assert_eq!(
            digit_value('9', Radix::OCTAL),
            Err(NumericError::InvalidDigit { digit: '9', base: 8 })
        );
    }

    #[test]
    fn test_convert_basic() {
        assert_eq!(convert("5", Radix::DECIMAL).unwrap(), big(5));
        assert_eq!(convert("a", Radix::HEX).unwrap(), big(10));
        assert_eq!(convert("111", Radix::BINARY).unwrap(), big(7));
        assert_eq!(convert("777", Radix::OCTAL).unwrap(), big(511));
        assert_eq!(convert_str("213", 4).unwrap(), big(39));
    }

    #[test]
    fn test_convert_negative() {
        assert_eq!(convert("-11", Radix::BINARY).unwrap(), big(-3));
        assert_eq!(convert("-ff", Radix::HEX).unwrap(), big(-255));
    }

    #[test]
    fn test_convert_negative_zero() {
        assert_eq!(convert("-0", Radix::DECIMAL).unwrap(), big(0));
        assert_eq!(convert("-000", Radix::BINARY).unwrap(), big(0));
    }

    #[test]
    fn test_convert_case_insensitive() {
        assert_eq!(
            convert("ff", Radix::HEX).unwrap(),
            convert("FF", Radix::HEX).unwrap()
        );
        assert_eq!(convert("aBcD", Radix::HEX).unwrap(), big(0xabcd));
    }

    #[test]
    fn test_convert_invalid_digit() {
        assert_eq!(
            convert("g", Radix::HEX),
            Err(NumericError::InvalidDigit {
                digit: 'g',
                base: 16
            })
        );
        assert_eq!(
            convert("2", Radix::BINARY),
            Err(NumericError::InvalidDigit { digit: '2', base: 2 })
        );
        // Reports the character as written
        assert_eq!(
            convert("1C", Radix::new(12).unwrap()),
            Err(NumericError::InvalidDigit {
                digit: 'C',
                base: 12
            })
        );
        // Only one leading sign is accepted
        assert_eq!(
            convert("--1", Radix::DECIMAL),
            Err(NumericError::InvalidDigit {
                digit: '-',
                base: 10
            })
        );
        assert!(convert("1 0", Radix::DECIMAL).is_err());
    }

    #[test]
    fn test_convert_empty() {
        assert_eq!(convert("", Radix::DECIMAL), Err(NumericError::EmptyDigits));
        assert_eq!(convert("-", Radix::DECIMAL), Err(NumericError::EmptyDigits));
    }

    #[test]
    fn test_convert_str_rejects_base_first() {
        assert_eq!(convert_str("zz", 17), Err(NumericError::UnsupportedBase(17)));
    }

    #[test]
    fn test_convert_beyond_u64() {
        let twenty_fs = "f".repeat(20);
        let value = convert(&twenty_fs, Radix::HEX).unwrap();
        let expected = (BigInt::from(1) << 80u32) - 1;
        assert_eq!(value, expected);
        assert_eq!(value.to_string(), "1208925819614629174706175");
    }

    proptest! {
        #[test]
        fn prop_matches_reference(base in 2u32..=16, raw in proptest::collection::vec(0u32..16, 1..64)) {
            let digits: String = raw
                .iter()
                .map(|d| d % base)
                .map(|d| DIGIT_ALPHABET.as_bytes()[d as usize] as char)
                .collect();
            let ours = convert_str(&digits, base).unwrap();
            let reference = BigInt::parse_bytes(digits.as_bytes(), base).unwrap();
            prop_assert_eq!(ours, reference);
        }

        #[test]
        fn prop_sign_symmetry(base in 2u32..=16, value in any::<u64>()) {
            let radix = Radix::new(base).unwrap();
            let digits = BigInt::from(value).to_str_radix(base);
            let positive = convert(&digits, radix).unwrap();
            let negative = convert(&format!("-{}", digits), radix).unwrap();
            prop_assert_eq!(negative, -positive);
        }

        #[test]
        fn prop_case_insensitive(value in any::<u128>()) {
            let lower = format!("{:x}", value);
            let upper = format!("{:X}", value);
            prop_assert_eq!(
                convert(&lower, Radix::HEX).unwrap(),
                convert(&upper, Radix::HEX).unwrap()
            );
        }

        #[test]
        fn prop_digit_at_or_above_base_rejected(base in 2u32..16) {
            let radix = Radix::new(base).unwrap();
            let digit = DIGIT_ALPHABET.as_bytes()[base as usize] as char;
            prop_assert_eq!(
                convert(&format!("1{}", digit), radix),
                Err(NumericError::InvalidDigit { digit, base })
            );
        }
    }
}
