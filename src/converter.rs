//! Binary to decimal conversion.
//!
//! Conversion folds over the bits from least to most significant, adding
//! `bit * 2^index` into a double-precision accumulator. Results are exact up
//! to [`MAX_SAFE_INTEGER`]; wider inputs round the way `f64` arithmetic does.

use std::fmt;

use tracing::debug;

use crate::error::ConversionError;
use crate::validator::is_valid_binary;

/// Largest integer an `f64` represents exactly along with all its neighbours.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Magnitude from which values are written in exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// The base-10 value of a binary string.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct DecimalValue(f64);

impl DecimalValue {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True if the value is an integer no larger than [`MAX_SAFE_INTEGER`].
    pub fn is_exact(self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() <= MAX_SAFE_INTEGER
    }
}

impl From<DecimalValue> for f64 {
    fn from(value: DecimalValue) -> Self {
        value.0
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            if self.0.is_sign_negative() {
                write!(f, "-Infinity")
            } else {
                write!(f, "Infinity")
            }
        } else if self.0.is_finite() && self.0.abs() >= EXPONENT_THRESHOLD {
            // Shortest mantissa with an explicitly signed exponent: 1.18e+21
            let formatted = format!("{:e}", self.0);
            match formatted.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
                _ => write!(f, "{formatted}"),
            }
        } else {
            // f64 Display prints integral values without a fractional part.
            write!(f, "{}", self.0)
        }
    }
}

/// Convert a binary string to its decimal value.
///
/// The leftmost character is the most significant bit. No validation is
/// performed: callers must pass a string accepted by
/// [`is_valid_binary`](crate::is_valid_binary). A decimal digit other than
/// `0`/`1` still contributes its digit value, and any non-digit character
/// makes the result `NaN`. Use [`parse_binary`] for checked conversion.
pub fn binary_to_decimal(input: &str) -> DecimalValue {
    let value = input
        .chars()
        .rev()
        .enumerate()
        .fold(0.0_f64, |acc, (index, c)| {
            let bit = c.to_digit(10).map_or(f64::NAN, f64::from);
            let exponent = i32::try_from(index).unwrap_or(i32::MAX);
            acc + bit * 2.0_f64.powi(exponent)
        });
    DecimalValue(value)
}

/// Whitespace stripped from the ends of user text.
///
/// Unicode `White_Space` without NEL (U+0085), plus the byte order mark
/// (U+FEFF), the same set a browser text field trims.
fn is_trimmable(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Strip leading and trailing whitespace from user text.
pub fn trim_input(input: &str) -> &str {
    input.trim_matches(is_trimmable)
}

/// Trim, validate and convert user text.
pub fn parse_binary(input: &str) -> Result<DecimalValue, ConversionError> {
    let trimmed = trim_input(input);
    if !is_valid_binary(trimmed) {
        debug!(input = trimmed, "rejected non-binary input");
        return Err(ConversionError::InvalidBinaryFormat);
    }
    let value = binary_to_decimal(trimmed);
    debug!(input = trimmed, %value, bits = trimmed.len(), "converted binary input");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(input: &str) -> f64 {
        binary_to_decimal(input).value()
    }

    #[test]
    fn test_known_values() {
        assert_eq!(dec("0"), 0.0);
        assert_eq!(dec("1"), 1.0);
        assert_eq!(dec("1010"), 10.0);
        assert_eq!(dec("1111"), 15.0);
        assert_eq!(dec("100000000"), 256.0);
    }

    #[test]
    fn test_leading_zeros_ignored() {
        assert_eq!(dec("0000101"), 5.0);
        assert_eq!(dec("0000"), 0.0);
    }

    #[test]
    fn test_round_trip_small_range() {
        for n in 0u64..4096 {
            assert_eq!(dec(&format!("{n:b}")), n as f64, "round trip failed for {n}");
        }
    }

    #[test]
    fn test_round_trip_powers_and_neighbours() {
        for shift in 0..53 {
            let p = 1u64 << shift;
            for n in [p - 1, p, p + 1] {
                assert_eq!(dec(&format!("{n:b}")), n as f64, "round trip failed for {n}");
            }
        }
    }

    #[test]
    fn test_round_trip_max_safe_integer() {
        let max = (1u64 << 53) - 1;
        let value = binary_to_decimal(&format!("{max:b}"));
        assert_eq!(value.value(), MAX_SAFE_INTEGER);
        assert!(value.is_exact());
    }

    #[test]
    fn test_precision_degrades_past_safe_range() {
        let n = (1u64 << 60) + 1;
        let value = binary_to_decimal(&format!("{n:b}"));
        assert_eq!(value.value(), (1u64 << 60) as f64);
        assert!(!value.is_exact());
    }

    #[test]
    fn test_unchecked_input_is_nonsensical() {
        // "102" read as bits 2,0,1 from the right: 2*1 + 0*2 + 1*4
        assert_eq!(dec("102"), 6.0);
        assert!(dec("1a1").is_nan());
    }

    #[test]
    fn test_display_has_no_fraction() {
        assert_eq!(binary_to_decimal("101").to_string(), "5");
        assert_eq!(binary_to_decimal("0").to_string(), "0");
        assert_eq!(
            binary_to_decimal(&format!("{:b}", (1u64 << 53) - 1)).to_string(),
            "9007199254740991"
        );
        assert_eq!(DecimalValue::new(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn test_display_uses_exponent_from_1e21() {
        let wide = format!("1{}", "0".repeat(70));
        assert_eq!(binary_to_decimal(&wide).to_string(), "1.1805916207174113e+21");
        assert_eq!(DecimalValue::new(1e21).to_string(), "1e+21");
        assert_eq!(
            binary_to_decimal(&format!("1{}", "0".repeat(60))).to_string(),
            "1152921504606847000"
        );
    }

    #[test]
    fn test_trim_input_matches_browser_whitespace() {
        assert_eq!(trim_input("\u{FEFF}101\u{3000}"), "101");
        assert_eq!(trim_input(" \t\r\n\u{00A0}1\u{2028}"), "1");
        assert_eq!(trim_input("\u{0085}101"), "\u{0085}101");
        assert_eq!(parse_binary("\u{FEFF}101").unwrap().value(), 5.0);
        assert_eq!(
            parse_binary("\u{0085}101"),
            Err(ConversionError::InvalidBinaryFormat)
        );
    }

    #[test]
    fn test_parse_binary_trims() {
        assert_eq!(parse_binary("  1010\t\n").unwrap().value(), 10.0);
    }

    #[test]
    fn test_parse_binary_rejects_invalid() {
        for input in ["", "   ", "102", "1 0", "abc", "-1"] {
            assert_eq!(
                parse_binary(input),
                Err(ConversionError::InvalidBinaryFormat),
                "expected {input:?} to be rejected"
            );
        }
    }
}
