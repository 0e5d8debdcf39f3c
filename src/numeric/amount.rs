// ============================================================================
// Amount Inputs
// Construction-boundary units and the decimal-string parsing rule
// ============================================================================

use super::errors::{CurrencyError, CurrencyResult, FormatIssue};
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of fractional digits in a whole unit.
pub(crate) const DECIMALS: usize = 9;

/// Unit of measure a raw input is expressed in.
///
/// Only meaningful at construction time: a [`Currency`](super::Currency)
/// always stores nano units internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CurrencyFormat {
    /// Whole units (1 whole = 10^9 nano)
    #[default]
    Whole,
    /// Nano units, the smallest indivisible denomination
    Nano,
}

/// A raw amount handed to a currency constructor.
///
/// Every supported input shape is a variant here, so constructors never
/// inspect types at runtime. Use the `From` impls rather than building
/// variants by hand:
///
/// ```
/// use coda_currency::numeric::Amount;
///
/// assert_eq!(Amount::from(5), Amount::Integer(5));
/// assert_eq!(Amount::from("1.5"), Amount::Decimal("1.5".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Integer(i128),
    Float(f64),
    Decimal(String),
}

macro_rules! amount_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount {
                #[inline]
                fn from(value: $t) -> Self {
                    Amount::Integer(i128::from(value))
                }
            }
        )*
    };
}

amount_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f64> for Amount {
    #[inline]
    fn from(value: f64) -> Self {
        Amount::Float(value)
    }
}

impl From<&str> for Amount {
    #[inline]
    fn from(value: &str) -> Self {
        Amount::Decimal(value.to_string())
    }
}

impl From<String> for Amount {
    #[inline]
    fn from(value: String) -> Self {
        Amount::Decimal(value)
    }
}

// ============================================================================
// Decimal String Parsing
// ============================================================================

/// Parse a decimal string into a nano count.
///
/// - `"L.R"` with at most 9 digits in `R` -> integer spelled by `L`, `R` and
///   `9 - len(R)` zeros
/// - no period -> the string is already a nano count and is NOT scaled
pub(crate) fn parse_decimal(input: &str) -> CurrencyResult<i128> {
    parse_decimal_digits(input).inspect_err(|err| {
        tracing::debug!(input, error = %err, "rejected currency amount");
    })
}

fn parse_decimal_digits(input: &str) -> CurrencyResult<i128> {
    let s = input.trim();

    let digits: Cow<'_, str> = match s.split_once('.') {
        None => {
            if !is_signed_digits(s) || unsigned(s).is_empty() {
                return Err(FormatIssue::InvalidDigits.into());
            }
            Cow::Borrowed(s)
        },
        Some((left, right)) => {
            if right.contains('.') {
                return Err(FormatIssue::MultiplePeriods.into());
            }
            if right.len() > DECIMALS {
                return Err(FormatIssue::ExcessPrecision.into());
            }
            if !is_signed_digits(left)
                || !right.bytes().all(|b| b.is_ascii_digit())
                || unsigned(left).len() + right.len() == 0
            {
                return Err(FormatIssue::InvalidDigits.into());
            }
            Cow::Owned(format!("{}{:0<width$}", left, right, width = DECIMALS))
        },
    };

    // Only digits and an optional sign remain, so a failure here means the
    // value is out of range.
    digits
        .parse::<i128>()
        .map_err(|_| CurrencyError::Overflow)
}

#[inline]
fn unsigned(s: &str) -> &str {
    s.strip_prefix(['+', '-']).unwrap_or(s)
}

#[inline]
fn is_signed_digits(s: &str) -> bool {
    unsigned(s).bytes().all(|b| b.is_ascii_digit())
}

/// Render a float as a decimal string without exposing binary rounding.
///
/// Uses `f64`'s `Display`, which yields the shortest digit string that
/// round-trips to the same float and never switches to exponent notation.
/// Integral floats gain a `.0` so they are read as whole units.
pub(crate) fn render_float(value: f64) -> CurrencyResult<String> {
    if !value.is_finite() {
        tracing::debug!(value, "rejected non-finite currency amount");
        return Err(FormatIssue::NonFinite.into());
    }

    let mut rendered = value.to_string();
    if !rendered.contains('.') {
        rendered.push_str(".0");
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fraction_padding() {
        assert_eq!(parse_decimal("1.5"), Ok(1_500_000_000));
        assert_eq!(parse_decimal("0.000000001"), Ok(1));
        assert_eq!(parse_decimal("12.123456789"), Ok(12_123_456_789));
        assert_eq!(parse_decimal("7."), Ok(7_000_000_000));
        assert_eq!(parse_decimal(".25"), Ok(250_000_000));
    }

    #[test]
    fn test_parse_bare_integer_is_nano() {
        assert_eq!(parse_decimal("42"), Ok(42));
        assert_eq!(parse_decimal("1000000000"), Ok(1_000_000_000));
    }

    #[test]
    fn test_parse_signs_and_whitespace() {
        assert_eq!(parse_decimal("-1.5"), Ok(-1_500_000_000));
        assert_eq!(parse_decimal("+2"), Ok(2));
        assert_eq!(parse_decimal("-.5"), Ok(-500_000_000));
        assert_eq!(parse_decimal("  3.0 \n"), Ok(3_000_000_000));
    }

    #[test]
    fn test_parse_rejections() {
        let invalid = Err(CurrencyError::InvalidFormat(FormatIssue::InvalidDigits));
        assert_eq!(parse_decimal(""), invalid);
        assert_eq!(parse_decimal("-"), invalid);
        assert_eq!(parse_decimal("."), invalid);
        assert_eq!(parse_decimal("abc"), invalid);
        assert_eq!(parse_decimal("1.-5"), invalid);
        assert_eq!(parse_decimal("1_000"), invalid);
        assert_eq!(parse_decimal("--1.0"), invalid);

        assert_eq!(
            parse_decimal("1.2345678901"),
            Err(CurrencyError::InvalidFormat(FormatIssue::ExcessPrecision))
        );
        assert_eq!(
            parse_decimal("1.2.3"),
            Err(CurrencyError::InvalidFormat(FormatIssue::MultiplePeriods))
        );
    }

    #[test]
    fn test_parse_out_of_range() {
        let huge = "9".repeat(60);
        assert_eq!(parse_decimal(&huge), Err(CurrencyError::Overflow));
    }

    #[test]
    fn test_render_float() {
        assert_eq!(render_float(0.1).unwrap(), "0.1");
        assert_eq!(render_float(1.0).unwrap(), "1.0");
        assert_eq!(render_float(-2.5).unwrap(), "-2.5");
        assert_eq!(render_float(1e20).unwrap(), "100000000000000000000.0");
        assert_eq!(
            render_float(f64::NAN),
            Err(CurrencyError::InvalidFormat(FormatIssue::NonFinite))
        );
        assert_eq!(
            render_float(f64::NEG_INFINITY),
            Err(CurrencyError::InvalidFormat(FormatIssue::NonFinite))
        );
    }

    #[test]
    fn test_amount_conversions() {
        assert_eq!(Amount::from(7u64), Amount::Integer(7));
        assert_eq!(Amount::from(-3i32), Amount::Integer(-3));
        assert_eq!(Amount::from(0.5), Amount::Float(0.5));
        assert_eq!(
            Amount::from(String::from("2.0")),
            Amount::Decimal("2.0".to_string())
        );
        assert_eq!(CurrencyFormat::default(), CurrencyFormat::Whole);
    }
}
