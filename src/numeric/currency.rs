// ============================================================================
// Currency
// Exact nano-denominated currency amounts
// ============================================================================

use super::amount::{parse_decimal, render_float, Amount, CurrencyFormat, DECIMALS};
use super::errors::{CurrencyError, CurrencyResult, FormatIssue};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// An exact currency amount stored as a count of nano units.
///
/// One whole unit is 10^9 nano units. The value is immutable; every
/// arithmetic operation returns a new `Currency`. All integer operations are
/// overflow-checked.
///
/// Negative amounts can be built (`from_nano`, `checked_add`), but
/// `checked_sub` refuses to produce one.
///
/// # Example
/// ```
/// use coda_currency::numeric::Currency;
///
/// let balance = Currency::from_whole("12.5")?;
/// let fee = Currency::from_whole(1)?;
/// let remaining = balance.checked_sub(fee)?;
/// assert_eq!(remaining.to_string(), "11.500000000");
/// # Ok::<(), coda_currency::numeric::CurrencyError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Currency(i128);

impl Currency {
    /// Nano units per whole unit (10^9)
    pub const NANOS_PER_WHOLE: i128 = 1_000_000_000;

    /// Number of fractional digits in the decimal rendering
    pub const DECIMALS: usize = DECIMALS;

    /// Zero amount
    pub const ZERO: Self = Self(0);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw nano count.
    #[inline]
    pub const fn from_nano(nanos: i128) -> Self {
        Self(nanos)
    }

    /// Create from an amount expressed in whole units.
    ///
    /// - Integers are scaled by 10^9.
    /// - Decimal strings `"L.R"` keep up to 9 fractional digits exactly.
    /// - A decimal string with no period is read as an already-nano count
    ///   and is not scaled: `from_whole("5")` is 5 nano, while
    ///   `from_whole(5)` is 5 whole. This matches the existing wire format.
    /// - Floats are rendered to their shortest round-trip decimal string
    ///   first, so `0.1` is exactly 100_000_000 nano.
    ///
    /// # Errors
    /// - `InvalidFormat` for malformed strings, sub-nano precision or
    ///   non-finite floats
    /// - `Overflow` if the value does not fit
    pub fn from_whole(value: impl Into<Amount>) -> CurrencyResult<Self> {
        match value.into() {
            Amount::Integer(whole) => whole
                .checked_mul(Self::NANOS_PER_WHOLE)
                .map(Self)
                .ok_or(CurrencyError::Overflow),
            Amount::Float(value) => parse_decimal(&render_float(value)?).map(Self),
            Amount::Decimal(text) => parse_decimal(&text).map(Self),
        }
    }

    /// Create from an amount in the given unit.
    ///
    /// # Errors
    /// Returns `UnsupportedType` for a non-integer `Nano` amount, otherwise
    /// see [`Currency::from_whole`].
    pub fn new(value: impl Into<Amount>, format: CurrencyFormat) -> CurrencyResult<Self> {
        match (format, value.into()) {
            (CurrencyFormat::Whole, amount) => Self::from_whole(amount),
            (CurrencyFormat::Nano, Amount::Integer(nanos)) => Ok(Self(nanos)),
            (CurrencyFormat::Nano, amount) => {
                tracing::debug!(?amount, "cannot construct nano currency from non-integer");
                Err(CurrencyError::UnsupportedType)
            },
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw nano count.
    #[inline]
    pub const fn to_nano(self) -> i128 {
        self.0
    }

    /// Whole units, truncated toward zero.
    #[inline]
    pub const fn whole_part(self) -> i128 {
        self.0 / Self::NANOS_PER_WHOLE
    }

    /// Nano units below one whole, always non-negative.
    #[inline]
    pub const fn fractional_nanos(self) -> u128 {
        (self.0 % Self::NANOS_PER_WHOLE).unsigned_abs()
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Canonical decimal rendering with exactly 9 fractional digits.
    ///
    /// The digits of the nano count are split 9 from the end, or zero-padded
    /// behind `0.` when there are 9 or fewer. Never rounds and never uses
    /// exponent notation. Negative amounts get a leading `-`.
    pub fn to_decimal_string(self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let sign = if self.0 < 0 { "-" } else { "" };

        if digits.len() > DECIMALS {
            let (int_part, frac_part) = digits.split_at(digits.len() - DECIMALS);
            format!("{}{}.{}", sign, int_part, frac_part)
        } else {
            format!("{}0.{:0>width$}", sign, digits, width = DECIMALS)
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition. Does not enforce non-negativity.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> CurrencyResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(CurrencyError::Overflow)
    }

    /// Checked subtraction that never produces a negative amount.
    ///
    /// # Errors
    /// - `Underflow` if `rhs` is larger than `self`
    /// - `Overflow` if the result is out of range
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> CurrencyResult<Self> {
        let diff = self.0.checked_sub(rhs.0).ok_or(CurrencyError::Overflow)?;
        if diff < 0 {
            tracing::debug!(lhs = %self, rhs = %rhs, "currency subtraction underflow");
            return Err(CurrencyError::Underflow);
        }
        Ok(Self(diff))
    }

    /// Scale by an integer. The unit is preserved.
    #[inline]
    pub fn checked_mul_scalar(self, rhs: i128) -> CurrencyResult<Self> {
        self.0
            .checked_mul(rhs)
            .map(Self)
            .ok_or(CurrencyError::Overflow)
    }

    /// Multiply the raw nano counts of two amounts.
    ///
    /// **Not a currency product.** Both operands carry the 10^9 scale and
    /// the result is not divided back down, so
    /// `from_whole(2) * from_whole(3)` is 6 * 10^18 nano rather than
    /// 6 whole units. Kept for compatibility with existing callers; use
    /// [`Currency::checked_mul_scalar`] for price × quantity.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> CurrencyResult<Self> {
        self.checked_mul_scalar(rhs.0)
    }
}

// ============================================================================
// Operator Traits
// ============================================================================

impl Add for Currency {
    type Output = CurrencyResult<Currency>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for Currency {
    type Output = CurrencyResult<Currency>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Mul for Currency {
    type Output = CurrencyResult<Currency>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl Mul<i128> for Currency {
    type Output = CurrencyResult<Currency>;

    #[inline]
    fn mul(self, rhs: i128) -> Self::Output {
        self.checked_mul_scalar(rhs)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.to_decimal_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Currency {
    /// Convert from a `rust_decimal::Decimal` in whole units.
    ///
    /// Every decimal with at most 9 significant fractional digits fits: the
    /// 96-bit mantissa times 10^9 stays well inside `i128`.
    ///
    /// # Errors
    /// Returns `InvalidFormat(ExcessPrecision)` if the value has sub-nano digits.
    pub fn from_decimal(d: rust_decimal::Decimal) -> CurrencyResult<Self> {
        // Trailing zeros beyond the 9th place are not real precision
        let normalized = d.normalize();
        let scale = normalized.scale();
        if scale > DECIMALS as u32 {
            return Err(FormatIssue::ExcessPrecision.into());
        }

        // Scale the 96-bit mantissa in i128 rather than inside Decimal,
        // whose own range is narrower than the nano representation.
        10i128
            .checked_pow(DECIMALS as u32 - scale)
            .and_then(|factor| normalized.mantissa().checked_mul(factor))
            .map(Self)
            .ok_or(CurrencyError::Overflow)
    }

    /// Convert to a scale-9 `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` if the nano count exceeds the 96-bit mantissa.
    pub fn to_decimal(self) -> CurrencyResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::try_from_i128_with_scale(self.0, DECIMALS as u32)
            .map_err(|_| CurrencyError::Overflow)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Currency {
    type Err = CurrencyError;

    /// Parse with the whole-unit decimal rule.
    ///
    /// # Examples
    /// - "123.456" -> 123.456000000
    /// - "-0.001" -> -0.001000000
    /// - "42" -> 0.000000042 (bare integers are nano counts)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s).map(Self)
    }
}

// ============================================================================
// Tests
// ============================================================================
