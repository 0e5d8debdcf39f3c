// ============================================================================
// Currency Errors
// Error types for currency construction and arithmetic
// ============================================================================

use std::fmt;

/// Reason a textual or floating-point amount could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatIssue {
    /// More than one `.` in the input
    MultiplePeriods,
    /// More than 9 fractional digits (sub-nano precision)
    ExcessPrecision,
    /// Empty input, stray sign, or a non-digit character
    InvalidDigits,
    /// NaN or infinite float
    NonFinite,
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatIssue::MultiplePeriods => write!(f, "more than one decimal point"),
            FormatIssue::ExcessPrecision => {
                write!(f, "more than 9 fractional digits")
            },
            FormatIssue::InvalidDigits => write!(f, "not a decimal number"),
            FormatIssue::NonFinite => write!(f, "float is not finite"),
        }
    }
}

/// Errors that can occur while constructing or combining currency amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyError {
    /// Malformed decimal string or float
    InvalidFormat(FormatIssue),
    /// Operand of a kind the requested unit cannot represent
    UnsupportedType,
    /// Subtraction would produce a negative amount
    Underflow,
    /// Result does not fit in the nano representation
    Overflow,
    /// Invalid bounds passed to random sampling
    InvalidArgument,
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::InvalidFormat(issue) => {
                write!(f, "invalid currency format: {}", issue)
            },
            CurrencyError::UnsupportedType => {
                write!(f, "unsupported operand type for currency")
            },
            CurrencyError::Underflow => {
                write!(f, "currency underflow: result would be negative")
            },
            CurrencyError::Overflow => {
                write!(f, "currency overflow: result exceeded representable range")
            },
            CurrencyError::InvalidArgument => write!(
                f,
                "invalid argument: upper bound is less than lower bound"
            ),
        }
    }
}

impl std::error::Error for CurrencyError {}

impl From<FormatIssue> for CurrencyError {
    fn from(issue: FormatIssue) -> Self {
        CurrencyError::InvalidFormat(issue)
    }
}

/// Result type alias for currency operations
pub type CurrencyResult<T> = Result<T, CurrencyError>;
