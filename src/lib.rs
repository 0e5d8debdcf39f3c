// ============================================================================
// Coda Currency Library
// Exact nano-denominated currency amounts for Coda daemon clients
// ============================================================================

//! # Coda Currency
//!
//! An exact, immutable currency value type for amounts exchanged with a Coda
//! daemon. Amounts are stored as an integer count of nano units
//! (1 whole = 10^9 nano) and never pass through floating point.
//!
//! ## Features
//!
//! - **Format-aware construction** from integers, floats and decimal strings
//! - **Checked arithmetic** with distinct underflow and overflow errors
//! - **Canonical rendering** with exactly 9 fractional digits
//! - **Uniform sampling** of amounts within inclusive bounds
//! - **Serde support** for JSON payloads (`serde` feature)
//!
//! ## Example
//!
//! ```rust
//! use coda_currency::prelude::*;
//!
//! let balance = Currency::from_whole("100.25")?;
//! let fee = Currency::new(10_000_000, CurrencyFormat::Nano)?;
//!
//! let after_fee = (balance - fee)?;
//! assert_eq!(after_fee.to_string(), "100.240000000");
//!
//! // Balances cannot go negative
//! assert_eq!(fee - balance, Err(CurrencyError::Underflow));
//!
//! let tip = Currency::random_between(Currency::ZERO, fee)?;
//! assert!(tip <= fee);
//! # Ok::<(), CurrencyError>(())
//! ```

pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        Amount, Currency, CurrencyError, CurrencyFormat, CurrencyResult, FormatIssue,
    };
}
