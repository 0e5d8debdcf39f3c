// ============================================================================
// Numeric Module
// Exact fixed-point arithmetic for nano-denominated currency
// ============================================================================
//
// This module provides:
// - Currency: immutable amount stored as an integer count of nano units
// - Amount / CurrencyFormat: typed construction inputs and their unit
// - CurrencyError: error kinds for parsing, arithmetic and sampling
//
// Design principles:
// - No floating-point state; floats are rendered to decimal text at the boundary
// - All fallible arithmetic returns Result (no panics)
// - i128 representation with checked operations throughout

mod amount;
mod currency;
mod errors;
mod sampling;
#[cfg(feature = "serde")]
mod serde_support;

pub use amount::{Amount, CurrencyFormat};
pub use currency::Currency;
pub use errors::{CurrencyError, CurrencyResult, FormatIssue};
