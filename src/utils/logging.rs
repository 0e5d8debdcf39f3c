// ============================================================================
// Logging Setup
// Optional tracing subscriber for applications embedding the crate
// ============================================================================
//
// The library only emits events through the `tracing` facade:
// - debug: rejected amounts, subtraction underflow, inverted sampling bounds
// - trace: every sampled random amount
//
// Applications that do not install their own subscriber can call
// `init_logging` once at startup (requires the `logging` feature).
// ============================================================================

/// Install a formatting subscriber that prints events at `level` and above.
///
/// # Returns
/// * `true` if this call installed the global subscriber
/// * `false` if one was already installed
///
/// # Example
/// ```ignore
/// use coda_currency::utils::init_logging;
///
/// init_logging(tracing::Level::DEBUG);
/// ```
#[cfg(feature = "logging")]
pub fn init_logging(level: tracing::Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Install a formatting subscriber that prints events at `level` and above.
///
/// **Note:** This is a no-op stub. Enable the `logging` feature to install a subscriber.
#[cfg(not(feature = "logging"))]
pub fn init_logging(_level: tracing::Level) -> bool {
    false
}
