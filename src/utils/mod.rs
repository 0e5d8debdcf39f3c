// ============================================================================
// Utilities Module
// Helpers for applications embedding the currency types
// ============================================================================

mod logging;

pub use logging::init_logging;
