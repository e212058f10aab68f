//! Utility modules.

/// RFC 3339 formatting and lenient parsing.
pub mod datetime;

/// Log truncation for response bodies.
pub mod log_sanitizer;
