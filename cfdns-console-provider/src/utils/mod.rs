//! Utility modules.

/// RFC 3339 serde helpers for record timestamps.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
