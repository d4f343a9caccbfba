//! Utility modules.

/// Date/time serialization helpers shared by marketplace payload types.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;

/// Credential field cleaning (whitespace, zero-width characters, quotes).
pub mod sanitize;
