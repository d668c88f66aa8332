//! Severity levels handed to the logging engine.
//!
//! The policy layer selects a `tracing::Level`; rendering and emission are
//! the consumer's concern.

use crate::error::{PolicyError, Result};

pub use tracing::Level;

/// Parse a level from its lowercase name (case-insensitive).
/// Used by the declarative config layer.
pub fn parse_level(name: &str) -> Result<Level> {
    match name.to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(PolicyError::UnknownLevel(name.to_string())),
    }
}
