//! Shared error type across rpclog crates.
//!
//! The policy builder and query surface are total and never return these;
//! errors only arise from the declarative layers (config parsing, rule
//! compilation, level-name parsing).

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Unified error type used by core and the policy crate.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid suppression rule: {0}")]
    InvalidRule(String),
    #[error("unknown status code: {0}")]
    UnknownCode(String),
    #[error("unknown severity level: {0}")]
    UnknownLevel(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}
