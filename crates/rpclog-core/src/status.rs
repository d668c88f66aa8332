//! RPC status codes (stable API).
//!
//! The policy layer treats these as an opaque outcome classifier: the only
//! semantics it relies on is that [`StatusCode::Ok`] is success and every
//! other variant is some failure category.

use crate::error::{PolicyError, Result};

/// Outcome classifier for a completed RPC call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// Call completed successfully.
    Ok,
    /// Call was cancelled by the caller.
    Cancelled,
    /// Unknown failure.
    Unknown,
    /// Client supplied an invalid argument.
    InvalidArgument,
    /// Deadline expired before the call completed.
    DeadlineExceeded,
    /// Requested entity was not found.
    NotFound,
    /// Entity already exists.
    AlreadyExists,
    /// Caller lacks permission.
    PermissionDenied,
    /// A quota or limit was exhausted.
    ResourceExhausted,
    /// System state required for the call is missing.
    FailedPrecondition,
    /// Call was aborted (typically a concurrency conflict).
    Aborted,
    /// Value out of valid range.
    OutOfRange,
    /// Method not implemented by the server.
    Unimplemented,
    /// Internal server error.
    Internal,
    /// Service unavailable (transient).
    Unavailable,
    /// Unrecoverable data loss or corruption.
    DataLoss,
    /// Missing or invalid credentials.
    Unauthenticated,
}

impl StatusCode {
    /// Canonical string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Cancelled => "CANCELLED",
            StatusCode::Unknown => "UNKNOWN",
            StatusCode::InvalidArgument => "INVALID_ARGUMENT",
            StatusCode::DeadlineExceeded => "DEADLINE_EXCEEDED",
            StatusCode::NotFound => "NOT_FOUND",
            StatusCode::AlreadyExists => "ALREADY_EXISTS",
            StatusCode::PermissionDenied => "PERMISSION_DENIED",
            StatusCode::ResourceExhausted => "RESOURCE_EXHAUSTED",
            StatusCode::FailedPrecondition => "FAILED_PRECONDITION",
            StatusCode::Aborted => "ABORTED",
            StatusCode::OutOfRange => "OUT_OF_RANGE",
            StatusCode::Unimplemented => "UNIMPLEMENTED",
            StatusCode::Internal => "INTERNAL",
            StatusCode::Unavailable => "UNAVAILABLE",
            StatusCode::DataLoss => "DATA_LOSS",
            StatusCode::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    /// Parse a code from its snake_case name (case-insensitive).
    /// Used by the declarative config layer.
    pub fn from_name(name: &str) -> Result<StatusCode> {
        match name.to_ascii_lowercase().as_str() {
            "ok" => Ok(StatusCode::Ok),
            "cancelled" => Ok(StatusCode::Cancelled),
            "unknown" => Ok(StatusCode::Unknown),
            "invalid_argument" => Ok(StatusCode::InvalidArgument),
            "deadline_exceeded" => Ok(StatusCode::DeadlineExceeded),
            "not_found" => Ok(StatusCode::NotFound),
            "already_exists" => Ok(StatusCode::AlreadyExists),
            "permission_denied" => Ok(StatusCode::PermissionDenied),
            "resource_exhausted" => Ok(StatusCode::ResourceExhausted),
            "failed_precondition" => Ok(StatusCode::FailedPrecondition),
            "aborted" => Ok(StatusCode::Aborted),
            "out_of_range" => Ok(StatusCode::OutOfRange),
            "unimplemented" => Ok(StatusCode::Unimplemented),
            "internal" => Ok(StatusCode::Internal),
            "unavailable" => Ok(StatusCode::Unavailable),
            "data_loss" => Ok(StatusCode::DataLoss),
            "unauthenticated" => Ok(StatusCode::Unauthenticated),
            _ => Err(PolicyError::UnknownCode(name.to_string())),
        }
    }
}
