//! rpclog core: RPC status codes, lifecycle events, severity levels, and
//! error types shared by the policy layer and its consumers.
//!
//! This crate defines the inputs and outputs a logging interceptor exchanges
//! with the policy layer. It intentionally carries no transport or runtime
//! dependencies so it can be reused by client- and server-side interceptors
//! alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PolicyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod event;
pub mod level;
pub mod status;

/// Shared result type.
pub use error::{PolicyError, Result};
pub use event::LoggableEvent;
pub use level::{parse_level, Level};
pub use status::StatusCode;
