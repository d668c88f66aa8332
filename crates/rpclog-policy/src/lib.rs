//! rpclog policy layer.
//!
//! This crate decides WHETHER an interceptor logs, AT WHAT SEVERITY, and ON
//! WHICH lifecycle events. It is consumed by an RPC interceptor at two
//! points:
//! - setup time: [`LogPolicy::build`] merges override directives onto the
//!   documented defaults and returns an immutable snapshot;
//! - per event: the snapshot answers [`LogPolicy::severity_for`],
//!   [`LogPolicy::should_log`], and [`LogPolicy::is_event_enabled`].
//!
//! It performs no I/O and holds no mutable state; the snapshot is safe to
//! share across concurrent calls via `Arc`.

pub mod config;
pub mod policy;
pub mod suppress;

pub use policy::{
    default_code_to_level, default_decider, with_decider, with_levels, with_log_on_events,
    CodeToLevel, Decider, Directive, DynError, LogPolicy,
};
