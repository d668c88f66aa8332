//! Top-level facade crate for rpclog.
//!
//! Re-exports the core types and the policy library so interceptor
//! implementations can depend on a single crate.

pub mod core {
    pub use rpclog_core::*;
}

pub mod policy {
    pub use rpclog_policy::*;
}
