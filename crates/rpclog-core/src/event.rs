//! RPC lifecycle events a log line can be attached to.

use serde::Deserialize;

/// A point in the RPC lifecycle at which the interceptor may emit a log line.
///
/// Membership in the policy's event set is what matters; the variants carry
/// no data and their order has no meaning beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggableEvent {
    /// Start of the RPC call.
    StartCall,
    /// Finish of the RPC call (status code and error are known here).
    FinishCall,
    /// A request (server) or response (client) payload was received.
    /// Log lines for this event include the payload content.
    /// NOTE: this gets verbose, especially for streaming calls. Intended
    /// for opt-in diagnostic use only.
    PayloadReceived,
    /// A response (server) or request (client) payload was sent.
    /// Same verbosity caveat as [`LoggableEvent::PayloadReceived`].
    PayloadSent,
}
