//! Policy snapshot and override directives.
//!
//! Functional-options construction: each [`Directive`] is a self-contained
//! closure that replaces exactly one field of a working copy of the
//! defaults. Directives apply strictly in list order; a later directive
//! targeting the same field fully overwrites an earlier one.

use std::sync::Arc;

use rpclog_core::{Level, LoggableEvent, StatusCode};

/// Error value handed to the decider. Opaque to the policy layer.
pub type DynError = dyn std::error::Error + Send + Sync + 'static;

/// Maps an RPC status code to the severity of the resulting log line.
/// Must be total: every code maps to exactly one level.
pub type CodeToLevel = Arc<dyn Fn(StatusCode) -> Level + Send + Sync>;

/// Decides whether a call produces log lines at all, from its
/// fully-qualified method name and (possibly absent) error.
/// `true` means emit.
pub type Decider = Arc<dyn Fn(&str, Option<&DynError>) -> bool + Send + Sync>;

/// Default code-to-level mapping: `Ok` logs at INFO, every other status at
/// ERROR.
pub fn default_code_to_level(code: StatusCode) -> Level {
    if code == StatusCode::Ok {
        Level::INFO
    } else {
        Level::ERROR
    }
}

/// Default decider: every call is logged.
pub fn default_decider(_full_method: &str, _err: Option<&DynError>) -> bool {
    true
}

/// Working copy the directives mutate. Never exposed; only the resulting
/// [`LogPolicy`] leaves [`LogPolicy::build`].
struct Options {
    level_fn: CodeToLevel,
    decider: Decider,
    events: Vec<LoggableEvent>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            level_fn: Arc::new(default_code_to_level),
            decider: Arc::new(default_decider),
            events: vec![LoggableEvent::StartCall, LoggableEvent::FinishCall],
        }
    }
}

/// A single override applied during policy construction.
/// Replaces exactly one field of the policy (last write wins).
pub struct Directive(Box<dyn FnOnce(&mut Options) + Send>);

/// Replace the code-to-level mapping wholesale.
pub fn with_levels<F>(f: F) -> Directive
where
    F: Fn(StatusCode) -> Level + Send + Sync + 'static,
{
    Directive(Box::new(move |o| o.level_fn = Arc::new(f)))
}

/// Replace the suppression decider wholesale.
pub fn with_decider<F>(f: F) -> Directive
where
    F: Fn(&str, Option<&DynError>) -> bool + Send + Sync + 'static,
{
    Directive(Box::new(move |o| o.decider = Arc::new(f)))
}

/// Replace the enabled event set wholesale. Not additive: naming one event
/// drops all others, including the defaults. Callers who want the defaults
/// plus payload events must list all of them.
pub fn with_log_on_events<I>(events: I) -> Directive
where
    I: IntoIterator<Item = LoggableEvent>,
{
    let events: Vec<LoggableEvent> = events.into_iter().collect();
    Directive(Box::new(move |o| o.events = events))
}

/// Immutable logging policy.
/// Construct once at interceptor setup, then share via `Arc`; queries are
/// read-only and safe under arbitrary concurrency.
#[derive(Clone)]
pub struct LogPolicy {
    level_fn: CodeToLevel,
    decider: Decider,
    events: Vec<LoggableEvent>,
}

impl LogPolicy {
    /// Merge directives onto the documented defaults, in order.
    ///
    /// An empty list yields the defaults exactly: `Ok` at INFO and every
    /// other status at ERROR, every call logged, events
    /// `[StartCall, FinishCall]`. Cannot fail.
    pub fn build(directives: impl IntoIterator<Item = Directive>) -> Self {
        let mut opts = Options::default();
        for d in directives {
            (d.0)(&mut opts);
        }

        // Duplicates carry no meaning; keep first occurrence so events()
        // iterates deterministically.
        let mut events = Vec::with_capacity(opts.events.len());
        for e in opts.events {
            if !events.contains(&e) {
                events.push(e);
            }
        }

        Self {
            level_fn: opts.level_fn,
            decider: opts.decider,
            events,
        }
    }

    /// Severity of the log line for a call that ended with `code`.
    pub fn severity_for(&self, code: StatusCode) -> Level {
        (self.level_fn)(code)
    }

    /// Whether a call should produce log lines at all.
    ///
    /// Queried once per loggable event. At events preceding call completion
    /// (`StartCall` and the payload events) the interceptor passes `None`;
    /// only `FinishCall` carries the call's error, if any.
    pub fn should_log(&self, full_method: &str, err: Option<&DynError>) -> bool {
        (self.decider)(full_method, err)
    }

    /// Membership test against the enabled event set.
    pub fn is_event_enabled(&self, event: LoggableEvent) -> bool {
        self.events.contains(&event)
    }

    /// Enabled events, in the order they were supplied.
    pub fn events(&self) -> &[LoggableEvent] {
        &self.events
    }
}

impl Default for LogPolicy {
    fn default() -> Self {
        Self::build(std::iter::empty())
    }
}
