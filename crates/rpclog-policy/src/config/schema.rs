use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use rpclog_core::{parse_level, Level, LoggableEvent, Result, StatusCode};

use crate::policy::{with_decider, with_levels, with_log_on_events, Directive, DynError};
use crate::suppress::{compile_method_rules, is_suppressed};

/// Declarative policy document. Covers the non-functional parts of the
/// policy; callers needing arbitrary decision logic supply directives in
/// code instead.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicySchema {
    pub version: u32,

    /// Replaces the enabled event set wholesale when present.
    #[serde(default)]
    pub events: Option<Vec<LoggableEvent>>,

    /// Replaces the code-to-level mapping wholesale when present.
    #[serde(default)]
    pub levels: Option<LevelMap>,

    /// Fully-qualified method names to suppress. Supports a trailing
    /// service wildcard (`/pkg.Service/*`).
    #[serde(default)]
    pub suppress_methods: Vec<String>,
}

/// Status-code to level mapping. `default` keeps the mapping total; codes
/// not listed in `overrides` fall back to it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelMap {
    pub default: String,

    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl PolicySchema {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(rpclog_core::PolicyError::UnsupportedVersion);
        }
        self.compile().map(|_| ())
    }

    /// Compile the document into override directives, in a fixed order
    /// (events, levels, suppression). Order is immaterial here since each
    /// directive targets a distinct field.
    pub fn compile(&self) -> Result<Vec<Directive>> {
        let mut out = Vec::new();

        if let Some(events) = &self.events {
            out.push(with_log_on_events(events.clone()));
        }

        if let Some(levels) = &self.levels {
            let (fallback, table) = levels.compile()?;
            out.push(with_levels(move |code| {
                table.get(&code).copied().unwrap_or(fallback)
            }));
        }

        if !self.suppress_methods.is_empty() {
            let rules = compile_method_rules(&self.suppress_methods)?;
            out.push(with_decider(
                move |full_method: &str, _err: Option<&DynError>| {
                    !is_suppressed(&rules, full_method)
                },
            ));
        }

        Ok(out)
    }
}

impl LevelMap {
    fn compile(&self) -> Result<(Level, HashMap<StatusCode, Level>)> {
        let fallback = parse_level(&self.default)?;
        let mut table = HashMap::with_capacity(self.overrides.len());
        for (code, level) in &self.overrides {
            table.insert(StatusCode::from_name(code)?, parse_level(level)?);
        }
        Ok((fallback, table))
    }
}
