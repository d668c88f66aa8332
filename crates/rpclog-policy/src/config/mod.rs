//! Policy config loader (strict parsing).

pub mod schema;

use std::fs;

use rpclog_core::{PolicyError, Result};

pub use schema::{LevelMap, PolicySchema};

pub fn load_from_file(path: &str) -> Result<PolicySchema> {
    let s = fs::read_to_string(path)
        .map_err(|e| PolicyError::Internal(format!("read config failed: {e}")))?;
    let cfg = load_from_str(&s)?;
    tracing::debug!(%path, "policy config loaded");
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<PolicySchema> {
    let cfg: PolicySchema = serde_yaml::from_str(s)
        .map_err(|e| PolicyError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
