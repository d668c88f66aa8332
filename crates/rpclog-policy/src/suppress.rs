//! Method-suppression rule compilation and matching.
//!
//! Supports exact entries (`/pkg.Service/Method`) and a trailing service
//! wildcard (`/pkg.Service/*`).

use rpclog_core::{PolicyError, Result};

/// Compiled suppression rule.
#[derive(Debug, Clone)]
pub struct MethodRule {
    pub service: String,
    pub method: Option<String>, // None => wildcard
}

pub fn compile_method_rules(raw: &[String]) -> Result<Vec<MethodRule>> {
    let mut out = Vec::with_capacity(raw.len());
    for s in raw {
        // format: "/service/method" or "/service/*"
        let (service, method) = split_full_method(s).ok_or_else(|| {
            PolicyError::InvalidRule(format!("{s} (expected /pkg.Service/Method)"))
        })?;
        let method = if method == "*" {
            None
        } else {
            Some(method.to_string())
        };
        out.push(MethodRule {
            service: service.to_string(),
            method,
        });
    }
    Ok(out)
}

pub fn is_suppressed(rules: &[MethodRule], full_method: &str) -> bool {
    // A method name the rules cannot address is never suppressed.
    let Some((service, method)) = split_full_method(full_method) else {
        return false;
    };
    rules.iter().any(|r| {
        if r.service != service {
            return false;
        }
        match &r.method {
            None => true,
            Some(m) => m == method,
        }
    })
}

fn split_full_method(s: &str) -> Option<(&str, &str)> {
    let rest = s.strip_prefix('/')?;
    let (service, method) = rest.split_once('/')?;
    if service.is_empty() || method.is_empty() {
        return None;
    }
    Some((service, method))
}
