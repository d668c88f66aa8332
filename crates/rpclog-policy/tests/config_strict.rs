//! Strict config parsing and compilation to directives.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rpclog_core::{Level, LoggableEvent, PolicyError, StatusCode};
use rpclog_policy::{config, LogPolicy};

#[test]
fn ok_minimal_config_compiles_to_defaults() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let directives = cfg.compile().expect("must compile");
    assert!(directives.is_empty());

    let p = LogPolicy::build(directives);
    assert_eq!(p.severity_for(StatusCode::Ok), Level::INFO);
    assert_eq!(
        p.events(),
        &[LoggableEvent::StartCall, LoggableEvent::FinishCall]
    );
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
levels:
  default: error
  overidez: { ok: info } # typo should fail
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, PolicyError::InvalidConfig(_)));
}

#[test]
fn unsupported_version_rejected() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, PolicyError::UnsupportedVersion));
}

#[test]
fn full_document_compiles() {
    let doc = r#"
version: 1
events: [finish_call]
levels:
  default: warn
  overrides:
    ok: debug
    not_found: info
suppress_methods:
  - "/grpc.health.v1.Health/*"
  - "/pkg.Svc/Noisy"
"#;
    let cfg = config::load_from_str(doc).expect("must parse");
    let p = LogPolicy::build(cfg.compile().expect("must compile"));

    assert_eq!(p.severity_for(StatusCode::Ok), Level::DEBUG);
    assert_eq!(p.severity_for(StatusCode::NotFound), Level::INFO);
    assert_eq!(p.severity_for(StatusCode::Internal), Level::WARN);

    assert!(!p.is_event_enabled(LoggableEvent::StartCall));
    assert!(p.is_event_enabled(LoggableEvent::FinishCall));

    assert!(!p.should_log("/grpc.health.v1.Health/Check", None));
    assert!(!p.should_log("/grpc.health.v1.Health/Watch", None));
    assert!(!p.should_log("/pkg.Svc/Noisy", None));
    assert!(p.should_log("/pkg.Svc/Other", None));
}

#[test]
fn unknown_level_name_rejected() {
    let bad = r#"
version: 1
levels:
  default: loud
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, PolicyError::UnknownLevel(_)));
}

#[test]
fn unknown_status_code_rejected() {
    let bad = r#"
version: 1
levels:
  default: error
  overrides:
    teapot: info
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, PolicyError::UnknownCode(_)));
}

#[test]
fn malformed_suppression_rule_rejected() {
    let bad = r#"
version: 1
suppress_methods:
  - "no-leading-slash"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, PolicyError::InvalidRule(_)));
}

#[test]
fn unknown_event_name_rejected() {
    let bad = r#"
version: 1
events: [start_call, call_waiting]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, PolicyError::InvalidConfig(_)));
}
