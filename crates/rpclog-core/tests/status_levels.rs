//! Status-code and level name parsing tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rpclog_core::{parse_level, Level, PolicyError, StatusCode};

const ALL_CODES: [StatusCode; 17] = [
    StatusCode::Ok,
    StatusCode::Cancelled,
    StatusCode::Unknown,
    StatusCode::InvalidArgument,
    StatusCode::DeadlineExceeded,
    StatusCode::NotFound,
    StatusCode::AlreadyExists,
    StatusCode::PermissionDenied,
    StatusCode::ResourceExhausted,
    StatusCode::FailedPrecondition,
    StatusCode::Aborted,
    StatusCode::OutOfRange,
    StatusCode::Unimplemented,
    StatusCode::Internal,
    StatusCode::Unavailable,
    StatusCode::DataLoss,
    StatusCode::Unauthenticated,
];

#[test]
fn code_names_round_trip() {
    for code in ALL_CODES {
        let parsed = StatusCode::from_name(code.as_str()).expect("canonical name must parse");
        assert_eq!(parsed, code, "code={}", code.as_str());
    }
}

#[test]
fn code_names_parse_case_insensitively() {
    assert_eq!(
        StatusCode::from_name("not_found").unwrap(),
        StatusCode::NotFound
    );
    assert_eq!(StatusCode::from_name("Ok").unwrap(), StatusCode::Ok);
}

#[test]
fn unknown_code_rejected() {
    let err = StatusCode::from_name("teapot").expect_err("must fail");
    assert!(matches!(err, PolicyError::UnknownCode(_)));
}

#[test]
fn level_names_parse() {
    assert_eq!(parse_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_level("WARN").unwrap(), Level::WARN);
    assert_eq!(parse_level("error").unwrap(), Level::ERROR);
}

#[test]
fn unknown_level_rejected() {
    let err = parse_level("fatal").expect_err("must fail");
    assert!(matches!(err, PolicyError::UnknownLevel(_)));
}
