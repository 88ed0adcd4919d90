use crate::core::common::error::{ConfigError, EventMatrixError, LoadError};
use std::error::Error; // Import the Error trait
use std::io;

#[test]
fn test_load_error_display() {
    let unreachable = LoadError::Unreachable {
        location: "https://example.org/events.json".to_string(),
        reason: "connection refused".to_string(),
    };
    assert_eq!(
        unreachable.to_string(),
        "catalog source 'https://example.org/events.json' is unreachable: connection refused"
    );

    let status = LoadError::Status { location: "events.json".to_string(), status: 404 };
    assert_eq!(status.to_string(), "catalog source 'events.json' returned HTTP status 404");

    let missing = LoadError::MissingSection("filterOptions");
    assert_eq!(
        missing.to_string(),
        "catalog document is missing the required 'filterOptions' section"
    );
}

#[test]
fn test_from_serde_json_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("[1, 2").unwrap_err();
    let original_kind = serde_err.classify();

    let load_err: LoadError = serde_err.into();
    match &load_err {
        LoadError::Json(e) => assert_eq!(e.classify(), original_kind),
        other => panic!("Expected LoadError::Json variant, got {other:?}"),
    }
    assert!(load_err.source().is_some());
    assert!(load_err.to_string().starts_with("catalog document is malformed"));
}

#[test]
fn test_retryable_classification() {
    assert!(LoadError::Unreachable { location: "x".into(), reason: "y".into() }.is_retryable());
    assert!(LoadError::Status { location: "x".into(), status: 503 }.is_retryable());
    assert!(!LoadError::MissingSection("events").is_retryable());

    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(!LoadError::from(serde_err).is_retryable());
}

#[test]
fn test_config_error_from_io() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
    let config_err: ConfigError = io_err.into();
    match config_err {
        ConfigError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
        other => panic!("Expected ConfigError::Io variant, got {other:?}"),
    }
}

#[test]
fn test_crate_error_is_transparent() {
    let err: EventMatrixError = LoadError::MissingSection("events").into();
    assert_eq!(err.to_string(), "catalog document is missing the required 'events' section");

    let err: EventMatrixError = ConfigError::Invalid("page_size must be greater than 0".into()).into();
    assert_eq!(err.to_string(), "invalid configuration: page_size must be greater than 0");
}
