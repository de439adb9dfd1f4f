use super::*;
use std::error::Error;

#[test]
fn test_plain_error() {
    let err = PlainError::new("bad offset", StatusCode::InvalidRange);
    assert_eq!(err.status_code(), StatusCode::InvalidRange);
    assert_eq!(err.to_string(), "bad offset");
    assert!(!err.is_retryable());
}

#[test]
fn test_output_msg_hides_internal() {
    let err = PlainError::new("sensitive details", StatusCode::Internal);
    assert_eq!(err.output_msg(), "Internal error: 1001");
}

#[test]
fn test_output_msg_shows_user_errors() {
    let err = PlainError::new("Unknown tool: frobnicate", StatusCode::UnknownTool);
    assert_eq!(err.output_msg(), "Unknown tool: frobnicate");
}

#[test]
fn test_boxed_error_keeps_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let boxed = boxed(io_err, StatusCode::FileNotFound);

    assert_eq!(boxed.status_code(), StatusCode::FileNotFound);
    assert_eq!(boxed.to_string(), "file not found");
    assert!(boxed.source().is_some());
}

#[test]
fn test_as_any_downcast() {
    let err = PlainError::new("x", StatusCode::SpillFailed);
    let any = err.as_any();
    assert!(any.downcast_ref::<PlainError>().is_some());
}
