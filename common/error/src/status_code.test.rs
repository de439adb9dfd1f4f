use super::*;
use strum::IntoEnumIterator;

#[test]
fn test_category_prefixes_match_value() {
    for code in StatusCode::iter() {
        let prefix = code as i32 / 1000;
        let expected = match code.category() {
            StatusCategory::Success => 0,
            StatusCategory::Common => 1,
            StatusCategory::Input => 2,
            StatusCategory::IO => 3,
            StatusCategory::Config => 10,
            StatusCategory::Tool => 11,
            StatusCategory::Edit => 12,
            StatusCategory::Artifact => 13,
        };
        assert_eq!(prefix, expected, "{code} has wrong prefix");
    }
}

#[test]
fn test_from_i32_roundtrip() {
    for code in StatusCode::iter() {
        assert_eq!(StatusCode::from_i32(code as i32), Some(code));
    }
    assert_eq!(StatusCode::from_i32(99_999), None);
}

#[test]
fn test_is_success() {
    assert!(StatusCode::is_success(0));
    assert!(!StatusCode::is_success(11_000));
}

#[test]
fn test_flags() {
    assert!(StatusCode::SpillFailed.is_retryable());
    assert!(StatusCode::SpillFailed.should_log_error());
    assert!(!StatusCode::EditNoMatch.is_retryable());
    assert!(StatusCode::UnknownTool.should_log_error());
    assert!(!StatusCode::InvalidRange.should_log_error());
}

#[test]
fn test_display_and_name() {
    assert_eq!(StatusCode::EditCountMismatch.to_string(), "EditCountMismatch");
    assert_eq!(StatusCode::InvalidArtifactId.name(), "InvalidArtifactId");
    assert_eq!(StatusCode::InvalidArtifactId.as_ref(), "InvalidArtifactId");
}
