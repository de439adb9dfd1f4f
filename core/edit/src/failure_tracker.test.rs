use super::*;

#[test]
fn test_escalates_on_second_failure() {
    let mut tracker = EditFailureTracker::default();
    let path = Path::new("src/lib.rs");
    assert!(!tracker.record_failure(path));
    assert!(tracker.record_failure(path));
    assert!(tracker.record_failure(path));
    assert_eq!(tracker.consecutive_failures(path), 3);
}

#[test]
fn test_success_resets() {
    let mut tracker = EditFailureTracker::new(2);
    let path = Path::new("a.rs");
    tracker.record_failure(path);
    tracker.record_success(path);
    assert_eq!(tracker.consecutive_failures(path), 0);
    assert!(!tracker.record_failure(path));
}

#[test]
fn test_files_are_independent() {
    let mut tracker = EditFailureTracker::new(2);
    assert!(!tracker.record_failure(Path::new("a.rs")));
    assert!(!tracker.record_failure(Path::new("b.rs")));
    tracker.reset();
    assert_eq!(tracker.consecutive_failures(Path::new("a.rs")), 0);
}

#[test]
fn test_threshold_of_one_escalates_immediately() {
    let mut tracker = EditFailureTracker::new(0);
    assert!(tracker.record_failure(Path::new("a.rs")));
}
