use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_format_bytes() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(1023), "1023 B");
    assert_eq!(format_bytes(1536), "1.5 KB");
    assert_eq!(format_bytes(100_000), "97.7 KB");
    assert_eq!(format_bytes(2 * 1024 * 1024), "2.0 MB");
}
