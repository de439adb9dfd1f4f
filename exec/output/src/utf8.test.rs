use super::*;

#[test]
fn test_boundaries_ascii() {
    assert_eq!(floor_boundary(b"abcdef", 3), 3);
    assert_eq!(floor_boundary(b"ab", 10), 2);
    assert_eq!(ceil_boundary(b"abcdef", 3), 3);
    assert_eq!(ceil_boundary(b"ab", 10), 2);
}

#[test]
fn test_boundaries_multibyte() {
    let text = "a€b".as_bytes(); // 'a', 3-byte euro, 'b'
    assert_eq!(floor_boundary(text, 2), 1);
    assert_eq!(floor_boundary(text, 3), 1);
    assert_eq!(floor_boundary(text, 4), 4);
    assert_eq!(ceil_boundary(text, 2), 4);
    assert_eq!(ceil_boundary(text, 1), 1);
}

#[test]
fn test_incomplete_suffix() {
    assert_eq!(incomplete_suffix(b"abc"), None);
    assert_eq!(incomplete_suffix(&[b'a', 0xE2, 0x82]), Some((2, 1)));
    assert_eq!(incomplete_suffix(&[0xF0]), Some((1, 3)));
    assert_eq!(incomplete_suffix("€".as_bytes()), None);
    assert_eq!(incomplete_suffix(&[]), None);
}

#[test]
fn test_stray_continuation_bytes_are_cut_exactly() {
    let bytes = [0x80u8; 16];
    assert_eq!(incomplete_suffix(&bytes), None);
    assert_eq!(floor_boundary(&bytes, 7), 7);
    assert_eq!(ceil_boundary(&bytes, 7), 7);
    // A lone lead byte followed by stray bytes moves the cut by at most three.
    let mut mixed = vec![b'a', 0xE2];
    mixed.extend([0x80u8; 10]);
    assert_eq!(ceil_boundary(&mixed, 2), 4);
    assert_eq!(floor_boundary(&mixed, 3), 1);
    assert_eq!(floor_boundary(&mixed, 6), 6);
}
