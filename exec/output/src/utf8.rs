//! Byte-count slicing that never splits a UTF-8 sequence.
//!
//! Only a well-formed lead byte moves a cut, and never by more than three
//! bytes. Bytes that are not UTF-8 are sliced exactly where asked.

pub(crate) fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Sequence length declared by a lead byte.
fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

/// When `bytes` ends inside a multi-byte sequence, the number of its bytes
/// already present and the number still missing.
pub(crate) fn incomplete_suffix(bytes: &[u8]) -> Option<(usize, usize)> {
    for back in 1..=bytes.len().min(3) {
        let byte = bytes[bytes.len() - back];
        if is_continuation(byte) {
            continue;
        }
        return sequence_len(byte)
            .filter(|len| *len > back)
            .map(|len| (back, len - back));
    }
    None
}

/// Largest `n <= max` such that `bytes[..n]` does not end inside a code point.
pub(crate) fn floor_boundary(bytes: &[u8], max: usize) -> usize {
    if max >= bytes.len() {
        return bytes.len();
    }
    match incomplete_suffix(&bytes[..max]) {
        Some((present, _)) => max - present,
        None => max,
    }
}

/// Smallest `n >= min` such that `bytes[n..]` does not start inside a code point.
pub(crate) fn ceil_boundary(bytes: &[u8], min: usize) -> usize {
    if min >= bytes.len() {
        return bytes.len();
    }
    let Some((_, missing)) = incomplete_suffix(&bytes[..min]) else {
        return min;
    };
    min + bytes[min..]
        .iter()
        .take(missing)
        .take_while(|b| is_continuation(**b))
        .count()
}

#[cfg(test)]
#[path = "utf8.test.rs"]
mod tests;
