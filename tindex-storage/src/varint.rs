//! LEB128 unsigned varints: low 7 bits per byte, MSB set on continuation.

/// Longest encoding of a `u64`.
pub const MAX_VARINT_LEN64: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarintError {
    /// The buffer ended before a byte without the continuation bit.
    Truncated,
    /// The encoded value does not fit in 64 bits.
    Overflow,
}

pub fn uvarint_len(mut v: u64) -> usize {
    let mut n = 1;
    while v >= 0x80 {
        v >>= 7;
        n += 1;
    }
    n
}

/// Writes `v` into the front of `out` and returns the bytes written.
/// Returns `None` without touching `out` when it is too short.
pub fn put_uvarint(out: &mut [u8], mut v: u64) -> Option<usize> {
    if out.len() < uvarint_len(v) {
        return None;
    }
    let mut i = 0;
    while v >= 0x80 {
        out[i] = (v as u8) | 0x80;
        v >>= 7;
        i += 1;
    }
    out[i] = v as u8;
    Some(i + 1)
}

/// Decodes a varint from the front of `buf`, returning the value and the
/// number of bytes consumed.
pub fn uvarint(buf: &[u8]) -> Result<(u64, usize), VarintError> {
    let mut v: u64 = 0;
    let mut shift = 0u32;
    for (i, &b) in buf.iter().enumerate() {
        // The 10th byte only has room for the top bit.
        if i == MAX_VARINT_LEN64 - 1 && b > 1 {
            return Err(VarintError::Overflow);
        }
        v |= u64::from(b & 0x7F) << shift;
        if (b & 0x80) == 0 {
            return Ok((v, i + 1));
        }
        shift += 7;
    }
    Err(VarintError::Truncated)
}
