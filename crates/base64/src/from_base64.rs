//! Standard base64 decoding function.

use std::sync::OnceLock;

use crate::constants::{ALPHABET, INVALID, PAD};
use crate::create_from_base64::decode_table;

pub(crate) fn standard_table() -> &'static [u8; 256] {
    static TABLE: OnceLock<[u8; 256]> = OnceLock::new();
    TABLE.get_or_init(|| decode_table(ALPHABET).unwrap_or([INVALID; 256]))
}

pub(crate) fn decode_with(table: &[u8; 256], encoded: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded.len() / 4 * 3 + 2);
    let mut acc: u32 = 0;
    let mut n = 0u8;
    for b in encoded.bytes() {
        if b == PAD as u8 {
            break;
        }
        let v = table[b as usize];
        if v == INVALID {
            continue;
        }
        acc = (acc << 6) | v as u32;
        n += 1;
        if n == 4 {
            out.extend_from_slice(&[(acc >> 16) as u8, (acc >> 8) as u8, acc as u8]);
            acc = 0;
            n = 0;
        }
    }
    match n {
        2 => out.push((acc >> 4) as u8),
        3 => out.extend_from_slice(&[(acc >> 10) as u8, (acc >> 2) as u8]),
        _ => {}
    }
    out
}

/// Decodes a standard base64 string to bytes.
///
/// Characters outside the standard alphabet (including whitespace and the
/// URL-safe `-`/`_`) are skipped.
///
/// # Example
///
/// ```
/// use bytebuf_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8gd29ybGQ="), b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Vec<u8> {
    decode_with(standard_table(), encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base64() {
        assert_eq!(from_base64(""), Vec::<u8>::new());
        assert_eq!(from_base64("AA=="), vec![0]);
        assert_eq!(from_base64("/w"), vec![0xff]);
    }
}
