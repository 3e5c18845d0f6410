//! Base64 encoding entry points for the standard and URL-safe alphabets.

use std::sync::OnceLock;

use crate::constants::{ALPHABET, ALPHABET_URL, PAD};
use crate::create_to_base64::encoder;

type Encoder = Box<dyn Fn(&[u8]) -> String + Send + Sync>;

fn standard() -> &'static Encoder {
    static ENCODER: OnceLock<Encoder> = OnceLock::new();
    ENCODER.get_or_init(|| Box::new(encoder(ALPHABET.as_bytes(), Some(PAD as u8))))
}

fn url() -> &'static Encoder {
    static ENCODER: OnceLock<Encoder> = OnceLock::new();
    ENCODER.get_or_init(|| Box::new(encoder(ALPHABET_URL.as_bytes(), None)))
}

/// Encodes bytes with the standard alphabet and `=` padding.
///
/// ```
/// use bytebuf_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    standard()(uint8)
}

/// Encodes bytes with the URL-safe alphabet and no padding.
pub fn to_base64_url(uint8: &[u8]) -> String {
    url()(uint8)
}

/// Length of the encoded form of `len` bytes, with or without padding.
pub fn encoded_len(len: usize, padded: bool) -> usize {
    if padded {
        len.div_ceil(3) * 4
    } else {
        (len * 4).div_ceil(3)
    }
}
