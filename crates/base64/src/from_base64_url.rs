//! URL-safe base64 decoding function.

use std::sync::OnceLock;

use crate::constants::{ALPHABET_URL, INVALID};
use crate::create_from_base64::decode_table;
use crate::from_base64::decode_with;

/// Decodes a URL-safe base64 string to bytes.
///
/// This expects the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and handles missing padding.
///
/// # Example
///
/// ```
/// use bytebuf_base64::from_base64_url;
///
/// assert_eq!(from_base64_url("aGVsbG8gd29ybGQ"), b"hello world");
/// ```
pub fn from_base64_url(encoded: &str) -> Vec<u8> {
    static TABLE: OnceLock<[u8; 256]> = OnceLock::new();
    let table = TABLE.get_or_init(|| decode_table(ALPHABET_URL).unwrap_or([INVALID; 256]));
    decode_with(table, encoded)
}
