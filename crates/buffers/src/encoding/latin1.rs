//! Single-byte codecs: latin1 (`binary`) and ascii.

/// Encodes each UTF-16 code unit of `text` as its low 8 bits.
pub fn encode(text: &str) -> Vec<u8> {
    text.encode_utf16().map(|u| u as u8).collect()
}

/// Maps each byte to the code point of the same value.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Like [`decode`], with the high bit of every byte cleared.
pub fn decode_ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b & 0x7f)).collect()
}
