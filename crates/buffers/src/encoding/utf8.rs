//! UTF-8 text codec.

/// Encodes text as UTF-8.
pub fn encode(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decodes UTF-8, replacing each maximal invalid subsequence with U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Decodes UTF-8, failing on the first malformed sequence.
pub fn decode_strict(bytes: &[u8]) -> Result<String, String> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(e) => Err(format!(
            "invalid UTF-8 sequence at byte {}",
            e.valid_up_to()
        )),
    }
}

/// Length of the longest prefix of `text` that ends on a character
/// boundary and is at most `max` bytes long.
pub(crate) fn boundary_floor(text: &str, max: usize) -> usize {
    if max >= text.len() {
        return text.len();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    end
}
