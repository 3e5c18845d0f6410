//! UTF-16LE (`ucs2`) codec.
//!
//! Text stored as `&str` is always well formed, so the unit-level helpers
//! [`from_units`] and [`to_units`] exist for hosts whose strings may carry
//! unpaired surrogates. Those pass through byte for byte.

/// Encodes text as little-endian UTF-16.
pub fn encode(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Encodes raw code units, including unpaired surrogates.
pub fn from_units(units: &[u16]) -> Vec<u8> {
    units.iter().flat_map(|u| u.to_le_bytes()).collect()
}

/// Splits bytes into code units. A dangling final byte is dropped.
pub fn to_units(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Decodes UTF-16LE, replacing unpaired surrogates with U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    char::decode_utf16(to_units(bytes))
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Decodes UTF-16LE, failing on the first unpaired surrogate or on a
/// dangling final byte.
pub fn decode_strict(bytes: &[u8]) -> Result<String, String> {
    if bytes.len() % 2 != 0 {
        return Err(format!("incomplete code unit at byte {}", bytes.len() - 1));
    }
    let mut out = String::with_capacity(bytes.len() / 2);
    let mut at = 0;
    for r in char::decode_utf16(to_units(bytes)) {
        match r {
            Ok(c) => {
                at += c.len_utf16() * 2;
                out.push(c);
            }
            Err(e) => {
                return Err(format!(
                    "unpaired surrogate {:#06x} at byte {at}",
                    e.unpaired_surrogate()
                ))
            }
        }
    }
    Ok(out)
}
