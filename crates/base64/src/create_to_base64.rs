//! Factory function for creating base64 encoders with custom alphabets.

use crate::constants::ALPHABET;
use crate::Base64Error;

/// Creates a base64 encoder with a custom alphabet and padding character.
///
/// * `chars` - a 64-character ASCII alphabet. Defaults to standard base64.
/// * `pad` - the padding character. Defaults to `"="`; pass `""` for none.
///
/// # Example
///
/// ```
/// use bytebuf_base64::create_to_base64;
///
/// let encode = create_to_base64(None, None).unwrap();
/// assert_eq!(encode(b"hello"), "aGVsbG8=");
///
/// let unpadded = create_to_base64(None, Some("")).unwrap();
/// assert_eq!(unpadded(b"hello"), "aGVsbG8");
/// ```
pub fn create_to_base64(
    chars: Option<&str>,
    pad: Option<&str>,
) -> Result<impl Fn(&[u8]) -> String, Base64Error> {
    let chars = chars.unwrap_or(ALPHABET);
    let pad = pad.unwrap_or("=");

    if chars.len() != 64 {
        return Err(Base64Error::InvalidCharSetLength);
    }
    if !chars.is_ascii() || !pad.is_ascii() {
        return Err(Base64Error::InvalidCharSet);
    }

    Ok(encoder(chars.as_bytes(), pad.bytes().next()))
}

/// Builds an encoder over an already validated 64-byte alphabet.
pub(crate) fn encoder(chars: &[u8], pad: Option<u8>) -> impl Fn(&[u8]) -> String + Send + Sync {
    let table: Vec<u8> = chars.to_vec();

    // Two-character lookup table, one entry per 12-bit value.
    let mut table2: Vec<[u8; 2]> = Vec::with_capacity(4096);
    for &c1 in &table {
        for &c2 in &table {
            table2.push([c1, c2]);
        }
    }

    move |uint8: &[u8]| -> String {
        let length = uint8.len();
        let mut out: Vec<u8> = Vec::with_capacity((length + 2) / 3 * 4);
        let extra_length = length % 3;
        let base_length = length - extra_length;

        let mut i = 0;
        while i < base_length {
            let o1 = uint8[i];
            let o2 = uint8[i + 1];
            let o3 = uint8[i + 2];
            let v1 = ((o1 as u16) << 4) | ((o2 as u16) >> 4);
            let v2 = (((o2 & 0b1111) as u16) << 8) | (o3 as u16);
            out.extend_from_slice(&table2[v1 as usize]);
            out.extend_from_slice(&table2[v2 as usize]);
            i += 3;
        }

        if extra_length == 1 {
            let o1 = uint8[base_length];
            out.extend_from_slice(&table2[(o1 as usize) << 4]);
            if let Some(p) = pad {
                out.push(p);
                out.push(p);
            }
        } else if extra_length == 2 {
            let o1 = uint8[base_length];
            let o2 = uint8[base_length + 1];
            let v1 = ((o1 as u16) << 4) | ((o2 as u16) >> 4);
            let v2 = ((o2 & 0b1111) as u16) << 2;
            out.extend_from_slice(&table2[v1 as usize]);
            out.push(table[v2 as usize]);
            if let Some(p) = pad {
                out.push(p);
            }
        }

        // Every byte came from an ASCII alphabet.
        out.into_iter().map(char::from).collect()
    }
}
