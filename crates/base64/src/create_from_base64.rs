//! Factory function for creating lenient base64 decoders.

use crate::constants::{ALPHABET, INVALID, PAD};
use crate::from_base64::decode_with;
use crate::Base64Error;

pub(crate) fn decode_table(chars: &str) -> Result<[u8; 256], Base64Error> {
    if chars.len() != 64 {
        return Err(Base64Error::InvalidCharSetLength);
    }
    let mut table = [INVALID; 256];
    for (i, c) in chars.bytes().enumerate() {
        if !c.is_ascii() || table[c as usize] != INVALID {
            return Err(Base64Error::InvalidCharSet);
        }
        table[c as usize] = i as u8;
    }
    Ok(table)
}

/// Counts the alphabet characters that precede the first padding character.
fn significant_chars(table: &[u8; 256], encoded: &str) -> usize {
    encoded
        .bytes()
        .take_while(|&b| b != PAD as u8)
        .filter(|&b| table[b as usize] != INVALID)
        .count()
}

fn len_for_chars(n: usize) -> usize {
    n / 4 * 3
        + match n % 4 {
            2 => 1,
            3 => 2,
            _ => 0,
        }
}

/// Creates a decoder for the given alphabet.
///
/// The decoder never fails: bytes outside the alphabet are skipped, decoding
/// stops at the first `=`, and a dangling single character is ignored.
///
/// # Example
///
/// ```
/// use bytebuf_base64::create_from_base64;
///
/// let decode = create_from_base64(None).unwrap();
/// assert_eq!(decode("aGVsbG8="), b"hello");
/// assert_eq!(decode("aGVsbG8"), b"hello");
/// assert_eq!(decode("aGVs\nbG8=garbage"), b"hello");
/// ```
pub fn create_from_base64(chars: Option<&str>) -> Result<impl Fn(&str) -> Vec<u8>, Base64Error> {
    let table = decode_table(chars.unwrap_or(ALPHABET))?;

    Ok(move |encoded: &str| -> Vec<u8> { decode_with(&table, encoded) })
}

/// Returns the exact number of bytes the lenient decoder produces for
/// `encoded` under the given alphabet (standard when `None`).
///
/// ```
/// use bytebuf_base64::{decoded_len, ALPHABET_URL};
///
/// assert_eq!(decoded_len("aGVsbG8=", None).unwrap(), 5);
/// assert_eq!(decoded_len("-_8", Some(ALPHABET_URL)).unwrap(), 2);
/// ```
pub fn decoded_len(encoded: &str, chars: Option<&str>) -> Result<usize, Base64Error> {
    let table = decode_table(chars.unwrap_or(ALPHABET))?;
    Ok(len_for_chars(significant_chars(&table, encoded)))
}
