//! Debug rendering of buffers.

use crate::buffer::Buffer;
use crate::constants::INSPECT_MAX_BYTES;

/// Formats up to `max` octets as space-separated lowercase hex, followed by
/// a count of the bytes left out.
///
/// # Example
///
/// ```
/// use bytebuf::print_octets;
///
/// assert_eq!(print_octets(&[0x01, 0x02, 0x0a, 0xff], 16), "01 02 0a ff");
/// assert_eq!(print_octets(&[1, 2, 3], 2), "01 02 ... 1 more byte");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let shown: Vec<String> = octets.iter().take(max).map(|b| format!("{b:02x}")).collect();
    let mut result = shown.join(" ");

    let remaining = octets.len().saturating_sub(max);
    if remaining > 0 {
        let plural = if remaining > 1 { "s" } else { "" };
        result.push_str(&format!(" ... {remaining} more byte{plural}"));
    }

    result
}

impl Buffer {
    /// Renders the view as `<Buffer 01 02 ...>`.
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// assert_eq!(Buffer::from_bytes(b"hi").inspect(), "<Buffer 68 69>");
    /// ```
    pub fn inspect(&self) -> String {
        format!("<Buffer {}>", self.with_bytes(|b| print_octets(b, INSPECT_MAX_BYTES)))
    }
}
