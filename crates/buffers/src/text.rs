//! Text operations on buffers.

use crate::buffer::Buffer;
use crate::coerce::{clamp_range, format_number, require_exact_range, Coercible};
use crate::constants::MAX_STRING_LENGTH;
use crate::encoding::{self, utf8, Encoding};
use crate::error::BufferError;
use crate::is_utf8::is_utf8;

fn check_string_length(units: usize) -> Result<(), BufferError> {
    if units > MAX_STRING_LENGTH {
        return Err(BufferError::StringTooLong(MAX_STRING_LENGTH));
    }
    Ok(())
}

impl Buffer {
    /// Decodes a clamped range of the view as text.
    ///
    /// ```
    /// use bytebuf::{Buffer, Encoding};
    ///
    /// let buf = Buffer::from_text("hello", Encoding::Utf8);
    /// assert_eq!(buf.decode(Encoding::Hex, 1, 3).unwrap(), "656c");
    /// assert_eq!(buf.decode(Encoding::Base64, (), ()).unwrap(), "aGVsbG8=");
    /// ```
    pub fn decode(
        &self,
        encoding: Encoding,
        start: impl Into<Coercible>,
        end: impl Into<Coercible>,
    ) -> Result<String, BufferError> {
        let (start, end) = clamp_range(&start.into(), &end.into(), self.len())?;
        let bytes = self.bytes();
        let range = &bytes[start..end];
        match encoding::decoded_units(range.len(), encoding) {
            Some(units) => check_string_length(units)?,
            None if range.len() > MAX_STRING_LENGTH => {
                let text = encoding::decode(range, encoding);
                check_string_length(text.encode_utf16().count())?;
                return Ok(text);
            }
            None => {}
        }
        Ok(encoding::decode(range, encoding))
    }

    /// Writes `text` at `offset`, limited to `length` bytes and the space
    /// left in the view. Returns the number of bytes written.
    ///
    /// UTF-8 output never splits a character and UTF-16 output never
    /// splits a code unit.
    ///
    /// ```
    /// use bytebuf::{Buffer, Encoding};
    ///
    /// let buf = Buffer::alloc_zeroed(4).unwrap();
    /// assert_eq!(buf.write_text("a\u{20ac}", 1, (), Encoding::Utf8).unwrap(), 1);
    /// assert_eq!(buf.to_vec(), vec![0, b'a', 0, 0]);
    /// ```
    pub fn write_text(
        &self,
        text: &str,
        offset: impl Into<Coercible>,
        length: impl Into<Coercible>,
        encoding: Encoding,
    ) -> Result<usize, BufferError> {
        let offset = require_exact_range(&offset.into(), 0, self.len())?;
        let room = self.len() - offset;
        let length = match length.into() {
            Coercible::Undefined => room,
            other => {
                let n = other.to_number()?;
                if n.is_nan() || n < 0.0 {
                    return Err(BufferError::out_of_range(
                        "length",
                        format!(">= 0 and <= {room}"),
                        format_number(n),
                    ));
                }
                (n.trunc() as usize).min(room)
            }
        };
        let bytes = match encoding {
            Encoding::Utf8 => {
                let cut = utf8::boundary_floor(text, length);
                text.as_bytes()[..cut].to_vec()
            }
            Encoding::Utf16Le => {
                let mut encoded = encoding::encode(text, encoding);
                encoded.truncate(length - length % 2);
                encoded
            }
            _ => {
                let mut encoded = encoding::encode(text, encoding);
                encoded.truncate(length);
                encoded
            }
        };
        self.bytes_mut()[offset..offset + bytes.len()].copy_from_slice(&bytes);
        Ok(bytes.len())
    }

    pub fn is_utf8(&self) -> bool {
        is_utf8(&self.bytes())
    }

    pub fn is_ascii(&self) -> bool {
        self.bytes().is_ascii()
    }

    /// Transcodes the whole view into a new buffer.
    pub fn transcode(&self, from: Encoding, to: Encoding) -> Result<Buffer, BufferError> {
        let bytes = encoding::transcode(&self.bytes(), from, to)?;
        Ok(Buffer::from_vec(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_clamps_range() {
        let buf = Buffer::from_text("abcdef", Encoding::Utf8);
        assert_eq!(buf.decode(Encoding::Utf8, -3, 100).unwrap(), "def");
        assert_eq!(buf.decode(Encoding::Utf8, 4, 2).unwrap(), "");
    }

    #[test]
    fn decode_replaces_malformed_utf8() {
        let buf = Buffer::from_bytes(&[0x68, 0xff, 0x69]);
        assert_eq!(buf.decode(Encoding::Utf8, (), ()).unwrap(), "h\u{fffd}i");
    }

    #[test]
    fn write_respects_length_and_room() {
        let buf = Buffer::alloc_zeroed(6).unwrap();
        assert_eq!(buf.write_text("abcdef", 2, 2, Encoding::Utf8).unwrap(), 2);
        assert_eq!(buf.to_vec(), vec![0, 0, b'a', b'b', 0, 0]);
        assert_eq!(buf.write_text("xyz", 4, (), Encoding::Latin1).unwrap(), 2);
        assert_eq!(buf.to_vec(), vec![0, 0, b'a', b'b', b'x', b'y']);
    }

    #[test]
    fn write_utf16_keeps_whole_units() {
        let buf = Buffer::alloc_zeroed(3).unwrap();
        assert_eq!(buf.write_text("ab", (), (), Encoding::Utf16Le).unwrap(), 2);
        assert_eq!(buf.to_vec(), vec![b'a', 0, 0]);
    }

    #[test]
    fn write_hex_stops_at_invalid_pair() {
        let buf = Buffer::alloc_zeroed(4).unwrap();
        assert_eq!(buf.write_text("0102zz03", (), (), Encoding::Hex).unwrap(), 2);
        assert_eq!(buf.to_vec(), vec![1, 2, 0, 0]);
    }

    #[test]
    fn write_offset_is_exact() {
        let buf = Buffer::alloc_zeroed(2).unwrap();
        assert_eq!(buf.write_text("a", 2, (), Encoding::Utf8).unwrap(), 0);
        assert!(buf.write_text("a", 3, (), Encoding::Utf8).unwrap_err().is_range_error());
        assert!(buf.write_text("a", 0, -1, Encoding::Utf8).unwrap_err().is_range_error());
    }

    #[test]
    fn validity_checks() {
        assert!(Buffer::from_text("\u{00e9}", Encoding::Utf8).is_utf8());
        assert!(!Buffer::from_text("\u{00e9}", Encoding::Utf8).is_ascii());
        assert!(!Buffer::from_bytes(&[0xc3]).is_utf8());
    }

    #[test]
    fn transcode_view() {
        let buf = Buffer::from_text("hi", Encoding::Utf8);
        let wide = buf.transcode(Encoding::Utf8, Encoding::Utf16Le).unwrap();
        assert_eq!(wide.to_vec(), vec![b'h', 0, b'i', 0]);
        assert!(!wide.shares_store(&buf));
    }
}
