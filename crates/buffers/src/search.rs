//! Byte sequence search.

use crate::buffer::Buffer;
use crate::coerce::Coercible;
use crate::encoding::Encoding;
use crate::error::BufferError;
use crate::pattern::{Pattern, PatternBytes};

/// Resolves the starting position of a search.
///
/// Negative offsets count back from the end and bottom out at 0. Returns
/// `None` only for a forward search that starts past the last possible
/// match.
fn start_position(len: i64, offset: i64, needle_len: i64, forward: bool) -> Option<i64> {
    if offset < 0 {
        Some((len + offset).max(0))
    } else if offset + needle_len <= len {
        Some(offset)
    } else if needle_len == 0 {
        Some(len)
    } else if forward {
        None
    } else {
        Some(len - 1)
    }
}

/// Coerces a search offset. Omitted or NaN offsets search the whole view.
fn search_offset(value: &Coercible, len: usize, forward: bool) -> Result<i64, BufferError> {
    let n = if value.is_undefined() {
        f64::NAN
    } else {
        value.to_number()?
    };
    if n.is_nan() {
        return Ok(if forward { 0 } else { len as i64 });
    }
    Ok(n.clamp(i32::MIN as f64, i32::MAX as f64).trunc() as i64)
}

fn find_forward(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + from)
}

fn find_backward(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    let last = from.min(haystack.len() - needle.len());
    (0..=last)
        .rev()
        .find(|&i| &haystack[i..i + needle.len()] == needle)
}

impl Buffer {
    fn search(
        &self,
        needle: Pattern<'_>,
        byte_offset: &Coercible,
        encoding: Encoding,
        forward: bool,
    ) -> Result<Option<usize>, BufferError> {
        let needle = needle.resolve(encoding);
        let offset = search_offset(byte_offset, self.len(), forward)?;
        let haystack = self.bytes();
        let len = haystack.len() as i64;

        match needle {
            PatternBytes::Byte(b) => {
                let Some(at) = start_position(len, offset, 1, forward) else {
                    return Ok(None);
                };
                if haystack.is_empty() {
                    return Ok(None);
                }
                let at = at as usize;
                Ok(if forward {
                    haystack[at..].iter().position(|&x| x == b).map(|i| i + at)
                } else {
                    haystack[..=at].iter().rposition(|&x| x == b)
                })
            }
            PatternBytes::Seq(seq) => {
                let n = seq.len() as i64;
                let start = start_position(len, offset, n, forward);
                if seq.is_empty() {
                    return Ok(start.map(|s| s as usize));
                }
                let Some(at) = start else {
                    return Ok(None);
                };
                if n > len || (forward && at + n > len) {
                    return Ok(None);
                }
                let at = at as usize;
                Ok(if forward {
                    find_forward(&haystack, &seq, at)
                } else {
                    find_backward(&haystack, &seq, at)
                })
            }
        }
    }

    /// Finds the first occurrence of `needle` at or after `byte_offset`.
    ///
    /// Offsets clamp: negative values count from the end and out-of-range
    /// values never fail. An empty needle matches at the clamped offset.
    ///
    /// ```
    /// use bytebuf::{Buffer, Encoding};
    ///
    /// let buf = Buffer::from_text("aabaabaab", Encoding::Utf8);
    /// assert_eq!(buf.index_of("aab", 1, Encoding::Utf8).unwrap(), Some(3));
    /// assert_eq!(buf.index_of(b'b', -1000, Encoding::Utf8).unwrap(), Some(2));
    /// assert_eq!(buf.index_of("616162", (), Encoding::Hex).unwrap(), Some(0));
    /// ```
    pub fn index_of<'a>(
        &self,
        needle: impl Into<Pattern<'a>>,
        byte_offset: impl Into<Coercible>,
        encoding: Encoding,
    ) -> Result<Option<usize>, BufferError> {
        self.search(needle.into(), &byte_offset.into(), encoding, true)
    }

    /// Finds the last occurrence of `needle` starting at or before
    /// `byte_offset` (the end of the view when omitted).
    pub fn last_index_of<'a>(
        &self,
        needle: impl Into<Pattern<'a>>,
        byte_offset: impl Into<Coercible>,
        encoding: Encoding,
    ) -> Result<Option<usize>, BufferError> {
        self.search(needle.into(), &byte_offset.into(), encoding, false)
    }

    pub fn includes<'a>(
        &self,
        needle: impl Into<Pattern<'a>>,
        byte_offset: impl Into<Coercible>,
        encoding: Encoding,
    ) -> Result<bool, BufferError> {
        Ok(self.index_of(needle, byte_offset, encoding)?.is_some())
    }
}
