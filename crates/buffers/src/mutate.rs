//! In-place mutation: fill, copy, reverse and byte swaps.

use crate::buffer::Buffer;
use crate::coerce::{clamp_range, format_number, to_integer_or_infinity, Coercible};
use crate::constants::MAX_SAFE_INTEGER;
use crate::encoding::Encoding;
use crate::error::BufferError;
use crate::pattern::{Pattern, PatternBytes};

/// Coerces a discrete copy argument. Omitted means `default`; NaN and
/// non-safe integers fall back to 0.
fn copy_index(value: &Coercible, default: f64) -> Result<f64, BufferError> {
    if value.is_undefined() {
        return Ok(default);
    }
    let n = value.to_number()?;
    if n.is_nan() || n.abs() > MAX_SAFE_INTEGER as f64 {
        return Ok(0.0);
    }
    Ok(to_integer_or_infinity(n))
}

impl Buffer {
    /// Fills `[start, end)` with `value`, repeating sequences as needed.
    ///
    /// The range clamps. Empty text fills with zeros; a value that encodes
    /// to no bytes at all is rejected.
    ///
    /// ```
    /// use bytebuf::{Buffer, Encoding};
    ///
    /// let buf = Buffer::alloc_zeroed(10).unwrap();
    /// buf.fill(0xab, 2, 7, Encoding::Utf8).unwrap();
    /// assert_eq!(buf.to_vec(), vec![0, 0, 0xab, 0xab, 0xab, 0xab, 0xab, 0, 0, 0]);
    /// ```
    pub fn fill<'a>(
        &self,
        value: impl Into<Pattern<'a>>,
        start: impl Into<Coercible>,
        end: impl Into<Coercible>,
        encoding: Encoding,
    ) -> Result<(), BufferError> {
        let value = value.into();
        let (start, end) = clamp_range(&start.into(), &end.into(), self.len())?;
        let resolved = match value {
            Pattern::Text("") => PatternBytes::Byte(0),
            other => other.resolve(encoding),
        };
        if let PatternBytes::Seq(seq) = &resolved {
            if seq.is_empty() {
                return Err(BufferError::InvalidArgValue {
                    name: "value",
                    received: format!("{value:?}"),
                });
            }
        }
        if start >= end {
            return Ok(());
        }
        let mut bytes = self.bytes_mut();
        let range = &mut bytes[start..end];
        match resolved {
            PatternBytes::Byte(b) => range.fill(b),
            PatternBytes::Seq(seq) => {
                for (slot, &b) in range.iter_mut().zip(seq.iter().cycle()) {
                    *slot = b;
                }
            }
        }
        Ok(())
    }

    /// Copies `self[source_start..source_end]` into `target` at
    /// `target_start`, returning the number of bytes copied.
    ///
    /// The copy is clipped to what fits in both views. Negative
    /// `target_start`, `source_start` or `source_end`, and a `source_start`
    /// past the end, are range errors. Overlapping views of one store are
    /// handled as if through an intermediate buffer.
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// let buf = Buffer::from_bytes(&[1, 2, 3, 4, 5]);
    /// assert_eq!(buf.copy(&buf, 2, 0, 3).unwrap(), 3);
    /// assert_eq!(buf.to_vec(), vec![1, 2, 1, 2, 3]);
    /// ```
    pub fn copy(
        &self,
        target: &Buffer,
        target_start: impl Into<Coercible>,
        source_start: impl Into<Coercible>,
        source_end: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        let source_len = self.len() as f64;
        let target_start = copy_index(&target_start.into(), 0.0)?;
        if target_start < 0.0 {
            return Err(BufferError::out_of_range(
                "targetStart",
                ">= 0",
                format_number(target_start),
            ));
        }
        let source_start = copy_index(&source_start.into(), 0.0)?;
        if source_start < 0.0 || source_start > source_len {
            return Err(BufferError::out_of_range(
                "sourceStart",
                format!(">= 0 && <= {}", self.len()),
                format_number(source_start),
            ));
        }
        let source_end = copy_index(&source_end.into(), source_len)?;
        if source_end < 0.0 {
            return Err(BufferError::out_of_range(
                "sourceEnd",
                ">= 0",
                format_number(source_end),
            ));
        }

        let target_len = target.len() as f64;
        if target_start >= target_len || source_start >= source_end {
            return Ok(0);
        }
        let count = (source_end.min(source_len) - source_start).min(target_len - target_start);
        if count <= 0.0 {
            return Ok(0);
        }
        let (src, dst, count) = (source_start as usize, target_start as usize, count as usize);

        if self.shares_store(target) {
            let from = self.byte_offset() + src;
            let to = target.byte_offset() + dst;
            self.store()
                .bytes_mut()
                .copy_within(from..from + count, to);
        } else {
            let source = self.bytes();
            let mut dest = target.bytes_mut();
            dest[dst..dst + count].copy_from_slice(&source[src..src + count]);
        }
        Ok(count)
    }

    /// Reverses the view's bytes in place.
    pub fn reverse(&self) {
        self.bytes_mut().reverse();
    }

    fn swap_groups(&self, size: usize) -> Result<(), BufferError> {
        if self.len() % size != 0 {
            return Err(BufferError::InvalidBufferSize(size as u32 * 8));
        }
        self.bytes_mut()
            .chunks_exact_mut(size)
            .for_each(<[u8]>::reverse);
        Ok(())
    }

    /// Swaps the byte order of every 16-bit group.
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// let buf = Buffer::from_bytes(&[1, 2, 3, 4]);
    /// buf.swap16().unwrap();
    /// assert_eq!(buf.to_vec(), vec![2, 1, 4, 3]);
    /// assert!(Buffer::from_bytes(&[1, 2, 3]).swap16().is_err());
    /// ```
    pub fn swap16(&self) -> Result<(), BufferError> {
        self.swap_groups(2)
    }

    pub fn swap32(&self) -> Result<(), BufferError> {
        self.swap_groups(4)
    }

    pub fn swap64(&self) -> Result<(), BufferError> {
        self.swap_groups(8)
    }
}
