//! Fixed and variable width integer codec.
//!
//! Widths of 1 to 6 bytes carry host numbers exactly; 8-byte fields go
//! through the `big_*` methods, which take 128-bit integers so that out of
//! range values can still be reported instead of wrapping.

use crate::buffer::Buffer;
use crate::coerce::{format_number, require_exact_range, Coercible};
use crate::error::BufferError;

/// Widest field the variable width methods accept.
pub const MAX_INT_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endian {
    Big,
    Little,
}

fn check_width(width: usize) -> Result<(), BufferError> {
    if !(1..=MAX_INT_WIDTH).contains(&width) {
        return Err(BufferError::out_of_range(
            "byteLength",
            format!(">= 1 and <= {MAX_INT_WIDTH}"),
            width,
        ));
    }
    Ok(())
}

fn sign_extend(v: u64, width: usize) -> i64 {
    let shift = 64 - 8 * width as u32;
    ((v << shift) as i64) >> shift
}

fn range_description(width: usize, signed: bool) -> String {
    let bits = 8 * width;
    match (width > 4, signed) {
        (true, false) => format!(">= 0 and < 2 ** {bits}"),
        (true, true) => format!(">= -(2 ** {}) and < 2 ** {}", bits - 1, bits - 1),
        (false, false) => format!(">= 0 and <= {}", (1u64 << bits) - 1),
        (false, true) => format!(
            ">= -{} and <= {}",
            1u64 << (bits - 1),
            (1u64 << (bits - 1)) - 1
        ),
    }
}

/// Coerces a host value for a `width`-byte integer field.
///
/// NaN (including omitted and non-numeric strings) is written as 0; any
/// other value outside the field's range fails. Fractions truncate.
fn int_value(value: &Coercible, width: usize, signed: bool) -> Result<i64, BufferError> {
    let n = value.to_number()?;
    if n.is_nan() {
        return Ok(0);
    }
    let bits = 8 * width as i32;
    let (min, max) = if signed {
        (-(2f64.powi(bits - 1)), 2f64.powi(bits - 1) - 1.0)
    } else {
        (0.0, 2f64.powi(bits) - 1.0)
    };
    if n < min || n > max {
        return Err(BufferError::out_of_range(
            "value",
            range_description(width, signed),
            format_number(n),
        ));
    }
    Ok(n.trunc() as i64)
}

impl Buffer {
    pub(crate) fn read_bits(
        &self,
        offset: &Coercible,
        width: usize,
        endian: Endian,
    ) -> Result<u64, BufferError> {
        let at = require_exact_range(offset, width, self.len())?;
        let bytes = self.bytes();
        let field = &bytes[at..at + width];
        let fold = |acc: u64, &b: &u8| (acc << 8) | b as u64;
        Ok(match endian {
            Endian::Big => field.iter().fold(0, fold),
            Endian::Little => field.iter().rev().fold(0, fold),
        })
    }

    /// Stores the low `width` bytes of `bits`. Returns `offset + width`.
    pub(crate) fn write_bits(
        &self,
        bits: u64,
        offset: &Coercible,
        width: usize,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        let at = require_exact_range(offset, width, self.len())?;
        let mut bytes = self.bytes_mut();
        let field = &mut bytes[at..at + width];
        for i in 0..width {
            let byte = (bits >> (8 * i)) as u8;
            match endian {
                Endian::Little => field[i] = byte,
                Endian::Big => field[width - 1 - i] = byte,
            }
        }
        Ok(at + width)
    }

    fn read_unsigned(
        &self,
        offset: impl Into<Coercible>,
        width: usize,
        endian: Endian,
    ) -> Result<u64, BufferError> {
        self.read_bits(&offset.into(), width, endian)
    }

    fn read_signed(
        &self,
        offset: impl Into<Coercible>,
        width: usize,
        endian: Endian,
    ) -> Result<i64, BufferError> {
        let v = self.read_bits(&offset.into(), width, endian)?;
        Ok(sign_extend(v, width))
    }

    fn write_int(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
        width: usize,
        signed: bool,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        let v = int_value(&value.into(), width, signed)?;
        self.write_bits(v as u64, &offset.into(), width, endian)
    }

    // 8-bit

    /// Reads one unsigned byte.
    pub fn read_uint8(&self, offset: impl Into<Coercible>) -> Result<u8, BufferError> {
        Ok(self.read_unsigned(offset, 1, Endian::Big)? as u8)
    }

    /// Reads one byte as a two's complement integer.
    pub fn read_int8(&self, offset: impl Into<Coercible>) -> Result<i8, BufferError> {
        Ok(self.read_signed(offset, 1, Endian::Big)? as i8)
    }

    /// Writes one byte in `0..=255` and returns the offset after it.
    pub fn write_uint8(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_int(value, offset, 1, false, Endian::Big)
    }

    /// Writes one byte in `-128..=127` and returns the offset after it.
    pub fn write_int8(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_int(value, offset, 1, true, Endian::Big)
    }

    // 16-bit

    /// Reads an unsigned 16-bit big-endian integer.
    pub fn read_uint16_be(&self, offset: impl Into<Coercible>) -> Result<u16, BufferError> {
        Ok(self.read_unsigned(offset, 2, Endian::Big)? as u16)
    }

    /// Reads an unsigned 16-bit little-endian integer.
    pub fn read_uint16_le(&self, offset: impl Into<Coercible>) -> Result<u16, BufferError> {
        Ok(self.read_unsigned(offset, 2, Endian::Little)? as u16)
    }

    /// Reads a signed 16-bit big-endian integer.
    pub fn read_int16_be(&self, offset: impl Into<Coercible>) -> Result<i16, BufferError> {
        Ok(self.read_signed(offset, 2, Endian::Big)? as i16)
    }

    /// Reads a signed 16-bit little-endian integer.
    pub fn read_int16_le(&self, offset: impl Into<Coercible>) -> Result<i16, BufferError> {
        Ok(self.read_signed(offset, 2, Endian::Little)? as i16)
    }

    /// Writes an unsigned 16-bit big-endian integer.
    pub fn write_uint16_be(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_int(value, offset, 2, false, Endian::Big)
    }

    /// Writes an unsigned 16-bit little-endian integer.
    pub fn write_uint16_le(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_int(value, offset, 2, false, Endian::Little)
    }

    /// Writes a signed 16-bit big-endian integer.
    pub fn write_int16_be(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_int(value, offset, 2, true, Endian::Big)
    }

    /// Writes a signed 16-bit little-endian integer.
    pub fn write_int16_le(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_int(value, offset, 2, true, Endian::Little)
    }

    // 32-bit

    /// Reads an unsigned 32-bit big-endian integer.
    pub fn read_uint32_be(&self, offset: impl Into<Coercible>) -> Result<u32, BufferError> {
        Ok(self.read_unsigned(offset, 4, Endian::Big)? as u32)
    }

    /// Reads an unsigned 32-bit little-endian integer.
    pub fn read_uint32_le(&self, offset: impl Into<Coercible>) -> Result<u32, BufferError> {
        Ok(self.read_unsigned(offset, 4, Endian::Little)? as u32)
    }

    /// Reads a signed 32-bit big-endian integer.
    pub fn read_int32_be(&self, offset: impl Into<Coercible>) -> Result<i32, BufferError> {
        Ok(self.read_signed(offset, 4, Endian::Big)? as i32)
    }

    /// Reads a signed 32-bit little-endian integer.
    pub fn read_int32_le(&self, offset: impl Into<Coercible>) -> Result<i32, BufferError> {
        Ok(self.read_signed(offset, 4, Endian::Little)? as i32)
    }

    /// Writes an unsigned 32-bit big-endian integer.
    pub fn write_uint32_be(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_int(value, offset, 4, false, Endian::Big)
    }

    /// Writes an unsigned 32-bit little-endian integer.
    pub fn write_uint32_le(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_int(value, offset, 4, false, Endian::Little)
    }

    /// Writes a signed 32-bit big-endian integer.
    pub fn write_int32_be(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_int(value, offset, 4, true, Endian::Big)
    }

    /// Writes a signed 32-bit little-endian integer.
    pub fn write_int32_le(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_int(value, offset, 4, true, Endian::Little)
    }

    // 1 to 6 bytes

    /// Reads an unsigned big-endian integer of `byte_length` bytes.
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// let buf = Buffer::from_bytes(&[0x12, 0x34, 0x56, 0x78, 0x90, 0xab]);
    /// assert_eq!(buf.read_uint_be(0, 6).unwrap(), 0x1234567890ab);
    /// assert_eq!(buf.read_int_le(0, 6).unwrap(), -0x546f87a9cbee);
    /// ```
    pub fn read_uint_be(
        &self,
        offset: impl Into<Coercible>,
        byte_length: usize,
    ) -> Result<u64, BufferError> {
        check_width(byte_length)?;
        self.read_unsigned(offset, byte_length, Endian::Big)
    }

    /// Little-endian counterpart of [`Buffer::read_uint_be`].
    pub fn read_uint_le(
        &self,
        offset: impl Into<Coercible>,
        byte_length: usize,
    ) -> Result<u64, BufferError> {
        check_width(byte_length)?;
        self.read_unsigned(offset, byte_length, Endian::Little)
    }

    /// Reads a signed big-endian integer of `byte_length` bytes.
    pub fn read_int_be(
        &self,
        offset: impl Into<Coercible>,
        byte_length: usize,
    ) -> Result<i64, BufferError> {
        check_width(byte_length)?;
        self.read_signed(offset, byte_length, Endian::Big)
    }

    /// Reads a signed little-endian integer of `byte_length` bytes.
    pub fn read_int_le(
        &self,
        offset: impl Into<Coercible>,
        byte_length: usize,
    ) -> Result<i64, BufferError> {
        check_width(byte_length)?;
        self.read_signed(offset, byte_length, Endian::Little)
    }

    /// Writes an unsigned big-endian integer of `byte_length` bytes and
    /// returns the offset just past it.
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// let buf = Buffer::alloc_zeroed(6).unwrap();
    /// let next = buf.write_uint_be(0x010203, 0, 3).unwrap();
    /// let next = buf.write_uint_be(0x0405, next, 2).unwrap();
    /// assert_eq!(next, 5);
    /// assert_eq!(buf.to_vec(), vec![1, 2, 3, 4, 5, 0]);
    /// assert!(buf.write_uint_be(0x1000000, 0, 3).is_err());
    /// ```
    pub fn write_uint_be(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
        byte_length: usize,
    ) -> Result<usize, BufferError> {
        check_width(byte_length)?;
        self.write_int(value, offset, byte_length, false, Endian::Big)
    }

    /// Little-endian counterpart of [`Buffer::write_uint_be`].
    pub fn write_uint_le(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
        byte_length: usize,
    ) -> Result<usize, BufferError> {
        check_width(byte_length)?;
        self.write_int(value, offset, byte_length, false, Endian::Little)
    }

    /// Writes a signed big-endian integer of `byte_length` bytes.
    pub fn write_int_be(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
        byte_length: usize,
    ) -> Result<usize, BufferError> {
        check_width(byte_length)?;
        self.write_int(value, offset, byte_length, true, Endian::Big)
    }

    /// Writes a signed little-endian integer of `byte_length` bytes.
    pub fn write_int_le(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
        byte_length: usize,
    ) -> Result<usize, BufferError> {
        check_width(byte_length)?;
        self.write_int(value, offset, byte_length, true, Endian::Little)
    }

    // 64-bit

    /// Reads an unsigned 64-bit big-endian integer.
    pub fn read_big_uint64_be(&self, offset: impl Into<Coercible>) -> Result<u64, BufferError> {
        self.read_unsigned(offset, 8, Endian::Big)
    }

    /// Reads an unsigned 64-bit little-endian integer.
    pub fn read_big_uint64_le(&self, offset: impl Into<Coercible>) -> Result<u64, BufferError> {
        self.read_unsigned(offset, 8, Endian::Little)
    }

    /// Reads a signed 64-bit big-endian integer.
    pub fn read_big_int64_be(&self, offset: impl Into<Coercible>) -> Result<i64, BufferError> {
        Ok(self.read_unsigned(offset, 8, Endian::Big)? as i64)
    }

    /// Reads a signed 64-bit little-endian integer.
    pub fn read_big_int64_le(&self, offset: impl Into<Coercible>) -> Result<i64, BufferError> {
        Ok(self.read_unsigned(offset, 8, Endian::Little)? as i64)
    }

    fn write_big(
        &self,
        value: i128,
        offset: impl Into<Coercible>,
        signed: bool,
        endian: Endian,
    ) -> Result<usize, BufferError> {
        let (min, max, range) = if signed {
            (
                i64::MIN as i128,
                i64::MAX as i128,
                ">= -(2n ** 63n) and < 2n ** 63n",
            )
        } else {
            (0, u64::MAX as i128, ">= 0n and < 2n ** 64n")
        };
        if value < min || value > max {
            return Err(BufferError::out_of_range("value", range, format!("{value}n")));
        }
        self.write_bits(value as u64, &offset.into(), 8, endian)
    }

    /// Writes a value in `0..2^64` as eight big-endian bytes.
    pub fn write_big_uint64_be(
        &self,
        value: i128,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_big(value, offset, false, Endian::Big)
    }

    /// Writes a value in `0..2^64` as eight little-endian bytes.
    pub fn write_big_uint64_le(
        &self,
        value: i128,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_big(value, offset, false, Endian::Little)
    }

    /// Writes a value in the `i64` range as eight big-endian bytes.
    pub fn write_big_int64_be(
        &self,
        value: i128,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_big(value, offset, true, Endian::Big)
    }

    /// Writes a value in the `i64` range as eight little-endian bytes.
    pub fn write_big_int64_le(
        &self,
        value: i128,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        self.write_big(value, offset, true, Endian::Little)
    }
}
