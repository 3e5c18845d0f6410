//! IEEE-754 single and double precision codec.

use crate::buffer::Buffer;
use crate::coerce::Coercible;
use crate::error::BufferError;
use crate::int::Endian;

/// Coerces a host value for a float field. Coercion failures become NaN.
fn float_value(value: impl Into<Coercible>) -> f64 {
    match value.into().to_number() {
        Ok(n) if !n.is_nan() => n,
        _ => f64::NAN,
    }
}

/// Single precision bits for `n`, rounding to nearest. Magnitudes beyond
/// the single range become infinities and tiny ones become signed zero.
fn f32_bits(n: f64) -> u32 {
    if n.is_nan() {
        f32::NAN.to_bits()
    } else {
        (n as f32).to_bits()
    }
}

fn f64_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else {
        n.to_bits()
    }
}

impl Buffer {
    pub fn read_float_be(&self, offset: impl Into<Coercible>) -> Result<f32, BufferError> {
        Ok(f32::from_bits(self.read_bits(&offset.into(), 4, Endian::Big)? as u32))
    }

    pub fn read_float_le(&self, offset: impl Into<Coercible>) -> Result<f32, BufferError> {
        Ok(f32::from_bits(self.read_bits(&offset.into(), 4, Endian::Little)? as u32))
    }

    pub fn read_double_be(&self, offset: impl Into<Coercible>) -> Result<f64, BufferError> {
        Ok(f64::from_bits(self.read_bits(&offset.into(), 8, Endian::Big)?))
    }

    pub fn read_double_le(&self, offset: impl Into<Coercible>) -> Result<f64, BufferError> {
        Ok(f64::from_bits(self.read_bits(&offset.into(), 8, Endian::Little)?))
    }

    /// Writes `value` as a big-endian single and returns `offset + 4`.
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// let buf = Buffer::alloc_zeroed(4).unwrap();
    /// assert_eq!(buf.write_float_be(1.0, ()).unwrap(), 4);
    /// assert_eq!(buf.to_vec(), vec![0x3f, 0x80, 0x00, 0x00]);
    /// ```
    pub fn write_float_be(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        let bits = f32_bits(float_value(value));
        self.write_bits(bits as u64, &offset.into(), 4, Endian::Big)
    }

    pub fn write_float_le(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        let bits = f32_bits(float_value(value));
        self.write_bits(bits as u64, &offset.into(), 4, Endian::Little)
    }

    pub fn write_double_be(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        let bits = f64_bits(float_value(value));
        self.write_bits(bits, &offset.into(), 8, Endian::Big)
    }

    pub fn write_double_le(
        &self,
        value: impl Into<Coercible>,
        offset: impl Into<Coercible>,
    ) -> Result<usize, BufferError> {
        let bits = f64_bits(float_value(value));
        self.write_bits(bits, &offset.into(), 8, Endian::Little)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zero() {
        let buf = Buffer::alloc_zeroed(8).unwrap();
        buf.write_double_be(-0.0, 0).unwrap();
        assert_eq!(buf.to_vec(), vec![0x80, 0, 0, 0, 0, 0, 0, 0]);
        let back = buf.read_double_be(0).unwrap();
        assert_eq!(back, 0.0);
        assert!(back.is_sign_negative());
    }

    #[test]
    fn nan_is_canonical() {
        let buf = Buffer::alloc_zeroed(8).unwrap();
        let payload = f64::from_bits(0x7ff0_0000_dead_beef);
        buf.write_double_le(payload, 0).unwrap();
        assert_eq!(buf.read_double_le(0).unwrap().to_bits(), f64::NAN.to_bits());
        buf.write_float_le(payload, 0).unwrap();
        assert_eq!(buf.read_float_le(0).unwrap().to_bits(), f32::NAN.to_bits());
    }

    #[test]
    fn single_precision_saturates_and_underflows() {
        let buf = Buffer::alloc_zeroed(4).unwrap();
        buf.write_float_be(1e300, 0).unwrap();
        assert_eq!(buf.read_float_be(0).unwrap(), f32::INFINITY);
        buf.write_float_be(-1e300, 0).unwrap();
        assert_eq!(buf.read_float_be(0).unwrap(), f32::NEG_INFINITY);
        buf.write_float_be(-1e-300, 0).unwrap();
        let tiny = buf.read_float_be(0).unwrap();
        assert_eq!(tiny, 0.0);
        assert!(tiny.is_sign_negative());
    }

    #[test]
    fn non_numeric_values_write_nan() {
        let buf = Buffer::alloc_zeroed(8).unwrap();
        buf.write_double_be("abc", 0).unwrap();
        assert!(buf.read_double_be(0).unwrap().is_nan());
        buf.write_double_be("2.5", 0).unwrap();
        assert_eq!(buf.read_double_be(0).unwrap(), 2.5);
        buf.write_double_be(true, 0).unwrap();
        assert_eq!(buf.read_double_be(0).unwrap(), 1.0);
    }

    #[test]
    fn offsets_must_fit() {
        let buf = Buffer::alloc_zeroed(7).unwrap();
        assert!(buf.write_double_le(1.0, 0).unwrap_err().is_range_error());
        assert!(buf.read_float_le(4).unwrap_err().is_range_error());
        assert!(buf.write_double_be(1.0, Coercible::Null).unwrap_err().is_type_error());
    }
}
