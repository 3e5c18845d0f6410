//! Integer and float codec matrix: byte layouts, bounds and value coercion.

use bytebuf::{Buffer, BufferError, Coercible, ErrorKind, ToPrimitive};

// ---------------------------------------------------------------------------
// Fixed-width integers
// ---------------------------------------------------------------------------

#[test]
fn uint8_roundtrip() {
    let buf = Buffer::alloc_zeroed(3).unwrap();
    buf.write_uint8(0x00, 0).unwrap();
    buf.write_uint8(0x7f, 1).unwrap();
    buf.write_uint8(0xff, 2).unwrap();
    assert_eq!(buf.read_uint8(0).unwrap(), 0x00);
    assert_eq!(buf.read_uint8(1).unwrap(), 0x7f);
    assert_eq!(buf.read_uint8(2).unwrap(), 0xff);
    assert_eq!(buf.read_int8(2).unwrap(), -1);
}

#[test]
fn int16_layouts() {
    let buf = Buffer::alloc_zeroed(4).unwrap();
    buf.write_int16_be(-1000, 0).unwrap();
    buf.write_int16_le(-1000, 2).unwrap();
    assert_eq!(buf.to_vec(), vec![0xfc, 0x18, 0x18, 0xfc]);
    assert_eq!(buf.read_int16_be(0).unwrap(), -1000);
    assert_eq!(buf.read_int16_le(2).unwrap(), -1000);
    assert_eq!(buf.read_uint16_be(0).unwrap(), 0xfc18);
}

#[test]
fn uint32_layouts() {
    let buf = Buffer::alloc_zeroed(8).unwrap();
    assert_eq!(buf.write_uint32_le(0xdeadbeefu32, 0).unwrap(), 4);
    assert_eq!(buf.write_int32_be(i32::MIN, 4).unwrap(), 8);
    assert_eq!(buf.to_vec(), vec![0xef, 0xbe, 0xad, 0xde, 0x80, 0, 0, 0]);
    assert_eq!(buf.read_uint32_le(0).unwrap(), 0xdeadbeef);
    assert_eq!(buf.read_int32_be(4).unwrap(), i32::MIN);
    assert_eq!(buf.read_uint32_be(4).unwrap(), 0x8000_0000);
}

#[test]
fn chained_sequential_writes() {
    let buf = Buffer::alloc_zeroed(7).unwrap();
    let mut at = 0;
    at = buf.write_uint8(1, at).unwrap();
    at = buf.write_uint16_be(0x0203, at).unwrap();
    at = buf.write_uint32_le(0x07060504, at).unwrap();
    assert_eq!(at, 7);
    assert_eq!(buf.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn sixteen_bit_overflow_is_rejected() {
    let buf = Buffer::alloc_zeroed(2).unwrap();
    let err = buf.write_int16_be(32768, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(
        err.to_string(),
        "The value of \"value\" is out of range. It must be >= -32768 and <= 32767. Received 32768"
    );
    assert!(buf.write_uint16_be(65536, 0).unwrap_err().is_range_error());
    assert!(buf.write_uint16_le(-1, 0).unwrap_err().is_range_error());
    assert_eq!(buf.to_vec(), vec![0, 0]);
}

#[test]
fn fractional_values_truncate() {
    let buf = Buffer::alloc_zeroed(1).unwrap();
    buf.write_uint8(254.9, 0).unwrap();
    assert_eq!(buf.read_uint8(0).unwrap(), 254);
    buf.write_int8(-3.7, 0).unwrap();
    assert_eq!(buf.read_int8(0).unwrap(), -3);
    assert!(buf.write_uint8(255.5, 0).is_err());
}

// ---------------------------------------------------------------------------
// Variable-width integers
// ---------------------------------------------------------------------------

#[test]
fn every_width_both_orders() {
    for width in 1..=6usize {
        let buf = Buffer::alloc_zeroed(width + 1).unwrap();
        let bits = 8 * width as u32;
        let max_u = (1u64 << bits) - 1;
        let min_i = -(1i64 << (bits - 1));
        let max_i = (1i64 << (bits - 1)) - 1;

        assert_eq!(buf.write_uint_be(max_u, 1, width).unwrap(), width + 1);
        assert_eq!(buf.read_uint_be(1, width).unwrap(), max_u);
        buf.write_uint_le(max_u - 1, 0, width).unwrap();
        assert_eq!(buf.read_uint_le(0, width).unwrap(), max_u - 1);

        buf.write_int_be(min_i, 0, width).unwrap();
        assert_eq!(buf.read_int_be(0, width).unwrap(), min_i);
        buf.write_int_le(max_i, 1, width).unwrap();
        assert_eq!(buf.read_int_le(1, width).unwrap(), max_i);

        assert!(buf.write_uint_be(max_u + 1, 0, width).is_err());
        assert!(buf.write_int_le(min_i - 1, 0, width).is_err());
        assert!(buf.read_uint_be(2, width).is_err());
    }
}

#[test]
fn three_byte_layout() {
    let buf = Buffer::alloc_zeroed(3).unwrap();
    buf.write_int_be(-2, 0, 3).unwrap();
    assert_eq!(buf.to_vec(), vec![0xff, 0xff, 0xfe]);
    assert_eq!(buf.read_uint_le(0, 3).unwrap(), 0xfeffff);
    assert_eq!(buf.read_int_le(0, 3).unwrap(), -0x010001);
}

#[test]
fn width_outside_supported_set() {
    let buf = Buffer::alloc_zeroed(8).unwrap();
    for width in [0usize, 7, 8] {
        let err = buf.write_uint_be(1, 0, width).unwrap_err();
        assert!(matches!(err, BufferError::OutOfRange { name: "byteLength", .. }));
    }
}

// ---------------------------------------------------------------------------
// 64-bit integers
// ---------------------------------------------------------------------------

#[test]
fn big_int64_layouts() {
    let buf = Buffer::alloc_zeroed(8).unwrap();
    buf.write_big_uint64_be(0x0102030405060708, 0).unwrap();
    assert_eq!(buf.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(buf.read_big_uint64_le(0).unwrap(), 0x0807060504030201);
    buf.write_big_int64_le(i64::MIN as i128, 0).unwrap();
    assert_eq!(buf.read_big_int64_le(0).unwrap(), i64::MIN);
    assert!(buf.write_big_uint64_le(1 << 64, 0).is_err());
}

// ---------------------------------------------------------------------------
// Offsets
// ---------------------------------------------------------------------------

#[test]
fn offsets_must_address_the_whole_field() {
    let buf = Buffer::alloc_zeroed(4).unwrap();
    assert!(buf.read_uint32_be(0).is_ok());
    let err = buf.read_uint32_be(1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The value of \"offset\" is out of range. It must be >= 0 and <= 0. Received 1"
    );
    assert!(buf.read_uint8(-1).unwrap_err().is_range_error());
    assert!(buf.read_uint8(4).unwrap_err().is_range_error());
    assert_eq!(
        Buffer::alloc_zeroed(1).unwrap().read_uint16_le(0).unwrap_err(),
        BufferError::BufferOutOfBounds
    );
}

#[test]
fn offset_kinds() {
    let buf = Buffer::from_bytes(&[1, 2, 3]);
    assert_eq!(buf.read_uint8(()).unwrap(), 1);
    assert_eq!(buf.read_uint8(1.9).unwrap(), 2);
    assert!(buf.read_uint8("1").unwrap_err().is_type_error());
    assert!(buf.read_uint8(Coercible::Null).unwrap_err().is_type_error());
    assert!(buf.read_uint8(f64::INFINITY).unwrap_err().is_type_error());
    assert!(buf.read_uint8(1e300).unwrap_err().is_range_error());
}

#[test]
fn reads_respect_view_window() {
    let buf = Buffer::from_bytes(&[0, 0, 0x12, 0x34, 0, 0]);
    let view = buf.slice(2, 4).unwrap();
    assert_eq!(view.read_uint16_be(0).unwrap(), 0x1234);
    assert!(view.read_uint16_be(1).is_err());
    view.write_uint16_le(0xabcd, 0).unwrap();
    assert_eq!(buf.to_vec(), vec![0, 0, 0xcd, 0xab, 0, 0]);
}

// ---------------------------------------------------------------------------
// Value coercion
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Wrapped(f64);

impl ToPrimitive for Wrapped {
    fn to_primitive(&self) -> Result<Coercible, BufferError> {
        Ok(Coercible::Number(self.0))
    }
}

#[derive(Debug)]
struct Throws;

impl ToPrimitive for Throws {
    fn to_primitive(&self) -> Result<Coercible, BufferError> {
        Err(BufferError::Coercion("valueOf threw".into()))
    }
}

#[test]
fn integer_value_coercion() {
    let buf = Buffer::from_bytes(&[9, 9]);
    buf.write_uint8("0x10", 0).unwrap();
    assert_eq!(buf.read_uint8(0).unwrap(), 16);
    buf.write_uint8(true, 0).unwrap();
    assert_eq!(buf.read_uint8(0).unwrap(), 1);
    buf.write_uint8(Coercible::Null, 0).unwrap();
    assert_eq!(buf.read_uint8(0).unwrap(), 0);
    buf.write_uint8(Coercible::object(Wrapped(200.0)), 1).unwrap();
    assert_eq!(buf.read_uint8(1).unwrap(), 200);
}

#[test]
fn nan_like_values_write_zero() {
    let buf = Buffer::from_bytes(&[9, 9, 9]);
    buf.write_uint8((), 0).unwrap();
    buf.write_uint8("not a number", 1).unwrap();
    buf.write_uint8(f64::NAN, 2).unwrap();
    assert_eq!(buf.to_vec(), vec![0, 0, 0]);
}

#[test]
fn failing_hook_aborts_write() {
    let buf = Buffer::from_bytes(&[9]);
    let err = buf.write_uint8(Coercible::object(Throws), 0).unwrap_err();
    assert!(err.is_type_error());
    assert!(buf.write_uint8(f64::INFINITY, 0).unwrap_err().is_range_error());
    assert_eq!(buf.to_vec(), vec![9]);
}

// ---------------------------------------------------------------------------
// Floats
// ---------------------------------------------------------------------------

#[test]
fn float_layouts() {
    let buf = Buffer::alloc_zeroed(8).unwrap();
    buf.write_float_le(-2.5, 0).unwrap();
    assert_eq!(&buf.to_vec()[..4], &[0x00, 0x00, 0x20, 0xc0]);
    assert_eq!(buf.read_float_le(0).unwrap(), -2.5);
    buf.write_double_be(1.0, ()).unwrap();
    assert_eq!(buf.to_vec(), vec![0x3f, 0xf0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(buf.read_double_le(0).unwrap().to_bits(), 0x0000_0000_0000_f03f);
}

#[test]
fn float_precision_rounds() {
    let buf = Buffer::alloc_zeroed(4).unwrap();
    buf.write_float_be(0.1, 0).unwrap();
    assert_eq!(buf.read_float_be(0).unwrap(), 0.1f32);
    buf.write_float_be(f64::MIN_POSITIVE, 0).unwrap();
    assert_eq!(buf.read_float_be(0).unwrap(), 0.0);
}

#[test]
fn float_values_from_hooks() {
    let buf = Buffer::alloc_zeroed(8).unwrap();
    buf.write_double_le(Coercible::object(Wrapped(6.25)), 0).unwrap();
    assert_eq!(buf.read_double_le(0).unwrap(), 6.25);
    buf.write_double_le(Coercible::object(Throws), 0).unwrap();
    assert!(buf.read_double_le(0).unwrap().is_nan());
}

#[test]
fn infinities_round_trip() {
    let buf = Buffer::alloc_zeroed(8).unwrap();
    for v in [f64::INFINITY, f64::NEG_INFINITY, f64::MAX, f64::MIN_POSITIVE, -0.0] {
        buf.write_double_be(v, 0).unwrap();
        assert_eq!(buf.read_double_be(0).unwrap().to_bits(), v.to_bits());
    }
}
