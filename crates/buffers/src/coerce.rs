//! Host value coercion and offset validation.
//!
//! Two validation families live here and must stay separate:
//!
//! - [`require_exact_range`] for absolute offsets of typed reads and writes.
//!   Anything that does not address `width` bytes inside the view fails.
//! - [`clamp_index`] / [`clamp_range`] for range arguments of slicing,
//!   searching, filling and copying. These never fail on out-of-range input;
//!   negative values count back from the end and everything is clamped.

use std::fmt;
use std::rc::Rc;

use crate::constants::MAX_SAFE_INTEGER;
use crate::error::BufferError;

/// Conversion hook for host objects that appear where a number is expected.
pub trait ToPrimitive: fmt::Debug {
    fn to_primitive(&self) -> Result<Coercible, BufferError>;
}

/// A host value that may be coerced to a number.
#[derive(Debug, Clone, Default)]
pub enum Coercible {
    /// Argument was omitted.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Object(Rc<dyn ToPrimitive>),
}

impl Coercible {
    pub fn object(hook: impl ToPrimitive + 'static) -> Self {
        Coercible::Object(Rc::new(hook))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Coercible::Undefined)
    }

    /// Converts the value to a number.
    ///
    /// Omitted values become NaN, `null` becomes 0, booleans become 0 or 1
    /// and strings are parsed as numeric literals (NaN when they are not
    /// one). Objects go through their [`ToPrimitive`] hook exactly once.
    pub fn to_number(&self) -> Result<f64, BufferError> {
        match self {
            Coercible::Undefined => Ok(f64::NAN),
            Coercible::Null => Ok(0.0),
            Coercible::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Coercible::Number(n) => Ok(*n),
            Coercible::Str(s) => Ok(string_to_number(s)),
            Coercible::Object(hook) => match hook.to_primitive()? {
                Coercible::Object(_) => Err(BufferError::Coercion(
                    "Cannot convert object to primitive value".to_string(),
                )),
                primitive => primitive.to_number(),
            },
        }
    }

    /// Describes the received value in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Coercible::Undefined => "undefined".to_string(),
            Coercible::Null => "null".to_string(),
            Coercible::Bool(b) => format!("type boolean ({b})"),
            Coercible::Number(n) => format!("type number ({})", format_number(*n)),
            Coercible::Str(s) => format!("type string ('{s}')"),
            Coercible::Object(_) => "an instance of Object".to_string(),
        }
    }
}

impl From<()> for Coercible {
    fn from(_: ()) -> Self {
        Coercible::Undefined
    }
}

impl From<bool> for Coercible {
    fn from(v: bool) -> Self {
        Coercible::Bool(v)
    }
}

impl From<&str> for Coercible {
    fn from(v: &str) -> Self {
        Coercible::Str(v.to_string())
    }
}

impl From<String> for Coercible {
    fn from(v: String) -> Self {
        Coercible::Str(v)
    }
}

impl From<&Coercible> for Coercible {
    fn from(v: &Coercible) -> Self {
        v.clone()
    }
}

impl<T: Into<Coercible>> From<Option<T>> for Coercible {
    fn from(v: Option<T>) -> Self {
        v.map_or(Coercible::Undefined, Into::into)
    }
}

macro_rules! coercible_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Coercible {
                fn from(v: $t) -> Self {
                    Coercible::Number(v as f64)
                }
            }
        )*
    };
}

coercible_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Renders a number the way the host prints it.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{n}")
    }
}

/// Whitespace and line terminators trimmed from numeric strings. U+0085 is
/// Unicode whitespace but not a host separator.
fn is_host_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    acc
}

/// Parses a numeric string literal. Returns NaN for anything else.
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_host_whitespace);
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if s.len() > 2 && s.as_bytes()[0] == b'0' {
        match s.as_bytes()[1] {
            b'x' | b'X' => return parse_radix(&s[2..], 16),
            b'o' | b'O' => return parse_radix(&s[2..], 8),
            b'b' | b'B' => return parse_radix(&s[2..], 2),
            _ => {}
        }
    }
    let decimal_chars = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal_chars || !s.bytes().any(|b| b.is_ascii_digit()) {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Truncates toward zero, mapping NaN to 0.
pub(crate) fn to_integer_or_infinity(n: f64) -> f64 {
    if n.is_nan() {
        0.0
    } else {
        n.trunc()
    }
}

/// Reduces a number modulo 2^32, mapping NaN and infinities to 0.
pub(crate) fn to_uint32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(4_294_967_296.0) as u32
}

/// Resolves an absolute offset for a `width`-byte read or write.
///
/// An omitted offset means 0. The offset must be a finite number; it is
/// truncated toward zero and must satisfy `0 <= offset <= len - width`.
pub fn require_exact_range(
    offset: &Coercible,
    width: usize,
    len: usize,
) -> Result<usize, BufferError> {
    let n = match offset {
        Coercible::Undefined => 0.0,
        Coercible::Number(n) => *n,
        other => {
            return Err(BufferError::InvalidArgType {
                name: "offset",
                expected: "of type number",
                received: other.describe(),
            })
        }
    };
    if !n.is_finite() {
        return Err(BufferError::InvalidArgType {
            name: "offset",
            expected: "a finite number",
            received: format_number(n),
        });
    }
    if n.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(BufferError::out_of_range(
            "offset",
            "a safe integer",
            format_number(n),
        ));
    }
    let n = n.trunc();
    if len < width {
        return Err(BufferError::BufferOutOfBounds);
    }
    let last = len - width;
    if n < 0.0 || n > last as f64 {
        return Err(BufferError::out_of_range(
            "offset",
            format!(">= 0 and <= {last}"),
            format_number(n),
        ));
    }
    Ok(n as usize)
}

/// Clamps a range argument into `[0, len]`.
///
/// Omitted values take `default`. Negative values count back from `len`
/// and bottom out at 0; values past `len` become `len`.
pub fn clamp_index(value: &Coercible, len: usize, default: usize) -> Result<usize, BufferError> {
    if value.is_undefined() {
        return Ok(default.min(len));
    }
    let n = to_integer_or_infinity(value.to_number()?);
    let len_f = len as f64;
    let clamped = if n < 0.0 {
        (len_f + n).max(0.0)
    } else {
        n.min(len_f)
    };
    Ok(clamped as usize)
}

/// Clamps a `(start, end)` pair. The result never has `end < start`.
pub fn clamp_range(
    start: &Coercible,
    end: &Coercible,
    len: usize,
) -> Result<(usize, usize), BufferError> {
    let start = clamp_index(start, len, 0)?;
    let end = clamp_index(end, len, len)?;
    Ok((start, end.max(start)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Answer;

    impl ToPrimitive for Answer {
        fn to_primitive(&self) -> Result<Coercible, BufferError> {
            Ok(Coercible::Str("42".into()))
        }
    }

    #[derive(Debug)]
    struct Opaque;

    impl ToPrimitive for Opaque {
        fn to_primitive(&self) -> Result<Coercible, BufferError> {
            Ok(Coercible::object(Answer))
        }
    }

    #[test]
    fn to_number_per_kind() {
        assert!(Coercible::Undefined.to_number().unwrap().is_nan());
        assert_eq!(Coercible::Null.to_number().unwrap(), 0.0);
        assert_eq!(Coercible::from(true).to_number().unwrap(), 1.0);
        assert_eq!(Coercible::from(" 12 ").to_number().unwrap(), 12.0);
        assert_eq!(Coercible::object(Answer).to_number().unwrap(), 42.0);
        assert!(Coercible::object(Opaque).to_number().is_err());
    }

    #[test]
    fn numeric_strings() {
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number("0x1F"), 31.0);
        assert_eq!(string_to_number("0b101"), 5.0);
        assert_eq!(string_to_number("-1.5e2"), -150.0);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
        assert!(string_to_number("inf").is_nan());
        assert!(string_to_number("12px").is_nan());
        assert!(string_to_number("-0x10").is_nan());
    }

    #[test]
    fn host_whitespace_is_trimmed() {
        assert_eq!(string_to_number("\u{feff}\u{a0} 5\n\u{2028}"), 5.0);
        assert_eq!(string_to_number("\t\u{3000}"), 0.0);
        assert!(string_to_number("\u{85}5").is_nan());
        assert!(string_to_number("5\u{85}").is_nan());
    }

    #[test]
    fn uint32_wraps() {
        assert_eq!(to_uint32(-1.0), u32::MAX);
        assert_eq!(to_uint32(256.7), 256);
        assert_eq!(to_uint32(f64::NAN), 0);
    }

    #[test]
    fn exact_range_rejects() {
        assert_eq!(require_exact_range(&().into(), 2, 4).unwrap(), 0);
        assert_eq!(require_exact_range(&1.9.into(), 2, 4).unwrap(), 1);
        assert!(require_exact_range(&(-1).into(), 1, 4).unwrap_err().is_range_error());
        assert!(require_exact_range(&3.into(), 2, 4).unwrap_err().is_range_error());
        assert!(require_exact_range(&Coercible::Null, 2, 4).unwrap_err().is_type_error());
        assert!(require_exact_range(&f64::NAN.into(), 2, 4).unwrap_err().is_type_error());
        assert_eq!(
            require_exact_range(&0.into(), 4, 2).unwrap_err(),
            BufferError::BufferOutOfBounds
        );
    }

    #[test]
    fn clamp_never_fails_on_numbers() {
        assert_eq!(clamp_index(&(-1000).into(), 10, 0).unwrap(), 0);
        assert_eq!(clamp_index(&(-3).into(), 10, 0).unwrap(), 7);
        assert_eq!(clamp_index(&1e300.into(), 10, 0).unwrap(), 10);
        assert_eq!(clamp_index(&f64::NAN.into(), 10, 5).unwrap(), 0);
        assert_eq!(clamp_index(&().into(), 10, 5).unwrap(), 5);
        assert_eq!(clamp_range(&8.into(), &2.into(), 10).unwrap(), (8, 8));
    }
}
