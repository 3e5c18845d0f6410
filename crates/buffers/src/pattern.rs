//! Byte patterns accepted by fill and search.

use crate::buffer::Buffer;
use crate::coerce::to_uint32;
use crate::encoding::{self, Encoding};

/// A fill value or search needle.
#[derive(Debug, Clone, Copy)]
pub enum Pattern<'a> {
    /// A single byte, taken modulo 256 after truncation.
    Number(f64),
    Bytes(&'a [u8]),
    Buffer(&'a Buffer),
    /// Text, encoded before use.
    Text(&'a str),
}

/// A pattern reduced to bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PatternBytes {
    Byte(u8),
    Seq(Vec<u8>),
}

impl Pattern<'_> {
    /// Resolves the pattern to bytes. Text goes through `encoding`.
    ///
    /// The bytes are copied out so the caller may then borrow any store
    /// mutably, including one the pattern aliases.
    pub(crate) fn resolve(&self, encoding: Encoding) -> PatternBytes {
        match *self {
            Pattern::Number(n) => PatternBytes::Byte(to_uint32(n) as u8),
            Pattern::Bytes(b) => PatternBytes::Seq(b.to_vec()),
            Pattern::Buffer(b) => PatternBytes::Seq(b.to_vec()),
            Pattern::Text(t) => PatternBytes::Seq(encoding::encode(t, encoding)),
        }
    }
}

macro_rules! pattern_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Pattern<'_> {
                fn from(v: $t) -> Self {
                    Pattern::Number(v as f64)
                }
            }
        )*
    };
}

pattern_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl<'a> From<&'a [u8]> for Pattern<'a> {
    fn from(v: &'a [u8]) -> Self {
        Pattern::Bytes(v)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Pattern<'a> {
    fn from(v: &'a [u8; N]) -> Self {
        Pattern::Bytes(v)
    }
}

impl<'a> From<&'a Vec<u8>> for Pattern<'a> {
    fn from(v: &'a Vec<u8>) -> Self {
        Pattern::Bytes(v)
    }
}

impl<'a> From<&'a Buffer> for Pattern<'a> {
    fn from(v: &'a Buffer) -> Self {
        Pattern::Buffer(v)
    }
}

impl<'a> From<&'a str> for Pattern<'a> {
    fn from(v: &'a str) -> Self {
        Pattern::Text(v)
    }
}

impl<'a> From<&'a String> for Pattern<'a> {
    fn from(v: &'a String) -> Self {
        Pattern::Text(v)
    }
}
