//! Text encodings.
//!
//! Direction follows the host convention: `encode` turns text into bytes,
//! `decode` turns bytes into text. Decoding is lossy and never fails;
//! [`transcode`] is the one place structural errors in the source surface.

pub mod hex;
pub mod latin1;
pub mod utf16;
pub mod utf8;

use std::fmt;
use std::str::FromStr;

use crate::coerce::Coercible;
use crate::error::BufferError;

/// A canonical text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Ascii,
    /// Also known as `binary`.
    Latin1,
    Hex,
    Base64,
    Base64Url,
    /// Also known as `ucs2`.
    Utf16Le,
}

impl Encoding {
    pub const ALL: [Encoding; 7] = [
        Encoding::Utf8,
        Encoding::Ascii,
        Encoding::Latin1,
        Encoding::Hex,
        Encoding::Base64,
        Encoding::Base64Url,
        Encoding::Utf16Le,
    ];

    /// Matches an encoding name ignoring case. A hyphen is only accepted
    /// where the alias spells one (`utf-8`, `ucs-2`, `utf-16le`).
    ///
    /// ```
    /// use bytebuf::Encoding;
    ///
    /// assert_eq!(Encoding::canonicalize("UTF-8"), Some(Encoding::Utf8));
    /// assert_eq!(Encoding::canonicalize("ucs-2"), Some(Encoding::Utf16Le));
    /// assert_eq!(Encoding::canonicalize("binary"), Some(Encoding::Latin1));
    /// assert_eq!(Encoding::canonicalize("utf32"), None);
    /// assert_eq!(Encoding::canonicalize("h-e-x"), None);
    /// ```
    pub fn canonicalize(name: &str) -> Option<Encoding> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Some(Encoding::Utf8),
            "ascii" => Some(Encoding::Ascii),
            "latin1" | "binary" => Some(Encoding::Latin1),
            "hex" => Some(Encoding::Hex),
            "base64" => Some(Encoding::Base64),
            "base64url" => Some(Encoding::Base64Url),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Some(Encoding::Utf16Le),
            _ => None,
        }
    }

    /// Like [`Encoding::canonicalize`], failing on unknown names.
    pub fn parse(name: &str) -> Result<Encoding, BufferError> {
        Self::canonicalize(name).ok_or_else(|| BufferError::UnknownEncoding(name.to_string()))
    }

    /// Resolves an encoding argument supplied by the host.
    ///
    /// An omitted argument means UTF-8. Only strings name encodings; any
    /// other kind is a type error.
    pub fn from_value(value: &Coercible) -> Result<Encoding, BufferError> {
        match value {
            Coercible::Undefined => Ok(Encoding::Utf8),
            Coercible::Str(name) => Self::parse(name),
            other => Err(BufferError::InvalidArgType {
                name: "encoding",
                expected: "of type string",
                received: other.describe(),
            }),
        }
    }

    pub fn is_encoding(name: &str) -> bool {
        Self::canonicalize(name).is_some()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Ascii => "ascii",
            Encoding::Latin1 => "latin1",
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
            Encoding::Base64Url => "base64url",
            Encoding::Utf16Le => "utf16le",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Encodes `text` to bytes.
pub fn encode(text: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf8 => utf8::encode(text),
        Encoding::Ascii | Encoding::Latin1 => latin1::encode(text),
        Encoding::Hex => hex::encode(text),
        Encoding::Base64 => bytebuf_base64::from_base64(text),
        Encoding::Base64Url => bytebuf_base64::from_base64_url(text),
        Encoding::Utf16Le => utf16::encode(text),
    }
}

/// Decodes `bytes` to text, substituting where the input is malformed.
pub fn decode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Utf8 => utf8::decode(bytes),
        Encoding::Ascii => latin1::decode_ascii(bytes),
        Encoding::Latin1 => latin1::decode(bytes),
        Encoding::Hex => hex::decode(bytes),
        Encoding::Base64 => bytebuf_base64::to_base64(bytes),
        Encoding::Base64Url => bytebuf_base64::to_base64_url(bytes),
        Encoding::Utf16Le => utf16::decode(bytes),
    }
}

/// Number of UTF-16 code units [`decode`] produces for `len` bytes, when
/// it is known without decoding.
pub(crate) fn decoded_units(len: usize, encoding: Encoding) -> Option<usize> {
    match encoding {
        Encoding::Utf8 => None,
        Encoding::Ascii | Encoding::Latin1 => Some(len),
        Encoding::Hex => Some(len.saturating_mul(2)),
        Encoding::Base64 => Some(bytebuf_base64::encoded_len(len, true)),
        Encoding::Base64Url => Some(bytebuf_base64::encoded_len(len, false)),
        Encoding::Utf16Le => Some(len / 2),
    }
}

/// Exact number of bytes [`encode`] produces for `text`.
///
/// ```
/// use bytebuf::{byte_length, Encoding};
///
/// assert_eq!(byte_length("\u{00e9}", Encoding::Utf8), 2);
/// assert_eq!(byte_length("\u{00e9}", Encoding::Latin1), 1);
/// assert_eq!(byte_length("abcd", Encoding::Hex), 2);
/// assert_eq!(byte_length("aGk=", Encoding::Base64), 2);
/// ```
pub fn byte_length(text: &str, encoding: Encoding) -> usize {
    match encoding {
        Encoding::Utf8 => text.len(),
        Encoding::Ascii | Encoding::Latin1 => text.encode_utf16().count(),
        Encoding::Hex => hex::encoded_len(text),
        Encoding::Base64 => bytebuf_base64::decoded_len(text, None).unwrap_or(0),
        Encoding::Base64Url => {
            bytebuf_base64::decoded_len(text, Some(bytebuf_base64::ALPHABET_URL)).unwrap_or(0)
        }
        Encoding::Utf16Le => text.encode_utf16().count() * 2,
    }
}

/// Re-encodes `bytes` from one encoding to another.
///
/// The source is decoded strictly: malformed UTF-8, an unpaired UTF-16
/// surrogate or a dangling UTF-16 byte fails instead of being replaced.
///
/// ```
/// use bytebuf::{transcode, Encoding};
///
/// let out = transcode("\u{20ac}".as_bytes(), Encoding::Utf8, Encoding::Utf16Le).unwrap();
/// assert_eq!(out, vec![0xac, 0x20]);
/// assert!(transcode(&[0xff], Encoding::Utf8, Encoding::Latin1).is_err());
/// ```
pub fn transcode(bytes: &[u8], from: Encoding, to: Encoding) -> Result<Vec<u8>, BufferError> {
    let strict = match from {
        Encoding::Utf8 => utf8::decode_strict(bytes),
        Encoding::Utf16Le => utf16::decode_strict(bytes),
        other => Ok(decode(bytes, other)),
    };
    match strict {
        Ok(text) => Ok(encode(&text, to)),
        Err(reason) => {
            log::debug!("rejecting transcode from {from} to {to}: {reason}");
            Err(BufferError::Transcode { from, to, reason })
        }
    }
}
