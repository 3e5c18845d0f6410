//! Base64 and base64url codecs used by the `bytebuf` text encodings.
//!
//! Encoding is exact and table driven. Decoding is lenient: characters
//! outside the alphabet are skipped, missing padding is tolerated and the
//! first `=` ends the input. A trailing group of a single character carries
//! fewer than 8 bits and is dropped.
//!
//! ```
//! use bytebuf_base64::{from_base64, from_base64_url, to_base64, to_base64_url};
//!
//! assert_eq!(to_base64(b"hello"), "aGVsbG8=");
//! assert_eq!(to_base64_url(&[0xfb, 0xff]), "-_8");
//! assert_eq!(from_base64("aGVs bG8"), b"hello");
//! assert_eq!(from_base64_url("-_8"), vec![0xfb, 0xff]);
//! ```

mod constants;
mod create_from_base64;
mod create_to_base64;
mod from_base64;
mod from_base64_url;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_URL, PAD};
pub use create_from_base64::{create_from_base64, decoded_len};
pub use create_to_base64::create_to_base64;
pub use from_base64::from_base64;
pub use from_base64_url::from_base64_url;
pub use to_base64::{encoded_len, to_base64, to_base64_url};

use thiserror::Error;

/// Error type for base64 codec construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    #[error("chars must be 64 characters long")]
    InvalidCharSetLength,
    #[error("alphabet must be ASCII without repeated characters")]
    InvalidCharSet,
}
