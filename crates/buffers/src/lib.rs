//! Fixed-capacity byte buffers with bounds-checked binary codecs.
//!
//! # Overview
//!
//! - [`BackingStore`] - a shared, fixed-capacity byte region
//! - [`Buffer`] - a `(store, offset, length)` view; slices alias the store
//! - [`Coercible`] - host values accepted where numbers are expected
//! - [`Encoding`] - utf8, ascii, latin1, hex, base64, base64url, utf16le
//! - [`is_utf8`] / [`Utf8Validator`] - UTF-8 well-formedness
//!
//! Typed reads and writes reject offsets that do not leave room for the
//! field. Range-taking operations (slicing, search, fill, copy, decode)
//! clamp their ranges instead.
//!
//! # Example
//!
//! ```
//! use bytebuf::{Buffer, Encoding};
//!
//! let buf = Buffer::alloc_zeroed(8).unwrap();
//! let next = buf.write_uint16_be(0x0102, 0).unwrap();
//! let next = buf.write_int32_le(-2, next).unwrap();
//! assert_eq!(next, 6);
//! assert_eq!(buf.read_uint16_be(0).unwrap(), 0x0102);
//! assert_eq!(buf.read_int32_le(2).unwrap(), -2);
//!
//! let view = buf.slice(6, ()).unwrap();
//! view.write_text("hi", 0, (), Encoding::Utf8).unwrap();
//! assert_eq!(buf.decode(Encoding::Hex, 6, ()).unwrap(), "6869");
//! assert!(buf.write_uint16_be(70000, 0).is_err());
//! ```

mod buffer;
mod cmp;
mod coerce;
pub mod constants;
pub mod encoding;
mod error;
mod float;
mod inspect;
mod int;
mod is_utf8;
mod mutate;
mod pattern;
mod search;
mod store;
mod text;

pub use buffer::Buffer;
pub use cmp::cmp_bytes;
pub use coerce::{
    clamp_index, clamp_range, require_exact_range, string_to_number, Coercible, ToPrimitive,
};
pub use encoding::{byte_length, decode, encode, transcode, Encoding};
pub use error::{BufferError, ErrorKind};
pub use inspect::print_octets;
pub use int::MAX_INT_WIDTH;
pub use is_utf8::{is_utf8, Utf8Validator};
pub use pattern::Pattern;
pub use store::BackingStore;
