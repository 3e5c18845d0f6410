//! Views over a shared backing store.

use std::cell::{Ref, RefMut};
use std::fmt;

use crate::coerce::{clamp_range, Coercible};
use crate::encoding::{self, Encoding};
use crate::error::BufferError;
use crate::pattern::Pattern;
use crate::store::BackingStore;

/// A `(store, byte_offset, length)` window onto a [`BackingStore`].
///
/// Views are cheap handles. [`Buffer::slice`] and `clone` produce views that
/// alias the same bytes, so a write through one is visible through all of
/// them. [`Buffer::copy_slice`] and the `from_*` constructors allocate an
/// independent store.
///
/// Invariant: `byte_offset + length <= store.capacity()`. A view never
/// resizes.
#[derive(Clone)]
pub struct Buffer {
    store: BackingStore,
    byte_offset: usize,
    length: usize,
}

impl Buffer {
    /// Wraps a whole store.
    pub fn from_store(store: BackingStore) -> Self {
        let length = store.capacity();
        Self {
            store,
            byte_offset: 0,
            length,
        }
    }

    /// Creates a view over `length` bytes of `store` starting at `byte_offset`.
    pub fn with_window(
        store: BackingStore,
        byte_offset: usize,
        length: usize,
    ) -> Result<Self, BufferError> {
        let capacity = store.capacity();
        if byte_offset > capacity {
            return Err(BufferError::out_of_range(
                "offset",
                format!(">= 0 and <= {capacity}"),
                byte_offset,
            ));
        }
        if length > capacity - byte_offset {
            return Err(BufferError::out_of_range(
                "length",
                format!(">= 0 and <= {}", capacity - byte_offset),
                length,
            ));
        }
        Ok(Self {
            store,
            byte_offset,
            length,
        })
    }

    /// Allocates a zero-filled buffer of `size` bytes.
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// let buf = Buffer::alloc_zeroed(3).unwrap();
    /// assert_eq!(buf.to_vec(), vec![0, 0, 0]);
    /// ```
    pub fn alloc_zeroed(size: usize) -> Result<Self, BufferError> {
        Ok(Self::from_store(BackingStore::zeroed(size)?))
    }

    /// Allocates a buffer whose contents are unspecified until written.
    pub fn alloc_uninitialized(size: usize) -> Result<Self, BufferError> {
        Ok(Self::from_store(BackingStore::uninitialized(size)?))
    }

    /// Allocates `size` bytes and fills them with `fill`.
    ///
    /// ```
    /// use bytebuf::{Buffer, Encoding};
    ///
    /// let buf = Buffer::alloc_filled(5, "ab", Encoding::Utf8).unwrap();
    /// assert_eq!(buf.to_vec(), b"ababa".to_vec());
    /// ```
    pub fn alloc_filled<'a>(
        size: usize,
        fill: impl Into<Pattern<'a>>,
        encoding: Encoding,
    ) -> Result<Self, BufferError> {
        let buf = Self::alloc_uninitialized(size)?;
        buf.fill(fill, (), (), encoding)?;
        Ok(buf)
    }

    /// Copies `bytes` into a new, independent store.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec())
    }

    /// Takes ownership of `bytes` as a new store.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self::from_store(BackingStore::from_vec(bytes))
    }

    /// Encodes `text` into a new buffer.
    ///
    /// ```
    /// use bytebuf::{Buffer, Encoding};
    ///
    /// let buf = Buffer::from_text("68656c6c6f", Encoding::Hex);
    /// assert_eq!(buf.to_vec(), b"hello".to_vec());
    /// ```
    pub fn from_text(text: &str, encoding: Encoding) -> Self {
        Self::from_vec(encoding::encode(text, encoding))
    }

    /// Joins `list` into a new buffer.
    ///
    /// With an explicit `total_length`, the result is truncated or
    /// zero-padded to exactly that many bytes.
    pub fn concat(list: &[Buffer], total_length: Option<usize>) -> Result<Self, BufferError> {
        let total_length =
            total_length.unwrap_or_else(|| list.iter().map(Buffer::len).sum::<usize>());
        let out = Self::alloc_zeroed(total_length)?;
        {
            let mut dst = out.bytes_mut();
            let mut pos = 0;
            for item in list {
                if pos >= total_length {
                    break;
                }
                let src = item.bytes();
                let n = src.len().min(total_length - pos);
                dst[pos..pos + n].copy_from_slice(&src[..n]);
                pos += n;
            }
        }
        Ok(out)
    }

    /// Number of bytes in the view.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Offset of the view inside its store.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn store(&self) -> &BackingStore {
        &self.store
    }

    /// Whether both views alias the same store.
    pub fn shares_store(&self, other: &Buffer) -> bool {
        self.store.ptr_eq(&other.store)
    }

    /// Creates a view sharing this buffer's store. Range arguments clamp.
    ///
    /// ```
    /// use bytebuf::Buffer;
    ///
    /// let buf = Buffer::from_bytes(&[1, 2, 3, 4, 5]);
    /// let tail = buf.slice(-2, ()).unwrap();
    /// tail.set(0, 9);
    /// assert_eq!(buf.to_vec(), vec![1, 2, 3, 9, 5]);
    /// ```
    pub fn slice(
        &self,
        start: impl Into<Coercible>,
        end: impl Into<Coercible>,
    ) -> Result<Buffer, BufferError> {
        let (start, end) = clamp_range(&start.into(), &end.into(), self.length)?;
        Ok(Self {
            store: self.store.clone(),
            byte_offset: self.byte_offset + start,
            length: end - start,
        })
    }

    /// Alias of [`Buffer::slice`].
    pub fn subarray(
        &self,
        start: impl Into<Coercible>,
        end: impl Into<Coercible>,
    ) -> Result<Buffer, BufferError> {
        self.slice(start, end)
    }

    /// Copies a clamped range into a new, independent store.
    pub fn copy_slice(
        &self,
        start: impl Into<Coercible>,
        end: impl Into<Coercible>,
    ) -> Result<Buffer, BufferError> {
        let (start, end) = clamp_range(&start.into(), &end.into(), self.length)?;
        Ok(Self::from_bytes(&self.bytes()[start..end]))
    }

    /// Reads one byte.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes().get(index).copied()
    }

    /// Writes one byte. Returns `false` when `index` is past the end.
    pub fn set(&self, index: usize, byte: u8) -> bool {
        match self.bytes_mut().get_mut(index) {
            Some(slot) => {
                *slot = byte;
                true
            }
            None => false,
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes().to_vec()
    }

    /// Runs `f` over the view's bytes.
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.bytes())
    }

    /// Runs `f` over the view's bytes mutably. `f` must not access any view
    /// of the same store.
    pub fn with_bytes_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        f(&mut self.bytes_mut())
    }

    pub(crate) fn bytes(&self) -> Ref<'_, [u8]> {
        let (start, end) = (self.byte_offset, self.byte_offset + self.length);
        Ref::map(self.store.bytes(), |b| &b[start..end])
    }

    pub(crate) fn bytes_mut(&self) -> RefMut<'_, [u8]> {
        let (start, end) = (self.byte_offset, self.byte_offset + self.length);
        RefMut::map(self.store.bytes_mut(), |b| &mut b[start..end])
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}
