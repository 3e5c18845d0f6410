//! Shared, fixed-capacity backing store.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::constants::MAX_LENGTH;
use crate::error::BufferError;

/// A contiguous byte region allocated once and never resized.
///
/// Cloning a store clones the handle: every clone refers to the same bytes
/// and the region is freed when the last handle is dropped. Access is
/// single-threaded; the host serializes concurrent use.
#[derive(Clone)]
pub struct BackingStore {
    bytes: Rc<RefCell<Box<[u8]>>>,
}

impl BackingStore {
    fn check_capacity(capacity: usize) -> Result<(), BufferError> {
        if capacity > MAX_LENGTH {
            return Err(BufferError::out_of_range(
                "size",
                format!(">= 0 and <= {MAX_LENGTH}"),
                capacity,
            ));
        }
        Ok(())
    }

    /// Allocates a zero-filled store.
    pub fn zeroed(capacity: usize) -> Result<Self, BufferError> {
        Self::check_capacity(capacity)?;
        log::trace!("allocating zeroed store of {capacity} bytes");
        Ok(Self::from_vec(vec![0; capacity]))
    }

    /// Allocates a store whose initial contents are unspecified.
    ///
    /// Callers must write every byte they later read. The engine never
    /// exposes memory from outside the process, so the region currently
    /// starts out zeroed, but that is not part of the contract.
    pub fn uninitialized(capacity: usize) -> Result<Self, BufferError> {
        Self::check_capacity(capacity)?;
        log::trace!("allocating unfilled store of {capacity} bytes");
        Ok(Self::from_vec(vec![0; capacity]))
    }

    /// Takes ownership of `bytes` as a new store.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Rc::new(RefCell::new(bytes.into_boxed_slice())),
        }
    }

    pub fn capacity(&self) -> usize {
        self.bytes.borrow().len()
    }

    /// Whether both handles refer to the same region.
    pub fn ptr_eq(&self, other: &BackingStore) -> bool {
        Rc::ptr_eq(&self.bytes, &other.bytes)
    }

    /// Number of live handles (views) keeping the region alive.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.bytes)
    }

    pub(crate) fn bytes(&self) -> Ref<'_, [u8]> {
        Ref::map(self.bytes.borrow(), |b| &b[..])
    }

    pub(crate) fn bytes_mut(&self) -> RefMut<'_, [u8]> {
        RefMut::map(self.bytes.borrow_mut(), |b| &mut b[..])
    }
}

impl fmt::Debug for BackingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackingStore")
            .field("capacity", &self.capacity())
            .field("handles", &self.handle_count())
            .finish()
    }
}
