//! Byte-wise comparison of views.

use std::cmp::Ordering;

use crate::buffer::Buffer;
use crate::coerce::{clamp_range, Coercible};
use crate::error::BufferError;

/// Compares two byte slices lexicographically by byte values.
///
/// A proper prefix orders before the longer slice.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use bytebuf::cmp_bytes;
///
/// assert_eq!(cmp_bytes(&[1, 2], &[1, 2, 3]), Ordering::Less);
/// assert_eq!(cmp_bytes(&[1, 3], &[1, 2, 3]), Ordering::Greater);
/// assert_eq!(cmp_bytes(&[1, 2, 3], &[1, 2, 3]), Ordering::Equal);
/// ```
pub fn cmp_bytes(a: &[u8], b: &[u8]) -> Ordering {
    let len = a.len().min(b.len());
    for i in 0..len {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

impl Buffer {
    /// Orders two views by their bytes.
    pub fn compare(a: &Buffer, b: &Buffer) -> Ordering {
        cmp_bytes(&a.bytes(), &b.bytes())
    }

    /// Whether both views hold the same bytes.
    pub fn equals(&self, other: &Buffer) -> bool {
        self.len() == other.len() && Self::compare(self, other) == Ordering::Equal
    }

    /// Compares `self[source_start..source_end]` with
    /// `target[target_start..target_end]`. Both ranges clamp.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use bytebuf::Buffer;
    ///
    /// let a = Buffer::from_bytes(&[1, 2, 3, 4]);
    /// let b = Buffer::from_bytes(&[9, 2, 3]);
    /// assert_eq!(a.compare_range(&b, 1, (), 1, 3).unwrap(), Ordering::Equal);
    /// ```
    pub fn compare_range(
        &self,
        target: &Buffer,
        target_start: impl Into<Coercible>,
        target_end: impl Into<Coercible>,
        source_start: impl Into<Coercible>,
        source_end: impl Into<Coercible>,
    ) -> Result<Ordering, BufferError> {
        let (ts, te) = clamp_range(&target_start.into(), &target_end.into(), target.len())?;
        let (ss, se) = clamp_range(&source_start.into(), &source_end.into(), self.len())?;
        Ok(cmp_bytes(&self.bytes()[ss..se], &target.bytes()[ts..te]))
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Buffer {}

impl PartialOrd for Buffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Buffer {
    fn cmp(&self, other: &Self) -> Ordering {
        Buffer::compare(self, other)
    }
}
