//! Engine limits.

/// Largest integer a double represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Largest backing store that may be allocated, in bytes.
pub const MAX_LENGTH: usize = if usize::BITS >= 64 {
    MAX_SAFE_INTEGER as usize
} else {
    isize::MAX as usize
};

/// Largest text a decode may produce, in UTF-16 code units.
pub const MAX_STRING_LENGTH: usize = (1 << 29) - 24;

/// Number of bytes rendered by [`Buffer::inspect`](crate::Buffer::inspect).
pub const INSPECT_MAX_BYTES: usize = 50;
