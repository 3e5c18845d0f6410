//! Buffer engine error type.

use thiserror::Error;

use crate::encoding::Encoding;

/// The class of failure, as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong argument kind or unrecognized encoding name.
    Type,
    /// Offset, length or value outside the representable bounds.
    Range,
    /// Structurally invalid source bytes during transcoding.
    Transcode,
}

/// Errors raised by buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// An argument had the wrong kind.
    #[error("The \"{name}\" argument must be {expected}. Received {received}")]
    InvalidArgType {
        name: &'static str,
        expected: &'static str,
        received: String,
    },
    /// An argument had the right kind but an unusable value.
    #[error("The argument '{name}' is invalid. Received {received}")]
    InvalidArgValue {
        name: &'static str,
        received: String,
    },
    /// The encoding name is not recognized.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
    /// A host object could not be converted to a primitive.
    #[error("Cannot convert value to a primitive: {0}")]
    Coercion(String),
    /// An offset, length or value fell outside its allowed range.
    #[error("The value of \"{name}\" is out of range. It must be {range}. Received {received}")]
    OutOfRange {
        name: &'static str,
        range: String,
        received: String,
    },
    /// Attempted to read or write past the end of the buffer.
    #[error("Attempt to access memory outside buffer bounds")]
    BufferOutOfBounds,
    /// Byte swapping on a length that is not a multiple of the unit width.
    #[error("Buffer size must be a multiple of {0}-bits")]
    InvalidBufferSize(u32),
    /// Decoding would produce a string longer than the host allows.
    #[error("Cannot create a string longer than {0} characters")]
    StringTooLong(usize),
    /// The transcoding source is not well formed in its encoding.
    #[error("Unable to transcode Buffer from {from} to {to}: {reason}")]
    Transcode {
        from: Encoding,
        to: Encoding,
        reason: String,
    },
}

impl BufferError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BufferError::InvalidArgType { .. }
            | BufferError::InvalidArgValue { .. }
            | BufferError::UnknownEncoding(_)
            | BufferError::Coercion(_) => ErrorKind::Type,
            BufferError::OutOfRange { .. }
            | BufferError::BufferOutOfBounds
            | BufferError::InvalidBufferSize(_)
            | BufferError::StringTooLong(_) => ErrorKind::Range,
            BufferError::Transcode { .. } => ErrorKind::Transcode,
        }
    }

    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    pub fn is_range_error(&self) -> bool {
        self.kind() == ErrorKind::Range
    }

    pub(crate) fn out_of_range(
        name: &'static str,
        range: impl Into<String>,
        received: impl std::fmt::Display,
    ) -> Self {
        BufferError::OutOfRange {
            name,
            range: range.into(),
            received: received.to_string(),
        }
    }
}
