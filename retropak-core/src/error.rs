//! Error types for RetroPak operations.
//!
//! This module provides one error type covering all failure modes of the
//! codec crates: I/O errors, container validation errors, and decode
//! errors. Every error is terminal; the codecs never retry and never
//! return partial results.

use std::io;
use thiserror::Error;

/// The main error type for RetroPak operations.
#[derive(Debug, Error)]
pub enum RetroPakError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid magic number in container header.
    #[error("Invalid magic number: expected {expected:02x?}, found {found:02x?}")]
    InvalidMagic {
        /// Expected magic bytes.
        expected: Vec<u8>,
        /// Actual magic bytes found.
        found: Vec<u8>,
    },

    /// Invalid header format.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// Declared size exceeds the sanity bound for this format.
    #[error("Declared size too large: {size} exceeds limit {limit}")]
    SizeTooLarge {
        /// The declared size.
        size: u64,
        /// The format's upper bound.
        limit: u64,
    },

    /// Unexpected end of the compressed payload.
    #[error("Unexpected end of payload: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// Decoded byte count differs from the declared size.
    #[error("Decoded size mismatch: expected {expected} bytes, produced {actual}")]
    SizeMismatch {
        /// Declared decompressed size.
        expected: usize,
        /// Bytes actually produced.
        actual: usize,
    },

    /// Invalid distance in a back-reference.
    #[error("Invalid back-reference distance: {distance} exceeds {available} bytes of history")]
    InvalidDistance {
        /// The invalid distance value.
        distance: usize,
        /// Bytes of history available.
        available: usize,
    },

    /// A copy would write past the declared output size.
    #[error("Output overrun: write past declared size {limit}")]
    OutputOverrun {
        /// Declared output size.
        limit: usize,
    },
}

/// Result type alias for RetroPak operations.
pub type Result<T> = std::result::Result<T, RetroPakError>;

impl RetroPakError {
    /// Create an invalid magic error.
    pub fn invalid_magic(expected: impl Into<Vec<u8>>, found: impl Into<Vec<u8>>) -> Self {
        Self::InvalidMagic {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a size-too-large error.
    pub fn size_too_large(size: u64, limit: u64) -> Self {
        Self::SizeTooLarge { size, limit }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create a size mismatch error.
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Create an invalid distance error.
    pub fn invalid_distance(distance: usize, available: usize) -> Self {
        Self::InvalidDistance {
            distance,
            available,
        }
    }

    /// Create an output overrun error.
    pub fn output_overrun(limit: usize) -> Self {
        Self::OutputOverrun { limit }
    }
}
