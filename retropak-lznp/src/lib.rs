//! # RetroPak LZNP
//!
//! Pure Rust decoder for the LZNP format, an LZSS variant used to pack
//! small game-asset blobs. The format is decode-only: no encoder for it
//! exists in the wild, and this crate does not invent one.
//!
//! Flags are consumed LSB-first from a 16-bit register whose pre-set high
//! byte counts the eight shifts between reloads. A set flag selects a
//! back-reference with two shapes: a single control byte at or above 0x60
//! encodes a short copy (distance `256 - byte`, length 2), and a control
//! byte below 0x60 carries a length selector plus a 12-bit distance in the
//! following byte. Distance zero is the end-of-stream sentinel. Selector 5
//! redirects the length to one further "superlength" byte.
//!
//! ## Example
//!
//! ```rust
//! use retropak_lznp::unpack;
//!
//! // "LZNP" | size 1 (big-endian) | flag byte | literal 'A' | sentinel
//! let file = [
//!     b'L', b'Z', b'N', b'P', 0, 0, 0, 1, 0x02, 0x41, 0x00, 0x00,
//! ];
//! assert_eq!(unpack(&file).unwrap(), b"A");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decode;
pub mod frame;

// Re-exports
pub use decode::decompress;
pub use frame::{MAGIC, declared_size, unpack};

/// Implicit copy length of the single-byte short form.
pub const SHORT_MATCH_LEN: usize = 2;

/// Smallest length a long-form selector encodes directly.
pub const MIN_MATCH: usize = 3;

/// Shortest length expressed through the superlength byte.
pub const MIN_SUPERLEN: usize = 8;

/// Longest length expressed through the superlength byte.
pub const MAX_SUPERLEN: usize = MIN_SUPERLEN + 254;

/// Selector value that redirects the length to the superlength byte.
pub const SUPERLEN_SELECTOR: u8 = (MIN_SUPERLEN - MIN_MATCH) as u8;

/// Control bytes at or above this value use the short form.
pub const SHORT_FORM_FLOOR: u8 = 0x60;
