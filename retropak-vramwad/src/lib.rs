//! # RetroPak VRAM-WAD
//!
//! Pure Rust implementation of the VRAM-WAD codec, an LZSS variant used to
//! pack small game-asset blobs.
//!
//! The format combines a 4 KB history window with an MSB-first flag-bit
//! stream: each token is either a raw literal byte (flag 1) or a two-byte
//! back-reference (flag 0) holding the masked window position of the match
//! start and a 4-bit length field covering lengths 3 through 18. The
//! window cursor starts at the warm position 0x0FEE over a zero-filled
//! buffer, so early back-references may legally read zeros.
//!
//! ## Example
//!
//! ```rust
//! use retropak_vramwad::{pack, unpack};
//!
//! let data = b"TOBEORNOTTOBEORTOBEORNOT";
//! let packed = pack(data).unwrap();
//! assert_eq!(unpack(&packed).unwrap(), data);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decode;
pub mod encode;
pub mod frame;
pub mod matcher;

// Re-exports
pub use decode::decompress;
pub use encode::compress;
pub use frame::{MAGIC, pack, unpack};
pub use matcher::find_longest_match;

/// Shortest run encodable as a back-reference.
pub const MIN_MATCH: usize = 3;

/// Longest run encodable as a back-reference (length - 3 fits 4 bits).
pub const MAX_MATCH: usize = 18;

/// Initial window cursor position.
///
/// The reference codecs seed the cursor here rather than at zero so that
/// the masked start positions stored on the wire follow one consistent
/// numeric convention from the very first token.
pub const WARM_START: u16 = 0x0FEE;
