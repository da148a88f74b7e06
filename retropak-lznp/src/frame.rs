//! LZNP container framing.
//!
//! Layout:
//!
//! ```text
//! magic[4] = "LZNP" | decompressed_size: u32 (big-endian) | payload
//! ```
//!
//! There is no compressed-size field; the payload runs to the end of the
//! file and terminates itself with the distance-zero sentinel. The
//! declared size only bounds the output and is verified after decoding.

use crate::decode::decompress;
use retropak_core::error::{Result, RetroPakError};

/// LZNP container magic.
pub const MAGIC: [u8; 4] = *b"LZNP";

/// Header size: magic (4) + decompressed_size (4).
const HEADER_SIZE: usize = 8;

/// Sanity bound on the declared decompressed size.
pub const MAX_DECLARED_SIZE: u32 = 0x7FFF_FFFF;

/// Validate the container header and return the declared decompressed size.
pub fn declared_size(data: &[u8]) -> Result<usize> {
    if data.len() < HEADER_SIZE {
        return Err(RetroPakError::invalid_header(format!(
            "file too short for LZNP header: {} bytes",
            data.len()
        )));
    }
    if data[..4] != MAGIC {
        return Err(RetroPakError::invalid_magic(
            MAGIC.to_vec(),
            data[..4].to_vec(),
        ));
    }

    let size = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
    if size > MAX_DECLARED_SIZE {
        return Err(RetroPakError::size_too_large(
            u64::from(size),
            u64::from(MAX_DECLARED_SIZE),
        ));
    }
    Ok(size as usize)
}

/// Validate an LZNP container and decompress its payload.
///
/// The decoded byte count must equal the declared size exactly; a payload
/// whose sentinel arrives early is a [`RetroPakError::SizeMismatch`].
pub fn unpack(data: &[u8]) -> Result<Vec<u8>> {
    let size = declared_size(data)?;
    let out = decompress(&data[HEADER_SIZE..], size)?;
    if out.len() != size {
        return Err(RetroPakError::size_mismatch(size, out.len()));
    }
    Ok(out)
}
