//! VRAM-WAD container framing.
//!
//! Layout (integers little-endian):
//!
//! ```text
//! magic[8] = "VRAM-WAD" | compressed_size: u32 | original_size: u32 | payload
//! ```
//!
//! The compressed size counts payload bytes only, so a well-formed file
//! always satisfies `compressed_size + 16 == file length`.

use crate::decode::decompress;
use crate::encode::compress;
use retropak_core::error::{Result, RetroPakError};

/// VRAM-WAD container magic.
pub const MAGIC: [u8; 8] = *b"VRAM-WAD";

/// Header size: magic (8) + compressed_size (4) + original_size (4).
const HEADER_SIZE: usize = 16;

/// Sanity bound on the declared original size.
pub const MAX_ORIGINAL_SIZE: u32 = 0x7FFF_FFFF;

/// Compress `input` into a complete VRAM-WAD container.
pub fn pack(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() as u64 > u64::from(MAX_ORIGINAL_SIZE) {
        return Err(RetroPakError::size_too_large(
            input.len() as u64,
            u64::from(MAX_ORIGINAL_SIZE),
        ));
    }
    let original_size = input.len() as u32;

    let payload = compress(input)?;
    let compressed_size = u32::try_from(payload.len()).map_err(|_| {
        RetroPakError::size_too_large(payload.len() as u64, u64::from(u32::MAX))
    })?;

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&compressed_size.to_le_bytes());
    out.extend_from_slice(&original_size.to_le_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Validate a VRAM-WAD container and decompress its payload.
pub fn unpack(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < HEADER_SIZE {
        return Err(RetroPakError::invalid_header(format!(
            "file too short for VRAM-WAD header: {} bytes",
            data.len()
        )));
    }
    if data[..8] != MAGIC {
        return Err(RetroPakError::invalid_magic(
            MAGIC.to_vec(),
            data[..8].to_vec(),
        ));
    }

    let compressed_size = u32::from_le_bytes([data[8], data[9], data[10], data[11]]) as usize;
    let original_size = u32::from_le_bytes([data[12], data[13], data[14], data[15]]);

    if compressed_size + HEADER_SIZE != data.len() {
        return Err(RetroPakError::invalid_header(format!(
            "compressed size {} inconsistent with file length {}",
            compressed_size,
            data.len()
        )));
    }
    if original_size > MAX_ORIGINAL_SIZE {
        return Err(RetroPakError::size_too_large(
            u64::from(original_size),
            u64::from(MAX_ORIGINAL_SIZE),
        ));
    }

    decompress(&data[HEADER_SIZE..], original_size as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let packed = pack(b"hello").unwrap();

        assert_eq!(&packed[..8], b"VRAM-WAD");
        let compressed_size = u32::from_le_bytes([packed[8], packed[9], packed[10], packed[11]]);
        let original_size = u32::from_le_bytes([packed[12], packed[13], packed[14], packed[15]]);
        assert_eq!(compressed_size as usize + HEADER_SIZE, packed.len());
        assert_eq!(original_size, 5);
    }

    #[test]
    fn test_bad_magic() {
        let mut packed = pack(b"hello").unwrap();
        packed[0] = b'X';
        let err = unpack(&packed).unwrap_err();
        assert!(matches!(err, RetroPakError::InvalidMagic { .. }));
    }

    #[test]
    fn test_short_file() {
        let err = unpack(b"VRAM-WAD").unwrap_err();
        assert!(matches!(err, RetroPakError::InvalidHeader { .. }));
    }

    #[test]
    fn test_truncated_payload_fails_length_check() {
        let packed = pack(b"some compressible data, some compressible data").unwrap();
        let truncated = &packed[..packed.len() - 1];
        let err = unpack(truncated).unwrap_err();
        assert!(matches!(err, RetroPakError::InvalidHeader { .. }));
    }
}
