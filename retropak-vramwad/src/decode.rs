//! VRAM-WAD decompression.

use crate::{MIN_MATCH, WARM_START};
use retropak_core::error::{Result, RetroPakError};
use retropak_core::flagbits::FlagReader;
use retropak_core::window::HistoryWindow;

/// Byte cursor over the compressed payload.
struct PayloadReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> PayloadReader<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn read_byte(&mut self) -> Result<u8> {
        if self.pos >= self.input.len() {
            return Err(RetroPakError::unexpected_eof(1));
        }
        let byte = self.input[self.pos];
        self.pos += 1;
        Ok(byte)
    }
}

/// Decompress a raw VRAM-WAD payload into exactly `original_size` bytes.
///
/// The window and cursor are initialized identically to the encoder.
/// Termination is driven purely by the declared size; leftover flag bits
/// or payload bytes are ignored. A back-reference is free to read window
/// slots the cursor has not yet passed (the zero-filled warm region) and
/// to read bytes it has itself just written, which is how runs longer
/// than their distance expand.
pub fn decompress(input: &[u8], original_size: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(original_size);
    let mut window = HistoryWindow::new(WARM_START);
    let mut flags = FlagReader::new();
    let mut reader = PayloadReader::new(input);

    while out.len() < original_size {
        if flags.is_empty() {
            let byte = reader.read_byte()?;
            flags.reload(byte);
        }

        if flags.next() {
            // Literal.
            let byte = reader.read_byte()?;
            out.push(byte);
            window.push(byte);
        } else {
            // Back-reference: masked start position + length.
            let b0 = reader.read_byte()?;
            let b1 = reader.read_byte()?;
            let mut rd = (u16::from(b0 & 0xF0) << 4) | u16::from(b1);
            let len = usize::from(b0 & 0x0F) + MIN_MATCH;

            if out.len() + len > original_size {
                return Err(RetroPakError::output_overrun(original_size));
            }

            // Byte-by-byte so a reference may consume its own output.
            for _ in 0..len {
                let byte = window.at(rd);
                out.push(byte);
                window.push(byte);
                rd = rd.wrapping_add(1);
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::compress;

    #[test]
    fn test_decode_empty() {
        assert_eq!(decompress(&[0x00], 0).unwrap(), Vec::<u8>::new());
        // Zero declared bytes never touches the payload at all.
        assert_eq!(decompress(&[], 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_literals() {
        let out = decompress(&[0b1111_1100, b'a', b'b', b'c', b'd', b'e', b'f'], 6).unwrap();
        assert_eq!(out, b"abcdef");
    }

    #[test]
    fn test_decode_repeated_run_payload() {
        let payload = [
            0b1110_0000,
            0x41,
            0x41,
            0x41,
            0xF0,
            0xEE,
            0xF3,
            0xEE,
            0xF5,
            0xF2,
        ];
        assert_eq!(decompress(&payload, 20).unwrap(), vec![b'A'; 20]);
    }

    #[test]
    fn test_reference_into_warm_region_reads_zeros() {
        // Match token addressing the untouched window start: three zeros.
        let out = decompress(&[0x00, 0x00, 0x00], 3).unwrap();
        assert_eq!(out, vec![0, 0, 0]);
    }

    #[test]
    fn test_truncated_payload_is_eof() {
        let payload = compress(b"Hello, Hello, Hello!").unwrap();
        let truncated = &payload[..payload.len() - 1];
        let err = decompress(truncated, 20).unwrap_err();
        assert!(matches!(err, RetroPakError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_match_overrunning_declared_size() {
        // Declared size 2 but the single match token copies 3 bytes.
        let err = decompress(&[0x00, 0x00, 0x00], 2).unwrap_err();
        assert!(matches!(err, RetroPakError::OutputOverrun { limit: 2 }));
    }

    #[test]
    fn test_roundtrip_text() {
        let input = b"Hello Hello Hello World";
        let payload = compress(input).unwrap();
        assert_eq!(decompress(&payload, input.len()).unwrap(), input);
    }
}
