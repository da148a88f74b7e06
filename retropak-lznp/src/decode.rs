//! LZNP decompression.

use crate::{MIN_MATCH, MIN_SUPERLEN, SHORT_FORM_FLOOR, SHORT_MATCH_LEN, SUPERLEN_SELECTOR};
use retropak_core::error::{Result, RetroPakError};
use retropak_core::flagbits::FlagRegister;

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

/// Decompress a raw LZNP payload.
///
/// The payload is self-terminating: decoding stops at the distance-zero
/// sentinel, not at `declared_size`, which only bounds the output. Copies
/// run forward one byte at a time so an overlapping back-reference
/// (distance shorter than length) expands into a repeating run.
///
/// A back-reference reaching before the start of the output is an
/// [`RetroPakError::InvalidDistance`]; any write past `declared_size` is
/// an [`RetroPakError::OutputOverrun`]. The reference decoder checks
/// neither.
pub fn decompress(input: &[u8], declared_size: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(declared_size);
    let mut flags = FlagRegister::new();
    let mut reader = PayloadReader::new(input);

    loop {
        if flags.advance() {
            let byte = reader.read_byte()?;
            flags.reload(byte);
        }

        if !flags.is_match() {
            // Literal.
            if out.len() >= declared_size {
                return Err(RetroPakError::output_overrun(declared_size));
            }
            out.push(reader.read_byte()?);
            continue;
        }

        let control = reader.read_byte()?;
        let (distance, length) = if control >= SHORT_FORM_FLOOR {
            (0x100 - usize::from(control), SHORT_MATCH_LEN)
        } else {
            let low = reader.read_byte()?;
            let distance = (usize::from(control & 0x0F) << 8) | usize::from(low);
            if distance == 0 {
                // End-of-stream sentinel.
                break;
            }

            let selector = control >> 4;
            let length = if selector == SUPERLEN_SELECTOR {
                MIN_SUPERLEN + usize::from(reader.read_byte()?)
            } else {
                usize::from(selector) + MIN_MATCH
            };
            (distance, length)
        };

        if distance > out.len() {
            return Err(RetroPakError::invalid_distance(distance, out.len()));
        }
        if out.len() + length > declared_size {
            return Err(RetroPakError::output_overrun(declared_size));
        }

        // Byte-by-byte so an overlapping source repeats its own output.
        let mut src = out.len() - distance;
        for _ in 0..length {
            let byte = out[src];
            out.push(byte);
            src += 1;
        }
    }

    Ok(out)
}
