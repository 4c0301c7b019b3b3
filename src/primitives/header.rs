//! The EXI distinguishing header: two fixed bytes, `0x80 0x40`, meaning
//! "EXI, schema-informed, no options" for this schema (`spec.md` §4.2).

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};

const HEADER_BYTES: [u8; 2] = [0x80, 0x40];

/// Writes the two-byte EXI header.
pub fn write_header(w: &mut BitWriter) -> Result<()> {
    for &b in &HEADER_BYTES {
        w.write_bits(8, b as u32)?;
    }
    Ok(())
}

/// Reads and validates the two-byte EXI header.
pub fn read_header(r: &mut BitReader) -> Result<()> {
    for &expected in &HEADER_BYTES {
        let byte = r.read_bits(8)? as u8;
        if byte != expected {
            return Err(CodecError::Header);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_roundtrip() {
        let mut buf = [0u8; 2];
        write_header(&mut BitWriter::new(&mut buf)).unwrap();
        assert_eq!(buf, [0x80, 0x40]);
        read_header(&mut BitReader::new(&buf)).unwrap();
    }

    #[test]
    fn rejects_wrong_header() {
        let buf = [0x00u8, 0x00];
        assert_eq!(
            read_header(&mut BitReader::new(&buf)),
            Err(CodecError::Header)
        );
    }
}
