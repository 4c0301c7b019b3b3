//! L2 — EXI base-type codecs built on top of [`crate::bitstream`].
//!
//! Each base type gets a symmetric `write_*`/`read_*` pair, per the table in
//! `spec.md` §4.2. None of these allocate beyond the small `Vec`/`String`
//! buffers the bounded-string/binary primitives hand back to the caller to
//! copy into a fixed-capacity record field.

mod bits;
mod header;
mod signed;
mod strings;
mod unsigned;

pub use bits::event_code_width;
pub use header::{read_header, write_header};
pub use signed::{read_i16, read_i32, read_i64, read_i8, write_i16, write_i32, write_i64, write_i8};
pub use strings::{
    read_bounded_binary, read_bounded_string, write_bounded_binary, write_bounded_string,
};
pub use unsigned::{
    read_n_bit_uint, read_u16, read_u32, read_u64, read_u8, write_n_bit_uint, write_u16, write_u32,
    write_u64, write_u8,
};

use crate::bitstream::{BitReader, BitWriter};
use crate::error::Result;

/// Writes a single boolean as 1 bit.
pub fn write_bool(w: &mut BitWriter, value: bool) -> Result<()> {
    w.write_bit(value)
}

/// Reads a single boolean from 1 bit.
pub fn read_bool(r: &mut BitReader) -> Result<bool> {
    r.read_bit()
}

/// Writes an enumerated-string ordinal as an n-bit unsigned, where
/// `n = ceil(log2(variant_count))` (`spec.md` §4.2).
pub fn write_enum_ordinal(w: &mut BitWriter, ordinal: u32, variant_count: usize) -> Result<()> {
    w.write_bits(event_code_width(variant_count), ordinal)
}

/// Reads an enumerated-string ordinal.
pub fn read_enum_ordinal(r: &mut BitReader, variant_count: usize) -> Result<u32> {
    r.read_bits(event_code_width(variant_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_roundtrip() {
        let mut buf = [0u8; 1];
        {
            let mut w = BitWriter::new(&mut buf);
            write_bool(&mut w, true).unwrap();
            write_bool(&mut w, false).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert!(read_bool(&mut r).unwrap());
        assert!(!read_bool(&mut r).unwrap());
    }
}
