//! Signed EXI primitives: one sign bit followed by the magnitude, encoded
//! with the matching unsigned width's continuation encoding (`spec.md`
//! §4.2). Negative magnitudes are biased by `(-value) - 1` so zero has a
//! single canonical (positive) representation.

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};

use super::unsigned::{read_u16, read_u32, read_u64, read_u8, write_u16, write_u32, write_u64, write_u8};

macro_rules! signed_pair {
    ($write:ident, $read:ident, $ty:ty, $uty:ty, $write_u:ident, $read_u:ident) => {
        #[doc = concat!("Writes an EXI signed `", stringify!($ty), "`.")]
        pub fn $write(w: &mut BitWriter, value: $ty) -> Result<()> {
            let negative = value < 0;
            w.write_bit(negative)?;
            let magnitude: $uty = if negative {
                // (-value) - 1, computed in a wider signed type so i*::MIN
                // does not overflow negation.
                (-(value as i128) - 1) as $uty
            } else {
                value as $uty
            };
            $write_u(w, magnitude)
        }

        #[doc = concat!("Reads an EXI signed `", stringify!($ty), "`.")]
        pub fn $read(r: &mut BitReader) -> Result<$ty> {
            let negative = r.read_bit()?;
            let magnitude = $read_u(r)?;
            if negative {
                let value = -(magnitude as i128) - 1;
                <$ty>::try_from(value).map_err(|_| CodecError::BitcountOutOfRange)
            } else {
                <$ty>::try_from(magnitude).map_err(|_| CodecError::BitcountOutOfRange)
            }
        }
    };
}

signed_pair!(write_i8, read_i8, i8, u8, write_u8, read_u8);
signed_pair!(write_i16, read_i16, i16, u16, write_u16, read_u16);
signed_pair!(write_i32, read_i32, i32, u32, write_u32, read_u32);
signed_pair!(write_i64, read_i64, i64, u64, write_u64, read_u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_signed_extremes() {
        for v in [0i32, 1, -1, 400, -400, i32::MAX, i32::MIN] {
            let mut buf = [0u8; 16];
            {
                let mut w = BitWriter::new(&mut buf);
                write_i32(&mut w, v).unwrap();
            }
            let mut r = BitReader::new(&buf);
            assert_eq!(read_i32(&mut r).unwrap(), v);
        }
    }

    #[test]
    fn zero_has_canonical_positive_form() {
        let mut buf = [0u8; 4];
        let mut w = BitWriter::new(&mut buf);
        write_i32(&mut w, 0).unwrap();
        // Sign bit 0, then a single all-zero continuation group.
        assert_eq!(buf[0] & 0b1000_0000, 0);
    }
}
