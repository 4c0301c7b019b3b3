//! §4.3.4 — repeated-children (`maxOccurs = M`) unrolling.
//!
//! A repeated child's events all share one qname, so they cannot be folded
//! into the generic flattening [`super::run_encode_sequence`] performs for
//! distinct sibling particles (that would conflate "the 3rd repetition of X"
//! with "an unrelated sibling field Y"). EXI unrolls the repeat into `M`
//! sequential states instead: the first (when `min_occurs >= 1`) offers only
//! `START child`; each subsequent slot offers `{START child, END Element}`,
//! a plain 2-way choice, 1 bit per `spec.md` §4.3.4.

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};

fn write_deviation_bit(w: &mut BitWriter) -> Result<()> {
    w.write_bit(false)
}
fn read_deviation_bit(r: &mut BitReader) -> Result<()> {
    if r.read_bit()? {
        return Err(CodecError::UnknownEventCode);
    }
    Ok(())
}
fn write_no_attributes_bit(w: &mut BitWriter) -> Result<()> {
    w.write_bit(false)
}
fn read_no_attributes_bit(r: &mut BitReader) -> Result<()> {
    if r.read_bit()? {
        return Err(CodecError::UnknownEventCode);
    }
    Ok(())
}

/// Encodes `items` as a repeated child with the given `min_occurs`/
/// `max_occurs` bounds. Fails the encoder (rather than truncating) if
/// `items.len() > max_occurs`, per `spec.md` §8's boundary behaviour ("An
/// array whose `array_len` exceeds maxOccurs must fail the encoder").
pub fn encode_repeated<T>(
    w: &mut BitWriter,
    items: &[T],
    min_occurs: usize,
    max_occurs: usize,
    mut encode_item: impl FnMut(&mut BitWriter, &T) -> Result<()>,
) -> Result<()> {
    if items.len() > max_occurs {
        return Err(CodecError::BitcountOutOfRange);
    }

    let mut idx = 0usize;
    while idx < min_occurs {
        write_deviation_bit(w)?;
        w.write_bits(1, 0)?;
        write_no_attributes_bit(w)?;
        encode_item(w, &items[idx])?;
        idx += 1;
    }

    while idx < max_occurs {
        if idx < items.len() {
            write_deviation_bit(w)?;
            w.write_bits(1, 0)?;
            write_no_attributes_bit(w)?;
            encode_item(w, &items[idx])?;
            idx += 1;
        } else {
            write_deviation_bit(w)?;
            w.write_bits(1, 1)?;
            return Ok(());
        }
    }
    // array_len == max_occurs: no more slots to offer a "does it continue?"
    // choice at, so the particle simply ends here.
    Ok(())
}

/// Decodes a repeated child with the given bounds, pushing into a freshly
/// allocated `Vec` (never exceeding `max_occurs` elements).
pub fn decode_repeated<T>(
    r: &mut BitReader,
    min_occurs: usize,
    max_occurs: usize,
    mut decode_item: impl FnMut(&mut BitReader) -> Result<T>,
) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut idx = 0usize;

    while idx < min_occurs {
        read_deviation_bit(r)?;
        if r.read_bits(1)? != 0 {
            return Err(CodecError::UnknownEventCode);
        }
        read_no_attributes_bit(r)?;
        items.push(decode_item(r)?);
        idx += 1;
    }

    while idx < max_occurs {
        read_deviation_bit(r)?;
        match r.read_bits(1)? {
            0 => {
                read_no_attributes_bit(r)?;
                items.push(decode_item(r)?);
                idx += 1;
            }
            1 => return Ok(items),
            _ => return Err(CodecError::UnknownEventCode),
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_of_sixteen_slots_then_end() {
        let mut buf = [0u8; 16];
        {
            let mut w = BitWriter::new(&mut buf);
            encode_repeated(&mut w, &[1u32, 2u32], 1, 16, |w, v| w.write_bits(8, *v)).unwrap();
        }
        let mut r = BitReader::new(&buf);
        let items = decode_repeated(&mut r, 1, 16, |r| r.read_bits(8)).unwrap();
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn full_occupancy_has_no_trailing_end_code() {
        let mut buf = [0u8; 16];
        let data = [1u32, 2, 3];
        {
            let mut w = BitWriter::new(&mut buf);
            encode_repeated(&mut w, &data, 1, 3, |w, v| w.write_bits(8, *v)).unwrap();
        }
        let mut r = BitReader::new(&buf);
        let items = decode_repeated(&mut r, 1, 3, |r| r.read_bits(8)).unwrap();
        assert_eq!(items, data.to_vec());
    }

    #[test]
    fn over_max_occurs_fails_encoder() {
        let mut buf = [0u8; 16];
        let mut w = BitWriter::new(&mut buf);
        let err = encode_repeated(&mut w, &[1u32, 2, 3], 1, 2, |w, v| w.write_bits(8, *v))
            .unwrap_err();
        assert_eq!(err, CodecError::BitcountOutOfRange);
    }
}
