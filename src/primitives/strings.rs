//! Bounded octet-string and character-string primitives (`spec.md` §4.2,
//! §3.2). These are the only primitives that hand back heap-allocated
//! buffers to the caller; the caller copies the result into a fixed-capacity
//! record field (`[u8; N]`/`[char; N]` + `len`) immediately, per §5's
//! no-internal-allocation policy — the allocation here is transient
//! scratch space for the primitive call, not retained state.

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};

use super::unsigned::{read_u16, read_u32, write_u16, write_u32};

/// Writes a bounded octet string: a 16-bit length followed by that many raw
/// bytes. Fails with [`CodecError::BitcountOutOfRange`] if `bytes.len()`
/// exceeds `max_len` (the schema-declared bound).
pub fn write_bounded_binary(w: &mut BitWriter, bytes: &[u8], max_len: usize) -> Result<()> {
    if bytes.len() > max_len {
        return Err(CodecError::BitcountOutOfRange);
    }
    write_u16(w, bytes.len() as u16)?;
    w.write_raw_bytes(bytes)
}

/// Reads a bounded octet string. Fails (rather than clamping) if the
/// wire-declared length exceeds `max_len`, per `spec.md` §3.3's decoder
/// invariant.
pub fn read_bounded_binary(r: &mut BitReader, max_len: usize) -> Result<Vec<u8>> {
    let len = read_u16(r)? as usize;
    if len > max_len {
        return Err(CodecError::BitcountOutOfRange);
    }
    r.read_raw_bytes(len)
}

/// Writes a bounded character string: a 16-bit value equal to
/// `chars.len() + 2` (escaping the string-table hit codes 0 and 1), followed
/// by that many characters, each as a variable-length unsigned codepoint.
pub fn write_bounded_string(w: &mut BitWriter, chars: &[char], max_len: usize) -> Result<()> {
    if chars.len() > max_len {
        return Err(CodecError::BitcountOutOfRange);
    }
    let wire_len = chars
        .len()
        .checked_add(2)
        .and_then(|n| u16::try_from(n).ok())
        .ok_or(CodecError::BitcountOutOfRange)?;
    write_u16(w, wire_len)?;
    for &c in chars {
        write_u32(w, c as u32)?;
    }
    Ok(())
}

/// Reads a bounded character string.
pub fn read_bounded_string(r: &mut BitReader, max_len: usize) -> Result<Vec<char>> {
    let wire_len = read_u16(r)? as usize;
    let actual_len = wire_len
        .checked_sub(2)
        .ok_or(CodecError::BitcountOutOfRange)?;
    if actual_len > max_len {
        return Err(CodecError::BitcountOutOfRange);
    }
    let mut out = Vec::with_capacity(actual_len);
    for _ in 0..actual_len {
        let codepoint = read_u32(r)?;
        let c = char::from_u32(codepoint).ok_or(CodecError::BitcountOutOfRange)?;
        out.push(c);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_roundtrip() {
        let data = [0xDEu8, 0xAD, 0xBE, 0xEF, 0x01, 0x02];
        let mut buf = [0u8; 16];
        {
            let mut w = BitWriter::new(&mut buf);
            write_bounded_binary(&mut w, &data, 64).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(read_bounded_binary(&mut r, 64).unwrap(), data);
    }

    #[test]
    fn binary_over_capacity_fails() {
        let mut buf = [0u8; 4];
        let mut w = BitWriter::new(&mut buf);
        assert_eq!(
            write_bounded_binary(&mut w, &[1, 2, 3], 2),
            Err(CodecError::BitcountOutOfRange)
        );
    }

    #[test]
    fn string_roundtrip_with_plus_two_length() {
        let s: Vec<char> = "DE*MAB*E123AB1*356".chars().collect();
        assert_eq!(s.len(), 18);
        let mut buf = [0u8; 64];
        {
            let mut w = BitWriter::new(&mut buf);
            write_bounded_string(&mut w, &s, 32).unwrap();
        }
        // Length field is 20 (18 + 2), little continuation-encoded.
        let mut r = BitReader::new(&buf);
        assert_eq!(read_u16(&mut r).unwrap(), 20);

        let mut r = BitReader::new(&buf);
        assert_eq!(read_bounded_string(&mut r, 32).unwrap(), s);
    }

    #[test]
    fn string_over_capacity_on_decode_fails() {
        let s: Vec<char> = "hello".chars().collect();
        let mut buf = [0u8; 16];
        {
            let mut w = BitWriter::new(&mut buf);
            write_bounded_string(&mut w, &s, 16).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(
            read_bounded_string(&mut r, 2),
            Err(CodecError::BitcountOutOfRange)
        );
    }
}
