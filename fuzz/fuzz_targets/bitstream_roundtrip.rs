#![no_main]

use arbitrary::Arbitrary;
use iso15118_2_exi::bitstream::{BitReader, BitWriter};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct RandomWrite {
    width: u8,
    value: u32,
}

#[derive(Arbitrary, Debug)]
struct FuzzCase {
    writes: Vec<RandomWrite>,
}

// Whatever this crate's own bit primitives write, they must read back
// identically, for any admissible width (1..=32) and any buffer size.
fuzz_target!(|data: FuzzCase| {
    let mut buffer = vec![0u8; data.writes.len() * 5 + 8];
    let mut accepted = Vec::with_capacity(data.writes.len());
    {
        let mut w = BitWriter::new(&mut buffer);
        for write in &data.writes {
            let width = 1 + (write.width % 32);
            let masked = if width == 32 {
                write.value
            } else {
                write.value & ((1u32 << width) - 1)
            };
            if w.write_bits(width, masked).is_ok() {
                accepted.push((width, masked));
            } else {
                break;
            }
        }
    }
    let mut r = BitReader::new(&buffer);
    for (width, value) in accepted {
        assert_eq!(r.read_bits(width).unwrap(), value);
    }
});
