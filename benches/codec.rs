#![feature(test)]
extern crate test;
use test::{black_box, Bencher};

extern crate iso15118_2_exi;
use iso15118_2_exi::bitstream::{BitReader, BitWriter};
use iso15118_2_exi::document::{decode_message, encode_message, Message};
use iso15118_2_exi::model::body::Body;
use iso15118_2_exi::model::bounded::BoundedBinary;
use iso15118_2_exi::model::common::{MessageHeader, ResponseCode};
use iso15118_2_exi::model::messages::session::SessionStopRes;
use iso15118_2_exi::primitives::{read_u32, write_u32};

pub const VALUES: usize = 10_000;
pub const SEED: u64 = 0x8c2b_781f_2866_90fd;

struct Rng(u64);
impl Rng {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x << 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

#[bench]
fn varint_write(b: &mut Bencher) {
    let mut rng = Rng(SEED);
    let values = (0..VALUES).map(|_| (rng.next() % (1 << 28)) as u32).collect::<Vec<_>>();
    let mut buffer = vec![0u8; VALUES * 5];
    b.iter(|| {
        let mut w = BitWriter::new(black_box(&mut buffer));
        for v in &values {
            write_u32(&mut w, *v).unwrap();
        }
    });
    b.bytes = 4 * VALUES as u64;
}

#[bench]
fn varint_read(b: &mut Bencher) {
    let mut rng = Rng(SEED);
    let values = (0..VALUES).map(|_| (rng.next() % (1 << 28)) as u32).collect::<Vec<_>>();
    let mut buffer = vec![0u8; VALUES * 5];
    {
        let mut w = BitWriter::new(&mut buffer);
        for v in &values {
            write_u32(&mut w, *v).unwrap();
        }
    }
    b.iter(|| {
        let mut r = BitReader::new(black_box(&buffer));
        for _ in 0..VALUES {
            black_box(read_u32(&mut r).unwrap());
        }
    });
    b.bytes = 4 * VALUES as u64;
}

fn sample_message() -> Message {
    Message {
        header: MessageHeader {
            session_id: BoundedBinary::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap(),
            notification: None,
            signature: None,
        },
        body: Body::SessionStopRes(SessionStopRes {
            response_code: ResponseCode::Ok,
        }),
    }
}

#[bench]
fn document_roundtrip(b: &mut Bencher) {
    let message = sample_message();
    let mut buffer = [0u8; 64];
    b.iter(|| {
        let len = encode_message(black_box(&message), &mut buffer).unwrap();
        black_box(decode_message(&buffer[..len]).unwrap());
    });
}
