//! L4 — the document entry point (`spec.md` §4.4, §6.1).
//!
//! The only two operations a caller of this crate needs: [`encode_message`]
//! writes the 2-byte EXI header, the schema-fixed 7-bit root-event index for
//! `V2G_Message` (value 76 per §6.1), and the `Header`+`Body` grammar;
//! [`decode_message`] is the exact mirror. Everything below L4 — bitstream,
//! primitives, grammar engine, schema records — is reachable but these two
//! functions are the supported way in.

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::model::body::Body;
use crate::model::common::MessageHeader;
use crate::primitives::{read_header, write_header};

/// The schema-fixed root-event index for `V2G_Message` (`spec.md` §6.1).
/// Unlike the per-complex-type event codes the grammar engine computes on
/// the fly, this one is a constant: it is assigned once, globally, by the
/// upstream XSD→grammar-table translation this crate does not perform
/// (`spec.md` §1), and both sides of a wire-compatible exchange must agree
/// on it byte-for-byte.
const ROOT_EVENT_INDEX: u32 = 76;
const ROOT_EVENT_WIDTH: u8 = 7;

/// The full `V2G_Message` document: a shared header plus one body variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: MessageHeader,
    pub body: Body,
}

/// Encodes `message` into `buf`, returning the number of bytes written.
/// Fails with [`CodecError::BufferEndOfData`] if `buf` is too small for the
/// encoded frame.
pub fn encode_message(message: &Message, buf: &mut [u8]) -> Result<usize> {
    log::trace!("encoding V2G_Message document");
    let mut w = BitWriter::new(buf);
    write_header(&mut w)?;
    w.write_bits(ROOT_EVENT_WIDTH, ROOT_EVENT_INDEX)?;
    message.header.encode(&mut w)?;
    message.body.encode(&mut w)?;
    w.flush()?;
    let len = w.bytes_written();
    log::debug!("encoded V2G_Message document into {len} bytes");
    Ok(len)
}

/// Decodes a `V2G_Message` document from `buf`.
pub fn decode_message(buf: &[u8]) -> Result<Message> {
    log::trace!("decoding V2G_Message document");
    let mut r = BitReader::new(buf);
    read_header(&mut r)?;
    let root_index = r.read_bits(ROOT_EVENT_WIDTH)?;
    if root_index != ROOT_EVENT_INDEX {
        return Err(CodecError::UnknownEventCode);
    }
    let header = MessageHeader::decode(&mut r)?;
    let body = Body::decode(&mut r)?;
    log::debug!("decoded V2G_Message document, body ordinal consumed");
    Ok(Message { header, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bounded::BoundedBinary;
    use crate::model::common::ResponseCode;
    use crate::model::messages::session::SessionStopRes;

    #[test]
    fn scenario_empty_session_stop_res() {
        let message = Message {
            header: MessageHeader {
                session_id: BoundedBinary::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap(),
                notification: None,
                signature: None,
            },
            body: Body::SessionStopRes(SessionStopRes {
                response_code: ResponseCode::Ok,
            }),
        };
        let mut buf = [0u8; 64];
        let len = encode_message(&message, &mut buf).unwrap();
        assert_eq!(&buf[..2], &[0x80, 0x40]);
        let decoded = decode_message(&buf[..len]).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn rejects_buffer_too_small() {
        let message = Message {
            header: MessageHeader {
                session_id: BoundedBinary::from_slice(&[0; 8]).unwrap(),
                notification: None,
                signature: None,
            },
            body: Body::SessionStopRes(SessionStopRes {
                response_code: ResponseCode::Ok,
            }),
        };
        let mut buf = [0u8; 1];
        assert_eq!(
            encode_message(&message, &mut buf),
            Err(CodecError::BufferEndOfData)
        );
    }

    #[test]
    fn rejects_wrong_root_event_index() {
        let mut buf = [0u8; 8];
        {
            let mut w = BitWriter::new(&mut buf);
            write_header(&mut w).unwrap();
            w.write_bits(ROOT_EVENT_WIDTH, 5).unwrap();
        }
        assert_eq!(decode_message(&buf), Err(CodecError::UnknownEventCode));
    }
}
