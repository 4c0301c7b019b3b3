//! `SessionSetupReq`/`Res` and `SessionStopReq`/`Res` — the session
//! bring-up and tear-down pair (`spec.md` §3.1).

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::grammar::{run_decode_sequence, run_encode_sequence, DecodeSlot, EncodeSlot};
use crate::model::bounded::{BoundedBinary, BoundedString};
use crate::model::common::ResponseCode;
use crate::primitives::{read_bounded_binary, read_bounded_string, write_bounded_binary, write_bounded_string};

/// `EVCCID` is modelled as a bounded octet string (typically a 6-byte MAC
/// address), not a hex `BoundedString`, matching how the wire actually
/// carries it (`spec.md` §9's repeated-binary open question — same
/// "binary, not characters" judgment call applies here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSetupReq {
    pub evcc_id: BoundedBinary<8>,
}

impl SessionSetupReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![EncodeSlot::field(false, true, |w| {
                write_bounded_binary(w, self.evcc_id.as_bytes(), 8)
            })],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut evcc_id = None;
        run_decode_sequence(
            r,
            vec![DecodeSlot::field(false, |r| {
                let bytes = read_bounded_binary(r, 8)?;
                evcc_id = Some(BoundedBinary::from_slice(&bytes)?);
                Ok(())
            })],
        )?;
        Ok(Self {
            evcc_id: evcc_id.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSetupRes {
    pub response_code: ResponseCode,
    pub evse_id: BoundedString<32>,
    pub evse_timestamp: Option<i64>,
}

impl SessionSetupRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let ts = &self.evse_timestamp;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(false, true, |w| {
                    write_bounded_string(w, self.evse_id.as_chars(), 32)
                }),
                EncodeSlot::field(true, ts.is_some(), |w| {
                    crate::primitives::write_i64(w, ts.unwrap())
                }),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut evse_id = None;
        let mut evse_timestamp = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    response_code = Some(ResponseCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    let chars = read_bounded_string(r, 32)?;
                    evse_id = Some(BoundedString::from_chars(&chars)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    evse_timestamp = Some(crate::primitives::read_i64(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_id: evse_id.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_timestamp,
        })
    }
}

/// `SessionStopReq` carries no fields of its own beyond the shared header
/// (`spec.md` §3.1) — its grammar is an immediate END.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStopReq;

impl SessionStopReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(w, vec![])
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        run_decode_sequence(r, vec![])?;
        Ok(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStopRes {
    pub response_code: ResponseCode,
}

impl SessionStopRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![EncodeSlot::field(false, true, |w| {
                self.response_code.encode(w)
            })],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        run_decode_sequence(
            r,
            vec![DecodeSlot::field(false, |r| {
                response_code = Some(ResponseCode::decode(r)?);
                Ok(())
            })],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_setup_req_roundtrip_matches_scenario_evccid() {
        let req = SessionSetupReq {
            evcc_id: BoundedBinary::from_slice(&[0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02]).unwrap(),
        };
        let mut buf = [0u8; 16];
        {
            let mut w = BitWriter::new(&mut buf);
            req.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(SessionSetupReq::decode(&mut r).unwrap(), req);
    }

    #[test]
    fn session_stop_req_is_empty_body() {
        let mut buf = [0u8; 4];
        {
            let mut w = BitWriter::new(&mut buf);
            SessionStopReq.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(SessionStopReq::decode(&mut r).unwrap(), SessionStopReq);
    }

    #[test]
    fn session_setup_res_roundtrip_without_timestamp() {
        let res = SessionSetupRes {
            response_code: ResponseCode::OkNewSessionEstablished,
            evse_id: BoundedString::from_str("DE*MAB*E12345*1").unwrap(),
            evse_timestamp: None,
        };
        let mut buf = [0u8; 64];
        {
            let mut w = BitWriter::new(&mut buf);
            res.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(SessionSetupRes::decode(&mut r).unwrap(), res);
    }
}
