//! `PaymentServiceSelectionReq`/`Res`, `PaymentDetailsReq`/`Res`, and
//! `AuthorizationReq`/`Res` (`spec.md` §3.1).

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::grammar::repeated::{decode_repeated, encode_repeated};
use crate::grammar::{run_decode_sequence, run_encode_sequence, DecodeSlot, EncodeSlot};
use crate::model::bounded::{BoundedBinary, BoundedString, BoundedVec};
use crate::model::common::{EvseProcessing, PaymentOption, ResponseCode};
use crate::primitives::{read_bounded_binary, read_bounded_string, read_i64, read_u16, write_bounded_binary, write_bounded_string, write_i64, write_u16};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedService {
    pub service_id: u16,
    pub parameter_set_id: Option<u16>,
}

impl SelectedService {
    fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let pset = self.parameter_set_id;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| write_u16(w, self.service_id)),
                EncodeSlot::field(true, pset.is_some(), |w| write_u16(w, pset.unwrap())),
            ],
        )
    }

    fn decode(r: &mut BitReader) -> Result<Self> {
        let mut service_id = None;
        let mut parameter_set_id = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    service_id = Some(read_u16(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    parameter_set_id = Some(read_u16(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            service_id: service_id.ok_or(CodecError::UnknownEventForEncoding)?,
            parameter_set_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentServiceSelectionReq {
    pub selected_payment_option: PaymentOption,
    pub selected_services: BoundedVec<SelectedService, 16>,
}

impl PaymentServiceSelectionReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.selected_payment_option.encode(w)),
                EncodeSlot::field(false, true, |w| {
                    encode_repeated(
                        w,
                        self.selected_services.as_slice(),
                        1,
                        16,
                        |w, s: &SelectedService| s.encode(w),
                    )
                }),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut selected_payment_option = None;
        let mut selected_services = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    selected_payment_option = Some(PaymentOption::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    let items = decode_repeated(r, 1, 16, |r| SelectedService::decode(r))?;
                    selected_services = Some(BoundedVec::from_vec(items)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            selected_payment_option: selected_payment_option.ok_or(CodecError::UnknownEventForEncoding)?,
            selected_services: selected_services.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentServiceSelectionRes {
    pub response_code: ResponseCode,
}

impl PaymentServiceSelectionRes {
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetailsReq {
    pub emaid: BoundedString<16>,
    pub contract_signature_cert_chain: BoundedBinary<800>,
}

impl PaymentDetailsReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| {
                    write_bounded_binary(w, self.contract_signature_cert_chain.as_bytes(), 800)
                }),
                EncodeSlot::field(false, true, |w| {
                    write_bounded_string(w, self.emaid.as_chars(), 16)
                }),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut contract_signature_cert_chain = None;
        let mut emaid = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    let bytes = read_bounded_binary(r, 800)?;
                    contract_signature_cert_chain = Some(BoundedBinary::from_slice(&bytes)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    let chars = read_bounded_string(r, 16)?;
                    emaid = Some(BoundedString::from_chars(&chars)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            emaid: emaid.ok_or(CodecError::UnknownEventForEncoding)?,
            contract_signature_cert_chain: contract_signature_cert_chain
                .ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetailsRes {
    pub response_code: ResponseCode,
    pub gen_challenge: BoundedBinary<16>,
    pub evse_timestamp: i64,
}

impl PaymentDetailsRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(false, true, |w| {
                    write_bounded_binary(w, self.gen_challenge.as_bytes(), 16)
                }),
                EncodeSlot::field(false, true, |w| write_i64(w, self.evse_timestamp)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut gen_challenge = None;
        let mut evse_timestamp = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    response_code = Some(ResponseCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    let bytes = read_bounded_binary(r, 16)?;
                    gen_challenge = Some(BoundedBinary::from_slice(&bytes)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_timestamp = Some(read_i64(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            gen_challenge: gen_challenge.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_timestamp: evse_timestamp.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationReq {
    pub gen_challenge: Option<BoundedBinary<16>>,
}

impl AuthorizationReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let challenge = &self.gen_challenge;
        run_encode_sequence(
            w,
            vec![EncodeSlot::field(true, challenge.is_some(), |w| {
                write_bounded_binary(w, challenge.as_ref().unwrap().as_bytes(), 16)
            })],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut gen_challenge = None;
        run_decode_sequence(
            r,
            vec![DecodeSlot::field(true, |r| {
                let bytes = read_bounded_binary(r, 16)?;
                gen_challenge = Some(BoundedBinary::from_slice(&bytes)?);
                Ok(())
            })],
        )?;
        Ok(Self { gen_challenge })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationRes {
    pub response_code: ResponseCode,
    pub evse_processing: EvseProcessing,
}

impl AuthorizationRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_processing.encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut evse_processing = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    response_code = Some(ResponseCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_processing = Some(EvseProcessing::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_processing: evse_processing.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_service_selection_req_roundtrip() {
        let req = PaymentServiceSelectionReq {
            selected_payment_option: PaymentOption::Contract,
            selected_services: BoundedVec::from_vec(vec![
                SelectedService { service_id: 1, parameter_set_id: Some(7) },
                SelectedService { service_id: 2, parameter_set_id: None },
            ])
            .unwrap(),
        };
        let mut buf = [0u8; 32];
        {
            let mut w = BitWriter::new(&mut buf);
            req.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(PaymentServiceSelectionReq::decode(&mut r).unwrap(), req);
    }

    #[test]
    fn authorization_req_roundtrip_without_challenge() {
        let req = AuthorizationReq { gen_challenge: None };
        let mut buf = [0u8; 8];
        {
            let mut w = BitWriter::new(&mut buf);
            req.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(AuthorizationReq::decode(&mut r).unwrap(), req);
    }
}
