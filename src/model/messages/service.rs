//! `ServiceDiscoveryReq`/`Res` and `ServiceDetailReq`/`Res` (`spec.md` §3.1).

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::grammar::repeated::{decode_repeated, encode_repeated};
use crate::grammar::{run_decode_sequence, run_encode_sequence, DecodeSlot, EncodeSlot};
use crate::model::bounded::{BoundedString, BoundedVec};
use crate::model::common::{EnergyTransferMode, PaymentOption, ResponseCode, Service, ServiceCategory};
use crate::primitives::{read_bounded_string, read_u16, write_bounded_string, write_u16};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDiscoveryReq {
    pub service_scope: Option<BoundedString<64>>,
    pub service_category: Option<ServiceCategory>,
}

impl ServiceDiscoveryReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let scope = &self.service_scope;
        let category = &self.service_category;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(true, scope.is_some(), |w| {
                    write_bounded_string(w, scope.as_ref().unwrap().as_chars(), 64)
                }),
                EncodeSlot::field(true, category.is_some(), |w| category.unwrap().encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut service_scope = None;
        let mut service_category = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(true, |r| {
                    let chars = read_bounded_string(r, 64)?;
                    service_scope = Some(BoundedString::from_chars(&chars)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    service_category = Some(ServiceCategory::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            service_scope,
            service_category,
        })
    }
}

/// `ChargeService`: the single mandatory service every `ServiceDiscoveryRes`
/// advertises, plus the set of `EnergyTransferMode`s it supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeService {
    pub service: Service,
    pub energy_transfer_modes: BoundedVec<EnergyTransferMode, 6>,
}

impl ChargeService {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        self.service.encode(w)?;
        encode_repeated(
            w,
            self.energy_transfer_modes.as_slice(),
            1,
            6,
            |w, m: &EnergyTransferMode| m.encode(w),
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let service = Service::decode(r)?;
        let modes = decode_repeated(r, 1, 6, |r| EnergyTransferMode::decode(r))?;
        Ok(Self {
            service,
            energy_transfer_modes: BoundedVec::from_vec(modes)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDiscoveryRes {
    pub response_code: ResponseCode,
    pub payment_options: BoundedVec<PaymentOption, 2>,
    pub charge_service: ChargeService,
    pub other_services: Option<BoundedVec<Service, 8>>,
}

impl ServiceDiscoveryRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let others = &self.other_services;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(false, true, |w| {
                    encode_repeated(
                        w,
                        self.payment_options.as_slice(),
                        1,
                        2,
                        |w, p: &PaymentOption| p.encode(w),
                    )
                }),
                EncodeSlot::field(false, true, |w| self.charge_service.encode(w)),
                EncodeSlot::field(true, others.is_some(), |w| {
                    encode_repeated(w, others.as_ref().unwrap().as_slice(), 1, 8, |w, s: &Service| {
                        s.encode(w)
                    })
                }),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut payment_options = None;
        let mut charge_service = None;
        let mut other_services = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    response_code = Some(ResponseCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    let opts = decode_repeated(r, 1, 2, |r| PaymentOption::decode(r))?;
                    payment_options = Some(BoundedVec::from_vec(opts)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    charge_service = Some(ChargeService::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    let items = decode_repeated(r, 1, 8, |r| Service::decode(r))?;
                    other_services = Some(BoundedVec::from_vec(items)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            payment_options: payment_options.ok_or(CodecError::UnknownEventForEncoding)?,
            charge_service: charge_service.ok_or(CodecError::UnknownEventForEncoding)?,
            other_services,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDetailReq {
    pub service_id: u16,
}

impl ServiceDetailReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![EncodeSlot::field(false, true, |w| write_u16(w, self.service_id))],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut service_id = None;
        run_decode_sequence(
            r,
            vec![DecodeSlot::field(false, |r| {
                service_id = Some(read_u16(r)?);
                Ok(())
            })],
        )?;
        Ok(Self {
            service_id: service_id.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

/// Simplified `ServiceParameterList`: a flat list of parameter-set ids
/// rather than the full nested `ParameterSet`/`Parameter` name-value union
/// (`DESIGN.md` records this simplification).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDetailRes {
    pub response_code: ResponseCode,
    pub service_id: u16,
    pub parameter_set_ids: Option<BoundedVec<u16, 16>>,
}

impl ServiceDetailRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let ids = &self.parameter_set_ids;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(false, true, |w| write_u16(w, self.service_id)),
                EncodeSlot::field(true, ids.is_some(), |w| {
                    encode_repeated(w, ids.as_ref().unwrap().as_slice(), 1, 16, |w, id: &u16| {
                        write_u16(w, *id)
                    })
                }),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut service_id = None;
        let mut parameter_set_ids = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    response_code = Some(ResponseCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    service_id = Some(read_u16(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    let ids = decode_repeated(r, 1, 16, |r| read_u16(r))?;
                    parameter_set_ids = Some(BoundedVec::from_vec(ids)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            service_id: service_id.ok_or(CodecError::UnknownEventForEncoding)?,
            parameter_set_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_discovery_res_roundtrip() {
        let res = ServiceDiscoveryRes {
            response_code: ResponseCode::Ok,
            payment_options: BoundedVec::from_vec(vec![PaymentOption::Contract, PaymentOption::ExternalPayment])
                .unwrap(),
            charge_service: ChargeService {
                service: Service {
                    service_id: 1,
                    service_name: Some(BoundedString::from_str("AC charging").unwrap()),
                    service_category: ServiceCategory::EvCharging,
                    free_service: false,
                },
                energy_transfer_modes: BoundedVec::from_vec(vec![EnergyTransferMode::AcThreePhaseCore]).unwrap(),
            },
            other_services: None,
        };
        let mut buf = [0u8; 128];
        {
            let mut w = BitWriter::new(&mut buf);
            res.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(ServiceDiscoveryRes::decode(&mut r).unwrap(), res);
    }
}
