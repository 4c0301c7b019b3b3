//! `PowerDeliveryReq`/`Res`, `ChargingStatusReq`/`Res`, and
//! `MeteringReceiptReq`/`Res` (`spec.md` §3.1).

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::grammar::repeated::{decode_repeated, encode_repeated};
use crate::grammar::{run_decode_sequence, run_encode_sequence, DecodeSlot, EncodeSlot};
use crate::model::bounded::{BoundedBinary, BoundedString, BoundedVec};
use crate::model::common::{PhysicalValue, ResponseCode};
use crate::model::messages::charge_parameter::{AcEvseStatus, DcEvStatus, DcEvseStatus};
use crate::primitives::{read_bool, read_u64, read_u8, write_bool, write_u64, write_u8};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileEntry {
    pub start: u32,
    pub max_power: PhysicalValue,
}

impl ProfileEntry {
    fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| crate::primitives::write_u32(w, self.start)),
                EncodeSlot::field(false, true, |w| self.max_power.encode(w)),
            ],
        )
    }

    fn decode(r: &mut BitReader) -> Result<Self> {
        let mut start = None;
        let mut max_power = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    start = Some(crate::primitives::read_u32(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    max_power = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            start: start.ok_or(CodecError::UnknownEventForEncoding)?,
            max_power: max_power.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DcEvPowerDeliveryParameter {
    pub dc_ev_status: DcEvStatus,
    pub bulk_charging_complete: Option<bool>,
    pub charging_complete: bool,
}

impl DcEvPowerDeliveryParameter {
    fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let bulk = self.bulk_charging_complete;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.dc_ev_status.encode(w)),
                EncodeSlot::field(true, bulk.is_some(), |w| write_bool(w, bulk.unwrap())),
                EncodeSlot::field(false, true, |w| write_bool(w, self.charging_complete)),
            ],
        )
    }

    fn decode(r: &mut BitReader) -> Result<Self> {
        let mut dc_ev_status = None;
        let mut bulk_charging_complete = None;
        let mut charging_complete = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    dc_ev_status = Some(DcEvStatus::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    bulk_charging_complete = Some(read_bool(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    charging_complete = Some(read_bool(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            dc_ev_status: dc_ev_status.ok_or(CodecError::UnknownEventForEncoding)?,
            bulk_charging_complete,
            charging_complete: charging_complete.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerDeliveryReq {
    pub charge_progress_start: bool,
    pub sa_schedule_tuple_id: u8,
    pub charging_profile: Option<BoundedVec<ProfileEntry, 24>>,
    pub dc_ev_power_delivery_parameter: Option<DcEvPowerDeliveryParameter>,
}

impl PowerDeliveryReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let profile = &self.charging_profile;
        let dc = self.dc_ev_power_delivery_parameter;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| write_bool(w, self.charge_progress_start)),
                EncodeSlot::field(false, true, |w| write_u8(w, self.sa_schedule_tuple_id)),
                EncodeSlot::field(true, profile.is_some(), |w| {
                    encode_repeated(w, profile.as_ref().unwrap().as_slice(), 1, 24, |w, e: &ProfileEntry| {
                        e.encode(w)
                    })
                }),
                EncodeSlot::field(true, dc.is_some(), |w| dc.unwrap().encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut charge_progress_start = None;
        let mut sa_schedule_tuple_id = None;
        let mut charging_profile = None;
        let mut dc_ev_power_delivery_parameter = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    charge_progress_start = Some(read_bool(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    sa_schedule_tuple_id = Some(read_u8(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    let items = decode_repeated(r, 1, 24, |r| ProfileEntry::decode(r))?;
                    charging_profile = Some(BoundedVec::from_vec(items)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    dc_ev_power_delivery_parameter = Some(DcEvPowerDeliveryParameter::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            charge_progress_start: charge_progress_start.ok_or(CodecError::UnknownEventForEncoding)?,
            sa_schedule_tuple_id: sa_schedule_tuple_id.ok_or(CodecError::UnknownEventForEncoding)?,
            charging_profile,
            dc_ev_power_delivery_parameter,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerDeliveryRes {
    pub response_code: ResponseCode,
    pub ac_evse_status: Option<AcEvseStatus>,
    pub dc_evse_status: Option<DcEvseStatus>,
}

impl PowerDeliveryRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let ac = self.ac_evse_status;
        let dc = self.dc_evse_status;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(true, ac.is_some(), |w| ac.unwrap().encode(w)),
                EncodeSlot::field(true, dc.is_some(), |w| dc.unwrap().encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut ac_evse_status = None;
        let mut dc_evse_status = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    response_code = Some(ResponseCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    ac_evse_status = Some(AcEvseStatus::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    dc_evse_status = Some(DcEvseStatus::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            ac_evse_status,
            dc_evse_status,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChargingStatusReq;

impl ChargingStatusReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(w, vec![])
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        run_decode_sequence(r, vec![])?;
        Ok(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterInfo {
    pub meter_id: BoundedString<32>,
    pub meter_reading: Option<u64>,
}

impl MeterInfo {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let reading = self.meter_reading;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| {
                    crate::primitives::write_bounded_string(w, self.meter_id.as_chars(), 32)
                }),
                EncodeSlot::field(true, reading.is_some(), |w| write_u64(w, reading.unwrap())),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut meter_id = None;
        let mut meter_reading = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    let chars = crate::primitives::read_bounded_string(r, 32)?;
                    meter_id = Some(BoundedString::from_chars(&chars)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    meter_reading = Some(read_u64(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            meter_id: meter_id.ok_or(CodecError::UnknownEventForEncoding)?,
            meter_reading,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargingStatusRes {
    pub response_code: ResponseCode,
    pub evse_id: BoundedString<32>,
    pub sa_schedule_tuple_id: u8,
    pub evse_max_current: Option<PhysicalValue>,
    pub meter_info: Option<MeterInfo>,
    pub receipt_required: Option<bool>,
    pub ac_evse_status: AcEvseStatus,
}

impl ChargingStatusRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let max_current = self.evse_max_current;
        let meter = &self.meter_info;
        let receipt = self.receipt_required;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(false, true, |w| {
                    crate::primitives::write_bounded_string(w, self.evse_id.as_chars(), 32)
                }),
                EncodeSlot::field(false, true, |w| write_u8(w, self.sa_schedule_tuple_id)),
                EncodeSlot::field(true, max_current.is_some(), |w| max_current.unwrap().encode(w)),
                EncodeSlot::field(true, meter.is_some(), |w| meter.as_ref().unwrap().encode(w)),
                EncodeSlot::field(true, receipt.is_some(), |w| write_bool(w, receipt.unwrap())),
                EncodeSlot::field(false, true, |w| self.ac_evse_status.encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut evse_id = None;
        let mut sa_schedule_tuple_id = None;
        let mut evse_max_current = None;
        let mut meter_info = None;
        let mut receipt_required = None;
        let mut ac_evse_status = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    response_code = Some(ResponseCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    let chars = crate::primitives::read_bounded_string(r, 32)?;
                    evse_id = Some(BoundedString::from_chars(&chars)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    sa_schedule_tuple_id = Some(read_u8(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    evse_max_current = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    meter_info = Some(MeterInfo::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    receipt_required = Some(read_bool(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    ac_evse_status = Some(AcEvseStatus::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_id: evse_id.ok_or(CodecError::UnknownEventForEncoding)?,
            sa_schedule_tuple_id: sa_schedule_tuple_id.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_max_current,
            meter_info,
            receipt_required,
            ac_evse_status: ac_evse_status.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeteringReceiptReq {
    pub session_id: BoundedBinary<8>,
    pub sa_schedule_tuple_id: Option<u8>,
    pub meter_info: MeterInfo,
}

impl MeteringReceiptReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let tuple_id = self.sa_schedule_tuple_id;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| {
                    crate::primitives::write_bounded_binary(w, self.session_id.as_bytes(), 8)
                }),
                EncodeSlot::field(true, tuple_id.is_some(), |w| write_u8(w, tuple_id.unwrap())),
                EncodeSlot::field(false, true, |w| self.meter_info.encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut session_id = None;
        let mut sa_schedule_tuple_id = None;
        let mut meter_info = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    let bytes = crate::primitives::read_bounded_binary(r, 8)?;
                    session_id = Some(BoundedBinary::from_slice(&bytes)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    sa_schedule_tuple_id = Some(read_u8(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    meter_info = Some(MeterInfo::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            session_id: session_id.ok_or(CodecError::UnknownEventForEncoding)?,
            sa_schedule_tuple_id,
            meter_info: meter_info.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeteringReceiptRes {
    pub response_code: ResponseCode,
    pub ac_evse_status: Option<AcEvseStatus>,
    pub dc_evse_status: Option<DcEvseStatus>,
}

impl MeteringReceiptRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let ac = self.ac_evse_status;
        let dc = self.dc_evse_status;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(true, ac.is_some(), |w| ac.unwrap().encode(w)),
                EncodeSlot::field(true, dc.is_some(), |w| dc.unwrap().encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut ac_evse_status = None;
        let mut dc_evse_status = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    response_code = Some(ResponseCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    ac_evse_status = Some(AcEvseStatus::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    dc_evse_status = Some(DcEvseStatus::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            ac_evse_status,
            dc_evse_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::common::{DcEvErrorCode, EvseNotification};

    #[test]
    fn power_delivery_req_roundtrip_matches_scenario_profile() {
        let req = PowerDeliveryReq {
            charge_progress_start: true,
            sa_schedule_tuple_id: 1,
            charging_profile: Some(
                BoundedVec::from_vec(vec![
                    ProfileEntry {
                        start: 0,
                        max_power: crate::model::common::PhysicalValue::new(
                            1,
                            crate::model::common::PhysicalUnit::W,
                            3600,
                        )
                        .unwrap(),
                    },
                    ProfileEntry {
                        start: 900,
                        max_power: crate::model::common::PhysicalValue::new(
                            1,
                            crate::model::common::PhysicalUnit::W,
                            1800,
                        )
                        .unwrap(),
                    },
                ])
                .unwrap(),
            ),
            dc_ev_power_delivery_parameter: None,
        };
        let mut buf = [0u8; 64];
        {
            let mut w = BitWriter::new(&mut buf);
            req.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(PowerDeliveryReq::decode(&mut r).unwrap(), req);
    }

    #[test]
    fn charging_status_req_is_empty_body() {
        let mut buf = [0u8; 4];
        {
            let mut w = BitWriter::new(&mut buf);
            ChargingStatusReq.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(ChargingStatusReq::decode(&mut r).unwrap(), ChargingStatusReq);
    }
}
