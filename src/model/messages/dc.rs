//! The DC-specific exchange: `CableCheckReq`/`Res`, `PreChargeReq`/`Res`,
//! `CurrentDemandReq`/`Res`, `WeldingDetectionReq`/`Res` (`spec.md` §3.1).

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::grammar::{run_decode_sequence, run_encode_sequence, DecodeSlot, EncodeSlot};
use crate::model::common::{EvseProcessing, PhysicalValue, ResponseCode};
use crate::model::messages::charge_parameter::{DcEvStatus, DcEvseStatus};
use crate::primitives::{read_bool, write_bool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CableCheckReq {
    pub dc_ev_status: DcEvStatus,
}

impl CableCheckReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![EncodeSlot::field(false, true, |w| self.dc_ev_status.encode(w))],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut dc_ev_status = None;
        run_decode_sequence(
            r,
            vec![DecodeSlot::field(false, |r| {
                dc_ev_status = Some(DcEvStatus::decode(r)?);
                Ok(())
            })],
        )?;
        Ok(Self {
            dc_ev_status: dc_ev_status.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CableCheckRes {
    pub response_code: ResponseCode,
    pub evse_processing: EvseProcessing,
    pub dc_evse_status: DcEvseStatus,
}

impl CableCheckRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_processing.encode(w)),
                EncodeSlot::field(false, true, |w| self.dc_evse_status.encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut evse_processing = None;
        let mut dc_evse_status = None;
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
                DecodeSlot::field(false, |r| {
                    dc_evse_status = Some(DcEvseStatus::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_processing: evse_processing.ok_or(CodecError::UnknownEventForEncoding)?,
            dc_evse_status: dc_evse_status.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreChargeReq {
    pub dc_ev_status: DcEvStatus,
    pub ev_target_voltage: PhysicalValue,
    pub ev_target_current: PhysicalValue,
}

impl PreChargeReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.dc_ev_status.encode(w)),
                EncodeSlot::field(false, true, |w| self.ev_target_voltage.encode(w)),
                EncodeSlot::field(false, true, |w| self.ev_target_current.encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut dc_ev_status = None;
        let mut ev_target_voltage = None;
        let mut ev_target_current = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    dc_ev_status = Some(DcEvStatus::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    ev_target_voltage = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    ev_target_current = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            dc_ev_status: dc_ev_status.ok_or(CodecError::UnknownEventForEncoding)?,
            ev_target_voltage: ev_target_voltage.ok_or(CodecError::UnknownEventForEncoding)?,
            ev_target_current: ev_target_current.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreChargeRes {
    pub response_code: ResponseCode,
    pub dc_evse_status: DcEvseStatus,
    pub evse_present_voltage: PhysicalValue,
}

impl PreChargeRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(false, true, |w| self.dc_evse_status.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_present_voltage.encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut dc_evse_status = None;
        let mut evse_present_voltage = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    response_code = Some(ResponseCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    dc_evse_status = Some(DcEvseStatus::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_present_voltage = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            dc_evse_status: dc_evse_status.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_present_voltage: evse_present_voltage.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentDemandReq {
    pub dc_ev_status: DcEvStatus,
    pub ev_target_current: PhysicalValue,
    pub ev_target_voltage: PhysicalValue,
    pub ev_max_voltage_limit: Option<PhysicalValue>,
    pub ev_max_current_limit: Option<PhysicalValue>,
    pub ev_max_power_limit: Option<PhysicalValue>,
    pub bulk_charging_complete: Option<bool>,
    pub charging_complete: bool,
    pub remaining_time_to_full_soc: Option<PhysicalValue>,
    pub remaining_time_to_bulk_soc: Option<PhysicalValue>,
}

impl CurrentDemandReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let max_v = self.ev_max_voltage_limit;
        let max_i = self.ev_max_current_limit;
        let max_p = self.ev_max_power_limit;
        let bulk = self.bulk_charging_complete;
        let full_t = self.remaining_time_to_full_soc;
        let bulk_t = self.remaining_time_to_bulk_soc;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.dc_ev_status.encode(w)),
                EncodeSlot::field(false, true, |w| self.ev_target_current.encode(w)),
                EncodeSlot::field(true, max_v.is_some(), |w| max_v.unwrap().encode(w)),
                EncodeSlot::field(true, max_i.is_some(), |w| max_i.unwrap().encode(w)),
                EncodeSlot::field(true, max_p.is_some(), |w| max_p.unwrap().encode(w)),
                EncodeSlot::field(false, true, |w| self.ev_target_voltage.encode(w)),
                EncodeSlot::field(true, bulk.is_some(), |w| write_bool(w, bulk.unwrap())),
                EncodeSlot::field(false, true, |w| write_bool(w, self.charging_complete)),
                EncodeSlot::field(true, full_t.is_some(), |w| full_t.unwrap().encode(w)),
                EncodeSlot::field(true, bulk_t.is_some(), |w| bulk_t.unwrap().encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut dc_ev_status = None;
        let mut ev_target_current = None;
        let mut ev_max_voltage_limit = None;
        let mut ev_max_current_limit = None;
        let mut ev_max_power_limit = None;
        let mut ev_target_voltage = None;
        let mut bulk_charging_complete = None;
        let mut charging_complete = None;
        let mut remaining_time_to_full_soc = None;
        let mut remaining_time_to_bulk_soc = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    dc_ev_status = Some(DcEvStatus::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    ev_target_current = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    ev_max_voltage_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    ev_max_current_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    ev_max_power_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    ev_target_voltage = Some(PhysicalValue::decode(r)?);
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
                DecodeSlot::field(true, |r| {
                    remaining_time_to_full_soc = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    remaining_time_to_bulk_soc = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            dc_ev_status: dc_ev_status.ok_or(CodecError::UnknownEventForEncoding)?,
            ev_target_current: ev_target_current.ok_or(CodecError::UnknownEventForEncoding)?,
            ev_target_voltage: ev_target_voltage.ok_or(CodecError::UnknownEventForEncoding)?,
            ev_max_voltage_limit,
            ev_max_current_limit,
            ev_max_power_limit,
            bulk_charging_complete,
            charging_complete: charging_complete.ok_or(CodecError::UnknownEventForEncoding)?,
            remaining_time_to_full_soc,
            remaining_time_to_bulk_soc,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentDemandRes {
    pub response_code: ResponseCode,
    pub dc_evse_status: DcEvseStatus,
    pub evse_present_voltage: PhysicalValue,
    pub evse_present_current: PhysicalValue,
    pub evse_current_limit_achieved: bool,
    pub evse_voltage_limit_achieved: bool,
    pub evse_power_limit_achieved: bool,
    pub evse_max_voltage_limit: Option<PhysicalValue>,
    pub evse_max_current_limit: Option<PhysicalValue>,
    pub evse_max_power_limit: Option<PhysicalValue>,
}

impl CurrentDemandRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let max_v = self.evse_max_voltage_limit;
        let max_i = self.evse_max_current_limit;
        let max_p = self.evse_max_power_limit;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(false, true, |w| self.dc_evse_status.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_present_voltage.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_present_current.encode(w)),
                EncodeSlot::field(false, true, |w| write_bool(w, self.evse_current_limit_achieved)),
                EncodeSlot::field(false, true, |w| write_bool(w, self.evse_voltage_limit_achieved)),
                EncodeSlot::field(false, true, |w| write_bool(w, self.evse_power_limit_achieved)),
                EncodeSlot::field(true, max_v.is_some(), |w| max_v.unwrap().encode(w)),
                EncodeSlot::field(true, max_i.is_some(), |w| max_i.unwrap().encode(w)),
                EncodeSlot::field(true, max_p.is_some(), |w| max_p.unwrap().encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut dc_evse_status = None;
        let mut evse_present_voltage = None;
        let mut evse_present_current = None;
        let mut evse_current_limit_achieved = None;
        let mut evse_voltage_limit_achieved = None;
        let mut evse_power_limit_achieved = None;
        let mut evse_max_voltage_limit = None;
        let mut evse_max_current_limit = None;
        let mut evse_max_power_limit = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    response_code = Some(ResponseCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    dc_evse_status = Some(DcEvseStatus::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_present_voltage = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_present_current = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_current_limit_achieved = Some(read_bool(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_voltage_limit_achieved = Some(read_bool(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_power_limit_achieved = Some(read_bool(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    evse_max_voltage_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    evse_max_current_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    evse_max_power_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            dc_evse_status: dc_evse_status.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_present_voltage: evse_present_voltage.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_present_current: evse_present_current.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_current_limit_achieved: evse_current_limit_achieved
                .ok_or(CodecError::UnknownEventForEncoding)?,
            evse_voltage_limit_achieved: evse_voltage_limit_achieved
                .ok_or(CodecError::UnknownEventForEncoding)?,
            evse_power_limit_achieved: evse_power_limit_achieved
                .ok_or(CodecError::UnknownEventForEncoding)?,
            evse_max_voltage_limit,
            evse_max_current_limit,
            evse_max_power_limit,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeldingDetectionReq {
    pub dc_ev_status: DcEvStatus,
}

impl WeldingDetectionReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![EncodeSlot::field(false, true, |w| self.dc_ev_status.encode(w))],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut dc_ev_status = None;
        run_decode_sequence(
            r,
            vec![DecodeSlot::field(false, |r| {
                dc_ev_status = Some(DcEvStatus::decode(r)?);
                Ok(())
            })],
        )?;
        Ok(Self {
            dc_ev_status: dc_ev_status.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeldingDetectionRes {
    pub response_code: ResponseCode,
    pub dc_evse_status: DcEvseStatus,
    pub evse_present_voltage: PhysicalValue,
}

impl WeldingDetectionRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(false, true, |w| self.dc_evse_status.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_present_voltage.encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut dc_evse_status = None;
        let mut evse_present_voltage = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    response_code = Some(ResponseCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    dc_evse_status = Some(DcEvseStatus::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_present_voltage = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            dc_evse_status: dc_evse_status.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_present_voltage: evse_present_voltage.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::common::{DcEvErrorCode, EvseNotification, PhysicalUnit};

    #[test]
    fn current_demand_req_roundtrip() {
        let req = CurrentDemandReq {
            dc_ev_status: DcEvStatus {
                ev_ready: true,
                ev_error_code: DcEvErrorCode::NoError,
                ev_ress_soc: 55,
            },
            ev_target_current: PhysicalValue::new(0, PhysicalUnit::Ampere, 80).unwrap(),
            ev_target_voltage: PhysicalValue::new(0, PhysicalUnit::Volt, 380).unwrap(),
            ev_max_voltage_limit: None,
            ev_max_current_limit: None,
            ev_max_power_limit: None,
            bulk_charging_complete: Some(false),
            charging_complete: false,
            remaining_time_to_full_soc: None,
            remaining_time_to_bulk_soc: None,
        };
        let mut buf = [0u8; 64];
        {
            let mut w = BitWriter::new(&mut buf);
            req.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(CurrentDemandReq::decode(&mut r).unwrap(), req);
    }

    #[test]
    fn precharge_roundtrip() {
        let res = PreChargeRes {
            response_code: ResponseCode::Ok,
            dc_evse_status: DcEvseStatus {
                notification: EvseNotification::None,
                isolation_status: Some(1),
                status_code: DcEvErrorCode::NoError,
            },
            evse_present_voltage: PhysicalValue::new(0, PhysicalUnit::Volt, 10).unwrap(),
        };
        let mut buf = [0u8; 32];
        {
            let mut w = BitWriter::new(&mut buf);
            res.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(PreChargeRes::decode(&mut r).unwrap(), res);
    }
}
