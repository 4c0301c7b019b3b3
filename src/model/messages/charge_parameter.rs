//! `ChargeParameterDiscoveryReq`/`Res` — the AC/DC parameter-negotiation
//! exchange (`spec.md` §3.1, scenario 5's `PhysicalValueType` fields).

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::grammar::repeated::{decode_repeated, encode_repeated};
use crate::grammar::{run_decode_sequence, run_encode_sequence, DecodeSlot, EncodeSlot};
use crate::model::bounded::BoundedVec;
use crate::model::common::{
    DcEvErrorCode, EnergyTransferMode, EvseNotification, EvseProcessing, PhysicalValue, ResponseCode,
};
use crate::primitives::{read_bool, read_u32, read_u8, write_bool, write_u32, write_u8};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DcEvStatus {
    pub ev_ready: bool,
    pub ev_error_code: DcEvErrorCode,
    pub ev_ress_soc: u8,
}

impl DcEvStatus {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| write_bool(w, self.ev_ready)),
                EncodeSlot::field(false, true, |w| self.ev_error_code.encode(w)),
                EncodeSlot::field(false, true, |w| write_u8(w, self.ev_ress_soc)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut ev_ready = None;
        let mut ev_error_code = None;
        let mut ev_ress_soc = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    ev_ready = Some(read_bool(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    ev_error_code = Some(DcEvErrorCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    ev_ress_soc = Some(read_u8(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            ev_ready: ev_ready.ok_or(CodecError::UnknownEventForEncoding)?,
            ev_error_code: ev_error_code.ok_or(CodecError::UnknownEventForEncoding)?,
            ev_ress_soc: ev_ress_soc.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcEvChargeParameter {
    pub departure_time: Option<u32>,
    pub e_amount: PhysicalValue,
    pub ev_max_voltage: PhysicalValue,
    pub ev_max_current: PhysicalValue,
    pub ev_min_current: PhysicalValue,
}

impl AcEvChargeParameter {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let dep = self.departure_time;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(true, dep.is_some(), |w| write_u32(w, dep.unwrap())),
                EncodeSlot::field(false, true, |w| self.e_amount.encode(w)),
                EncodeSlot::field(false, true, |w| self.ev_max_voltage.encode(w)),
                EncodeSlot::field(false, true, |w| self.ev_max_current.encode(w)),
                EncodeSlot::field(false, true, |w| self.ev_min_current.encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut departure_time = None;
        let mut e_amount = None;
        let mut ev_max_voltage = None;
        let mut ev_max_current = None;
        let mut ev_min_current = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(true, |r| {
                    departure_time = Some(read_u32(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    e_amount = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    ev_max_voltage = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    ev_max_current = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    ev_min_current = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            departure_time,
            e_amount: e_amount.ok_or(CodecError::UnknownEventForEncoding)?,
            ev_max_voltage: ev_max_voltage.ok_or(CodecError::UnknownEventForEncoding)?,
            ev_max_current: ev_max_current.ok_or(CodecError::UnknownEventForEncoding)?,
            ev_min_current: ev_min_current.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DcEvChargeParameter {
    pub departure_time: Option<u32>,
    pub dc_ev_status: DcEvStatus,
    pub ev_maximum_current_limit: PhysicalValue,
    pub ev_maximum_power_limit: Option<PhysicalValue>,
    pub ev_maximum_voltage_limit: PhysicalValue,
    pub ev_energy_capacity: Option<PhysicalValue>,
    pub ev_energy_request: Option<PhysicalValue>,
    pub full_soc: Option<u8>,
    pub bulk_soc: Option<u8>,
}

impl DcEvChargeParameter {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let dep = self.departure_time;
        let pmax = self.ev_maximum_power_limit;
        let ecap = self.ev_energy_capacity;
        let ereq = self.ev_energy_request;
        let full = self.full_soc;
        let bulk = self.bulk_soc;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(true, dep.is_some(), |w| write_u32(w, dep.unwrap())),
                EncodeSlot::field(false, true, |w| self.dc_ev_status.encode(w)),
                EncodeSlot::field(false, true, |w| self.ev_maximum_current_limit.encode(w)),
                EncodeSlot::field(true, pmax.is_some(), |w| pmax.unwrap().encode(w)),
                EncodeSlot::field(false, true, |w| self.ev_maximum_voltage_limit.encode(w)),
                EncodeSlot::field(true, ecap.is_some(), |w| ecap.unwrap().encode(w)),
                EncodeSlot::field(true, ereq.is_some(), |w| ereq.unwrap().encode(w)),
                EncodeSlot::field(true, full.is_some(), |w| write_u8(w, full.unwrap())),
                EncodeSlot::field(true, bulk.is_some(), |w| write_u8(w, bulk.unwrap())),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut departure_time = None;
        let mut dc_ev_status = None;
        let mut ev_maximum_current_limit = None;
        let mut ev_maximum_power_limit = None;
        let mut ev_maximum_voltage_limit = None;
        let mut ev_energy_capacity = None;
        let mut ev_energy_request = None;
        let mut full_soc = None;
        let mut bulk_soc = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(true, |r| {
                    departure_time = Some(read_u32(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    dc_ev_status = Some(DcEvStatus::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    ev_maximum_current_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    ev_maximum_power_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    ev_maximum_voltage_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    ev_energy_capacity = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    ev_energy_request = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    full_soc = Some(read_u8(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    bulk_soc = Some(read_u8(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            departure_time,
            dc_ev_status: dc_ev_status.ok_or(CodecError::UnknownEventForEncoding)?,
            ev_maximum_current_limit: ev_maximum_current_limit
                .ok_or(CodecError::UnknownEventForEncoding)?,
            ev_maximum_power_limit,
            ev_maximum_voltage_limit: ev_maximum_voltage_limit
                .ok_or(CodecError::UnknownEventForEncoding)?,
            ev_energy_capacity,
            ev_energy_request,
            full_soc,
            bulk_soc,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvChargeParameter {
    Ac(AcEvChargeParameter),
    Dc(DcEvChargeParameter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeParameterDiscoveryReq {
    pub max_entries_sa_schedule_tuple: Option<u16>,
    pub requested_energy_transfer_mode: EnergyTransferMode,
    pub ev_charge_parameter: EvChargeParameter,
}

impl ChargeParameterDiscoveryReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let max_entries = self.max_entries_sa_schedule_tuple;
        let (ac_present, dc_present) = match self.ev_charge_parameter {
            EvChargeParameter::Ac(_) => (true, false),
            EvChargeParameter::Dc(_) => (false, true),
        };
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(true, max_entries.is_some(), |w| {
                    crate::primitives::write_u16(w, max_entries.unwrap())
                }),
                EncodeSlot::field(false, true, |w| self.requested_energy_transfer_mode.encode(w)),
                EncodeSlot::field(true, ac_present, |w| match self.ev_charge_parameter {
                    EvChargeParameter::Ac(p) => p.encode(w),
                    EvChargeParameter::Dc(_) => unreachable!(),
                }),
                EncodeSlot::field(true, dc_present, |w| match self.ev_charge_parameter {
                    EvChargeParameter::Dc(p) => p.encode(w),
                    EvChargeParameter::Ac(_) => unreachable!(),
                }),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut max_entries_sa_schedule_tuple = None;
        let mut requested_energy_transfer_mode = None;
        let mut ev_charge_parameter = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(true, |r| {
                    max_entries_sa_schedule_tuple = Some(crate::primitives::read_u16(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    requested_energy_transfer_mode = Some(EnergyTransferMode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    ev_charge_parameter = Some(EvChargeParameter::Ac(AcEvChargeParameter::decode(r)?));
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    ev_charge_parameter = Some(EvChargeParameter::Dc(DcEvChargeParameter::decode(r)?));
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            max_entries_sa_schedule_tuple,
            requested_energy_transfer_mode: requested_energy_transfer_mode
                .ok_or(CodecError::UnknownEventForEncoding)?,
            ev_charge_parameter: ev_charge_parameter.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

/// Greatly simplified `SAScheduleTuple` — one id plus a single
/// `PMaxSchedule` point rather than the full `PMaxScheduleEntry` list with
/// `RelativeTimeInterval` (`DESIGN.md`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaScheduleTuple {
    pub sa_schedule_tuple_id: u8,
    pub p_max: PhysicalValue,
}

impl SaScheduleTuple {
    fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| write_u8(w, self.sa_schedule_tuple_id)),
                EncodeSlot::field(false, true, |w| self.p_max.encode(w)),
            ],
        )
    }

    fn decode(r: &mut BitReader) -> Result<Self> {
        let mut sa_schedule_tuple_id = None;
        let mut p_max = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    sa_schedule_tuple_id = Some(read_u8(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    p_max = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            sa_schedule_tuple_id: sa_schedule_tuple_id.ok_or(CodecError::UnknownEventForEncoding)?,
            p_max: p_max.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcEvseStatus {
    pub notification: EvseNotification,
    pub rcd: bool,
}

impl AcEvseStatus {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.notification.encode(w)),
                EncodeSlot::field(false, true, |w| write_bool(w, self.rcd)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut notification = None;
        let mut rcd = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    notification = Some(EvseNotification::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    rcd = Some(read_bool(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            notification: notification.ok_or(CodecError::UnknownEventForEncoding)?,
            rcd: rcd.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DcEvseStatus {
    pub notification: EvseNotification,
    pub isolation_status: Option<u8>,
    pub status_code: DcEvErrorCode,
}

impl DcEvseStatus {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let iso = self.isolation_status;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.notification.encode(w)),
                EncodeSlot::field(true, iso.is_some(), |w| write_u8(w, iso.unwrap())),
                EncodeSlot::field(false, true, |w| self.status_code.encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut notification = None;
        let mut isolation_status = None;
        let mut status_code = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    notification = Some(EvseNotification::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    isolation_status = Some(read_u8(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    status_code = Some(DcEvErrorCode::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            notification: notification.ok_or(CodecError::UnknownEventForEncoding)?,
            isolation_status,
            status_code: status_code.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcEvseChargeParameter {
    pub ac_evse_status: AcEvseStatus,
    pub evse_nominal_voltage: PhysicalValue,
    pub evse_max_current: PhysicalValue,
}

impl AcEvseChargeParameter {
    fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.ac_evse_status.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_nominal_voltage.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_max_current.encode(w)),
            ],
        )
    }

    fn decode(r: &mut BitReader) -> Result<Self> {
        let mut ac_evse_status = None;
        let mut evse_nominal_voltage = None;
        let mut evse_max_current = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    ac_evse_status = Some(AcEvseStatus::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_nominal_voltage = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_max_current = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            ac_evse_status: ac_evse_status.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_nominal_voltage: evse_nominal_voltage.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_max_current: evse_max_current.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DcEvseChargeParameter {
    pub dc_evse_status: DcEvseStatus,
    pub evse_maximum_current_limit: PhysicalValue,
    pub evse_maximum_power_limit: Option<PhysicalValue>,
    pub evse_maximum_voltage_limit: PhysicalValue,
    pub evse_minimum_current_limit: PhysicalValue,
    pub evse_minimum_voltage_limit: PhysicalValue,
}

impl DcEvseChargeParameter {
    fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let pmax = self.evse_maximum_power_limit;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.dc_evse_status.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_maximum_current_limit.encode(w)),
                EncodeSlot::field(true, pmax.is_some(), |w| pmax.unwrap().encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_maximum_voltage_limit.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_minimum_current_limit.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_minimum_voltage_limit.encode(w)),
            ],
        )
    }

    fn decode(r: &mut BitReader) -> Result<Self> {
        let mut dc_evse_status = None;
        let mut evse_maximum_current_limit = None;
        let mut evse_maximum_power_limit = None;
        let mut evse_maximum_voltage_limit = None;
        let mut evse_minimum_current_limit = None;
        let mut evse_minimum_voltage_limit = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    dc_evse_status = Some(DcEvseStatus::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_maximum_current_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    evse_maximum_power_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_maximum_voltage_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_minimum_current_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    evse_minimum_voltage_limit = Some(PhysicalValue::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            dc_evse_status: dc_evse_status.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_maximum_current_limit: evse_maximum_current_limit
                .ok_or(CodecError::UnknownEventForEncoding)?,
            evse_maximum_power_limit,
            evse_maximum_voltage_limit: evse_maximum_voltage_limit
                .ok_or(CodecError::UnknownEventForEncoding)?,
            evse_minimum_current_limit: evse_minimum_current_limit
                .ok_or(CodecError::UnknownEventForEncoding)?,
            evse_minimum_voltage_limit: evse_minimum_voltage_limit
                .ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvseChargeParameter {
    Ac(AcEvseChargeParameter),
    Dc(DcEvseChargeParameter),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeParameterDiscoveryRes {
    pub response_code: ResponseCode,
    pub evse_processing: EvseProcessing,
    pub schedule_list: Option<BoundedVec<SaScheduleTuple, 3>>,
    pub evse_charge_parameter: Option<EvseChargeParameter>,
}

impl ChargeParameterDiscoveryRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let schedules = &self.schedule_list;
        let (ac_present, dc_present) = match self.evse_charge_parameter {
            Some(EvseChargeParameter::Ac(_)) => (true, false),
            Some(EvseChargeParameter::Dc(_)) => (false, true),
            None => (false, false),
        };
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_processing.encode(w)),
                EncodeSlot::field(true, schedules.is_some(), |w| {
                    encode_repeated(
                        w,
                        schedules.as_ref().unwrap().as_slice(),
                        1,
                        3,
                        |w, s: &SaScheduleTuple| s.encode(w),
                    )
                }),
                EncodeSlot::field(true, ac_present, |w| match self.evse_charge_parameter {
                    Some(EvseChargeParameter::Ac(p)) => p.encode(w),
                    _ => unreachable!(),
                }),
                EncodeSlot::field(true, dc_present, |w| match self.evse_charge_parameter {
                    Some(EvseChargeParameter::Dc(p)) => p.encode(w),
                    _ => unreachable!(),
                }),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut evse_processing = None;
        let mut schedule_list = None;
        let mut evse_charge_parameter = None;
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
                DecodeSlot::field(true, |r| {
                    let items = decode_repeated(r, 1, 3, |r| SaScheduleTuple::decode(r))?;
                    schedule_list = Some(BoundedVec::from_vec(items)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    evse_charge_parameter =
                        Some(EvseChargeParameter::Ac(AcEvseChargeParameter::decode(r)?));
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    evse_charge_parameter =
                        Some(EvseChargeParameter::Dc(DcEvseChargeParameter::decode(r)?));
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_processing: evse_processing.ok_or(CodecError::UnknownEventForEncoding)?,
            schedule_list,
            evse_charge_parameter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::common::PhysicalUnit;

    #[test]
    fn charge_parameter_discovery_req_dc_roundtrip() {
        let req = ChargeParameterDiscoveryReq {
            max_entries_sa_schedule_tuple: None,
            requested_energy_transfer_mode: EnergyTransferMode::DcCore,
            ev_charge_parameter: EvChargeParameter::Dc(DcEvChargeParameter {
                departure_time: None,
                dc_ev_status: DcEvStatus {
                    ev_ready: true,
                    ev_error_code: DcEvErrorCode::NoError,
                    ev_ress_soc: 42,
                },
                ev_maximum_current_limit: PhysicalValue::new(0, PhysicalUnit::Ampere, 125).unwrap(),
                ev_maximum_power_limit: None,
                ev_maximum_voltage_limit: PhysicalValue::new(0, PhysicalUnit::Volt, 400).unwrap(),
                ev_energy_capacity: None,
                ev_energy_request: None,
                full_soc: Some(100),
                bulk_soc: None,
            }),
        };
        let mut buf = [0u8; 64];
        {
            let mut w = BitWriter::new(&mut buf);
            req.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(ChargeParameterDiscoveryReq::decode(&mut r).unwrap(), req);
    }

    #[test]
    fn charge_parameter_discovery_res_ac_roundtrip() {
        let res = ChargeParameterDiscoveryRes {
            response_code: ResponseCode::Ok,
            evse_processing: EvseProcessing::Finished,
            schedule_list: Some(
                BoundedVec::from_vec(vec![SaScheduleTuple {
                    sa_schedule_tuple_id: 1,
                    p_max: PhysicalValue::new(1, PhysicalUnit::W, 3600).unwrap(),
                }])
                .unwrap(),
            ),
            evse_charge_parameter: Some(EvseChargeParameter::Ac(AcEvseChargeParameter {
                ac_evse_status: AcEvseStatus {
                    notification: EvseNotification::None,
                    rcd: false,
                },
                evse_nominal_voltage: PhysicalValue::new(0, PhysicalUnit::Volt, 230).unwrap(),
                evse_max_current: PhysicalValue::new(0, PhysicalUnit::Ampere, 32).unwrap(),
            })),
        };
        let mut buf = [0u8; 64];
        {
            let mut w = BitWriter::new(&mut buf);
            res.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(ChargeParameterDiscoveryRes::decode(&mut r).unwrap(), res);
    }
}
