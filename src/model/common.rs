//! Shared enumerations and cross-cutting records used by most message
//! bodies (`spec.md` §3.1's "shared complex types" and §3.2's scalar
//! enumerations). Each enum here is a schema-informed `xs:string`
//! enumeration; on the wire it is an n-bit ordinal, `n = ceil(log2(variant
//! count))`, per §4.2 — never the string bytes themselves.
//!
//! `PhysicalValueType`, `MessageHeader`, `NotificationType`, and
//! `SignatureType` are genuine complex types, so alongside their struct
//! definitions this file also carries their `encode`/`decode` procedures,
//! built on [`crate::grammar`] exactly like every other complex type.

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::grammar::{run_decode_sequence, run_encode_sequence, DecodeSlot, EncodeSlot};
use crate::model::bounded::BoundedBinary;
use crate::primitives::{
    read_bool, read_enum_ordinal, read_i16, write_bool, write_enum_ordinal, write_i16,
};

/// Generates a fieldless enum plus `ordinal()`/`from_ordinal()` and an
/// `encode`/`decode` pair driven by [`write_enum_ordinal`]/
/// [`read_enum_ordinal`]. Declaration order is ordinal order, matching how
/// the upstream XSD→grammar-table translator assigns these (`spec.md` §1).
macro_rules! wire_enum {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            pub fn ordinal(self) -> u32 {
                Self::VARIANTS.iter().position(|v| *v == self).unwrap() as u32
            }

            pub fn from_ordinal(ordinal: u32) -> Result<Self> {
                Self::VARIANTS
                    .get(ordinal as usize)
                    .copied()
                    .ok_or(CodecError::BitcountOutOfRange)
            }

            pub fn encode(self, w: &mut BitWriter) -> Result<()> {
                write_enum_ordinal(w, self.ordinal(), Self::VARIANTS.len())
            }

            pub fn decode(r: &mut BitReader) -> Result<Self> {
                let ordinal = read_enum_ordinal(r, Self::VARIANTS.len())?;
                Self::from_ordinal(ordinal)
            }
        }
    };
}

wire_enum!(ResponseCode {
    Ok,
    OkNewSessionEstablished,
    OkOldSessionJoined,
    OkCertificateExpiresSoon,
    Failed,
    FailedSequenceError,
    FailedServiceIdInvalid,
    FailedUnknownSession,
    FailedServiceSelectionInvalid,
    FailedPaymentSelectionInvalid,
    FailedCertificateExpired,
    FailedSignatureError,
    FailedNoCertificateAvailable,
    FailedCertChainError,
    FailedChallengeInvalid,
    FailedContractCanceled,
    FailedWrongChargeParameter,
    FailedPowerDeliveryNotApplied,
    FailedTariffSelectionInvalid,
    FailedChargingProfileInvalid,
    FailedEvsePresentVoltageToLow,
    FailedMeteringSignatureNotValid,
    FailedWrongEnergyTransferMode,
    FailedNoEnergyTransferServiceSelected,
});

wire_enum!(EvseProcessing { Finished, Ongoing });

wire_enum!(PaymentOption { Contract, ExternalPayment });

wire_enum!(ServiceCategory {
    EvCharging,
    Internet,
    ContractCertificate,
    OtherCustom,
});

wire_enum!(EnergyTransferMode {
    AcSinglePhaseCore,
    AcThreePhaseCore,
    DcCore,
    DcExtended,
    DcComboCore,
    DcUnique,
});

wire_enum!(DcEvErrorCode {
    NoError,
    FailedRessTemperatureInhibit,
    FailedEvShiftPosition,
    FailedChargerConnectorLockFault,
    FailedEvRessMalfunction,
    FailedChargingCurrentDifferential,
    FailedChargingVoltageOutOfRange,
    ReservedA,
    ReservedB,
    ReservedC,
    FailedChargingSystemIncompatibility,
    NoData,
});

wire_enum!(EvseNotification {
    None,
    StopCharging,
    ReNegotiation,
});

wire_enum!(FaultCode {
    EvseNotSupported,
    EvseShutdown,
    EvseEmergencyShutdown,
    EvseMalfunction,
    ReservedA,
});

wire_enum!(PhysicalUnit {
    Wh,
    W,
    Volt,
    Ampere,
    AmpereHour,
    Celsius,
    Second,
    Percent,
});

/// A physical measurement: a biased power-of-ten `multiplier`, a `unit`, and
/// a signed 16-bit `value`, reconstituted as `value * 10^multiplier` in the
/// `unit` (`spec.md` §3.2, §9 "bias-encoded signed fields"). The multiplier
/// ranges -3..=3 and is pre-biased by +3 before emission as an n-bit field,
/// same trick as the EXI event codes but over a schema-declared range
/// rather than a grammar's admissible-event count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalValue {
    pub multiplier: i8,
    pub unit: PhysicalUnit,
    pub value: i16,
}

const MULTIPLIER_BIAS: i8 = 3;
const MULTIPLIER_RANGE: usize = 7; // -3..=3

impl PhysicalValue {
    pub fn new(multiplier: i8, unit: PhysicalUnit, value: i16) -> Result<Self> {
        if !(-MULTIPLIER_BIAS..=MULTIPLIER_BIAS).contains(&multiplier) {
            return Err(CodecError::BitcountOutOfRange);
        }
        Ok(Self { multiplier, unit, value })
    }

    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        write_enum_ordinal(w, (self.multiplier + MULTIPLIER_BIAS) as u32, MULTIPLIER_RANGE)?;
        self.unit.encode(w)?;
        write_i16(w, self.value)
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let biased = read_enum_ordinal(r, MULTIPLIER_RANGE)?;
        let multiplier = biased as i8 - MULTIPLIER_BIAS;
        let unit = PhysicalUnit::decode(r)?;
        let value = read_i16(r)?;
        Ok(Self { multiplier, unit, value })
    }
}

/// A greatly simplified stand-in for the XMLDSig `ds:Signature` this
/// protocol's header optionally carries. Faithfully modelling `ds:Signature`
/// would mean reimplementing a second, unrelated canonical-XML grammar; this
/// codec instead treats the whole signature as one opaque, bounded DER blob
/// (see `DESIGN.md`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub der: BoundedBinary<512>,
}

impl Signature {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        crate::primitives::write_bounded_binary(w, self.der.as_bytes(), 512)
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let bytes = crate::primitives::read_bounded_binary(r, 512)?;
        Ok(Self {
            der: BoundedBinary::from_slice(&bytes)?,
        })
    }
}

/// `NotificationType`: a required fault code plus an optional human-readable
/// message, bounded to 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub fault_code: FaultCode,
    pub fault_msg: Option<crate::model::bounded::BoundedString<64>>,
}

impl Notification {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let msg = &self.fault_msg;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.fault_code.encode(w)),
                EncodeSlot::field(true, msg.is_some(), |w| {
                    crate::primitives::write_bounded_string(
                        w,
                        msg.as_ref().unwrap().as_chars(),
                        64,
                    )
                }),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut fault_code = None;
        let mut fault_msg = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    fault_code = Some(FaultCode::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    let chars = crate::primitives::read_bounded_string(r, 64)?;
                    fault_msg = Some(crate::model::bounded::BoundedString::from_chars(&chars)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            fault_code: fault_code.ok_or(CodecError::UnknownEventForEncoding)?,
            fault_msg,
        })
    }
}

/// The common `V2G_Message/Header`: a session id, an optional
/// `EVSE`-or-`EVCC` notification, and an optional signature (`spec.md`
/// §3.1's "every message shares one header type").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    pub session_id: BoundedBinary<8>,
    pub notification: Option<Notification>,
    pub signature: Option<Signature>,
}

impl MessageHeader {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let notif = &self.notification;
        let sig = &self.signature;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| {
                    crate::primitives::write_bounded_binary(w, self.session_id.as_bytes(), 8)
                }),
                EncodeSlot::field(true, notif.is_some(), |w| notif.as_ref().unwrap().encode(w)),
                EncodeSlot::field(true, sig.is_some(), |w| sig.as_ref().unwrap().encode(w)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut session_id = None;
        let mut notification = None;
        let mut signature = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    let bytes = crate::primitives::read_bounded_binary(r, 8)?;
                    session_id = Some(BoundedBinary::from_slice(&bytes)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    notification = Some(Notification::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    signature = Some(Signature::decode(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            session_id: session_id.ok_or(CodecError::UnknownEventForEncoding)?,
            notification,
            signature,
        })
    }
}

/// `ServiceType`: a numeric id, a short name, and a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub service_id: u16,
    pub service_name: Option<crate::model::bounded::BoundedString<32>>,
    pub service_category: ServiceCategory,
    pub free_service: bool,
}

impl Service {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let name = &self.service_name;
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| {
                    crate::primitives::write_u16(w, self.service_id)
                }),
                EncodeSlot::field(true, name.is_some(), |w| {
                    crate::primitives::write_bounded_string(w, name.as_ref().unwrap().as_chars(), 32)
                }),
                EncodeSlot::field(false, true, |w| self.service_category.encode(w)),
                EncodeSlot::field(false, true, |w| write_bool(w, self.free_service)),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut service_id = None;
        let mut service_name = None;
        let mut service_category = None;
        let mut free_service = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    service_id = Some(crate::primitives::read_u16(r)?);
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    let chars = crate::primitives::read_bounded_string(r, 32)?;
                    service_name = Some(crate::model::bounded::BoundedString::from_chars(&chars)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    service_category = Some(ServiceCategory::decode(r)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    free_service = Some(read_bool(r)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            service_id: service_id.ok_or(CodecError::UnknownEventForEncoding)?,
            service_name,
            service_category: service_category.ok_or(CodecError::UnknownEventForEncoding)?,
            free_service: free_service.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_code_ok_is_ordinal_zero_at_width_five() {
        assert_eq!(ResponseCode::Ok.ordinal(), 0);
        assert_eq!(crate::primitives::event_code_width(ResponseCode::VARIANTS.len()), 5);
    }

    #[test]
    fn physical_value_roundtrip_negative_multiplier() {
        let pv = PhysicalValue::new(-1, PhysicalUnit::Volt, 4000).unwrap();
        let mut buf = [0u8; 8];
        {
            let mut w = BitWriter::new(&mut buf);
            pv.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(PhysicalValue::decode(&mut r).unwrap(), pv);
    }

    #[test]
    fn physical_value_rejects_out_of_range_multiplier() {
        assert!(PhysicalValue::new(4, PhysicalUnit::W, 1).is_err());
    }

    #[test]
    fn message_header_roundtrip_minimal() {
        let header = MessageHeader {
            session_id: BoundedBinary::from_slice(&[0xDE, 0xAD, 0xBE, 0xEF, 1, 2]).unwrap(),
            notification: None,
            signature: None,
        };
        let mut buf = [0u8; 32];
        {
            let mut w = BitWriter::new(&mut buf);
            header.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(MessageHeader::decode(&mut r).unwrap(), header);
    }

    #[test]
    fn message_header_roundtrip_with_notification() {
        let header = MessageHeader {
            session_id: BoundedBinary::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap(),
            notification: Some(Notification {
                fault_code: FaultCode::EvseMalfunction,
                fault_msg: Some(crate::model::bounded::BoundedString::from_str("oops").unwrap()),
            }),
            signature: None,
        };
        let mut buf = [0u8; 64];
        {
            let mut w = BitWriter::new(&mut buf);
            header.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(MessageHeader::decode(&mut r).unwrap(), header);
    }
}
