//! `Body`: the `xs:choice` of every `V2G_Message/Body` child element
//! (`spec.md` §3.1, scenario 1's "one message out of ~35 choices"). All
//! branches are mutually exclusive and the choice itself is mandatory — a
//! `V2G_Message` always carries exactly one body — so unlike an ordinary
//! optional/choice particle this is a single non-skippable window with one
//! branch per variant, built directly rather than through
//! [`crate::grammar::EncodeSlot::field`] (which assumes one branch per
//! slot).
//!
//! Declaration order here is the schema order this codec assigns its own
//! variants in; it is an internal, dense ordering local to this crate and
//! is not guaranteed to match the ordinal some other ISO 15118-2 codec's
//! XSD→grammar-table translator assigns the same element (`spec.md` §1 puts
//! that translation out of scope) — see `DESIGN.md`.

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::grammar::{run_decode_sequence, run_encode_sequence, DecodeBranch, DecodeSlot, EncodeBranch, EncodeSlot};
use crate::model::messages::certificate::{
    CertificateInstallationReq, CertificateInstallationRes, CertificateUpdateReq, CertificateUpdateRes,
};
use crate::model::messages::charge_parameter::{ChargeParameterDiscoveryReq, ChargeParameterDiscoveryRes};
use crate::model::messages::dc::{
    CableCheckReq, CableCheckRes, CurrentDemandReq, CurrentDemandRes, PreChargeReq, PreChargeRes,
    WeldingDetectionReq, WeldingDetectionRes,
};
use crate::model::messages::payment::{
    AuthorizationReq, AuthorizationRes, PaymentDetailsReq, PaymentDetailsRes, PaymentServiceSelectionReq,
    PaymentServiceSelectionRes,
};
use crate::model::messages::power::{
    ChargingStatusReq, ChargingStatusRes, MeteringReceiptReq, MeteringReceiptRes, PowerDeliveryReq,
    PowerDeliveryRes,
};
use crate::model::messages::service::{
    ServiceDetailReq, ServiceDetailRes, ServiceDiscoveryReq, ServiceDiscoveryRes,
};
use crate::model::messages::session::{SessionSetupReq, SessionSetupRes, SessionStopReq, SessionStopRes};

/// One `V2G_Message/Body` child. Every request/response pair from
/// `SPEC_FULL.md` §3.1's 17 message-group files is represented; real
/// ISO 15118-2 carries a handful more (e.g. `CertificateUpdateReq`'s sibling
/// `ChargingStatusReq`'s peer messages for plug-and-charge renegotiation),
/// omitted here as not worth a 35th near-duplicate shape — see `DESIGN.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    SessionSetupReq(SessionSetupReq),
    SessionSetupRes(SessionSetupRes),
    ServiceDiscoveryReq(ServiceDiscoveryReq),
    ServiceDiscoveryRes(ServiceDiscoveryRes),
    ServiceDetailReq(ServiceDetailReq),
    ServiceDetailRes(ServiceDetailRes),
    PaymentServiceSelectionReq(PaymentServiceSelectionReq),
    PaymentServiceSelectionRes(PaymentServiceSelectionRes),
    PaymentDetailsReq(PaymentDetailsReq),
    PaymentDetailsRes(PaymentDetailsRes),
    AuthorizationReq(AuthorizationReq),
    AuthorizationRes(AuthorizationRes),
    ChargeParameterDiscoveryReq(ChargeParameterDiscoveryReq),
    ChargeParameterDiscoveryRes(ChargeParameterDiscoveryRes),
    PowerDeliveryReq(PowerDeliveryReq),
    PowerDeliveryRes(PowerDeliveryRes),
    ChargingStatusReq(ChargingStatusReq),
    ChargingStatusRes(ChargingStatusRes),
    MeteringReceiptReq(MeteringReceiptReq),
    MeteringReceiptRes(MeteringReceiptRes),
    SessionStopReq(SessionStopReq),
    SessionStopRes(SessionStopRes),
    CertificateUpdateReq(CertificateUpdateReq),
    CertificateUpdateRes(CertificateUpdateRes),
    CertificateInstallationReq(CertificateInstallationReq),
    CertificateInstallationRes(CertificateInstallationRes),
    CableCheckReq(CableCheckReq),
    CableCheckRes(CableCheckRes),
    PreChargeReq(PreChargeReq),
    PreChargeRes(PreChargeRes),
    CurrentDemandReq(CurrentDemandReq),
    CurrentDemandRes(CurrentDemandRes),
    WeldingDetectionReq(WeldingDetectionReq),
    WeldingDetectionRes(WeldingDetectionRes),
}

const VARIANT_COUNT: usize = 34;

impl Body {
    fn ordinal(&self) -> usize {
        match self {
            Body::SessionSetupReq(_) => 0,
            Body::SessionSetupRes(_) => 1,
            Body::ServiceDiscoveryReq(_) => 2,
            Body::ServiceDiscoveryRes(_) => 3,
            Body::ServiceDetailReq(_) => 4,
            Body::ServiceDetailRes(_) => 5,
            Body::PaymentServiceSelectionReq(_) => 6,
            Body::PaymentServiceSelectionRes(_) => 7,
            Body::PaymentDetailsReq(_) => 8,
            Body::PaymentDetailsRes(_) => 9,
            Body::AuthorizationReq(_) => 10,
            Body::AuthorizationRes(_) => 11,
            Body::ChargeParameterDiscoveryReq(_) => 12,
            Body::ChargeParameterDiscoveryRes(_) => 13,
            Body::PowerDeliveryReq(_) => 14,
            Body::PowerDeliveryRes(_) => 15,
            Body::ChargingStatusReq(_) => 16,
            Body::ChargingStatusRes(_) => 17,
            Body::MeteringReceiptReq(_) => 18,
            Body::MeteringReceiptRes(_) => 19,
            Body::SessionStopReq(_) => 20,
            Body::SessionStopRes(_) => 21,
            Body::CertificateUpdateReq(_) => 22,
            Body::CertificateUpdateRes(_) => 23,
            Body::CertificateInstallationReq(_) => 24,
            Body::CertificateInstallationRes(_) => 25,
            Body::CableCheckReq(_) => 26,
            Body::CableCheckRes(_) => 27,
            Body::PreChargeReq(_) => 28,
            Body::PreChargeRes(_) => 29,
            Body::CurrentDemandReq(_) => 30,
            Body::CurrentDemandRes(_) => 31,
            Body::WeldingDetectionReq(_) => 32,
            Body::WeldingDetectionRes(_) => 33,
        }
    }

    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        let ordinal = self.ordinal();
        let mut branches = Vec::with_capacity(VARIANT_COUNT);
        for i in 0..VARIANT_COUNT {
            let present = i == ordinal;
            branches.push(EncodeBranch {
                present,
                write: Box::new(move |w: &mut BitWriter| self.encode_payload(w)),
            });
        }
        run_encode_sequence(w, vec![EncodeSlot { skippable: false, branches }])
    }

    fn encode_payload(&self, w: &mut BitWriter) -> Result<()> {
        match self {
            Body::SessionSetupReq(m) => m.encode(w),
            Body::SessionSetupRes(m) => m.encode(w),
            Body::ServiceDiscoveryReq(m) => m.encode(w),
            Body::ServiceDiscoveryRes(m) => m.encode(w),
            Body::ServiceDetailReq(m) => m.encode(w),
            Body::ServiceDetailRes(m) => m.encode(w),
            Body::PaymentServiceSelectionReq(m) => m.encode(w),
            Body::PaymentServiceSelectionRes(m) => m.encode(w),
            Body::PaymentDetailsReq(m) => m.encode(w),
            Body::PaymentDetailsRes(m) => m.encode(w),
            Body::AuthorizationReq(m) => m.encode(w),
            Body::AuthorizationRes(m) => m.encode(w),
            Body::ChargeParameterDiscoveryReq(m) => m.encode(w),
            Body::ChargeParameterDiscoveryRes(m) => m.encode(w),
            Body::PowerDeliveryReq(m) => m.encode(w),
            Body::PowerDeliveryRes(m) => m.encode(w),
            Body::ChargingStatusReq(m) => m.encode(w),
            Body::ChargingStatusRes(m) => m.encode(w),
            Body::MeteringReceiptReq(m) => m.encode(w),
            Body::MeteringReceiptRes(m) => m.encode(w),
            Body::SessionStopReq(m) => m.encode(w),
            Body::SessionStopRes(m) => m.encode(w),
            Body::CertificateUpdateReq(m) => m.encode(w),
            Body::CertificateUpdateRes(m) => m.encode(w),
            Body::CertificateInstallationReq(m) => m.encode(w),
            Body::CertificateInstallationRes(m) => m.encode(w),
            Body::CableCheckReq(m) => m.encode(w),
            Body::CableCheckRes(m) => m.encode(w),
            Body::PreChargeReq(m) => m.encode(w),
            Body::PreChargeRes(m) => m.encode(w),
            Body::CurrentDemandReq(m) => m.encode(w),
            Body::CurrentDemandRes(m) => m.encode(w),
            Body::WeldingDetectionReq(m) => m.encode(w),
            Body::WeldingDetectionRes(m) => m.encode(w),
        }
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        // Every branch closure would otherwise need to capture `&mut result`
        // simultaneously (only one is ever actually called, but the
        // borrow checker can't see that), so the slot result is threaded
        // through a `RefCell` instead.
        let result = std::rc::Rc::new(std::cell::RefCell::new(None));
        let mut branches = Vec::with_capacity(VARIANT_COUNT);
        for i in 0..VARIANT_COUNT {
            let result = result.clone();
            branches.push(DecodeBranch {
                read: Box::new(move |r: &mut BitReader| {
                    let body = Self::decode_variant(i, r)?;
                    *result.borrow_mut() = Some(body);
                    Ok(())
                }),
            });
        }
        run_decode_sequence(r, vec![DecodeSlot { skippable: false, branches }])?;
        result.borrow_mut().take().ok_or(CodecError::UnknownEventForEncoding)
    }

    fn decode_variant(ordinal: usize, r: &mut BitReader) -> Result<Body> {
        Ok(match ordinal {
            0 => Body::SessionSetupReq(SessionSetupReq::decode(r)?),
            1 => Body::SessionSetupRes(SessionSetupRes::decode(r)?),
            2 => Body::ServiceDiscoveryReq(ServiceDiscoveryReq::decode(r)?),
            3 => Body::ServiceDiscoveryRes(ServiceDiscoveryRes::decode(r)?),
            4 => Body::ServiceDetailReq(ServiceDetailReq::decode(r)?),
            5 => Body::ServiceDetailRes(ServiceDetailRes::decode(r)?),
            6 => Body::PaymentServiceSelectionReq(PaymentServiceSelectionReq::decode(r)?),
            7 => Body::PaymentServiceSelectionRes(PaymentServiceSelectionRes::decode(r)?),
            8 => Body::PaymentDetailsReq(PaymentDetailsReq::decode(r)?),
            9 => Body::PaymentDetailsRes(PaymentDetailsRes::decode(r)?),
            10 => Body::AuthorizationReq(AuthorizationReq::decode(r)?),
            11 => Body::AuthorizationRes(AuthorizationRes::decode(r)?),
            12 => Body::ChargeParameterDiscoveryReq(ChargeParameterDiscoveryReq::decode(r)?),
            13 => Body::ChargeParameterDiscoveryRes(ChargeParameterDiscoveryRes::decode(r)?),
            14 => Body::PowerDeliveryReq(PowerDeliveryReq::decode(r)?),
            15 => Body::PowerDeliveryRes(PowerDeliveryRes::decode(r)?),
            16 => Body::ChargingStatusReq(ChargingStatusReq::decode(r)?),
            17 => Body::ChargingStatusRes(ChargingStatusRes::decode(r)?),
            18 => Body::MeteringReceiptReq(MeteringReceiptReq::decode(r)?),
            19 => Body::MeteringReceiptRes(MeteringReceiptRes::decode(r)?),
            20 => Body::SessionStopReq(SessionStopReq::decode(r)?),
            21 => Body::SessionStopRes(SessionStopRes::decode(r)?),
            22 => Body::CertificateUpdateReq(CertificateUpdateReq::decode(r)?),
            23 => Body::CertificateUpdateRes(CertificateUpdateRes::decode(r)?),
            24 => Body::CertificateInstallationReq(CertificateInstallationReq::decode(r)?),
            25 => Body::CertificateInstallationRes(CertificateInstallationRes::decode(r)?),
            26 => Body::CableCheckReq(CableCheckReq::decode(r)?),
            27 => Body::CableCheckRes(CableCheckRes::decode(r)?),
            28 => Body::PreChargeReq(PreChargeReq::decode(r)?),
            29 => Body::PreChargeRes(PreChargeRes::decode(r)?),
            30 => Body::CurrentDemandReq(CurrentDemandReq::decode(r)?),
            31 => Body::CurrentDemandRes(CurrentDemandRes::decode(r)?),
            32 => Body::WeldingDetectionReq(WeldingDetectionReq::decode(r)?),
            33 => Body::WeldingDetectionRes(WeldingDetectionRes::decode(r)?),
            _ => return Err(CodecError::UnknownEventCode),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::bounded::BoundedBinary;

    #[test]
    fn body_roundtrip_session_setup_req_uses_six_bit_index() {
        assert_eq!(crate::primitives::event_code_width(VARIANT_COUNT), 6);

        let body = Body::SessionSetupReq(SessionSetupReq {
            evcc_id: BoundedBinary::from_slice(&[0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02]).unwrap(),
        });
        let mut buf = [0u8; 16];
        {
            let mut w = BitWriter::new(&mut buf);
            body.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(Body::decode(&mut r).unwrap(), body);
    }
}
