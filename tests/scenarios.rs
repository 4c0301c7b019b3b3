//! Integration tests for the six concrete scenarios in `spec.md` §8.
//!
//! Each test builds the scenario's `Message`, encodes it, and checks both
//! the produced bytes (where the spec pins them down) and the round trip.

use iso15118_2_exi::document::{decode_message, encode_message, Message};
use iso15118_2_exi::error::CodecError;
use iso15118_2_exi::model::body::Body;
use iso15118_2_exi::model::bounded::{BoundedBinary, BoundedString, BoundedVec};
use iso15118_2_exi::model::common::{
    DcEvErrorCode, MessageHeader, PhysicalUnit, PhysicalValue, ResponseCode,
};
use iso15118_2_exi::model::messages::charge_parameter::DcEvStatus;
use iso15118_2_exi::model::messages::dc::PreChargeReq;
use iso15118_2_exi::model::messages::payment::{PaymentServiceSelectionReq, SelectedService};
use iso15118_2_exi::model::messages::session::{SessionSetupReq, SessionSetupRes, SessionStopRes};

fn header(session_id: &[u8]) -> MessageHeader {
    MessageHeader {
        session_id: BoundedBinary::from_slice(session_id).unwrap(),
        notification: None,
        signature: None,
    }
}

/// Scenario 1: empty `SessionStopRes`, `ResponseCode = OK`.
#[test]
fn scenario_1_empty_session_stop_res() {
    let message = Message {
        header: header(&[1, 2, 3, 4, 5, 6, 7, 8]),
        body: Body::SessionStopRes(SessionStopRes {
            response_code: ResponseCode::Ok,
        }),
    };
    let mut buf = [0u8; 32];
    let len = encode_message(&message, &mut buf).unwrap();
    assert_eq!(&buf[..2], &[0x80, 0x40], "EXI distinguishing bytes");
    let decoded = decode_message(&buf[..len]).unwrap();
    assert_eq!(decoded, message);
}

/// Scenario 2: `SessionSetupReq` with a 6-byte EVCCID.
#[test]
fn scenario_2_session_setup_req_evccid() {
    let evccid = [0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02];
    let message = Message {
        header: header(&[0xAA; 8]),
        body: Body::SessionSetupReq(SessionSetupReq {
            evcc_id: BoundedBinary::from_slice(&evccid).unwrap(),
        }),
    };
    let mut buf = [0u8; 32];
    let len = encode_message(&message, &mut buf).unwrap();
    let decoded = decode_message(&buf[..len]).unwrap();
    match decoded.body {
        Body::SessionSetupReq(req) => {
            assert_eq!(req.evcc_id.len(), 6);
            assert_eq!(req.evcc_id.as_bytes(), &evccid);
        }
        other => panic!("expected SessionSetupReq, got {other:?}"),
    }
}

/// Scenario 3: `SessionSetupRes` exercising an 18-character string and a
/// skipped optional timestamp.
#[test]
fn scenario_3_session_setup_res_string_and_skipped_optional() {
    let evse_id = "DE*MAB*E123AB1*356";
    assert_eq!(evse_id.chars().count(), 18);
    let message = Message {
        header: header(&[0; 8]),
        body: Body::SessionSetupRes(SessionSetupRes {
            response_code: ResponseCode::Ok,
            evse_id: BoundedString::from_str(evse_id).unwrap(),
            evse_timestamp: None,
        }),
    };
    let mut buf = [0u8; 64];
    let len = encode_message(&message, &mut buf).unwrap();
    let decoded = decode_message(&buf[..len]).unwrap();
    match decoded.body {
        Body::SessionSetupRes(res) => {
            assert_eq!(res.response_code, ResponseCode::Ok);
            assert_eq!(res.evse_id.as_string(), evse_id);
            assert_eq!(res.evse_timestamp, None);
        }
        other => panic!("expected SessionSetupRes, got {other:?}"),
    }
}

/// Scenario 4: `PaymentServiceSelectionReq` with two `SelectedService`s, the
/// second carrying an optional `ParameterSetID`.
#[test]
fn scenario_4_payment_service_selection_repeated_children() {
    let message = Message {
        header: header(&[0; 8]),
        body: Body::PaymentServiceSelectionReq(PaymentServiceSelectionReq {
            selected_payment_option: iso15118_2_exi::model::common::PaymentOption::Contract,
            selected_services: BoundedVec::from_vec(vec![
                SelectedService {
                    service_id: 1,
                    parameter_set_id: None,
                },
                SelectedService {
                    service_id: 2,
                    parameter_set_id: Some(7),
                },
            ])
            .unwrap(),
        }),
    };
    let mut buf = [0u8; 64];
    let len = encode_message(&message, &mut buf).unwrap();
    let decoded = decode_message(&buf[..len]).unwrap();
    match decoded.body {
        Body::PaymentServiceSelectionReq(req) => {
            assert_eq!(req.selected_services.len(), 2);
            assert_eq!(req.selected_services.as_slice()[0].service_id, 1);
            assert_eq!(req.selected_services.as_slice()[0].parameter_set_id, None);
            assert_eq!(req.selected_services.as_slice()[1].service_id, 2);
            assert_eq!(req.selected_services.as_slice()[1].parameter_set_id, Some(7));
        }
        other => panic!("expected PaymentServiceSelectionReq, got {other:?}"),
    }
}

fn scenario_5_message() -> Message {
    Message {
        header: header(&[7; 8]),
        body: Body::PreChargeReq(PreChargeReq {
            dc_ev_status: DcEvStatus {
                ev_ready: true,
                ev_error_code: DcEvErrorCode::NoError,
                ev_ress_soc: 42,
            },
            ev_target_voltage: PhysicalValue::new(0, PhysicalUnit::Volt, 400).unwrap(),
            ev_target_current: PhysicalValue::new(0, PhysicalUnit::Ampere, 2).unwrap(),
        }),
    }
}

/// Scenario 5: `PreChargeReq` exercising nested complex types, signed
/// integers, bias-encoded multipliers, and enums.
#[test]
fn scenario_5_precharge_nested_physical_values() {
    let message = scenario_5_message();
    let mut buf = [0u8; 64];
    let len = encode_message(&message, &mut buf).unwrap();
    let decoded = decode_message(&buf[..len]).unwrap();
    assert_eq!(decoded, message);
    match decoded.body {
        Body::PreChargeReq(req) => {
            assert!(req.dc_ev_status.ev_ready);
            assert_eq!(req.dc_ev_status.ev_error_code, DcEvErrorCode::NoError);
            assert_eq!(req.dc_ev_status.ev_ress_soc, 42);
            assert_eq!(req.ev_target_voltage.value, 400);
            assert_eq!(req.ev_target_current.value, 2);
        }
        other => panic!("expected PreChargeReq, got {other:?}"),
    }
}

/// Scenario 6: encode scenario 5, truncate by one byte, decode must fail
/// with `BufferEndOfData` rather than returning a corrupted record.
#[test]
fn scenario_6_truncated_buffer_fails_cleanly() {
    let message = scenario_5_message();
    let mut buf = [0u8; 64];
    let len = encode_message(&message, &mut buf).unwrap();
    let truncated = &buf[..len - 1];
    assert_eq!(decode_message(truncated), Err(CodecError::BufferEndOfData));
}
