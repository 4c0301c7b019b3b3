//! `CertificateUpdateReq`/`Res` and `CertificateInstallationReq`/`Res`
//! (`spec.md` §3.1). Certificate/key material is modelled as opaque bounded
//! DER/PKCS8 blobs, same simplification as [`crate::model::common::Signature`].

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::grammar::repeated::{decode_repeated, encode_repeated};
use crate::grammar::{run_decode_sequence, run_encode_sequence, DecodeSlot, EncodeSlot};
use crate::model::bounded::{BoundedBinary, BoundedString, BoundedVec};
use crate::model::common::{EvseProcessing, ResponseCode};
use crate::primitives::{read_bounded_binary, read_bounded_string, write_bounded_binary, write_bounded_string};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateUpdateReq {
    pub contract_signature_cert_chain: BoundedBinary<800>,
    pub emaid: BoundedString<16>,
    pub root_cert_ids: BoundedVec<BoundedBinary<20>, 5>,
}

impl CertificateUpdateReq {
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
                EncodeSlot::field(false, true, |w| {
                    encode_repeated(
                        w,
                        self.root_cert_ids.as_slice(),
                        1,
                        5,
                        |w, id: &BoundedBinary<20>| write_bounded_binary(w, id.as_bytes(), 20),
                    )
                }),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut contract_signature_cert_chain = None;
        let mut emaid = None;
        let mut root_cert_ids = None;
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
                DecodeSlot::field(false, |r| {
                    let items = decode_repeated(r, 1, 5, |r| {
                        let bytes = read_bounded_binary(r, 20)?;
                        BoundedBinary::from_slice(&bytes)
                    })?;
                    root_cert_ids = Some(BoundedVec::from_vec(items)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            contract_signature_cert_chain: contract_signature_cert_chain
                .ok_or(CodecError::UnknownEventForEncoding)?,
            emaid: emaid.ok_or(CodecError::UnknownEventForEncoding)?,
            root_cert_ids: root_cert_ids.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateUpdateRes {
    pub response_code: ResponseCode,
    pub evse_processing: EvseProcessing,
    pub contract_signature_cert_chain: BoundedBinary<800>,
    pub contract_signature_encrypted_private_key: BoundedBinary<256>,
    pub dh_public_key: BoundedBinary<256>,
    pub emaid: BoundedString<16>,
}

impl CertificateUpdateRes {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| self.response_code.encode(w)),
                EncodeSlot::field(false, true, |w| self.evse_processing.encode(w)),
                EncodeSlot::field(false, true, |w| {
                    write_bounded_binary(w, self.contract_signature_cert_chain.as_bytes(), 800)
                }),
                EncodeSlot::field(false, true, |w| {
                    write_bounded_binary(
                        w,
                        self.contract_signature_encrypted_private_key.as_bytes(),
                        256,
                    )
                }),
                EncodeSlot::field(false, true, |w| {
                    write_bounded_binary(w, self.dh_public_key.as_bytes(), 256)
                }),
                EncodeSlot::field(false, true, |w| {
                    write_bounded_string(w, self.emaid.as_chars(), 16)
                }),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut response_code = None;
        let mut evse_processing = None;
        let mut contract_signature_cert_chain = None;
        let mut contract_signature_encrypted_private_key = None;
        let mut dh_public_key = None;
        let mut emaid = None;
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
                    let bytes = read_bounded_binary(r, 800)?;
                    contract_signature_cert_chain = Some(BoundedBinary::from_slice(&bytes)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    let bytes = read_bounded_binary(r, 256)?;
                    contract_signature_encrypted_private_key = Some(BoundedBinary::from_slice(&bytes)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    let bytes = read_bounded_binary(r, 256)?;
                    dh_public_key = Some(BoundedBinary::from_slice(&bytes)?);
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
            response_code: response_code.ok_or(CodecError::UnknownEventForEncoding)?,
            evse_processing: evse_processing.ok_or(CodecError::UnknownEventForEncoding)?,
            contract_signature_cert_chain: contract_signature_cert_chain
                .ok_or(CodecError::UnknownEventForEncoding)?,
            contract_signature_encrypted_private_key: contract_signature_encrypted_private_key
                .ok_or(CodecError::UnknownEventForEncoding)?,
            dh_public_key: dh_public_key.ok_or(CodecError::UnknownEventForEncoding)?,
            emaid: emaid.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateInstallationReq {
    pub oem_provisioning_cert: BoundedBinary<800>,
    pub root_cert_ids: BoundedVec<BoundedBinary<20>, 5>,
}

impl CertificateInstallationReq {
    pub fn encode(&self, w: &mut BitWriter) -> Result<()> {
        run_encode_sequence(
            w,
            vec![
                EncodeSlot::field(false, true, |w| {
                    write_bounded_binary(w, self.oem_provisioning_cert.as_bytes(), 800)
                }),
                EncodeSlot::field(false, true, |w| {
                    encode_repeated(
                        w,
                        self.root_cert_ids.as_slice(),
                        1,
                        5,
                        |w, id: &BoundedBinary<20>| write_bounded_binary(w, id.as_bytes(), 20),
                    )
                }),
            ],
        )
    }

    pub fn decode(r: &mut BitReader) -> Result<Self> {
        let mut oem_provisioning_cert = None;
        let mut root_cert_ids = None;
        run_decode_sequence(
            r,
            vec![
                DecodeSlot::field(false, |r| {
                    let bytes = read_bounded_binary(r, 800)?;
                    oem_provisioning_cert = Some(BoundedBinary::from_slice(&bytes)?);
                    Ok(())
                }),
                DecodeSlot::field(false, |r| {
                    let items = decode_repeated(r, 1, 5, |r| {
                        let bytes = read_bounded_binary(r, 20)?;
                        BoundedBinary::from_slice(&bytes)
                    })?;
                    root_cert_ids = Some(BoundedVec::from_vec(items)?);
                    Ok(())
                }),
            ],
        )?;
        Ok(Self {
            oem_provisioning_cert: oem_provisioning_cert.ok_or(CodecError::UnknownEventForEncoding)?,
            root_cert_ids: root_cert_ids.ok_or(CodecError::UnknownEventForEncoding)?,
        })
    }
}

/// Identical wire shape to [`CertificateUpdateRes`]; kept as a distinct
/// type because the two messages are semantically unrelated responses
/// (plug-and-charge bootstrap vs. contract-certificate refresh).
pub type CertificateInstallationRes = CertificateUpdateRes;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificate_installation_req_roundtrip() {
        let req = CertificateInstallationReq {
            oem_provisioning_cert: BoundedBinary::from_slice(&[7u8; 128]).unwrap(),
            root_cert_ids: BoundedVec::from_vec(vec![BoundedBinary::from_slice(&[1, 2, 3]).unwrap()])
                .unwrap(),
        };
        let mut buf = [0u8; 256];
        {
            let mut w = BitWriter::new(&mut buf);
            req.encode(&mut w).unwrap();
        }
        let mut r = BitReader::new(&buf);
        assert_eq!(CertificateInstallationReq::decode(&mut r).unwrap(), req);
    }
}
