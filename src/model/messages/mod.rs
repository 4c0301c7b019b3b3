//! Per-message-group complex types (`spec.md` §3.1), grouped the way the
//! ISO 15118-2 schema files themselves group them: session bring-up,
//! service discovery/selection, payment/authorization, charge-parameter
//! negotiation, power delivery/metering, certificate management, and the
//! DC-specific exchange. Each file owns the structs for one request/response
//! family plus their `encode`/`decode` procedures.

pub mod certificate;
pub mod charge_parameter;
pub mod dc;
pub mod power;
pub mod payment;
pub mod service;
pub mod session;
