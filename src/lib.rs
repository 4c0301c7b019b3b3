//! A from-scratch EXI (Efficient XML Interchange) grammar-driven bit codec
//! for the ISO 15118-2 (2013) `V2G_Message` application protocol.
//!
//! The crate is layered bottom-up, matching `SPEC_FULL.md` §2:
//!
//! - [`bitstream`] — L1, a bit-aligned cursor over a caller-owned buffer.
//! - [`primitives`] — L2, the EXI base-type codecs (booleans, unsigned and
//!   signed integers, bounded strings/binaries, enum ordinals).
//! - [`grammar`] — L3, the declarative per-complex-type dispatch engine.
//! - [`model`] — the schema-informed data records and their per-type
//!   `encode`/`decode` procedures.
//! - [`document`] — L4, the two public entry points: [`document::encode_message`]
//!   and [`document::decode_message`].
//!
//! There is no exception mechanism anywhere in this stack (`spec.md` §7):
//! every fallible call returns [`error::CodecError`], and every layer above
//! propagates the first error it sees without touching the bitstream again.

#![deny(unreachable_patterns)]
#![deny(unconditional_recursion)]

pub mod bitstream;
pub mod document;
pub mod error;
pub mod grammar;
pub mod model;
pub mod primitives;

pub use document::{decode_message, encode_message, Message};
pub use error::{CodecError, Result};

/// Re-exports the types most callers need without reaching into `model::*`
/// directly.
pub mod prelude {
    pub use crate::document::{decode_message, encode_message, Message};
    pub use crate::error::{CodecError, Result};
    pub use crate::model::body::Body;
    pub use crate::model::common::MessageHeader;
}
