//! The schema-informed data model (`spec.md` §3). Every public type here
//! corresponds to one XSD complex type or enumeration from the ISO 15118-2
//! `V2G_CI_MsgDataTypes`/`V2G_CI_MsgBody` schemas, realized as a plain Rust
//! struct/enum per `SPEC_FULL.md` §3's data-model-realization decisions:
//! fixed-size arrays instead of `Vec`/`String`, explicit `is_used`-style
//! `Option<T>` fields instead of sentinel values, and Rust enums for
//! `xs:choice` groups.

pub mod body;
pub mod bounded;
pub mod common;
pub mod messages;
