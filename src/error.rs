//! Error taxonomy for the codec, matching `spec.md` §6.2 / §7 one-for-one.

use thiserror::Error;

/// Status returned by every bitstream, primitive, grammar, and document-level
/// operation in this crate.
///
/// There is no exception mechanism (§7): every fallible call returns this
/// type, and every caller that observes a non-`Ok` status must stop touching
/// the bitstream and propagate the same error verbatim.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The encoder exceeded the output buffer's capacity, or the decoder ran
    /// off the end of the input. Fatal: the in-progress frame must be
    /// discarded.
    #[error("buffer end of data")]
    BufferEndOfData,

    /// The decoder saw EXI header bytes other than `0x80 0x40`.
    #[error("invalid or unsupported EXI header")]
    Header,

    /// A grammar procedure was asked to decode with a `grammar_id` that does
    /// not name any known complex type or root selector.
    #[error("unknown grammar id")]
    UnknownGrammarId,

    /// The decoder read an event-code index that is out of range for the
    /// admissible event set at the current grammar position.
    #[error("unknown event code")]
    UnknownEventCode,

    /// The encoder was asked to emit a message whose required particle (a
    /// mandatory field or choice) has no branch flagged `is_used`.
    #[error("no admissible event could be selected for encoding")]
    UnknownEventForEncoding,

    /// A primitive was asked to read or write a bit count outside the
    /// supported range (1..=32 for `read_bits`/`write_bits`, or a counted
    /// buffer length that exceeds its schema bound).
    #[error("bit count out of range")]
    BitcountOutOfRange,
}

pub type Result<T> = core::result::Result<T, CodecError>;
