//! L3 — the grammar state machine, generalized into a small declarative
//! interpreter driven by each complex type's particle list (`spec.md` §4.3,
//! §9 "hand-written state machines → declarative tables").
//!
//! Rather than hand-rolling a `switch`-in-`while` per complex type, every
//! complex type's `encode`/`decode` procedure (still one pair per type,
//! satisfying §4.3's "one procedure per complex type") builds a short
//! [`EncodeSlot`]/[`DecodeSlot`] list describing its content model in
//! schema order and hands it to [`run_encode_sequence`]/
//! [`run_decode_sequence`]. Those two functions own every bit of dispatch
//! logic: event-code width computation, the `0`-bit schema-deviation and
//! no-attributes markers, and END-element emission. Repeated (`maxOccurs`)
//! children are handled by the separate [`repeated`] module, since a
//! repeated child's events all share one name and must not be flattened
//! with unrelated siblings the way ordinary optional/choice particles are
//! (see `SPEC_FULL.md` §4).

pub mod repeated;

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, Result};
use crate::primitives::event_code_width;

/// One branch of an [`EncodeSlot`]: a possible child event, known (by the
/// caller) to be present or absent, with the closure that writes its value
/// if chosen.
pub struct EncodeBranch<'a> {
    pub present: bool,
    pub write: Box<dyn FnOnce(&mut BitWriter) -> Result<()> + 'a>,
}

/// One particle position in a complex type's content model, for encoding.
///
/// `skippable = false` means this slot's event(s) must eventually be taken
/// — a required field, or a mandatory choice among `branches`. `skippable =
/// true` means the grammar may pass over this slot entirely (an optional
/// field, or a `minOccurs=0` choice/substitution group).
pub struct EncodeSlot<'a> {
    pub skippable: bool,
    pub branches: Vec<EncodeBranch<'a>>,
}

impl<'a> EncodeSlot<'a> {
    /// Convenience constructor for an ordinary required or optional single
    /// field (the common case: one branch).
    pub fn field(
        skippable: bool,
        present: bool,
        write: impl FnOnce(&mut BitWriter) -> Result<()> + 'a,
    ) -> Self {
        EncodeSlot {
            skippable,
            branches: vec![EncodeBranch {
                present,
                write: Box::new(write),
            }],
        }
    }
}

/// One branch of a [`DecodeSlot`]: the closure that reads and stores this
/// child's value (including flipping its `is_used` flag) when its event
/// index is chosen.
pub struct DecodeBranch<'a> {
    pub read: Box<dyn FnOnce(&mut BitReader) -> Result<()> + 'a>,
}

/// The decode-direction mirror of [`EncodeSlot`]. The structure (skippable
/// flags, branch counts) must match the encode side exactly — it describes
/// the same static grammar, not the data.
pub struct DecodeSlot<'a> {
    pub skippable: bool,
    pub branches: Vec<DecodeBranch<'a>>,
}

impl<'a> DecodeSlot<'a> {
    pub fn field(skippable: bool, read: impl FnOnce(&mut BitReader) -> Result<()> + 'a) -> Self {
        DecodeSlot {
            skippable,
            branches: vec![DecodeBranch {
                read: Box::new(read),
            }],
        }
    }
}

/// Finds the first non-skippable slot at or after `from`, returning its
/// index, or `None` if every remaining slot is skippable.
fn first_required(skippable: &[bool], from: usize) -> Option<usize> {
    skippable[from..]
        .iter()
        .position(|&s| !s)
        .map(|offset| from + offset)
}

/// Writes the `0`-bit "schema deviation" marker preceding every event code
/// (`spec.md` §4.3.2).
fn write_deviation_bit(w: &mut BitWriter) -> Result<()> {
    w.write_bit(false)
}

fn read_deviation_bit(r: &mut BitReader) -> Result<()> {
    let bit = r.read_bit()?;
    if bit {
        // A `1` here would mean a built-in/extension event outside the
        // schema grammar, which this codec never emits and never accepts.
        return Err(CodecError::UnknownEventCode);
    }
    Ok(())
}

/// Writes the `0`-bit "no attributes" marker that follows a START event's
/// code, before the child's value (`spec.md` §4.3.2).
fn write_no_attributes_bit(w: &mut BitWriter) -> Result<()> {
    w.write_bit(false)
}

fn read_no_attributes_bit(r: &mut BitReader) -> Result<()> {
    let bit = r.read_bit()?;
    if bit {
        return Err(CodecError::UnknownEventCode);
    }
    Ok(())
}

/// Runs the encode-direction dispatch loop described in `SPEC_FULL.md` §4
/// over `slots`, the complex type's full particle list in schema order.
pub fn run_encode_sequence(w: &mut BitWriter, slots: Vec<EncodeSlot<'_>>) -> Result<()> {
    let skippable: Vec<bool> = slots.iter().map(|s| s.skippable).collect();
    let mut slots = slots;
    let mut i = 0usize;
    loop {
        if i >= slots.len() {
            // Nothing left to offer: the only admissible event is END.
            write_deviation_bit(w)?;
            w.write_bits(1, 0)?;
            return Ok(());
        }

        let required_at = first_required(&skippable, i);
        let window_end = required_at.map(|j| j + 1).unwrap_or(slots.len());
        let has_required = required_at.is_some();

        let branch_counts: Vec<usize> = slots[i..window_end]
            .iter()
            .map(|s| s.branches.len())
            .collect();
        let n_branch_events: usize = branch_counts.iter().sum();
        let k = n_branch_events + if has_required { 0 } else { 1 };
        let width = event_code_width(k);

        // Find the first present branch in the window, as a flat index.
        let mut chosen: Option<usize> = None;
        let mut flat = 0usize;
        'find: for slot in &slots[i..window_end] {
            for branch in &slot.branches {
                if branch.present {
                    chosen = Some(flat);
                    break 'find;
                }
                flat += 1;
            }
        }

        match chosen {
            Some(flat_idx) => {
                write_deviation_bit(w)?;
                w.write_bits(width, flat_idx as u32)?;
                write_no_attributes_bit(w)?;

                // Locate the owning slot and consume its branch.
                let mut remaining = flat_idx;
                let mut owning_slot = i;
                for (offset, count) in branch_counts.iter().enumerate() {
                    if remaining < *count {
                        owning_slot = i + offset;
                        break;
                    }
                    remaining -= count;
                }
                let branch = slots[owning_slot].branches.remove(remaining);
                (branch.write)(w)?;
                i = owning_slot + 1;
            }
            None => {
                if has_required {
                    return Err(CodecError::UnknownEventForEncoding);
                }
                write_deviation_bit(w)?;
                w.write_bits(width, (k - 1) as u32)?;
                return Ok(());
            }
        }
    }
}

/// Runs the decode-direction mirror of [`run_encode_sequence`]. Structure
/// (`skippable` flags, branch counts) must match what the type's encoder
/// would have built — it is the static grammar shape, independent of data.
pub fn run_decode_sequence(r: &mut BitReader, slots: Vec<DecodeSlot<'_>>) -> Result<()> {
    let skippable: Vec<bool> = slots.iter().map(|s| s.skippable).collect();
    let mut slots = slots;
    let mut i = 0usize;
    loop {
        if i >= slots.len() {
            read_deviation_bit(r)?;
            let idx = r.read_bits(1)?;
            if idx != 0 {
                return Err(CodecError::UnknownEventCode);
            }
            return Ok(());
        }

        let required_at = first_required(&skippable, i);
        let window_end = required_at.map(|j| j + 1).unwrap_or(slots.len());
        let has_required = required_at.is_some();

        let branch_counts: Vec<usize> = slots[i..window_end]
            .iter()
            .map(|s| s.branches.len())
            .collect();
        let n_branch_events: usize = branch_counts.iter().sum();
        let k = n_branch_events + if has_required { 0 } else { 1 };
        let width = event_code_width(k);

        read_deviation_bit(r)?;
        let idx = r.read_bits(width)? as usize;
        if idx >= k {
            return Err(CodecError::UnknownEventCode);
        }

        if idx == n_branch_events {
            // The trailing END alternative (only admissible when the window
            // had no required particle).
            return Ok(());
        }

        read_no_attributes_bit(r)?;

        let mut remaining = idx;
        let mut owning_slot = i;
        for (offset, count) in branch_counts.iter().enumerate() {
            if remaining < *count {
                owning_slot = i + offset;
                break;
            }
            remaining -= count;
        }
        let branch = slots[owning_slot].branches.remove(remaining);
        (branch.read)(r)?;
        i = owning_slot + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{read_n_bit_uint, write_n_bit_uint};

    #[test]
    fn single_required_field_no_end_alternative() {
        let mut buf = [0u8; 4];
        {
            let mut w = BitWriter::new(&mut buf);
            run_encode_sequence(
                &mut w,
                vec![EncodeSlot::field(false, true, |w| {
                    write_n_bit_uint(w, 5, 7)
                })],
            )
            .unwrap();
        }
        let mut r = BitReader::new(&buf);
        let mut seen = 0u32;
        run_decode_sequence(
            &mut r,
            vec![DecodeSlot::field(false, |r| {
                seen = read_n_bit_uint(r, 5)?;
                Ok(())
            })],
        )
        .unwrap();
        assert_eq!(seen, 7);
    }

    #[test]
    fn trailing_optional_skipped_takes_end() {
        let mut buf = [0u8; 4];
        {
            let mut w = BitWriter::new(&mut buf);
            run_encode_sequence(
                &mut w,
                vec![
                    EncodeSlot::field(false, true, |w| write_n_bit_uint(w, 5, 1)),
                    EncodeSlot::field(true, false, |w| write_n_bit_uint(w, 5, 2)),
                ],
            )
            .unwrap();
        }
        let mut r = BitReader::new(&buf);
        let mut first = 0u32;
        let mut second_present = false;
        run_decode_sequence(
            &mut r,
            vec![
                DecodeSlot::field(false, |r| {
                    first = read_n_bit_uint(r, 5)?;
                    Ok(())
                }),
                DecodeSlot::field(true, |r| {
                    second_present = true;
                    let _ = read_n_bit_uint(r, 5)?;
                    Ok(())
                }),
            ],
        )
        .unwrap();
        assert_eq!(first, 1);
        assert!(!second_present);
    }

    #[test]
    fn trailing_optional_present_is_taken() {
        let mut buf = [0u8; 4];
        {
            let mut w = BitWriter::new(&mut buf);
            run_encode_sequence(
                &mut w,
                vec![EncodeSlot::field(true, true, |w| {
                    write_n_bit_uint(w, 5, 9)
                })],
            )
            .unwrap();
        }
        let mut r = BitReader::new(&buf);
        let mut value = 0u32;
        run_decode_sequence(
            &mut r,
            vec![DecodeSlot::field(true, |r| {
                value = read_n_bit_uint(r, 5)?;
                Ok(())
            })],
        )
        .unwrap();
        assert_eq!(value, 9);
    }

    #[test]
    fn missing_required_branch_is_encoding_error() {
        let mut buf = [0u8; 4];
        let mut w = BitWriter::new(&mut buf);
        let err = run_encode_sequence(
            &mut w,
            vec![EncodeSlot::field(false, false, |w| {
                write_n_bit_uint(w, 5, 1)
            })],
        )
        .unwrap_err();
        assert_eq!(err, CodecError::UnknownEventForEncoding);
    }
}
