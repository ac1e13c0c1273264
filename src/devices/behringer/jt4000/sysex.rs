//! Patch dump encoding.
//!
//! | offset | content                                   |
//! |--------|-------------------------------------------|
//! | 0      | 0xF0                                      |
//! | 1-5    | `PATCH_DUMP_HEADER`                       |
//! | 6-29   | `PATCH_DUMP_ID`                           |
//! | 30     | MIDI channel                              |
//! | 31     | patch number                              |
//! | 32-124 | parameter area, zero                      |
//! | 125    | 0xF7                                      |

use core::fmt;

use crate::midi::{Cull, MidiError, SysexFrame, Token, U4, U7};
use super::patch::Patch;
use Token::{Seq, Skip, Val};

pub const PATCH_DUMP_LEN: usize = 126;

pub const PATCH_DUMP_HEADER: &[u8] = &[0x43, 0x00, 0x7A, 0x00, 0x76];

pub const PATCH_DUMP_ID: &[u8] = b"LM  0017  \0\0\0\0\0\0\0\0\0\0\0\0\0\0";

pub const MAX_PATCH_NUMBER: u8 = 31;

/// Parameter area following channel and patch number.
// TODO per-parameter layout of bytes 32-124 needs a dump captured from the hardware
const PARAMETER_AREA_LEN: usize = PATCH_DUMP_LEN - 2 - PATCH_DUMP_HEADER.len() - PATCH_DUMP_ID.len() - 2;

pub type PatchDump = [u8; PATCH_DUMP_LEN];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodingError {
    InvalidChannel(u8),
    InvalidPatchNumber(u8),
    Frame(MidiError),
}

impl From<MidiError> for EncodingError {
    fn from(err: MidiError) -> Self {
        EncodingError::Frame(err)
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::InvalidChannel(ch) => write!(f, "MIDI channel {} outside 0-15", ch),
            EncodingError::InvalidPatchNumber(num) => {
                write!(f, "patch number {} outside 0-{}", num, MAX_PATCH_NUMBER)
            }
            EncodingError::Frame(err) => write!(f, "cannot frame patch dump: {}", err),
        }
    }
}

/// Encode `patch` as a complete patch dump message.
pub fn serialise(patch: &Patch) -> Result<PatchDump, EncodingError> {
    let channel = U4::try_from(patch.midi_channel)
        .map_err(|_| EncodingError::InvalidChannel(patch.midi_channel))?;
    if patch.patch_number > MAX_PATCH_NUMBER {
        return Err(EncodingError::InvalidPatchNumber(patch.patch_number));
    }
    let number = U7::cull(patch.patch_number);

    let frame = SysexFrame::<PATCH_DUMP_LEN>::encode(&[
        Seq(PATCH_DUMP_HEADER),
        Seq(PATCH_DUMP_ID),
        Val(U7::from(channel)),
        Val(number),
        Skip(PARAMETER_AREA_LEN),
    ])?;
    Ok(frame.into_bytes())
}
