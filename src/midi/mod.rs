//! Device-independent MIDI building blocks: 7-bit values, status bytes,
//! control change events and fixed-length SysEx frames.

use core::fmt;

mod u4;
mod u7;
mod status;
mod message;
mod sysex;

pub use message::ControlChange;
pub use status::{is_data_byte, ChannelStatus, SYSEX_END, SYSEX_START};
pub use sysex::{HexDump, SysexFrame, Token};
pub use u4::U4;
pub use u7::U7;

/// MIDI channel, stored as 0-15
pub type Channel = U4;
pub type Control = U7;

/// Accepts one complete, framed MIDI message.
pub trait Transmit {
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), MidiError>;
}

/// An output port that must be opened before it can transmit.
pub trait Device: Transmit {
    fn open(&mut self) -> Result<(), MidiError>;

    fn close(&mut self);

    fn is_open(&self) -> bool;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MidiError {
    InvalidU4,
    InvalidU7,
    SysexOutOfBounds,
    DeviceNotOpen,
    NoOutputDevice,
    /// Transport refused the bytes
    SendRejected,
}

impl fmt::Display for MidiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MidiError::InvalidU4 => f.write_str("value does not fit in 4 bits"),
            MidiError::InvalidU7 => f.write_str("value does not fit in 7 bits"),
            MidiError::SysexOutOfBounds => f.write_str("sysex content exceeds frame length"),
            MidiError::DeviceNotOpen => f.write_str("device is not open"),
            MidiError::NoOutputDevice => f.write_str("no output device selected"),
            MidiError::SendRejected => f.write_str("transport rejected message"),
        }
    }
}

/// Strip higher bits
pub trait Cull<T>: Sized {
    fn cull(_: T) -> Self;
}
