use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Sysex sequence initiator
pub const SYSEX_START: u8 = 0xF0;
/// Sysex sequence terminator, _not_ a status byte
pub const SYSEX_END: u8 = 0xF7;

#[derive(Copy, Clone, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChannelStatus {
    // lower bits of discriminants ignored (channel)
    NoteOff = 0x80,
    NoteOn = 0x90,
    NotePressure = 0xA0,
    ControlChange = 0xB0,
    ProgramChange = 0xC0,
    ChannelPressure = 0xD0,
    PitchBend = 0xE0,
}

impl ChannelStatus {
    pub fn with_channel(self, channel: crate::midi::Channel) -> u8 {
        u8::from(self) | u8::from(channel)
    }
}

/// Anything without the high bit set can travel inside a message body
pub fn is_data_byte(byte: u8) -> bool {
    byte & 0x80 == 0
}
