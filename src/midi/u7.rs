use crate::midi::{Cull, MidiError, U4};
use core::convert::TryFrom;

/// A primitive value that can be from 0-0x7F
#[derive(Copy, Clone, Debug, Default, Eq, PartialOrd, PartialEq, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct U7(pub(crate) u8);

impl TryFrom<u8> for U7 {
    type Error = MidiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > U7::MAX.0 {
            Err(MidiError::InvalidU7)
        } else {
            Ok(U7(value))
        }
    }
}

impl From<U7> for u8 {
    fn from(value: U7) -> u8 {
        value.0
    }
}

impl From<U4> for U7 {
    fn from(value: U4) -> U7 {
        U7(value.into())
    }
}

impl Cull<u8> for U7 {
    fn cull(value: u8) -> U7 {
        const MASK: u8 = 0b0111_1111;
        U7(MASK & value)
    }
}

impl U7 {
    pub const MAX: U7 = U7(0x7F);
    pub const MIN: U7 = U7(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_data_bytes() {
        assert_eq!(U7::try_from(0x00), Ok(U7::MIN));
        assert_eq!(U7::try_from(0x7F), Ok(U7::MAX));
        assert_eq!(u8::from(U7::try_from(0x41).unwrap()), 0x41);
    }

    #[test]
    fn should_reject_status_bytes() {
        assert_eq!(U7::try_from(0x80), Err(MidiError::InvalidU7));
        assert_eq!(U7::try_from(0xF7), Err(MidiError::InvalidU7));
    }

    #[test]
    fn should_cull_high_bit() {
        assert_eq!(U7::cull(0xC1), U7(0x41));
        assert_eq!(U7::cull(0x12), U7(0x12));
    }
}
