use crate::midi::{Channel, ChannelStatus, Control, U7};

/// A controller update not yet bound to a channel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlChange {
    pub control: Control,
    pub value: U7,
}

impl ControlChange {
    pub fn new(control: Control, value: U7) -> Self {
        ControlChange { control, value }
    }

    pub fn control_number(&self) -> u8 {
        self.control.into()
    }

    pub fn value(&self) -> u8 {
        self.value.into()
    }

    /// Wire form: status | channel, controller, value
    pub fn message(&self, channel: Channel) -> [u8; 3] {
        [
            ChannelStatus::ControlChange.with_channel(channel),
            self.control.into(),
            self.value.into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::TryFrom;

    #[test]
    fn should_frame_control_change() {
        let cc = ControlChange::new(U7::try_from(74).unwrap(), U7::try_from(0x41).unwrap());
        assert_eq!(cc.message(Channel::try_from(0).unwrap()), [0xB0, 74, 0x41]);
        assert_eq!(cc.message(Channel::try_from(15).unwrap()), [0xBF, 74, 0x41]);
        assert_eq!(cc.control_number(), 74);
        assert_eq!(cc.value(), 0x41);
    }
}
