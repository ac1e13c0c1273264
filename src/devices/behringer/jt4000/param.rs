//! Per-parameter control change assignments for live editing.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::midi::{Control, ControlChange, Cull, U7};
use super::scale::{scale_coarse, scale_fine};
use super::wave::{LfoDestination, LfoWave, Osc1Wave, Osc2Wave};

/// Control change value sent when the ring modulator is switched on
pub const SWITCH_ON: u8 = 65;
pub const SWITCH_OFF: u8 = 0;

/// Every parameter editable from the panel.
/// Discriminant is the control change number the JT-4000 listens to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Param {
    Osc1Wave = 24,
    Osc1CoarseTune = 115,
    Osc1FineTune = 111,
    Osc1ModAmount = 113,
    RingModEnabled = 96,
    RingModAmount = 95,
    PortamentoTime = 5,

    Osc2Wave = 25,
    Osc2CoarseTune = 116,
    Osc2FineTune = 112,
    Osc2ModAmount = 114,

    Lfo1Wave = 54,
    Lfo1Rate = 72,
    Lfo1Amount = 70,
    Lfo1Destination = 56,

    Lfo2Wave = 55,
    Lfo2Rate = 73,
    Lfo2Amount = 28,

    VcfCutoff = 74,
    VcfResonance = 71,
    VcfEnvAmount = 47,
    VcfEnvAttack = 85,
    VcfEnvDecay = 86,
    VcfEnvSustain = 87,
    VcfEnvRelease = 88,

    VcaEnvAttack = 81,
    VcaEnvDecay = 82,
    VcaEnvSustain = 83,
    VcaEnvRelease = 84,
}

/// How a panel value turns into a control change value
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Kind {
    /// One of a closed set, sent as its device code
    Choice,
    /// On/off
    Switch,
    /// 0-24 through the coarse table
    Coarse,
    /// 0-99 through the fine table
    Fine,
}

impl Param {
    pub const ALL: [Param; 29] = [
        Param::Osc1Wave,
        Param::Osc1CoarseTune,
        Param::Osc1FineTune,
        Param::Osc1ModAmount,
        Param::RingModEnabled,
        Param::RingModAmount,
        Param::PortamentoTime,
        Param::Osc2Wave,
        Param::Osc2CoarseTune,
        Param::Osc2FineTune,
        Param::Osc2ModAmount,
        Param::Lfo1Wave,
        Param::Lfo1Rate,
        Param::Lfo1Amount,
        Param::Lfo1Destination,
        Param::Lfo2Wave,
        Param::Lfo2Rate,
        Param::Lfo2Amount,
        Param::VcfCutoff,
        Param::VcfResonance,
        Param::VcfEnvAmount,
        Param::VcfEnvAttack,
        Param::VcfEnvDecay,
        Param::VcfEnvSustain,
        Param::VcfEnvRelease,
        Param::VcaEnvAttack,
        Param::VcaEnvDecay,
        Param::VcaEnvSustain,
        Param::VcaEnvRelease,
    ];

    pub fn control(&self) -> Control {
        U7::cull(u8::from(*self))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Param::Osc1Wave
            | Param::Osc2Wave
            | Param::Lfo1Wave
            | Param::Lfo1Destination
            | Param::Lfo2Wave => Kind::Choice,
            Param::RingModEnabled => Kind::Switch,
            Param::Osc1CoarseTune | Param::Osc2CoarseTune => Kind::Coarse,
            _ => Kind::Fine,
        }
    }

    /// Upper bound of the panel range for continuous parameters
    pub fn max_value(&self) -> Option<u8> {
        match self.kind() {
            Kind::Coarse => Some(24),
            Kind::Fine => Some(99),
            Kind::Choice | Kind::Switch => None,
        }
    }
}

/// A parameter together with its new panel value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamValue {
    Osc1Wave(Osc1Wave),
    Osc1CoarseTune(u8),
    Osc1FineTune(u8),
    Osc1ModAmount(u8),
    RingModEnabled(bool),
    RingModAmount(u8),
    PortamentoTime(u8),

    Osc2Wave(Osc2Wave),
    Osc2CoarseTune(u8),
    Osc2FineTune(u8),
    Osc2ModAmount(u8),

    Lfo1Wave(LfoWave),
    Lfo1Rate(u8),
    Lfo1Amount(u8),
    Lfo1Destination(LfoDestination),

    Lfo2Wave(LfoWave),
    Lfo2Rate(u8),
    Lfo2Amount(u8),

    VcfCutoff(u8),
    VcfResonance(u8),
    VcfEnvAmount(u8),
    VcfEnvAttack(u8),
    VcfEnvDecay(u8),
    VcfEnvSustain(u8),
    VcfEnvRelease(u8),

    VcaEnvAttack(u8),
    VcaEnvDecay(u8),
    VcaEnvSustain(u8),
    VcaEnvRelease(u8),
}

impl ParamValue {
    pub fn param(&self) -> Param {
        match self {
            ParamValue::Osc1Wave(_) => Param::Osc1Wave,
            ParamValue::Osc1CoarseTune(_) => Param::Osc1CoarseTune,
            ParamValue::Osc1FineTune(_) => Param::Osc1FineTune,
            ParamValue::Osc1ModAmount(_) => Param::Osc1ModAmount,
            ParamValue::RingModEnabled(_) => Param::RingModEnabled,
            ParamValue::RingModAmount(_) => Param::RingModAmount,
            ParamValue::PortamentoTime(_) => Param::PortamentoTime,
            ParamValue::Osc2Wave(_) => Param::Osc2Wave,
            ParamValue::Osc2CoarseTune(_) => Param::Osc2CoarseTune,
            ParamValue::Osc2FineTune(_) => Param::Osc2FineTune,
            ParamValue::Osc2ModAmount(_) => Param::Osc2ModAmount,
            ParamValue::Lfo1Wave(_) => Param::Lfo1Wave,
            ParamValue::Lfo1Rate(_) => Param::Lfo1Rate,
            ParamValue::Lfo1Amount(_) => Param::Lfo1Amount,
            ParamValue::Lfo1Destination(_) => Param::Lfo1Destination,
            ParamValue::Lfo2Wave(_) => Param::Lfo2Wave,
            ParamValue::Lfo2Rate(_) => Param::Lfo2Rate,
            ParamValue::Lfo2Amount(_) => Param::Lfo2Amount,
            ParamValue::VcfCutoff(_) => Param::VcfCutoff,
            ParamValue::VcfResonance(_) => Param::VcfResonance,
            ParamValue::VcfEnvAmount(_) => Param::VcfEnvAmount,
            ParamValue::VcfEnvAttack(_) => Param::VcfEnvAttack,
            ParamValue::VcfEnvDecay(_) => Param::VcfEnvDecay,
            ParamValue::VcfEnvSustain(_) => Param::VcfEnvSustain,
            ParamValue::VcfEnvRelease(_) => Param::VcfEnvRelease,
            ParamValue::VcaEnvAttack(_) => Param::VcaEnvAttack,
            ParamValue::VcaEnvDecay(_) => Param::VcaEnvDecay,
            ParamValue::VcaEnvSustain(_) => Param::VcaEnvSustain,
            ParamValue::VcaEnvRelease(_) => Param::VcaEnvRelease,
        }
    }

    /// The byte the device expects for this value
    pub fn device_value(&self) -> U7 {
        match *self {
            ParamValue::Osc1Wave(wave) => U7::cull(wave.into()),
            ParamValue::Osc2Wave(wave) => U7::cull(wave.into()),
            ParamValue::Lfo1Wave(wave) | ParamValue::Lfo2Wave(wave) => U7::cull(wave.into()),
            ParamValue::Lfo1Destination(dest) => U7::cull(dest.into()),
            ParamValue::RingModEnabled(on) => U7::cull(if on { SWITCH_ON } else { SWITCH_OFF }),
            ParamValue::Osc1CoarseTune(v) | ParamValue::Osc2CoarseTune(v) => scale_coarse(i32::from(v)),
            ParamValue::Osc1FineTune(v)
            | ParamValue::Osc1ModAmount(v)
            | ParamValue::RingModAmount(v)
            | ParamValue::PortamentoTime(v)
            | ParamValue::Osc2FineTune(v)
            | ParamValue::Osc2ModAmount(v)
            | ParamValue::Lfo1Rate(v)
            | ParamValue::Lfo1Amount(v)
            | ParamValue::Lfo2Rate(v)
            | ParamValue::Lfo2Amount(v)
            | ParamValue::VcfCutoff(v)
            | ParamValue::VcfResonance(v)
            | ParamValue::VcfEnvAmount(v)
            | ParamValue::VcfEnvAttack(v)
            | ParamValue::VcfEnvDecay(v)
            | ParamValue::VcfEnvSustain(v)
            | ParamValue::VcfEnvRelease(v)
            | ParamValue::VcaEnvAttack(v)
            | ParamValue::VcaEnvDecay(v)
            | ParamValue::VcaEnvSustain(v)
            | ParamValue::VcaEnvRelease(v) => scale_fine(i32::from(v)),
        }
    }
}

/// Control change that previews `value` on the device
pub fn control_change_for(value: ParamValue) -> ControlChange {
    ControlChange::new(value.param().control(), value.device_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::TryFrom;

    fn cc(value: ParamValue) -> (u8, u8) {
        let cc = control_change_for(value);
        (cc.control_number(), cc.value())
    }

    #[test]
    fn should_assign_control_numbers() {
        let numbers: [u8; 29] = Param::ALL.map(u8::from);
        assert_eq!(numbers, [
            24, 115, 111, 113, 96, 95, 5,
            25, 116, 112, 114,
            54, 72, 70, 56,
            55, 73, 28,
            74, 71, 47, 85, 86, 87, 88,
            81, 82, 83, 84,
        ]);
    }

    #[test]
    fn should_use_distinct_control_numbers() {
        for (i, a) in Param::ALL.iter().enumerate() {
            for b in &Param::ALL[i + 1..] {
                assert_ne!(u8::from(*a), u8::from(*b));
            }
            assert_eq!(Param::try_from(u8::from(*a)).ok(), Some(*a));
        }
        assert!(Param::try_from(0).is_err());
    }

    #[test]
    fn should_scale_coarse_tune() {
        assert_eq!(cc(ParamValue::Osc1CoarseTune(12)), (115, 0x40));
        assert_eq!(cc(ParamValue::Osc2CoarseTune(24)), (116, 0x7F));
    }

    #[test]
    fn should_scale_fine_values() {
        assert_eq!(cc(ParamValue::VcfEnvRelease(50)), (88, 0x41));
        assert_eq!(cc(ParamValue::VcfCutoff(99)), (74, 0x7F));
        assert_eq!(cc(ParamValue::VcaEnvRelease(17)), (84, 0x16));
        assert_eq!(cc(ParamValue::PortamentoTime(1)), (5, 0x02));
        assert_eq!(cc(ParamValue::Lfo2Amount(0)), (28, 0x00));
    }

    #[test]
    fn should_send_choice_codes() {
        assert_eq!(cc(ParamValue::Osc1Wave(Osc1Wave::Triangle)), (24, 18));
        assert_eq!(cc(ParamValue::Osc1Wave(Osc1Wave::Noise)), (24, 126));
        assert_eq!(cc(ParamValue::Osc2Wave(Osc2Wave::Noise)), (25, 105));
        assert_eq!(cc(ParamValue::Lfo1Wave(LfoWave::Saw)), (54, 127));
        assert_eq!(cc(ParamValue::Lfo2Wave(LfoWave::Square)), (55, 64));
        assert_eq!(cc(ParamValue::Lfo1Destination(LfoDestination::Osc)), (56, 64));
    }

    #[test]
    fn should_send_switch_values() {
        assert_eq!(cc(ParamValue::RingModEnabled(true)), (96, 65));
        assert_eq!(cc(ParamValue::RingModEnabled(false)), (96, 0));
    }

    #[test]
    fn should_default_out_of_range_values_to_zero() {
        assert_eq!(cc(ParamValue::Osc1CoarseTune(25)), (115, 0));
        assert_eq!(cc(ParamValue::VcfResonance(100)), (71, 0));
    }

    #[test]
    fn should_be_stable_across_calls() {
        for wave in Osc1Wave::ALL {
            assert_eq!(cc(ParamValue::Osc1Wave(wave)), cc(ParamValue::Osc1Wave(wave)));
        }
    }

    #[test]
    fn should_classify_parameters() {
        assert_eq!(Param::Osc1Wave.kind(), Kind::Choice);
        assert_eq!(Param::Lfo1Destination.kind(), Kind::Choice);
        assert_eq!(Param::RingModEnabled.kind(), Kind::Switch);
        assert_eq!(Param::Osc2CoarseTune.kind(), Kind::Coarse);
        assert_eq!(Param::VcaEnvSustain.kind(), Kind::Fine);
        assert_eq!(Param::Osc1CoarseTune.max_value(), Some(24));
        assert_eq!(Param::PortamentoTime.max_value(), Some(99));
        assert_eq!(Param::Lfo2Wave.max_value(), None);
    }
}
