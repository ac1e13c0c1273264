//! Closed parameter choices. Each discriminant is the byte the JT-4000
//! expects as control change value for that choice.

use core::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Osc1Wave {
    Off = 0,
    Triangle = 18,
    Square = 36,
    Pwm = 54,
    Saw = 72,
    Supersaw = 90,
    Fm = 108,
    Noise = 126,
}

impl Osc1Wave {
    pub const ALL: [Osc1Wave; 8] = [
        Osc1Wave::Off,
        Osc1Wave::Triangle,
        Osc1Wave::Square,
        Osc1Wave::Pwm,
        Osc1Wave::Saw,
        Osc1Wave::Supersaw,
        Osc1Wave::Fm,
        Osc1Wave::Noise,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Osc1Wave::Off => "Off",
            Osc1Wave::Triangle => "Triangle",
            Osc1Wave::Square => "Square",
            Osc1Wave::Pwm => "PWM",
            Osc1Wave::Saw => "Saw",
            Osc1Wave::Supersaw => "Supersaw",
            Osc1Wave::Fm => "FM",
            Osc1Wave::Noise => "Noise",
        }
    }
}

/// Oscillator 2 has no supersaw or FM
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Osc2Wave {
    Off = 0,
    Triangle = 21,
    Square = 42,
    Pwm = 63,
    Saw = 84,
    Noise = 105,
}

impl Osc2Wave {
    pub const ALL: [Osc2Wave; 6] = [
        Osc2Wave::Off,
        Osc2Wave::Triangle,
        Osc2Wave::Square,
        Osc2Wave::Pwm,
        Osc2Wave::Saw,
        Osc2Wave::Noise,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Osc2Wave::Off => "Off",
            Osc2Wave::Triangle => "Triangle",
            Osc2Wave::Square => "Square",
            Osc2Wave::Pwm => "PWM",
            Osc2Wave::Saw => "Saw",
            Osc2Wave::Noise => "Noise",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LfoWave {
    Triangle = 0,
    Square = 64,
    Saw = 127,
}

impl LfoWave {
    pub const ALL: [LfoWave; 3] = [LfoWave::Triangle, LfoWave::Square, LfoWave::Saw];

    pub fn name(&self) -> &'static str {
        match self {
            LfoWave::Triangle => "Triangle",
            LfoWave::Square => "Square",
            LfoWave::Saw => "Saw",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LfoDestination {
    Vcf = 0,
    Osc = 64,
}

impl LfoDestination {
    pub const ALL: [LfoDestination; 2] = [LfoDestination::Vcf, LfoDestination::Osc];

    pub fn name(&self) -> &'static str {
        match self {
            LfoDestination::Vcf => "VCF",
            LfoDestination::Osc => "OSC",
        }
    }
}

macro_rules! display_name {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        })*
    };
}

display_name!(Osc1Wave, Osc2Wave, LfoWave, LfoDestination);

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use core::convert::TryFrom;
    use std::string::ToString;

    #[test]
    fn should_carry_osc1_codes() {
        let codes: [u8; 8] = Osc1Wave::ALL.map(u8::from);
        assert_eq!(codes, [0, 18, 36, 54, 72, 90, 108, 126]);
    }

    #[test]
    fn should_carry_osc2_codes() {
        let codes: [u8; 6] = Osc2Wave::ALL.map(u8::from);
        assert_eq!(codes, [0, 21, 42, 63, 84, 105]);
    }

    #[test]
    fn should_carry_lfo_codes() {
        assert_eq!(LfoWave::ALL.map(u8::from), [0, 64, 127]);
        assert_eq!(LfoDestination::ALL.map(u8::from), [0, 64]);
    }

    #[test]
    fn should_map_codes_back() {
        for wave in Osc1Wave::ALL {
            assert_eq!(Osc1Wave::try_from(u8::from(wave)).ok(), Some(wave));
        }
        for wave in Osc2Wave::ALL {
            assert_eq!(Osc2Wave::try_from(u8::from(wave)).ok(), Some(wave));
        }
        assert!(Osc1Wave::try_from(19).is_err());
        assert!(Osc2Wave::try_from(18).is_err());
        assert!(LfoDestination::try_from(127).is_err());
    }

    #[test]
    fn should_display_panel_names() {
        assert_eq!(Osc1Wave::Pwm.to_string(), "PWM");
        assert_eq!(Osc1Wave::Fm.to_string(), "FM");
        assert_eq!(Osc2Wave::Noise.to_string(), "Noise");
        assert_eq!(LfoWave::Saw.to_string(), "Saw");
        assert_eq!(LfoDestination::Vcf.to_string(), "VCF");
    }
}
