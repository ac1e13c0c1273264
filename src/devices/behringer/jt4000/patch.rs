use heapless::String;

use super::param::{Param, ParamValue};
use super::wave::{LfoDestination, LfoWave, Osc1Wave, Osc2Wave};

/// Longest name the front panel accepts
pub const PATCH_NAME_LEN: usize = 8;

pub type PatchName = String<PATCH_NAME_LEN>;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Osc1 {
    pub wave: Osc1Wave,
    /// 0-24
    pub coarse_tune: u8,
    /// 0-99
    pub fine_tune: u8,
    /// 0-99
    pub mod_amount: u8,
    pub ring_mod_enabled: bool,
    /// 0-99
    pub ring_mod_amount: u8,
    /// 0-99
    pub portamento_time: u8,
}

impl Default for Osc1 {
    fn default() -> Self {
        Osc1 {
            wave: Osc1Wave::Triangle,
            coarse_tune: 0,
            fine_tune: 0,
            mod_amount: 0,
            ring_mod_enabled: false,
            ring_mod_amount: 0,
            portamento_time: 0,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Osc2 {
    pub wave: Osc2Wave,
    pub coarse_tune: u8,
    pub fine_tune: u8,
    pub mod_amount: u8,
}

impl Default for Osc2 {
    fn default() -> Self {
        Osc2 {
            wave: Osc2Wave::Triangle,
            coarse_tune: 0,
            fine_tune: 0,
            mod_amount: 0,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Lfo1 {
    pub wave: LfoWave,
    pub rate: u8,
    pub amount: u8,
    pub destination: LfoDestination,
}

impl Default for Lfo1 {
    fn default() -> Self {
        Lfo1 {
            wave: LfoWave::Triangle,
            rate: 0,
            amount: 0,
            destination: LfoDestination::Osc,
        }
    }
}

/// LFO 2 has a fixed destination
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Lfo2 {
    pub wave: LfoWave,
    pub rate: u8,
    pub amount: u8,
}

impl Default for Lfo2 {
    fn default() -> Self {
        Lfo2 {
            wave: LfoWave::Triangle,
            rate: 0,
            amount: 0,
        }
    }
}

/// Filter section, all values 0-99
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Vcf {
    pub cutoff: u8,
    pub resonance: u8,
    pub env_amount: u8,
    pub env_attack: u8,
    pub env_decay: u8,
    pub env_sustain: u8,
    pub env_release: u8,
}

impl Default for Vcf {
    fn default() -> Self {
        Vcf {
            cutoff: 99,
            resonance: 0,
            env_amount: 0,
            env_attack: 0,
            env_decay: 0,
            env_sustain: 0,
            env_release: 0,
        }
    }
}

/// Amplifier envelope, all values 0-99
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Vca {
    pub env_attack: u8,
    pub env_decay: u8,
    pub env_sustain: u8,
    pub env_release: u8,
}

impl Default for Vca {
    fn default() -> Self {
        Vca {
            env_attack: 0,
            env_decay: 0,
            env_sustain: 99,
            env_release: 0,
        }
    }
}

/// One JT-4000 voice as edited on the panel.
///
/// Values are stored in panel units (0-24, 0-99) and are expected to be
/// within range already; the patch does not clamp them. Conversion to device
/// bytes happens in [`control_change_for`](super::control_change_for) and
/// [`serialise`](super::serialise).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patch {
    /// 0-15
    pub midi_channel: u8,
    /// 0-31
    pub patch_number: u8,
    name: PatchName,
    pub osc1: Osc1,
    pub osc2: Osc2,
    pub lfo1: Lfo1,
    pub lfo2: Lfo2,
    pub vcf: Vcf,
    pub vca: Vca,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' '
}

impl Default for Patch {
    fn default() -> Self {
        Patch::new()
    }
}

impl Patch {
    /// An initialised patch on channel 0
    pub fn new() -> Self {
        Patch {
            midi_channel: 0,
            patch_number: 0,
            name: PatchName::new(),
            osc1: Osc1::default(),
            osc2: Osc2::default(),
            lfo1: Lfo1::default(),
            lfo2: Lfo2::default(),
            vcf: Vcf::default(),
            vca: Vca::default(),
        }
    }

    /// Reset the voice to its initial sound. The MIDI channel is kept.
    pub fn initialise(&mut self) {
        *self = Patch {
            midi_channel: self.midi_channel,
            ..Patch::new()
        };
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Only ASCII letters, digits and spaces are kept, up to [`PATCH_NAME_LEN`].
    pub fn set_name(&mut self, name: &str) {
        self.name.clear();
        for c in name.chars().filter(|c| is_name_char(*c)) {
            if self.name.push(c).is_err() {
                break;
            }
        }
    }

    pub fn apply(&mut self, value: ParamValue) {
        match value {
            ParamValue::Osc1Wave(v) => self.osc1.wave = v,
            ParamValue::Osc1CoarseTune(v) => self.osc1.coarse_tune = v,
            ParamValue::Osc1FineTune(v) => self.osc1.fine_tune = v,
            ParamValue::Osc1ModAmount(v) => self.osc1.mod_amount = v,
            ParamValue::RingModEnabled(v) => self.osc1.ring_mod_enabled = v,
            ParamValue::RingModAmount(v) => self.osc1.ring_mod_amount = v,
            ParamValue::PortamentoTime(v) => self.osc1.portamento_time = v,
            ParamValue::Osc2Wave(v) => self.osc2.wave = v,
            ParamValue::Osc2CoarseTune(v) => self.osc2.coarse_tune = v,
            ParamValue::Osc2FineTune(v) => self.osc2.fine_tune = v,
            ParamValue::Osc2ModAmount(v) => self.osc2.mod_amount = v,
            ParamValue::Lfo1Wave(v) => self.lfo1.wave = v,
            ParamValue::Lfo1Rate(v) => self.lfo1.rate = v,
            ParamValue::Lfo1Amount(v) => self.lfo1.amount = v,
            ParamValue::Lfo1Destination(v) => self.lfo1.destination = v,
            ParamValue::Lfo2Wave(v) => self.lfo2.wave = v,
            ParamValue::Lfo2Rate(v) => self.lfo2.rate = v,
            ParamValue::Lfo2Amount(v) => self.lfo2.amount = v,
            ParamValue::VcfCutoff(v) => self.vcf.cutoff = v,
            ParamValue::VcfResonance(v) => self.vcf.resonance = v,
            ParamValue::VcfEnvAmount(v) => self.vcf.env_amount = v,
            ParamValue::VcfEnvAttack(v) => self.vcf.env_attack = v,
            ParamValue::VcfEnvDecay(v) => self.vcf.env_decay = v,
            ParamValue::VcfEnvSustain(v) => self.vcf.env_sustain = v,
            ParamValue::VcfEnvRelease(v) => self.vcf.env_release = v,
            ParamValue::VcaEnvAttack(v) => self.vca.env_attack = v,
            ParamValue::VcaEnvDecay(v) => self.vca.env_decay = v,
            ParamValue::VcaEnvSustain(v) => self.vca.env_sustain = v,
            ParamValue::VcaEnvRelease(v) => self.vca.env_release = v,
        }
    }

    pub fn get(&self, param: Param) -> ParamValue {
        match param {
            Param::Osc1Wave => ParamValue::Osc1Wave(self.osc1.wave),
            Param::Osc1CoarseTune => ParamValue::Osc1CoarseTune(self.osc1.coarse_tune),
            Param::Osc1FineTune => ParamValue::Osc1FineTune(self.osc1.fine_tune),
            Param::Osc1ModAmount => ParamValue::Osc1ModAmount(self.osc1.mod_amount),
            Param::RingModEnabled => ParamValue::RingModEnabled(self.osc1.ring_mod_enabled),
            Param::RingModAmount => ParamValue::RingModAmount(self.osc1.ring_mod_amount),
            Param::PortamentoTime => ParamValue::PortamentoTime(self.osc1.portamento_time),
            Param::Osc2Wave => ParamValue::Osc2Wave(self.osc2.wave),
            Param::Osc2CoarseTune => ParamValue::Osc2CoarseTune(self.osc2.coarse_tune),
            Param::Osc2FineTune => ParamValue::Osc2FineTune(self.osc2.fine_tune),
            Param::Osc2ModAmount => ParamValue::Osc2ModAmount(self.osc2.mod_amount),
            Param::Lfo1Wave => ParamValue::Lfo1Wave(self.lfo1.wave),
            Param::Lfo1Rate => ParamValue::Lfo1Rate(self.lfo1.rate),
            Param::Lfo1Amount => ParamValue::Lfo1Amount(self.lfo1.amount),
            Param::Lfo1Destination => ParamValue::Lfo1Destination(self.lfo1.destination),
            Param::Lfo2Wave => ParamValue::Lfo2Wave(self.lfo2.wave),
            Param::Lfo2Rate => ParamValue::Lfo2Rate(self.lfo2.rate),
            Param::Lfo2Amount => ParamValue::Lfo2Amount(self.lfo2.amount),
            Param::VcfCutoff => ParamValue::VcfCutoff(self.vcf.cutoff),
            Param::VcfResonance => ParamValue::VcfResonance(self.vcf.resonance),
            Param::VcfEnvAmount => ParamValue::VcfEnvAmount(self.vcf.env_amount),
            Param::VcfEnvAttack => ParamValue::VcfEnvAttack(self.vcf.env_attack),
            Param::VcfEnvDecay => ParamValue::VcfEnvDecay(self.vcf.env_decay),
            Param::VcfEnvSustain => ParamValue::VcfEnvSustain(self.vcf.env_sustain),
            Param::VcfEnvRelease => ParamValue::VcfEnvRelease(self.vcf.env_release),
            Param::VcaEnvAttack => ParamValue::VcaEnvAttack(self.vca.env_attack),
            Param::VcaEnvDecay => ParamValue::VcaEnvDecay(self.vca.env_decay),
            Param::VcaEnvSustain => ParamValue::VcaEnvSustain(self.vca.env_sustain),
            Param::VcaEnvRelease => ParamValue::VcaEnvRelease(self.vca.env_release),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_initialise_to_documented_defaults() {
        let mut patch = Patch::new();
        patch.midi_channel = 7;
        patch.patch_number = 12;
        patch.set_name("Bass");
        patch.apply(ParamValue::Osc1Wave(Osc1Wave::Fm));
        patch.apply(ParamValue::VcfCutoff(10));
        patch.apply(ParamValue::Osc2ModAmount(40));
        patch.apply(ParamValue::RingModEnabled(true));

        patch.initialise();

        assert_eq!(patch.midi_channel, 7);
        assert_eq!(patch.patch_number, 0);
        assert_eq!(patch.name(), "");
        assert_eq!(patch.osc1, Osc1 {
            wave: Osc1Wave::Triangle,
            coarse_tune: 0,
            fine_tune: 0,
            mod_amount: 0,
            ring_mod_enabled: false,
            ring_mod_amount: 0,
            portamento_time: 0,
        });
        assert_eq!(patch.osc2, Osc2 { wave: Osc2Wave::Triangle, coarse_tune: 0, fine_tune: 0, mod_amount: 0 });
        assert_eq!(patch.lfo1, Lfo1 { wave: LfoWave::Triangle, rate: 0, amount: 0, destination: LfoDestination::Osc });
        assert_eq!(patch.lfo2, Lfo2 { wave: LfoWave::Triangle, rate: 0, amount: 0 });
        assert_eq!(patch.vcf, Vcf {
            cutoff: 99,
            resonance: 0,
            env_amount: 0,
            env_attack: 0,
            env_decay: 0,
            env_sustain: 0,
            env_release: 0,
        });
        assert_eq!(patch.vca, Vca { env_attack: 0, env_decay: 0, env_sustain: 99, env_release: 0 });
    }

    #[test]
    fn should_match_new_after_initialise() {
        let mut patch = Patch::new();
        patch.apply(ParamValue::Lfo2Rate(30));
        patch.initialise();
        assert_eq!(patch, Patch::new());
        assert_eq!(Patch::default(), Patch::new());
    }

    #[test]
    fn should_read_back_applied_values() {
        let mut patch = Patch::new();
        let edits = [
            ParamValue::Osc1Wave(Osc1Wave::Supersaw),
            ParamValue::Osc1CoarseTune(24),
            ParamValue::RingModEnabled(true),
            ParamValue::Osc2Wave(Osc2Wave::Pwm),
            ParamValue::Lfo1Destination(LfoDestination::Vcf),
            ParamValue::Lfo2Wave(LfoWave::Saw),
            ParamValue::VcfEnvRelease(50),
            ParamValue::VcaEnvSustain(12),
        ];
        for edit in edits {
            patch.apply(edit);
            assert_eq!(patch.get(edit.param()), edit);
        }
        assert_eq!(patch.osc1.wave, Osc1Wave::Supersaw);
        assert_eq!(patch.vca.env_sustain, 12);
    }

    #[test]
    fn should_touch_only_the_edited_field() {
        let mut patch = Patch::new();
        patch.apply(ParamValue::VcaEnvAttack(42));
        for param in Param::ALL {
            if param != Param::VcaEnvAttack {
                assert_eq!(patch.get(param), Patch::new().get(param));
            }
        }
    }

    #[test]
    fn should_truncate_long_names() {
        let mut patch = Patch::new();
        patch.set_name("Warm Pad");
        assert_eq!(patch.name(), "Warm Pad");

        patch.set_name("A name far too long for the device");
        assert_eq!(patch.name(), "A name f");
        assert_eq!(patch.name().len(), PATCH_NAME_LEN);

        patch.set_name("123456789");
        assert_eq!(patch.name(), "12345678");
    }

    #[test]
    fn should_drop_characters_the_panel_refuses() {
        let mut patch = Patch::new();
        patch.set_name("Bräss-1!");
        assert_eq!(patch.name(), "Brss1");

        patch.set_name("é-é-é");
        assert_eq!(patch.name(), "");

        patch.set_name("Pad_2 #b ok now");
        assert_eq!(patch.name(), "Pad2 b o");
    }
}
