//! Behringer JT-4000 patch editing.
//!
//! A [`Patch`] holds panel values. Single edits are previewed on the device
//! through [`control_change_for`], whole patches are sent with [`serialise`].

mod param;
mod patch;
mod scale;
mod sysex;
mod wave;

pub use param::{control_change_for, Kind, Param, ParamValue, SWITCH_OFF, SWITCH_ON};
pub use patch::{Lfo1, Lfo2, Osc1, Osc2, Patch, PatchName, Vca, Vcf, PATCH_NAME_LEN};
pub use scale::{scale_coarse, scale_fine, SCALE_24, SCALE_99};
pub use sysex::{
    serialise, EncodingError, PatchDump, MAX_PATCH_NUMBER, PATCH_DUMP_HEADER, PATCH_DUMP_ID,
    PATCH_DUMP_LEN,
};
pub use wave::{LfoDestination, LfoWave, Osc1Wave, Osc2Wave};
