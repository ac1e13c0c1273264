//! Edit session: one patch, the device it is sent to, and whoever displays it.
//!
//! Every edit is committed to the patch before anything is transmitted. A
//! failed send never rolls the patch back.

use core::fmt;

use crate::jt4000::{control_change_for, serialise, EncodingError, Patch, ParamValue};
use crate::midi::{Channel, ControlChange, Device, HexDump, MidiError};

/// Notified after the patch changes
pub trait PatchListener {
    /// The patch was replaced or changed as a whole
    fn patch_updated(&mut self, _patch: &Patch) {}

    /// A single parameter was edited
    fn control_changed(&mut self, _cc: ControlChange) {}
}

impl PatchListener for () {}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EditorConfig {
    /// Send each edit to the output device as a control change
    pub live_preview: bool,
    /// Send the whole patch when it is renamed
    pub save_on_rename: bool,
}

impl EditorConfig {
    pub const DEFAULT: EditorConfig = EditorConfig {
        live_preview: true,
        save_on_rename: true,
    };
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig::DEFAULT
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditorError {
    Encoding(EncodingError),
    Midi(MidiError),
}

impl From<EncodingError> for EditorError {
    fn from(err: EncodingError) -> Self {
        EditorError::Encoding(err)
    }
}

impl From<MidiError> for EditorError {
    fn from(err: MidiError) -> Self {
        EditorError::Midi(err)
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::Encoding(err) => fmt::Display::fmt(err, f),
            EditorError::Midi(err) => fmt::Display::fmt(err, f),
        }
    }
}

pub struct Editor<D: Device, L: PatchListener = ()> {
    patch: Patch,
    output: Option<D>,
    listener: L,
    config: EditorConfig,
}

impl<D: Device, L: PatchListener> Editor<D, L> {
    /// Starts with an initialised patch and no output device
    pub fn new(listener: L, config: EditorConfig) -> Self {
        Editor {
            patch: Patch::new(),
            output: None,
            listener,
            config,
        }
    }

    pub fn patch(&self) -> &Patch {
        &self.patch
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn config(&self) -> EditorConfig {
        self.config
    }

    pub fn output(&self) -> Option<&D> {
        self.output.as_ref()
    }

    /// Saving needs an output device
    pub fn can_save(&self) -> bool {
        self.output.is_some()
    }

    /// Replace the current output. The previous one is closed and dropped.
    pub fn open_output(&mut self, mut device: D) -> Result<(), MidiError> {
        self.close_output();
        if !device.is_open() {
            device.open().map_err(|err| {
                warn!("output device failed to open: {}", err);
                err
            })?;
        }
        info!("output device open");
        self.output = Some(device);
        Ok(())
    }

    pub fn close_output(&mut self) -> Option<D> {
        let mut device = self.output.take()?;
        if device.is_open() {
            device.close();
        }
        info!("output device closed");
        Some(device)
    }

    pub fn initialise(&mut self) {
        self.patch.initialise();
        self.listener.patch_updated(&self.patch);
    }

    pub fn load(&mut self, patch: Patch) {
        self.patch = patch;
        self.listener.patch_updated(&self.patch);
    }

    /// Range is checked when the patch is sent, not here
    pub fn set_midi_channel(&mut self, channel: u8) {
        self.patch.midi_channel = channel;
        self.listener.patch_updated(&self.patch);
    }

    pub fn set_patch_number(&mut self, number: u8) {
        self.patch.patch_number = number;
        self.listener.patch_updated(&self.patch);
    }

    pub fn rename(&mut self, name: &str) -> Result<(), EditorError> {
        self.patch.set_name(name);
        self.listener.patch_updated(&self.patch);
        if self.config.save_on_rename && self.can_save() {
            self.save()?;
        }
        Ok(())
    }

    /// Commit `value` to the patch and preview it on the output device.
    ///
    /// The returned control change is also handed to the listener. If
    /// transmission fails the edit stays in the patch.
    pub fn edit(&mut self, value: ParamValue) -> Result<ControlChange, EditorError> {
        self.patch.apply(value);
        let cc = control_change_for(value);
        debug!("{:?}: cc {} = {}", value.param(), cc.control_number(), cc.value());
        self.listener.control_changed(cc);

        if self.config.live_preview {
            if let Some(device) = self.output.as_mut() {
                let channel = Channel::try_from(self.patch.midi_channel)
                    .map_err(|_| EncodingError::InvalidChannel(self.patch.midi_channel))?;
                transmit(device, &cc.message(channel))?;
            }
        }
        Ok(cc)
    }

    /// Send the whole patch as a patch dump
    pub fn save(&mut self) -> Result<(), EditorError> {
        let device = match self.output.as_mut() {
            Some(device) => device,
            None => {
                warn!("no output device, patch not sent");
                return Err(MidiError::NoOutputDevice.into());
            }
        };
        let dump = serialise(&self.patch)?;
        info!("Message : {}", HexDump(&dump));
        transmit(device, &dump)?;
        Ok(())
    }
}

fn transmit<D: Device>(device: &mut D, bytes: &[u8]) -> Result<(), MidiError> {
    if !device.is_open() {
        warn!("output device closed, {} bytes dropped", bytes.len());
        return Err(MidiError::DeviceNotOpen);
    }
    device.transmit(bytes).map_err(|err| {
        warn!("transmit failed: {}", err);
        err
    })
}
