//! Patch editing for the Behringer JT-4000 over MIDI.
//!
//! The crate encodes, it does not talk to hardware: transmission goes through
//! the [`midi::Device`] trait, implemented by whatever MIDI backend the host
//! application uses.

#![no_std]

#[macro_use]
extern crate log;

pub mod devices;
pub mod editor;
pub mod midi;

pub use devices::behringer::jt4000;
pub use editor::{Editor, EditorConfig, EditorError, PatchListener};
