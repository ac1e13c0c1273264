//! The JT-4000 packs its parameter resolution unevenly into the 0-127 control
//! change range. These tables map the sequential values shown on the panel to
//! the bytes the device expects. A value without a table entry maps to 0.

use crate::midi::U7;

/// Coarse tune, 0-24 semitones
pub const SCALE_24: [u8; 25] = [
    0x00, 0x06, 0x0B, 0x10, 0x16, 0x1B, 0x20, 0x26, 0x2B, 0x30,
    0x36, 0x3B, 0x40, 0x46, 0x4B, 0x50, 0x56, 0x5B, 0x60, 0x66,
    0x6B, 0x70, 0x76, 0x7B, 0x7F,
];

/// Every other continuous parameter, 0-99.
/// Entries 16 and 17 both map to 0x16, as on the hardware.
pub const SCALE_99: [u8; 100] = [
    0x00, 0x02, 0x03, 0x04, 0x06, 0x07, 0x08, 0x09, 0x0B, 0x0C,
    0x0D, 0x0F, 0x10, 0x11, 0x12, 0x14, 0x16, 0x16, 0x18, 0x19,
    0x1A, 0x1B, 0x1D, 0x1E, 0x1F, 0x21, 0x22, 0x23, 0x24, 0x26,
    0x27, 0x28, 0x2A, 0x2B, 0x2C, 0x2D, 0x2F, 0x30, 0x31, 0x33,
    0x34, 0x35, 0x36, 0x38, 0x39, 0x3A, 0x3C, 0x3D, 0x3E, 0x3F,
    0x41, 0x42, 0x43, 0x44, 0x46, 0x47, 0x48, 0x4A, 0x4B, 0x4C,
    0x4D, 0x4F, 0x50, 0x51, 0x53, 0x54, 0x55, 0x56, 0x58, 0x59,
    0x5A, 0x5C, 0x5D, 0x5E, 0x5F, 0x61, 0x62, 0x63, 0x65, 0x66,
    0x67, 0x68, 0x6A, 0x6B, 0x6C, 0x6E, 0x6F, 0x70, 0x71, 0x73,
    0x74, 0x75, 0x77, 0x78, 0x79, 0x7A, 0x7C, 0x7D, 0x7E, 0x7F,
];

pub fn scale_coarse(value: i32) -> U7 {
    lookup(&SCALE_24, value)
}

pub fn scale_fine(value: i32) -> U7 {
    lookup(&SCALE_99, value)
}

fn lookup(table: &[u8], value: i32) -> U7 {
    usize::try_from(value)
        .ok()
        .and_then(|idx| table.get(idx))
        .map(|byte| U7(*byte))
        .unwrap_or(U7::MIN)
}
