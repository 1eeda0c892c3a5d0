//! PFM (Portable Float Map): Pf (grayscale) and PF (RGB), 32-bit float
//! samples, bottom row stored first in the file.

mod decode;
mod encode;

pub(crate) use decode::{decode, probe};
pub(crate) use encode::encode;

/// Parsed PFM header (internal).
pub(crate) struct PfmHeader {
    /// `PF` (3 channels) vs `Pf` (1 channel).
    pub color: bool,
    pub width: u32,
    pub height: u32,
    /// Payload byte order, taken from the sign of the scale field.
    pub little_endian: bool,
    /// Byte offset of the first payload float.
    pub data_offset: usize,
}

impl PfmHeader {
    pub(crate) fn channels(&self) -> u32 {
        if self.color { 3 } else { 1 }
    }
}
