use alloc::string::String;

use crate::error::CodecError;
use crate::pixel::SampleType;

/// Container format identified from the magic bytes.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapFormat {
    /// PF/Pf — floating point (color or grayscale).
    Pfm,
    /// P5 — binary grayscale.
    Pgm,
    /// P6 — binary RGB.
    Ppm,
    /// P2 — plain (ASCII) grayscale.
    PlainPgm,
    /// P3 — plain (ASCII) RGB.
    PlainPpm,
}

/// Header facts obtained without decoding the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: MapFormat,
    pub sample_type: SampleType,
    pub channels: u32,
}

impl ImageInfo {
    /// Probe the header of any supported format.
    ///
    /// Only the header bytes are examined; a truncated payload still probes
    /// successfully.
    pub fn from_bytes(data: &[u8]) -> Result<ImageInfo, CodecError> {
        match data {
            [b'P', b'f' | b'F', ..] => crate::pfm::probe(data),
            [b'P', ..] => crate::pnm::probe(data),
            _ => Err(CodecError::MalformedHeader(String::from(
                "unrecognized magic bytes",
            ))),
        }
    }
}
