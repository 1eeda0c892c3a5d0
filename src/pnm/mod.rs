//! Netpbm family: P5 (PGM binary), P6 (PPM binary), plus read-only support
//! for the plain ASCII variants P2 and P3.
//!
//! Headers tolerate arbitrary whitespace and `#`-to-newline comments between
//! tokens; payloads are row-major with the top row stored first.

mod decode;
mod encode;
mod scanner;

pub(crate) use decode::{decode, probe};
pub(crate) use encode::encode;

use crate::info::MapFormat;

/// Netpbm subtype, from the digit after `P`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PnmFormat {
    /// P2 — ASCII grayscale.
    PlainGray,
    /// P3 — ASCII RGB.
    PlainRgb,
    /// P5 — binary grayscale.
    RawGray,
    /// P6 — binary RGB.
    RawRgb,
}

impl PnmFormat {
    pub(crate) fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            b'2' => Some(PnmFormat::PlainGray),
            b'3' => Some(PnmFormat::PlainRgb),
            b'5' => Some(PnmFormat::RawGray),
            b'6' => Some(PnmFormat::RawRgb),
            _ => None,
        }
    }

    pub(crate) fn channels(self) -> u32 {
        match self {
            PnmFormat::PlainGray | PnmFormat::RawGray => 1,
            PnmFormat::PlainRgb | PnmFormat::RawRgb => 3,
        }
    }

    pub(crate) fn is_raw(self) -> bool {
        matches!(self, PnmFormat::RawGray | PnmFormat::RawRgb)
    }

    pub(crate) fn to_map_format(self) -> MapFormat {
        match self {
            PnmFormat::PlainGray => MapFormat::PlainPgm,
            PnmFormat::PlainRgb => MapFormat::PlainPpm,
            PnmFormat::RawGray => MapFormat::Pgm,
            PnmFormat::RawRgb => MapFormat::Ppm,
        }
    }
}

/// Parsed Netpbm header (internal).
pub(crate) struct PnmHeader {
    pub format: PnmFormat,
    pub width: u32,
    pub height: u32,
    pub maxval: u32,
    /// Byte offset of the first payload byte (binary) or of the token
    /// region (ASCII).
    pub data_offset: usize,
}

impl PnmHeader {
    /// Samples wider than a byte when the declared maxval needs 16 bits.
    pub(crate) fn is_wide(&self) -> bool {
        self.maxval > 255
    }
}
