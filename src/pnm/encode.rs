//! Netpbm encoder: writes P5/P6 (raw) only; the plain ASCII variants are
//! read-only.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::CodecError;
use crate::pixel::{PixelMap, Samples};

pub(crate) fn encode(map: &PixelMap, stop: &dyn Stop) -> Result<Vec<u8>, CodecError> {
    let magic = match map.channels() {
        1 => "P5",
        3 => "P6",
        channels => return Err(CodecError::UnsupportedShape { channels }),
    };

    match map.samples() {
        Samples::U8(samples) => {
            let maxval = samples.iter().copied().max().unwrap_or(0);
            let mut out = header_bytes(magic, map, u32::from(maxval), samples.len());
            stop.check()?;
            out.extend_from_slice(samples);
            Ok(out)
        }
        Samples::U16(samples) => {
            // The payload width follows the maxval actually present, not the
            // nominal 16-bit storage: a u16 map whose values all fit in a
            // byte is written with 1-byte samples and the smaller maxval.
            let maxval = samples.iter().copied().max().unwrap_or(0);
            if maxval < 256 {
                let mut out = header_bytes(magic, map, u32::from(maxval), samples.len());
                for (i, &v) in samples.iter().enumerate() {
                    if i % 4096 == 0 {
                        stop.check()?;
                    }
                    out.push(v as u8);
                }
                Ok(out)
            } else {
                let mut out = header_bytes(magic, map, u32::from(maxval), samples.len() * 2);
                for (i, &v) in samples.iter().enumerate() {
                    if i % 4096 == 0 {
                        stop.check()?;
                    }
                    out.extend_from_slice(&v.to_be_bytes());
                }
                Ok(out)
            }
        }
        Samples::F32(_) => Err(CodecError::UnsupportedType {
            expected: "u8 or u16",
            actual: map.sample_type(),
        }),
    }
}

fn header_bytes(magic: &str, map: &PixelMap, maxval: u32, payload_len: usize) -> Vec<u8> {
    let header = format!("{magic}\n{} {}\n{maxval}\n", map.width(), map.height());
    let mut out = Vec::with_capacity(header.len() + payload_len);
    out.extend_from_slice(header.as_bytes());
    out
}
