//! PFM encoder.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::CodecError;
use crate::pixel::PixelMap;

pub(crate) fn encode(map: &PixelMap, stop: &dyn Stop) -> Result<Vec<u8>, CodecError> {
    let samples = map.as_f32().ok_or(CodecError::UnsupportedType {
        expected: "f32",
        actual: map.sample_type(),
    })?;
    let magic = match map.channels() {
        1 => "Pf",
        3 => "PF",
        channels => return Err(CodecError::UnsupportedShape { channels }),
    };

    // The scale field's magnitude is the peak sample value (1.0 when the
    // image is all zero); its sign declares the payload byte order.
    let mut scale = samples.iter().fold(0.0f32, |m, &v| m.max(v)).abs();
    if scale == 0.0 {
        scale = 1.0;
    }
    let little_endian = cfg!(target_endian = "little");
    if little_endian {
        scale = -scale;
    }

    let header = format!("{magic}\n{} {}\n{scale:?}\n", map.width(), map.height());
    let mut out = Vec::with_capacity(header.len() + samples.len() * 4);
    out.extend_from_slice(header.as_bytes());

    let row_len = map.width() as usize * map.channels() as usize;
    if row_len == 0 || map.height() == 0 {
        return Ok(out);
    }

    // Rows go back out bottom-to-top.
    for (i, row) in samples.chunks_exact(row_len).rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        for &v in row {
            if little_endian {
                out.extend_from_slice(&v.to_le_bytes());
            } else {
                out.extend_from_slice(&v.to_be_bytes());
            }
        }
    }

    Ok(out)
}
