//! PFM decoder.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use super::PfmHeader;
use crate::error::CodecError;
use crate::info::{ImageInfo, MapFormat};
use crate::limits::Limits;
use crate::pixel::{PixelMap, SampleType, Samples};

/// One newline-terminated header line starting at `start`, newline excluded.
fn header_line(data: &[u8], start: usize) -> Result<&[u8], CodecError> {
    let rest = data.get(start..).unwrap_or(&[]);
    let end = rest.iter().position(|&b| b == b'\n').ok_or_else(|| {
        CodecError::MalformedHeader(format!("header line at offset {start} has no newline"))
    })?;
    Ok(&rest[..end])
}

/// Parse the three-line PFM header: magic, `"<W> <H>"`, signed scale.
///
/// PFM headers never contain comments.
pub(crate) fn parse_header(data: &[u8]) -> Result<PfmHeader, CodecError> {
    let magic = header_line(data, 0)?;
    let second = magic.get(1).copied().unwrap_or(0);
    if magic.first() != Some(&b'P') || !matches!(second, b'f' | b'F') {
        return Err(CodecError::MalformedHeader(format!(
            "expected PF or Pf magic, got {:?}",
            core::str::from_utf8(magic).unwrap_or("<non-ascii>")
        )));
    }

    let dims = header_line(data, magic.len() + 1)?;
    let dims_text = core::str::from_utf8(dims).map_err(|_| {
        CodecError::MalformedHeader(alloc::string::String::from("non-ascii dimensions line"))
    })?;
    let mut fields = dims_text.split_ascii_whitespace();
    let mut dimension = || {
        fields
            .next()
            .and_then(|t| t.parse::<u32>().ok())
            .ok_or_else(|| {
                CodecError::MalformedHeader(format!("bad dimensions line {dims_text:?}"))
            })
    };
    let width = dimension()?;
    let height = dimension()?;

    let scale_line = header_line(data, magic.len() + dims.len() + 2)?;
    let scale = core::str::from_utf8(scale_line)
        .ok()
        .and_then(|t| t.trim().parse::<f32>().ok())
        .ok_or_else(|| {
            CodecError::MalformedHeader(format!(
                "bad scale line {:?}",
                core::str::from_utf8(scale_line).unwrap_or("<non-ascii>")
            ))
        })?;

    Ok(PfmHeader {
        color: second == b'F',
        width,
        height,
        // Negative scale means little-endian floats. The magnitude is the
        // nominal peak sample value and is not applied to decoded data.
        little_endian: scale < 0.0,
        data_offset: magic.len() + dims.len() + scale_line.len() + 3,
    })
}

pub(crate) fn probe(data: &[u8]) -> Result<ImageInfo, CodecError> {
    let header = parse_header(data)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        format: MapFormat::Pfm,
        sample_type: SampleType::F32,
        channels: header.channels(),
    })
}

pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelMap, CodecError> {
    let header = parse_header(data)?;

    if let Some(limits) = limits {
        limits.check_dimensions(header.width, header.height)?;
    }

    let w = header.width as usize;
    let h = header.height as usize;
    let channels = header.channels();
    let count = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(channels as usize))
        .ok_or(CodecError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    let byte_len = count
        .checked_mul(4)
        .ok_or(CodecError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;

    if let Some(limits) = limits {
        limits.check_allocation(byte_len)?;
    }

    stop.check()?;

    let payload = data.get(header.data_offset..).unwrap_or(&[]);
    if payload.len() < byte_len {
        return Err(CodecError::TruncatedData {
            needed: byte_len,
            actual: payload.len(),
        });
    }

    let mut samples = Vec::with_capacity(count);
    if count > 0 {
        // File rows run bottom-to-top; emit them reversed so row 0 is the
        // top of the image.
        let row_bytes = w * channels as usize * 4;
        for (i, row) in payload[..byte_len].chunks_exact(row_bytes).rev().enumerate() {
            if i % 16 == 0 {
                stop.check()?;
            }
            for px in row.chunks_exact(4) {
                let raw = [px[0], px[1], px[2], px[3]];
                samples.push(if header.little_endian {
                    f32::from_le_bytes(raw)
                } else {
                    f32::from_be_bytes(raw)
                });
            }
        }
    }

    PixelMap::new(header.width, header.height, channels, Samples::F32(samples))
}
