//! Netpbm decoder: P5/P6 raw payloads, P2/P3 ASCII payloads.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use super::scanner::Scanner;
use super::{PnmFormat, PnmHeader};
use crate::error::CodecError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::pixel::{PixelMap, SampleType, Samples};

fn parse_u32(token: &[u8]) -> Result<u32, CodecError> {
    core::str::from_utf8(token)
        .ok()
        .and_then(|t| t.parse::<u32>().ok())
        .ok_or_else(|| {
            CodecError::MalformedHeader(format!(
                "expected unsigned integer, got {:?}",
                core::str::from_utf8(token).unwrap_or("<non-ascii>")
            ))
        })
}

/// Parse `P<digit>` plus the width/height/maxval tokens.
///
/// `data_offset` lands on the first byte after the whitespace/comment run
/// that follows maxval, which for raw subtypes is the first payload byte.
pub(crate) fn parse_header(data: &[u8]) -> Result<PnmHeader, CodecError> {
    if data.first() != Some(&b'P') {
        return Err(CodecError::MalformedHeader(alloc::string::String::from(
            "unrecognized magic bytes",
        )));
    }
    let digit = *data.get(1).ok_or(CodecError::TruncatedData {
        needed: 2,
        actual: data.len(),
    })?;
    let format = PnmFormat::from_digit(digit).ok_or_else(|| {
        CodecError::UnsupportedFormat(format!("P{}", char::from(digit)))
    })?;

    let mut scanner = Scanner::new(data, 2);
    scanner.skip_whitespace_and_comments();
    let width = parse_u32(scanner.token()?)?;
    scanner.skip_whitespace_and_comments();
    let height = parse_u32(scanner.token()?)?;
    scanner.skip_whitespace_and_comments();
    let maxval = parse_u32(scanner.token()?)?;
    if maxval > 65535 {
        return Err(CodecError::MalformedHeader(format!(
            "maxval {maxval} exceeds 65535"
        )));
    }
    // One more skip lands on the first payload byte.
    scanner.skip_whitespace_and_comments();

    Ok(PnmHeader {
        format,
        width,
        height,
        maxval,
        data_offset: scanner.pos(),
    })
}

pub(crate) fn probe(data: &[u8]) -> Result<ImageInfo, CodecError> {
    let header = parse_header(data)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        format: header.format.to_map_format(),
        sample_type: if header.is_wide() {
            SampleType::U16
        } else {
            SampleType::U8
        },
        channels: header.format.channels(),
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

    let channels = header.format.channels();
    let count = (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|wh| wh.checked_mul(channels as usize))
        .ok_or(CodecError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    let bytes_per_sample = if header.is_wide() { 2 } else { 1 };
    let byte_len = count
        .checked_mul(bytes_per_sample)
        .ok_or(CodecError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    if let Some(limits) = limits {
        limits.check_allocation(byte_len)?;
    }

    stop.check()?;

    let payload = data.get(header.data_offset..).unwrap_or(&[]);
    let samples = if header.format.is_raw() {
        decode_raw(payload, &header, count, byte_len, stop)?
    } else {
        decode_plain(payload, &header, count, stop)?
    };

    PixelMap::new(header.width, header.height, channels, samples)
}

/// Raw payload: `count` samples, 1 byte each, or 2 bytes big-endian when the
/// maxval needs 16 bits. Top row first; no reordering.
fn decode_raw(
    payload: &[u8],
    header: &PnmHeader,
    count: usize,
    byte_len: usize,
    stop: &dyn Stop,
) -> Result<Samples, CodecError> {
    if payload.len() < byte_len {
        return Err(CodecError::TruncatedData {
            needed: byte_len,
            actual: payload.len(),
        });
    }
    if header.is_wide() {
        let mut samples = Vec::with_capacity(count);
        for (i, pair) in payload[..byte_len].chunks_exact(2).enumerate() {
            if i % 4096 == 0 {
                stop.check()?;
            }
            samples.push(u16::from_be_bytes([pair[0], pair[1]]));
        }
        Ok(Samples::U16(samples))
    } else {
        Ok(Samples::U8(payload[..byte_len].to_vec()))
    }
}

/// ASCII payload: whitespace-delimited decimal tokens (integer or float
/// literal), exactly `count` of them.
fn decode_plain(
    payload: &[u8],
    header: &PnmHeader,
    count: usize,
    stop: &dyn Stop,
) -> Result<Samples, CodecError> {
    // Token count is bounded by the bytes actually present.
    let mut values = Vec::with_capacity(count.min(payload.len()));
    for (i, token) in payload
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty())
        .enumerate()
    {
        if i % 4096 == 0 {
            stop.check()?;
        }
        let value = core::str::from_utf8(token)
            .ok()
            .and_then(|t| t.parse::<f32>().ok())
            .ok_or_else(|| {
                CodecError::MalformedHeader(format!(
                    "bad sample token {:?}",
                    core::str::from_utf8(token).unwrap_or("<non-ascii>")
                ))
            })?;
        values.push(value);
    }
    if values.len() != count {
        return Err(CodecError::TruncatedData {
            needed: count,
            actual: values.len(),
        });
    }

    Ok(if header.is_wide() {
        Samples::U16(values.iter().map(|&v| v as u16).collect())
    } else {
        Samples::U8(values.iter().map(|&v| v as u8).collect())
    })
}
