//! Whole-file convenience API (std only).
//!
//! Each call opens, fully consumes, and closes its own file; no state is
//! shared between calls. Path resolution and directory creation are the
//! caller's responsibility. A failed write may leave a truncated file —
//! output goes straight to the target path with no temp-file staging.

use std::fs;
use std::path::Path;

use enough::Unstoppable;

use crate::error::CodecError;
use crate::pixel::PixelMap;

/// Read a PFM file into a float map (row 0 topmost).
pub fn read_pfm(path: impl AsRef<Path>) -> Result<PixelMap, CodecError> {
    let data = fs::read(path)?;
    crate::pfm::decode(&data, None, &Unstoppable)
}

/// Write a float map as PFM.
pub fn write_pfm(path: impl AsRef<Path>, map: &PixelMap) -> Result<(), CodecError> {
    let bytes = crate::pfm::encode(map, &Unstoppable)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Read a Netpbm file (P2/P3/P5/P6) into an integer map.
pub fn read_ppm(path: impl AsRef<Path>) -> Result<PixelMap, CodecError> {
    let data = fs::read(path)?;
    crate::pnm::decode(&data, None, &Unstoppable)
}

/// Write an integer map as binary Netpbm (P5 for 1 channel, P6 for 3).
pub fn write_ppm(path: impl AsRef<Path>, map: &PixelMap) -> Result<(), CodecError> {
    let bytes = crate::pnm::encode(map, &Unstoppable)?;
    fs::write(path, bytes)?;
    Ok(())
}
