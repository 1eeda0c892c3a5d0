use alloc::vec::Vec;
use enough::Stop;

use crate::error::CodecError;
use crate::pixel::PixelMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Pfm,
    Pnm,
}

/// Encode configuration.
///
/// The PFM magic (`Pf` vs `PF`) and the Netpbm subtype (P5 vs P6) are both
/// derived from the map's channel count, so the only caller choice is the
/// format family.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    target: Target,
}

impl EncodeRequest {
    /// Encode to PFM (requires `F32` samples).
    pub fn pfm() -> Self {
        Self {
            target: Target::Pfm,
        }
    }

    /// Encode to binary Netpbm, P5 or P6 (requires `U8` or `U16` samples).
    pub fn pnm() -> Self {
        Self {
            target: Target::Pnm,
        }
    }

    /// Serialize the map. The map is borrowed read-only and never mutated.
    pub fn encode(self, map: &PixelMap, stop: impl Stop) -> Result<Vec<u8>, CodecError> {
        match self.target {
            Target::Pfm => crate::pfm::encode(map, &stop),
            Target::Pnm => crate::pnm::encode(map, &stop),
        }
    }
}
