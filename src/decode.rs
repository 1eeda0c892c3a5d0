use alloc::string::String;
use enough::Stop;

use crate::error::CodecError;
use crate::limits::Limits;
use crate::pixel::PixelMap;

/// Decode configuration. Routes on the magic bytes only: `Pf`/`PF` go to the
/// PFM decoder, `P2`/`P3`/`P5`/`P6` to the Netpbm decoder.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a, 'b> {
    data: &'a [u8],
    limits: Option<&'b Limits>,
}

impl<'a, 'b> DecodeRequest<'a, 'b> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Apply resource limits during decoding.
    pub fn with_limits(mut self, limits: &'b Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the decode. Returns an owned [`PixelMap`]; the request holds no
    /// state afterwards.
    pub fn decode(self, stop: impl Stop) -> Result<PixelMap, CodecError> {
        match self.data {
            [b'P', b'f' | b'F', ..] => crate::pfm::decode(self.data, self.limits, &stop),
            [b'P', ..] => crate::pnm::decode(self.data, self.limits, &stop),
            _ => Err(CodecError::MalformedHeader(String::from(
                "unrecognized magic bytes",
            ))),
        }
    }
}
