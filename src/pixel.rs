use alloc::vec::Vec;

use crate::error::CodecError;

/// Element type of a [`PixelMap`]'s sample buffer.
///
/// PFM carries `F32`; Netpbm carries `U8` (maxval ≤ 255) or `U16`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleType {
    F32,
    U8,
    U16,
}

/// Typed sample storage, tagged so codec entry points can check it
/// exhaustively instead of guessing from buffer length.
#[derive(Clone, Debug, PartialEq)]
pub enum Samples {
    F32(Vec<f32>),
    U8(Vec<u8>),
    U16(Vec<u16>),
}

impl Samples {
    /// Number of samples (not bytes).
    pub fn len(&self) -> usize {
        match self {
            Samples::F32(v) => v.len(),
            Samples::U8(v) => v.len(),
            Samples::U16(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sample_type(&self) -> SampleType {
        match self {
            Samples::F32(_) => SampleType::F32,
            Samples::U8(_) => SampleType::U8,
            Samples::U16(_) => SampleType::U16,
        }
    }
}

/// An owned image: samples in `(height, width, channels)` order, row 0 topmost.
///
/// The length invariant `samples.len() == width * height * channels` is
/// enforced at construction and holds for the lifetime of the value.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelMap {
    width: u32,
    height: u32,
    channels: u32,
    samples: Samples,
}

impl PixelMap {
    /// Build a map from an explicit shape and sample buffer.
    ///
    /// Returns [`CodecError::BufferTooSmall`] if the buffer length does not
    /// equal `width * height * channels`.
    pub fn new(
        width: u32,
        height: u32,
        channels: u32,
        samples: Samples,
    ) -> Result<Self, CodecError> {
        let needed = (width as usize)
            .checked_mul(height as usize)
            .and_then(|wh| wh.checked_mul(channels as usize))
            .ok_or(CodecError::DimensionsTooLarge { width, height })?;
        if samples.len() != needed {
            return Err(CodecError::BufferTooSmall {
                needed,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Build a single-channel map from 2-D data.
    ///
    /// This is the one place a missing channel axis defaults to 1; it is
    /// never inferred anywhere else.
    pub fn gray(width: u32, height: u32, samples: Samples) -> Result<Self, CodecError> {
        Self::new(width, height, 1, samples)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }

    pub fn sample_type(&self) -> SampleType {
        self.samples.sample_type()
    }

    /// Access the sample storage.
    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// Take ownership of the sample storage.
    pub fn into_samples(self) -> Samples {
        self.samples
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match &self.samples {
            Samples::F32(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> Option<&[u8]> {
        match &self.samples {
            Samples::U8(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<&[u16]> {
        match &self.samples {
            Samples::U16(v) => Some(v),
            _ => None,
        }
    }

    /// View a 3-channel 8-bit map as typed RGB pixels.
    ///
    /// Returns [`CodecError::UnsupportedType`] unless the map is `U8` with
    /// exactly 3 channels.
    #[cfg(feature = "rgb")]
    pub fn as_rgb8(&self) -> Result<&[rgb::RGB8], CodecError> {
        use rgb::AsPixels as _;
        if self.channels != 3 {
            return Err(CodecError::UnsupportedShape {
                channels: self.channels,
            });
        }
        match &self.samples {
            Samples::U8(v) => Ok(v.as_slice().as_pixels()),
            other => Err(CodecError::UnsupportedType {
                expected: "u8",
                actual: other.sample_type(),
            }),
        }
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGB pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref_rgb8(&self) -> Result<imgref::ImgRef<'_, rgb::RGB8>, CodecError> {
        let pixels = self.as_rgb8()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }
}
