use alloc::string::String;
use enough::StopReason;

use crate::pixel::SampleType;

/// Errors from PFM/Netpbm decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedFormat(String),

    #[error("unsupported sample type: expected {expected}, got {actual:?}")]
    UnsupportedType {
        expected: &'static str,
        actual: SampleType,
    },

    #[error("unsupported channel count: {channels}")]
    UnsupportedShape { channels: u32 },

    #[error("truncated pixel data: need {needed}, got {actual}")]
    TruncatedData { needed: usize, actual: usize },

    #[error("sample buffer length mismatch: need {needed}, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for CodecError {
    fn from(r: StopReason) -> Self {
        CodecError::Cancelled(r)
    }
}
