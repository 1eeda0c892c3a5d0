/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for the decoded sample buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check header-declared dimensions before any payload work.
    pub(crate) fn check_dimensions(&self, width: u32, height: u32) -> Result<(), crate::CodecError> {
        let checks = [
            (self.max_width, u64::from(width), "width"),
            (self.max_height, u64::from(height), "height"),
            (
                self.max_pixels,
                u64::from(width) * u64::from(height),
                "pixel count",
            ),
        ];
        for (limit, value, what) in checks {
            if let Some(max) = limit {
                if value > max {
                    return Err(crate::CodecError::LimitExceeded(alloc::format!(
                        "{what} {value} exceeds limit {max}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Check the output allocation size before reserving it.
    pub(crate) fn check_allocation(&self, bytes: usize) -> Result<(), crate::CodecError> {
        if let Some(max) = self.max_memory_bytes {
            if bytes as u64 > max {
                return Err(crate::CodecError::LimitExceeded(alloc::format!(
                    "allocation of {bytes} bytes exceeds memory limit {max}"
                )));
            }
        }
        Ok(())
    }
}
