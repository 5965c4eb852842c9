/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). TGA dimensions are 16-bit, so an
/// unlimited decode allocates at most 65535 × 65535 × 4 bytes.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for output buffer allocation.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits.
    fn check(&self, width: u32, height: u32) -> Result<(), crate::TgaError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(crate::TgaError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(crate::TgaError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(crate::TgaError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Validate a `width` × `height` canonical output image against every limit
    /// and return its byte size.
    pub(crate) fn check_output(
        limits: Option<&Self>,
        width: u32,
        height: u32,
    ) -> Result<usize, crate::TgaError> {
        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(crate::PixelLayout::Bgra8.bytes_per_pixel()))
            .ok_or(crate::TgaError::DimensionsTooLarge { width, height })?;
        if let Some(limits) = limits {
            limits.check(width, height)?;
            limits.check_memory(bytes)?;
        }
        Ok(bytes)
    }

    fn check_memory(&self, bytes: usize) -> Result<(), crate::TgaError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(crate::TgaError::LimitExceeded(alloc::format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
