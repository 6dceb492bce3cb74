use crate::error::RasterError;

/// Resource limits on pixel grids.
///
/// Applied to the decoded grid before it is allocated, and by
/// [`Operation::apply_with_limits`](crate::Operation::apply_with_limits) to the
/// grid an operation works on. All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for one grid at 3 bytes per pixel.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a `width x height` grid against every configured limit.
    pub(crate) fn check_grid(&self, width: u64, height: u64) -> Result<(), RasterError> {
        let pixels = width.saturating_mul(height);
        let bytes = pixels.saturating_mul(3);
        let checks = [
            ("width", width, self.max_width),
            ("height", height, self.max_height),
            ("pixel count", pixels, self.max_pixels),
            ("grid bytes", bytes, self.max_memory_bytes),
        ];
        for (what, value, max) in checks {
            if let Some(max) = max
                && value > max
            {
                return Err(RasterError::LimitExceeded(alloc::format!(
                    "{what} {value} exceeds limit {max}"
                )));
            }
        }
        Ok(())
    }
}
