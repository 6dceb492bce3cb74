//! Owned pixel grid.

use alloc::vec::Vec;

use crate::error::RasterError;
use crate::pixel::Color;

/// `height` rows of `width` colors, stored contiguously top-down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<Color>,
}

impl PixelBuffer {
    /// Allocate a black grid, reporting allocation failure instead of aborting.
    pub fn try_new(width: usize, height: usize) -> Result<Self, RasterError> {
        Self::filled(width, height, Color::BLACK)
    }

    /// Allocate a grid with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Color) -> Result<Self, RasterError> {
        let len = width
            .checked_mul(height)
            .ok_or(RasterError::DimensionsTooLarge {
                width: width as u32,
                height: height as u32,
            })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| RasterError::Allocation {
                bytes: len.saturating_mul(core::mem::size_of::<Color>()),
            })?;
        data.resize(len, color);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap row-major pixels. `pixels.len()` must equal `width * height`.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Color>,
    ) -> Result<Self, RasterError> {
        if Some(pixels.len()) != width.checked_mul(height) {
            return Err(RasterError::InvalidParameter(alloc::format!(
                "{} pixels do not fill a {width}x{height} grid",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data: pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row-major top-down.
    pub fn pixels(&self) -> &[Color] {
        &self.data
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[Color] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [Color] {
        &mut self.data[y * self.width..(y + 1) * self.width]
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Bounds-checked read.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x.into(), y.into()).map(|i| self.data[i])
    }

    /// Bounds-checked mutable access.
    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Color> {
        self.index(x.into(), y.into()).map(|i| &mut self.data[i])
    }

    /// Read at widened coordinates, treating anything outside the grid as black.
    #[inline]
    pub(crate) fn get_or_black(&self, x: i64, y: i64) -> Color {
        self.index(x, y).map(|i| self.data[i]).unwrap_or_default()
    }

    /// Write a pixel; coordinates outside the grid are silently ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(px) = self.get_mut(x, y) {
            *px = color;
        }
    }

    /// Unchecked-style access for in-range `usize` coordinates.
    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> Color {
        self.data[y * self.width + x]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, x: usize, y: usize) -> &mut Color {
        &mut self.data[y * self.width + x]
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Color> {
        self.data.iter_mut()
    }

    /// Copy of the sub-grid at `(left, top)` sized `width x height`.
    /// Cells outside the source grid read as black.
    pub(crate) fn extract(
        &self,
        left: i64,
        top: i64,
        width: usize,
        height: usize,
    ) -> Result<PixelBuffer, RasterError> {
        let mut out = PixelBuffer::try_new(width, height)?;
        for dy in 0..height {
            for dx in 0..width {
                *out.at_mut(dx, dy) = self.get_or_black(left + dx as i64, top + dy as i64);
            }
        }
        Ok(out)
    }
}
