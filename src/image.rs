use alloc::vec::Vec;
use core::fmt;

use crate::bmp::{BmpHeader, image_data_size};
use crate::buffer::PixelBuffer;
use crate::error::RasterError;

/// A decoded BMP: header pair plus its pixel grid.
///
/// The grid's dimensions always match the header's width and height;
/// [`Image::replace_pixels`] keeps the two in step.
#[derive(Clone, Debug)]
pub struct Image {
    header: BmpHeader,
    pixels: PixelBuffer,
    /// Bytes between the 54-byte header pair and the pixel data offset.
    pub(crate) header_tail: Vec<u8>,
    /// Row padding bytes as read from disk, top-down, `row_stride - width * 3` per row.
    pub(crate) row_filler: Vec<u8>,
}

impl Image {
    /// Wrap a pixel grid with a freshly built header.
    ///
    /// Fails with [`RasterError::DimensionsTooLarge`] if the grid can't be
    /// described by a BMP header.
    pub fn new(pixels: PixelBuffer) -> Result<Self, RasterError> {
        let header = BmpHeader::for_dimensions(pixels.width(), pixels.height())?;
        Ok(Self {
            header,
            pixels,
            header_tail: Vec::new(),
            row_filler: Vec::new(),
        })
    }

    pub(crate) fn from_parts(
        header: BmpHeader,
        pixels: PixelBuffer,
        header_tail: Vec<u8>,
        row_filler: Vec<u8>,
    ) -> Self {
        Self {
            header,
            pixels,
            header_tail,
            row_filler,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    /// Swap in a replacement grid.
    ///
    /// When the dimensions change, the header's width, height and image data
    /// size are updated in the same step and the preserved row filler is dropped.
    /// A grid the header can't describe is rejected and the image is left as is.
    pub fn replace_pixels(&mut self, pixels: PixelBuffer) -> Result<(), RasterError> {
        if pixels.width() != self.pixels.width() || pixels.height() != self.pixels.height() {
            let image_size = image_data_size(pixels.width(), pixels.height())?;
            let info = &mut self.header.info;
            info.width = pixels.width() as i32;
            info.height = pixels.height() as i32;
            info.image_size = image_size;
            self.row_filler.clear();
        }
        self.pixels = pixels;
        Ok(())
    }

    /// Header summary for the info dump.
    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            width: self.header.info.width,
            height: self.header.info.height,
            header_size: self.header.info.header_size,
            bit_count: self.header.info.bit_count,
            image_size: self.header.info.image_size,
            file_size: self.header.file.file_size,
        }
    }

    /// Copy the grid into an [`imgref::ImgVec`] of `RGB8`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> Result<imgref::ImgVec<rgb::RGB8>, RasterError> {
        let mut out = Vec::new();
        out.try_reserve_exact(self.pixels.pixels().len())
            .map_err(|_| RasterError::Allocation {
                bytes: self.pixels.pixels().len() * 3,
            })?;
        out.extend(self.pixels.pixels().iter().map(|&c| rgb::RGB8::from(c)));
        Ok(imgref::ImgVec::new(out, self.width(), self.height()))
    }

    /// Build an image from an [`imgref::ImgRef`] of `RGB8`.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'_, rgb::RGB8>) -> Result<Self, RasterError> {
        let mut buf = PixelBuffer::try_new(img.width(), img.height())?;
        for (y, row) in img.rows().enumerate() {
            for (dst, &src) in buf.row_mut(y).iter_mut().zip(row) {
                *dst = src.into();
            }
        }
        Self::new(buf)
    }
}

/// Header fields reported by the info dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: i32,
    pub height: i32,
    /// Info header size field.
    pub header_size: u32,
    pub bit_count: u16,
    pub image_size: u32,
    pub file_size: u32,
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "width: {}", self.width)?;
        writeln!(f, "height: {}", self.height)?;
        writeln!(f, "size: {}", self.header_size)?;
        writeln!(f, "bit count: {}", self.bit_count)?;
        writeln!(f, "image size: {}", self.image_size)?;
        write!(f, "file size: {}", self.file_size)
    }
}
