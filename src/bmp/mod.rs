//! Uncompressed 24-bit BMP container (BITMAPFILEHEADER + BITMAPINFOHEADER).
//!
//! Use top-level [`crate::DecodeRequest`] and [`crate::encode_bmp`].

pub(crate) mod decode;
mod encode;

pub(crate) use encode::encode_image;

use crate::error::RasterError;

/// Size of the file header plus the 40-byte info header.
pub const HEADERS_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;
pub(crate) const FILE_HEADER_LEN: usize = 14;
pub(crate) const INFO_HEADER_LEN: usize = 40;

pub(crate) const MAGIC: [u8; 2] = *b"BM";
pub(crate) const BITS_PER_PIXEL: u16 = 24;
pub(crate) const COMPRESSION_NONE: u32 = 0;

/// On-disk bytes per pixel row, padded to a multiple of 4.
///
/// `None` when the row length doesn't fit in `usize`.
#[inline]
pub fn row_stride(width: usize) -> Option<usize> {
    width
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

pub(crate) fn too_large(width: usize, height: usize) -> RasterError {
    RasterError::DimensionsTooLarge {
        width: u32::try_from(width).unwrap_or(u32::MAX),
        height: u32::try_from(height).unwrap_or(u32::MAX),
    }
}

/// Pixel data size for a `width x height` grid, checked against what the
/// header fields can hold: signed 32-bit dimensions and a 32-bit file size.
pub(crate) fn image_data_size(width: usize, height: usize) -> Result<u32, RasterError> {
    let err = || too_large(width, height);
    i32::try_from(width).map_err(|_| err())?;
    i32::try_from(height).map_err(|_| err())?;
    let size = row_stride(width)
        .and_then(|stride| stride.checked_mul(height))
        .ok_or_else(err)?;
    size
        .checked_add(HEADERS_LEN)
        .and_then(|file_size| u32::try_from(file_size).ok())
        .ok_or_else(err)?;
    Ok(size as u32)
}

/// BITMAPFILEHEADER fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte offset of the first pixel row.
    pub data_offset: u32,
}

/// BITMAPINFOHEADER fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

/// Header pair, written back verbatim on encode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    pub file: FileHeader,
    pub info: InfoHeader,
}

impl BmpHeader {
    /// Fresh header for a `width x height` bottom-up 24-bit image.
    pub fn for_dimensions(width: usize, height: usize) -> Result<Self, RasterError> {
        let image_size = image_data_size(width, height)?;
        Ok(Self {
            file: FileHeader {
                signature: MAGIC,
                file_size: image_size + HEADERS_LEN as u32,
                reserved1: 0,
                reserved2: 0,
                data_offset: HEADERS_LEN as u32,
            },
            info: InfoHeader {
                header_size: INFO_HEADER_LEN as u32,
                width: width as i32,
                height: height as i32, // positive = bottom-up
                planes: 1,
                bit_count: BITS_PER_PIXEL,
                compression: COMPRESSION_NONE,
                image_size,
                x_pels_per_meter: 2835, // 72 DPI
                y_pels_per_meter: 2835,
                colors_used: 0,
                colors_important: 0,
            },
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.info.width as u32
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.info.height as u32
    }
}
