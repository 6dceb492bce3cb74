//! 24-bit uncompressed BMP decoder.
//!
//! Reads the header pair, validates it, then de-inverts the bottom-up rows
//! into a top-down [`PixelBuffer`].

use alloc::vec::Vec;

use enough::Stop;

use super::{
    BITS_PER_PIXEL, BmpHeader, COMPRESSION_NONE, FileHeader, HEADERS_LEN, INFO_HEADER_LEN,
    InfoHeader, MAGIC, row_stride,
};
use crate::buffer::PixelBuffer;
use crate::error::RasterError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::Color;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], RasterError> {
        let end = self.pos.checked_add(N).ok_or(RasterError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(RasterError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, RasterError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, RasterError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, RasterError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}

// ── Header parsing ──────────────────────────────────────────────────

/// Parse and validate the header pair.
pub(crate) fn parse_header(data: &[u8]) -> Result<BmpHeader, RasterError> {
    let mut cur = Cursor::new(data);

    let signature = cur.read_fixed_bytes::<2>()?;
    if signature != MAGIC {
        return Err(RasterError::UnrecognizedFormat);
    }
    let file = FileHeader {
        signature,
        file_size: cur.get_u32_le()?,
        reserved1: cur.get_u16_le()?,
        reserved2: cur.get_u16_le()?,
        data_offset: cur.get_u32_le()?,
    };
    let info = InfoHeader {
        header_size: cur.get_u32_le()?,
        width: cur.get_i32_le()?,
        height: cur.get_i32_le()?,
        planes: cur.get_u16_le()?,
        bit_count: cur.get_u16_le()?,
        compression: cur.get_u32_le()?,
        image_size: cur.get_u32_le()?,
        x_pels_per_meter: cur.get_i32_le()?,
        y_pels_per_meter: cur.get_i32_le()?,
        colors_used: cur.get_u32_le()?,
        colors_important: cur.get_u32_le()?,
    };

    if (info.header_size as usize) < INFO_HEADER_LEN {
        return Err(RasterError::InvalidHeader(alloc::format!(
            "info header size {} is smaller than BITMAPINFOHEADER",
            info.header_size
        )));
    }
    if info.bit_count != BITS_PER_PIXEL {
        return Err(RasterError::UnsupportedVariant(alloc::format!(
            "{}-bit BMP (only 24-bit is supported)",
            info.bit_count
        )));
    }
    if info.compression != COMPRESSION_NONE {
        return Err(RasterError::UnsupportedVariant(alloc::format!(
            "BMP compression {} (only uncompressed is supported)",
            info.compression
        )));
    }
    if info.width <= 0 {
        return Err(RasterError::InvalidHeader(alloc::format!(
            "BMP width must be positive, got {}",
            info.width
        )));
    }
    if info.height <= 0 {
        return Err(RasterError::InvalidHeader(alloc::format!(
            "BMP height must be positive, got {} (top-down images are not supported)",
            info.height
        )));
    }
    if (file.data_offset as usize) < HEADERS_LEN {
        return Err(RasterError::InvalidHeader(alloc::format!(
            "pixel data offset {} overlaps the headers",
            file.data_offset
        )));
    }

    Ok(BmpHeader { file, info })
}

// ── Full decode ─────────────────────────────────────────────────────

/// Decode a complete image.
pub(crate) fn decode_image(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, RasterError> {
    let header = parse_header(data)?;
    let width = header.width();
    let height = header.height();
    let w = width as usize;
    let h = height as usize;

    if let Some(limits) = limits {
        limits.check_grid(width.into(), height.into())?;
    }
    stop.check()?;

    let offset = header.file.data_offset as usize;
    let header_tail = data
        .get(HEADERS_LEN..offset)
        .ok_or(RasterError::UnexpectedEof)?
        .to_vec();

    let stride = row_stride(w).ok_or(RasterError::DimensionsTooLarge { width, height })?;
    let pad = stride - w * 3;
    let pixel_bytes = stride
        .checked_mul(h)
        .ok_or(RasterError::DimensionsTooLarge { width, height })?;
    let pixel_data = offset
        .checked_add(pixel_bytes)
        .and_then(|end| data.get(offset..end))
        .ok_or(RasterError::UnexpectedEof)?;

    // Both allocations are fallible; an error here drops whatever was built.
    let mut pixels = PixelBuffer::try_new(w, h)?;
    let mut row_filler = Vec::new();
    row_filler
        .try_reserve_exact(pad * h)
        .map_err(|_| RasterError::Allocation { bytes: pad * h })?;
    row_filler.resize(pad * h, 0);

    for (i, src) in pixel_data.chunks_exact(stride).enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        let y = h - 1 - i;
        for (dst, bgr) in pixels.row_mut(y).iter_mut().zip(src.chunks_exact(3)) {
            *dst = Color::from_bgr([bgr[0], bgr[1], bgr[2]]);
        }
        row_filler[y * pad..(y + 1) * pad].copy_from_slice(&src[w * 3..]);
    }

    log::debug!(
        "decoded {w}x{h} BMP: {} bytes, data offset {offset}",
        data.len()
    );
    Ok(Image::from_parts(header, pixels, header_tail, row_filler))
}
