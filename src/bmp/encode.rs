//! BMP encoder: header pair verbatim, then bottom-up padded rows.

use alloc::vec::Vec;
use enough::Stop;

use super::{BmpHeader, HEADERS_LEN, row_stride, too_large};
use crate::error::RasterError;
use crate::image::Image;

/// Serialize an image. The header is trusted to match the grid.
pub(crate) fn encode_image(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, RasterError> {
    let w = image.width();
    let h = image.height();
    let stride = row_stride(w).ok_or_else(|| too_large(w, h))?;
    let pad = stride - w * 3;
    let total = stride
        .checked_mul(h)
        .and_then(|p| p.checked_add(HEADERS_LEN + image.header_tail.len()))
        .ok_or_else(|| too_large(w, h))?;

    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| RasterError::Allocation { bytes: total })?;
    write_headers(&mut out, image.header());
    out.extend_from_slice(&image.header_tail);

    stop.check()?;

    // Filler survives only while the grid keeps its decoded shape.
    let filler = (image.row_filler.len() == pad * h).then_some(&image.row_filler);
    let pixels = image.pixels();
    for (i, y) in (0..h).rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        for px in pixels.row(y) {
            out.extend_from_slice(&px.to_bgr());
        }
        match filler {
            Some(filler) => out.extend_from_slice(&filler[y * pad..(y + 1) * pad]),
            None => out.extend(core::iter::repeat_n(0u8, pad)),
        }
    }

    log::debug!("encoded {w}x{h} BMP: {} bytes", out.len());
    Ok(out)
}

fn write_headers(out: &mut Vec<u8>, header: &BmpHeader) {
    let file = &header.file;
    let info = &header.info;

    // File header (14 bytes)
    out.extend_from_slice(&file.signature);
    out.extend_from_slice(&file.file_size.to_le_bytes());
    out.extend_from_slice(&file.reserved1.to_le_bytes());
    out.extend_from_slice(&file.reserved2.to_le_bytes());
    out.extend_from_slice(&file.data_offset.to_le_bytes());

    // BITMAPINFOHEADER (40 bytes)
    out.extend_from_slice(&info.header_size.to_le_bytes());
    out.extend_from_slice(&info.width.to_le_bytes());
    out.extend_from_slice(&info.height.to_le_bytes());
    out.extend_from_slice(&info.planes.to_le_bytes());
    out.extend_from_slice(&info.bit_count.to_le_bytes());
    out.extend_from_slice(&info.compression.to_le_bytes());
    out.extend_from_slice(&info.image_size.to_le_bytes());
    out.extend_from_slice(&info.x_pels_per_meter.to_le_bytes());
    out.extend_from_slice(&info.y_pels_per_meter.to_le_bytes());
    out.extend_from_slice(&info.colors_used.to_le_bytes());
    out.extend_from_slice(&info.colors_important.to_le_bytes());
}
