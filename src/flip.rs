//! Checkerboard block flipping.

use crate::buffer::PixelBuffer;
use crate::error::RasterError;
use crate::pixel::Orientation;

/// Split the image into `block x block` tiles and mirror every tile on an odd
/// checkerboard square (`(block_row + block_col) % 2 == 1`).
///
/// Tiles cut short by the right or bottom edge are mirrored over their
/// valid extent only.
pub fn flip_blocks(
    buf: &mut PixelBuffer,
    block: u32,
    orientation: Orientation,
) -> Result<(), RasterError> {
    let size = block as usize;
    if size == 0 {
        return Err(RasterError::InvalidParameter(
            "block size must be positive".into(),
        ));
    }
    let (w, h) = (buf.width(), buf.height());

    for (block_row, top) in (0..h).step_by(size).enumerate() {
        let rows = size.min(h - top);
        for (block_col, left) in (0..w).step_by(size).enumerate() {
            if (block_row + block_col) % 2 == 0 {
                continue;
            }
            let cols = size.min(w - left);
            match orientation {
                Orientation::Vertical => {
                    for k in 0..rows / 2 {
                        let (upper, lower) = (top + k, top + rows - 1 - k);
                        for x in left..left + cols {
                            let tmp = buf.at(x, upper);
                            *buf.at_mut(x, upper) = buf.at(x, lower);
                            *buf.at_mut(x, lower) = tmp;
                        }
                    }
                }
                Orientation::Horizontal => {
                    for y in top..top + rows {
                        buf.row_mut(y)[left..left + cols].reverse();
                    }
                }
            }
        }
    }
    Ok(())
}
