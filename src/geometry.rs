//! Region rotation, diagonal mirroring, wrap-around shifting and tiling.
//!
//! Every transform that reads a region treats source pixels outside the
//! grid as black and clips its writes, so regions may hang over the edge.

use crate::buffer::PixelBuffer;
use crate::error::RasterError;
use crate::pixel::{Angle, Axis, Region};

/// Rotate the pixels of `region` counter-clockwise by `angle`.
///
/// 180° writes the result back at the region's top-left corner. For 90° and
/// 270° the rotated block has swapped extents and is re-centered on the
/// region's center.
pub fn rotate_region(
    buf: &mut PixelBuffer,
    region: Region,
    angle: Angle,
) -> Result<(), RasterError> {
    region.check_ordered()?;
    let (left, top) = (i64::from(region.left), i64::from(region.top));
    let (right, bottom) = (i64::from(region.right), i64::from(region.bottom));
    let (w, h) = (region.width(), region.height());

    let (origin_x, origin_y, out_w, out_h) = match angle {
        Angle::Deg180 => (left, top, w, h),
        Angle::Deg90 | Angle::Deg270 => {
            let center_x = (right + left) / 2;
            let center_y = (bottom + top) / 2;
            (center_x - h / 2, center_y - w / 2, h, w)
        }
    };
    let Some(span) = Span::visible(buf, origin_x, origin_y, out_w, out_h) else {
        return Ok(());
    };

    // The visible part of the rotated block is built before the first write.
    let mut rotated = PixelBuffer::try_new(span.width, span.height)?;
    for vy in 0..span.height {
        let j = (span.top + vy) as i64 - origin_y;
        for vx in 0..span.width {
            let i = (span.left + vx) as i64 - origin_x;
            let (sx, sy) = match angle {
                Angle::Deg90 => (left + w - 1 - j, top + i),
                Angle::Deg180 => (left + w - 1 - i, top + h - 1 - j),
                Angle::Deg270 => (left + j, bottom - 1 - i),
            };
            *rotated.at_mut(vx, vy) = buf.get_or_black(sx, sy);
        }
    }
    span.commit(buf, &rotated);
    Ok(())
}

/// Reflect a square region across its main diagonal.
///
/// The region is cut down to a square of the smaller extent, rotated 90° in
/// place, then re-read bottom row first and committed back over itself.
pub fn diagonal_mirror(buf: &mut PixelBuffer, region: Region) -> Result<(), RasterError> {
    region.check_ordered()?;
    let side = region.width().min(region.height());
    let (left, top) = (i64::from(region.left), i64::from(region.top));
    let Some(span) = Span::visible(buf, left, top, side, side) else {
        return Ok(());
    };
    // side <= both extents, so the square's corner stays inside the region.
    let square = Region {
        left: region.left,
        top: region.top,
        right: (left + side) as i32,
        bottom: (top + side) as i32,
    };

    let mut flipped = PixelBuffer::try_new(span.width, span.height)?;
    rotate_region(buf, square, Angle::Deg90)?;

    for vy in 0..span.height {
        let mirrored_y = 2 * top + side - 1 - (span.top + vy) as i64;
        for vx in 0..span.width {
            *flipped.at_mut(vx, vy) = buf.get_or_black((span.left + vx) as i64, mirrored_y);
        }
    }
    span.commit(buf, &flipped);
    Ok(())
}

/// Intersection of a block with the grid, in grid coordinates.
struct Span {
    left: usize,
    top: usize,
    width: usize,
    height: usize,
}

impl Span {
    /// Clip the `width x height` block at `(x, y)` to `buf`. `None` if nothing is on the grid.
    fn visible(buf: &PixelBuffer, x: i64, y: i64, width: i64, height: i64) -> Option<Span> {
        let (x0, x1) = (x.max(0), x.saturating_add(width).min(buf.width() as i64));
        let (y0, y1) = (y.max(0), y.saturating_add(height).min(buf.height() as i64));
        (x0 < x1 && y0 < y1).then(|| Span {
            left: x0 as usize,
            top: y0 as usize,
            width: (x1 - x0) as usize,
            height: (y1 - y0) as usize,
        })
    }

    /// Copy `block` (sized like the span) into place.
    fn commit(&self, buf: &mut PixelBuffer, block: &PixelBuffer) {
        for vy in 0..self.height {
            buf.row_mut(self.top + vy)[self.left..self.left + self.width]
                .copy_from_slice(block.row(vy));
        }
    }
}

/// Cyclically shift the whole image by `step` pixels along `axis`.
///
/// Pixels leaving one edge re-enter at the opposite edge. Negative steps shift
/// the other way.
pub fn shift(buf: &PixelBuffer, step: i64, axis: Axis) -> Result<PixelBuffer, RasterError> {
    let (w, h) = (buf.width(), buf.height());
    let mut out = PixelBuffer::try_new(w, h)?;
    if w == 0 || h == 0 {
        return Ok(out);
    }
    let step_x = match axis {
        Axis::X | Axis::Xy => step.rem_euclid(w as i64) as usize,
        Axis::Y => 0,
    };
    let step_y = match axis {
        Axis::Y | Axis::Xy => step.rem_euclid(h as i64) as usize,
        Axis::X => 0,
    };

    for y in 0..h {
        let dst = out.row_mut((y + step_y) % h);
        dst.copy_from_slice(buf.row(y));
        dst.rotate_right(step_x);
    }
    Ok(out)
}

/// Tile the contents of `region` across the entire image.
///
/// Pixel `(x, y)` becomes tile pixel `(x mod dx, y mod dy)`, where the tile
/// is the `dx x dy` block at the region's top-left corner.
pub fn paving(buf: &mut PixelBuffer, region: Region) -> Result<(), RasterError> {
    region.check_ordered()?;
    let (dx, dy) = (region.width(), region.height());
    if dx == 0 || dy == 0 {
        return Err(RasterError::InvalidParameter(alloc::format!(
            "paving region {dx}x{dy} is empty"
        )));
    }
    // Tile cells past the image's own extent are never sampled.
    let tile_w = dx.min(buf.width() as i64) as usize;
    let tile_h = dy.min(buf.height() as i64) as usize;
    let tile = buf.extract(region.left.into(), region.top.into(), tile_w, tile_h)?;
    for y in 0..buf.height() {
        let tile_row = tile.row(y % tile_h);
        for (x, px) in buf.row_mut(y).iter_mut().enumerate() {
            *px = tile_row[x % tile_w];
        }
    }
    Ok(())
}
