//! Whole-image per-pixel recoloring.

use crate::buffer::PixelBuffer;
use crate::pixel::{Channel, Color, Region};

/// Overwrite one channel of every pixel.
pub fn apply_channel(buf: &mut PixelBuffer, channel: Channel, value: u8) {
    for px in buf.iter_mut() {
        match channel {
            Channel::Red => px.r = value,
            Channel::Green => px.g = value,
            Channel::Blue => px.b = value,
        }
    }
}

/// Paint every pixel outside the inclusive rectangle `region`.
pub fn fill_outside(buf: &mut PixelBuffer, region: Region, color: Color) {
    for y in 0..buf.height() {
        let inside_y = (region.top as i64..=region.bottom as i64).contains(&(y as i64));
        for (x, px) in buf.row_mut(y).iter_mut().enumerate() {
            let inside_x = (region.left as i64..=region.right as i64).contains(&(x as i64));
            if !(inside_x && inside_y) {
                *px = color;
            }
        }
    }
}

/// Recolor the `(2 * radius + 1)^2` neighborhood of every `target` pixel.
///
/// Neighbors already equal to `target` are kept. The scan runs once, top-down
/// and in place, so pixels recolored by an earlier match are what later
/// matches see.
pub fn recolor_neighbors(buf: &mut PixelBuffer, target: Color, radius: u32, new_color: Color) {
    let (w, h) = (buf.width() as i64, buf.height() as i64);
    let r = i64::from(radius);
    for y in 0..h {
        for x in 0..w {
            if buf.at(x as usize, y as usize) != target {
                continue;
            }
            for ny in (y - r).max(0)..=(y + r).min(h - 1) {
                for nx in (x - r).max(0)..=(x + r).min(w - 1) {
                    let px = buf.at_mut(nx as usize, ny as usize);
                    if *px != target {
                        *px = new_color;
                    }
                }
            }
        }
    }
}
