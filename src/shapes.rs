//! Composite overlays built from the line primitives.

use crate::buffer::PixelBuffer;
use crate::draw::{draw_line, draw_thick_line};
use crate::pixel::{Color, Point};

/// Square outline with both diagonals, optionally filled first.
///
/// The border is widened by offsetting each edge inwards and outwards by up
/// to `thickness / 2`; the diagonals use [`draw_thick_line`].
pub fn draw_square(
    buf: &mut PixelBuffer,
    left_up: Point,
    size: u32,
    thickness: u32,
    color: Color,
    fill: Option<Color>,
) {
    let (x, y) = (i64::from(left_up.x), i64::from(left_up.y));
    let size = i64::from(size);
    let last = size - 1;

    if let Some(fill_color) = fill {
        let (w, h) = (buf.width() as i64, buf.height() as i64);
        for j in y.max(0)..(y + size).min(h) {
            for i in x.max(0)..(x + size).min(w) {
                *buf.at_mut(i as usize, j as usize) = fill_color;
            }
        }
    }

    let half = i64::from(thickness / 2);
    for t in -half..=half {
        // top, bottom, left, right
        draw_line(buf, pt(x + t, y + t), pt(x + last - t, y + t), color);
        draw_line(buf, pt(x + t, y + last - t), pt(x + last - t, y + last - t), color);
        draw_line(buf, pt(x + t, y + t), pt(x + t, y + last - t), color);
        draw_line(buf, pt(x + last - t, y + t), pt(x + last - t, y + last - t), color);
    }

    draw_thick_line(buf, pt(x, y), pt(x + last, y + last), thickness, color);
    draw_thick_line(buf, pt(x + last, y), pt(x, y + last), thickness, color);
}

/// Filled rhombus hanging from `apex`, its diagonal derived from `size`
/// as the diagonal of a `size x size` square.
pub fn draw_rhombus(buf: &mut PixelBuffer, apex: Point, size: u32, color: Color) {
    let size = u128::from(size);
    let a = ((2 * size * size).isqrt() / 2) as i64 - 1;
    let (x, y) = (i64::from(apex.x), i64::from(apex.y));
    let left_x = x - a;
    let right_x = x + a;
    let center_y = y + a;
    let down_y = y + 2 * a;

    draw_line(buf, apex, pt(right_x, center_y), color);
    draw_line(buf, apex, pt(left_x, center_y), color);
    draw_line(buf, pt(right_x, center_y), pt(x, down_y), color);
    draw_line(buf, pt(left_x, center_y), pt(x, down_y), color);

    // Only rows and columns that can land on the grid.
    let rows = y.max(0)..down_y.min(buf.height() as i64);
    for row in rows {
        let dx = (row - y - a).abs();
        let cols = (left_x + dx).max(0)..(right_x - dx).min(buf.width() as i64);
        for col in cols {
            *buf.at_mut(col as usize, row as usize) = color;
        }
    }
}

/// Corner coordinate pinned to the `i32` range; anything pinned is far off the grid.
fn pt(x: i64, y: i64) -> Point {
    let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    Point::new(clamp(x), clamp(y))
}
