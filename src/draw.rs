//! Point and line rasterization. Every write goes through
//! [`PixelBuffer::set_pixel`], so drawing is clipped to the grid.

use crate::buffer::PixelBuffer;
use crate::pixel::{Color, Point};

/// Integer Bresenham line, both endpoints included.
///
/// Endpoints are put in a fixed order before stepping so that `a -> b` and
/// `b -> a` plot the same pixels.
pub fn draw_line(buf: &mut PixelBuffer, a: Point, b: Point, color: Color) {
    let (from, to) = if (b.x, b.y) < (a.x, a.y) { (b, a) } else { (a, b) };

    let (mut x, mut y) = (i64::from(from.x), i64::from(from.y));
    let (x2, y2) = (i64::from(to.x), i64::from(to.y));
    let delta_x = (x2 - x).abs();
    let delta_y = (y2 - y).abs();
    let sign_x = if x < x2 { 1 } else { -1 };
    let sign_y = if y < y2 { 1 } else { -1 };
    let mut error = delta_x - delta_y;

    buf.set_pixel(to.x, to.y, color);
    while x != x2 || y != y2 {
        buf.set_pixel(x as i32, y as i32, color);
        let error2 = error * 2;
        if error2 > -delta_y {
            error -= delta_y;
            x += sign_x;
        }
        if error2 < delta_x {
            error += delta_x;
            y += sign_y;
        }
    }
}

/// Line with extra parallel strokes for `thickness > 1`.
///
/// Offsets are only added when the segment is at least as tall as it is wide;
/// near-horizontal segments always come out one pixel thick.
pub fn draw_thick_line(buf: &mut PixelBuffer, a: Point, b: Point, thickness: u32, color: Color) {
    draw_line(buf, a, b, color);
    if thickness == 1 {
        return;
    }
    let steep = (i64::from(b.y) - i64::from(a.y)).abs() >= (i64::from(b.x) - i64::from(a.x)).abs();
    if !steep {
        return;
    }
    for i in 1..=(thickness / 2) as i32 {
        let (ax_in, ax_out) = (a.x.saturating_add(i), a.x.saturating_sub(i));
        let (bx_in, bx_out) = (b.x.saturating_sub(i), b.x.saturating_add(i));
        let (ay_down, by_up) = (a.y.saturating_add(i), b.y.saturating_sub(i));
        if b.x > a.x {
            draw_line(buf, Point::new(ax_in, a.y), Point::new(b.x, by_up), color);
            draw_line(buf, Point::new(a.x, ay_down), Point::new(bx_in, b.y), color);
        } else {
            draw_line(buf, Point::new(a.x, ay_down), Point::new(bx_out, b.y), color);
            draw_line(buf, Point::new(ax_out, a.y), Point::new(b.x, by_up), color);
        }
    }
}
