//! Box downsampling and box blur.

use crate::buffer::PixelBuffer;
use crate::error::RasterError;
use crate::pixel::Color;

/// Downsample by averaging each `factor x factor` block.
///
/// Output is `width / factor` by `height / factor`; trailing columns and rows
/// that don't fill a whole block are dropped. Channel averages truncate.
pub fn compress(buf: &PixelBuffer, factor: u32) -> Result<PixelBuffer, RasterError> {
    let n = factor as usize;
    if n == 0 || n > buf.width() || n > buf.height() {
        return Err(RasterError::InvalidParameter(alloc::format!(
            "compression factor {factor} must be between 1 and {}",
            buf.width().min(buf.height())
        )));
    }
    let (out_w, out_h) = (buf.width() / n, buf.height() / n);
    let mut out = PixelBuffer::try_new(out_w, out_h)?;
    let area = (n * n) as u64;

    for oy in 0..out_h {
        for ox in 0..out_w {
            let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
            for y in oy * n..(oy + 1) * n {
                for px in &buf.row(y)[ox * n..(ox + 1) * n] {
                    r += u64::from(px.r);
                    g += u64::from(px.g);
                    b += u64::from(px.b);
                }
            }
            *out.at_mut(ox, oy) = Color::new((r / area) as u8, (g / area) as u8, (b / area) as u8);
        }
    }
    log::debug!(
        "compressed {}x{} by {factor} to {out_w}x{out_h}",
        buf.width(),
        buf.height()
    );
    Ok(out)
}

/// Box blur with a `kernel x kernel` window. Even kernels grow by one.
///
/// Window coordinates past an edge are mirrored back into the image without
/// repeating the edge pixel. Channel averages round to nearest.
pub fn blur(buf: &PixelBuffer, kernel: u32) -> Result<PixelBuffer, RasterError> {
    let size = if kernel % 2 == 0 { kernel.saturating_add(1) } else { kernel };
    let radius = i64::from(size / 2);
    let (w, h) = (buf.width(), buf.height());
    let mut out = PixelBuffer::try_new(w, h)?;
    // Odd area, so the rounded average never sits on a .5 tie.
    let area = u64::from(size) * u64::from(size);

    for y in 0..h {
        for x in 0..w {
            let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
            for dy in -radius..=radius {
                let sy = reflect(y as i64 + dy, h);
                let row = buf.row(sy);
                for dx in -radius..=radius {
                    let px = row[reflect(x as i64 + dx, w)];
                    r += u64::from(px.r);
                    g += u64::from(px.g);
                    b += u64::from(px.b);
                }
            }
            *out.at_mut(x, y) = Color::new(
                round_div(r, area),
                round_div(g, area),
                round_div(b, area),
            );
        }
    }
    Ok(out)
}

/// Mirror `coord` into `[0, extent)`: `-1 -> 1`, `extent -> extent - 2`.
/// Repeats for windows wider than the image.
fn reflect(coord: i64, extent: usize) -> usize {
    if extent <= 1 {
        return 0;
    }
    let extent = extent as i64;
    let period = 2 * (extent - 1);
    let m = coord.rem_euclid(period);
    (if m >= extent { period - m } else { m }) as usize
}

#[inline]
fn round_div(sum: u64, area: u64) -> u8 {
    ((2 * sum + area) / (2 * area)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_matches_single_bounce() {
        assert_eq!(reflect(-1, 5), 1);
        assert_eq!(reflect(-2, 5), 2);
        assert_eq!(reflect(5, 5), 3); // 2*5 - 5 - 2
        assert_eq!(reflect(6, 5), 2);
        assert_eq!(reflect(3, 5), 3);
    }

    #[test]
    fn reflect_handles_tiny_extents() {
        assert_eq!(reflect(-3, 1), 0);
        assert_eq!(reflect(7, 1), 0);
        assert_eq!(reflect(-1, 2), 1);
        assert_eq!(reflect(2, 2), 0);
        assert_eq!(reflect(3, 2), 1);
    }

    #[test]
    fn round_div_rounds_half_up() {
        assert_eq!(round_div(4, 9), 0);
        assert_eq!(round_div(5, 9), 1);
        assert_eq!(round_div(255 * 9, 9), 255);
    }

    #[test]
    fn blur_spreads_single_pixel() {
        let mut buf = PixelBuffer::try_new(3, 3).unwrap();
        buf.set_pixel(1, 1, Color::new(90, 0, 0));
        let out = blur(&buf, 3).unwrap();
        assert_eq!(out.at(1, 1).r, 10);
        // Mirrored windows see the center twice along each clipped axis.
        assert_eq!(out.at(1, 0).r, 20);
        assert_eq!(out.at(0, 0).r, 40);
    }

    #[test]
    fn compress_rejects_bad_factor() {
        let buf = PixelBuffer::try_new(4, 2).unwrap();
        assert!(compress(&buf, 0).is_err());
        assert!(compress(&buf, 3).is_err());
        assert!(compress(&buf, 2).is_ok());
    }
}
