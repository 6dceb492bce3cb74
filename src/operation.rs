//! One-shot dispatch of a validated operation onto an [`Image`].

use crate::error::RasterError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::{Angle, Axis, Channel, Color, Orientation, Point, Region};
use crate::{draw, filter, flip, geometry, resample, shapes};

/// A transformation plus its parameters, as handed over by a front end
/// after validating user input.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Square outline with diagonals, optionally filled.
    Square {
        left_up: Point,
        side: u32,
        thickness: u32,
        color: Color,
        fill: Option<Color>,
    },
    /// Filled rhombus hanging from `apex`.
    Rhombus { apex: Point, size: u32, color: Color },
    /// Single line segment.
    Line {
        from: Point,
        to: Point,
        thickness: u32,
        color: Color,
    },
    ChannelFilter { channel: Channel, value: u8 },
    Rotate { region: Region, angle: Angle },
    DiagonalMirror { region: Region },
    Shift { step: i64, axis: Axis },
    Paving { region: Region },
    Compress { factor: u32 },
    Blur { kernel: u32 },
    FlipBlocks { block: u32, orientation: Orientation },
    RecolorNeighbors {
        target: Color,
        radius: u32,
        color: Color,
    },
    FillOutside { region: Region, color: Color },
    /// Leaves pixels alone; the caller reads [`Image::info`].
    Info,
}

impl Operation {
    /// Apply to `image`.
    ///
    /// On error the image is unchanged: parameters are checked and scratch
    /// buffers allocated before the first pixel is written.
    pub fn apply(&self, image: &mut Image) -> Result<(), RasterError> {
        self.apply_with_limits(image, &Limits::default())
    }

    /// Apply to `image`, first checking its grid against `limits`.
    ///
    /// No scratch or output grid an operation allocates is larger than the
    /// grid it starts from, so one check bounds all of them.
    pub fn apply_with_limits(&self, image: &mut Image, limits: &Limits) -> Result<(), RasterError> {
        limits.check_grid(image.width() as u64, image.height() as u64)?;
        log::debug!(
            "applying {self:?} to {}x{} image",
            image.width(),
            image.height()
        );
        let buf = image.pixels_mut();
        match *self {
            Operation::Square {
                left_up,
                side,
                thickness,
                color,
                fill,
            } => shapes::draw_square(buf, left_up, side, thickness, color, fill),
            Operation::Rhombus { apex, size, color } => {
                shapes::draw_rhombus(buf, apex, size, color)
            }
            Operation::Line {
                from,
                to,
                thickness,
                color,
            } => draw::draw_thick_line(buf, from, to, thickness, color),
            Operation::ChannelFilter { channel, value } => {
                filter::apply_channel(buf, channel, value)
            }
            Operation::Rotate { region, angle } => geometry::rotate_region(buf, region, angle)?,
            Operation::DiagonalMirror { region } => geometry::diagonal_mirror(buf, region)?,
            Operation::Paving { region } => geometry::paving(buf, region)?,
            Operation::FlipBlocks { block, orientation } => {
                flip::flip_blocks(buf, block, orientation)?
            }
            Operation::RecolorNeighbors {
                target,
                radius,
                color,
            } => filter::recolor_neighbors(buf, target, radius, color),
            Operation::FillOutside { region, color } => filter::fill_outside(buf, region, color),
            Operation::Shift { step, axis } => {
                let shifted = geometry::shift(buf, step, axis)?;
                image.replace_pixels(shifted)?;
            }
            Operation::Compress { factor } => {
                let smaller = resample::compress(buf, factor)?;
                image.replace_pixels(smaller)?;
            }
            Operation::Blur { kernel } => {
                let blurred = resample::blur(buf, kernel)?;
                image.replace_pixels(blurred)?;
            }
            Operation::Info => {}
        }
        Ok(())
    }
}
