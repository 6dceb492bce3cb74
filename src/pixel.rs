use core::str::FromStr;

use crate::error::RasterError;

/// One 24-bit color sample. Stored on disk as B, G, R.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from on-disk byte order.
    #[inline]
    pub(crate) const fn from_bgr(bgr: [u8; 3]) -> Self {
        Self::new(bgr[2], bgr[1], bgr[0])
    }

    #[inline]
    pub(crate) const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Color {
    fn from(px: rgb::RGB8) -> Self {
        Color::new(px.r, px.g, px.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::RGB8 {
    fn from(c: Color) -> Self {
        rgb::RGB8::new(c.r, c.g, c.b)
    }
}

/// Color channel selector for the channel filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl FromStr for Channel {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            other => Err(RasterError::InvalidParameter(alloc::format!(
                "unknown channel {other:?} (expected red, green or blue)"
            ))),
        }
    }
}

/// Axis selector for [`crate::shift`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal wrap only.
    X,
    /// Vertical wrap only.
    Y,
    /// Both axes by the same step.
    Xy,
}

impl FromStr for Axis {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "xy" => Ok(Self::Xy),
            other => Err(RasterError::InvalidParameter(alloc::format!(
                "unknown axis {other:?} (expected x, y or xy)"
            ))),
        }
    }
}

/// Flip direction for [`crate::flip_blocks`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Reverse row order inside each block.
    Vertical,
    /// Reverse column order inside each block.
    Horizontal,
}

impl FromStr for Orientation {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(RasterError::InvalidParameter(alloc::format!(
                "unknown orientation {other:?} (expected vertical or horizontal)"
            ))),
        }
    }
}

/// Rotation angle for [`crate::rotate_region`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Angle {
    Deg90,
    Deg180,
    Deg270,
}

impl Angle {
    pub fn degrees(self) -> u32 {
        match self {
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

impl TryFrom<u32> for Angle {
    type Error = RasterError;

    fn try_from(deg: u32) -> Result<Self, Self::Error> {
        match deg {
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(RasterError::InvalidParameter(alloc::format!(
                "unsupported angle {other} (expected 90, 180 or 270)"
            ))),
        }
    }
}

/// Pixel coordinate. May lie outside the image; drawing clips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle from its left-up and right-down corners.
///
/// Extents are `right - left` by `bottom - top`, widened to `i64` so that
/// corners anywhere in the `i32` plane are valid; whether the right/bottom
/// edge is included depends on the operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Region {
    pub const fn new(left_up: Point, right_down: Point) -> Self {
        Self {
            left: left_up.x,
            top: left_up.y,
            right: right_down.x,
            bottom: right_down.y,
        }
    }

    pub const fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    pub const fn height(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    /// Reject regions whose right/bottom corner lies before the left/top one.
    pub(crate) fn check_ordered(&self) -> Result<(), RasterError> {
        if self.width() < 0 || self.height() < 0 {
            return Err(RasterError::InvalidParameter(alloc::format!(
                "region ({}, {})..({}, {}) has negative extent",
                self.left,
                self.top,
                self.right,
                self.bottom
            )));
        }
        Ok(())
    }
}
