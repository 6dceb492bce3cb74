//! # zenraster
//!
//! Uncompressed 24-bit BMP decoder/encoder and an in-memory raster editor.
//!
//! ## Codec
//!
//! [`DecodeRequest`] parses the BITMAPFILEHEADER/BITMAPINFOHEADER pair and the
//! bottom-up, 4-byte-padded pixel rows into a top-down [`PixelBuffer`].
//! [`encode_bmp`] writes the header pair back verbatim, so
//! `encode(decode(bytes)) == bytes` for any well-formed 24-bit file
//! (bytes after the last pixel row are not kept).
//!
//! ## Transformations
//!
//! - Drawing: [`draw_line`], [`draw_thick_line`], [`draw_square`], [`draw_rhombus`]
//! - Color: [`apply_channel`], [`recolor_neighbors`], [`fill_outside`]
//! - Geometry: [`rotate_region`], [`diagonal_mirror`], [`shift`], [`paving`]
//! - Resampling: [`compress`], [`blur`]
//! - [`flip_blocks`] (checkerboard block mirroring)
//!
//! All drawing clips silently at the image edge. [`Operation`] bundles one
//! transformation with its parameters for front ends that pick a single
//! operation per run.
//!
//! ## Non-Goals
//!
//! - Compressed, palette-indexed, or non-24-bit BMP variants
//! - Top-down (negative height) BMPs
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use zenraster::{Channel, DecodeRequest, Operation, Unstoppable, encode_bmp};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//! let mut image = DecodeRequest::new(data).decode(Unstoppable)?;
//! Operation::ChannelFilter { channel: Channel::Green, value: 255 }.apply(&mut image)?;
//! let out = encode_bmp(&image, Unstoppable)?;
//! # Ok::<(), zenraster::RasterError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod decode;
mod draw;
mod error;
mod filter;
mod flip;
mod geometry;
mod image;
mod limits;
mod operation;
mod pixel;
mod resample;
mod shapes;

pub mod bmp;

// Re-exports
pub use buffer::PixelBuffer;
pub use decode::{DecodeRequest, decode_bmp, decode_bmp_with_limits, encode_bmp};
pub use draw::{draw_line, draw_thick_line};
pub use enough::{Stop, Unstoppable};
pub use error::RasterError;
pub use filter::{apply_channel, fill_outside, recolor_neighbors};
pub use flip::flip_blocks;
pub use geometry::{diagonal_mirror, paving, rotate_region, shift};
pub use image::{Image, ImageInfo};
pub use limits::Limits;
pub use operation::Operation;
pub use pixel::{Angle, Axis, Channel, Color, Orientation, Point, Region};
pub use resample::{blur, compress};
pub use shapes::{draw_rhombus, draw_square};
