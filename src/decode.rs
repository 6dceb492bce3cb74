use enough::Stop;

use crate::error::RasterError;
use crate::image::Image;
use crate::limits::Limits;

/// Builder for decoding a BMP byte stream into an [`Image`].
///
/// ```no_run
/// use zenraster::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits { max_pixels: Some(64_000_000), ..Default::default() };
/// let image = DecodeRequest::new(data).with_limits(&limits).decode(Unstoppable)?;
/// println!("{}", image.info());
/// # Ok::<(), zenraster::RasterError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before allocating the pixel grid.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode, checking `stop` periodically while reading rows.
    pub fn decode(self, stop: impl Stop) -> Result<Image, RasterError> {
        crate::bmp::decode::decode_image(self.data, self.limits, &stop)
    }
}

/// Decode BMP bytes with no limits.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Image, RasterError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode BMP bytes, enforcing `limits`.
pub fn decode_bmp_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Image, RasterError> {
    DecodeRequest::new(data).with_limits(limits).decode(stop)
}

/// Serialize an image back to BMP bytes.
///
/// Header fields are written as stored; rows are emitted bottom-up with
/// padding to the stride of the current width.
pub fn encode_bmp(image: &Image, stop: impl Stop) -> Result<alloc::vec::Vec<u8>, RasterError> {
    crate::bmp::encode_image(image, &stop)
}
