use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use enough::Stop;

use crate::error::TgaError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// Image origin from the TGA header (screen position of the lower-left corner
/// for the original display device). Informational only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Origin {
    pub x: u16,
    pub y: u16,
}

/// Non-fatal anomalies found while decoding.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeWarning {
    /// Image descriptor bits 6-7 are not zero. Carries their value.
    ReservedDescriptorBits(u8),
}

impl DecodeWarning {
    pub(crate) fn emit(self) {
        #[cfg(feature = "log")]
        match self {
            Self::ReservedDescriptorBits(bits) => {
                log::warn!(target: "zentga", "image descriptor reserved bits are not zero ({bits:#04b})");
            }
        }
    }
}

/// A decoded image in canonical [`PixelLayout::Bgra8`], top-left origin,
/// rows tightly packed.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    origin: Origin,
    warnings: Vec<DecodeWarning>,
}

impl DecodeOutput {
    pub(crate) fn new(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        origin: Origin,
        warnings: Vec<DecodeWarning>,
    ) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self {
            pixels,
            width,
            height,
            layout: PixelLayout::Bgra8,
            origin,
            warnings,
        }
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// BGRA bytes of the pixel at column `x`, row `y` (row 0 is the top).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = (y as usize * self.width as usize + x as usize) * 4;
        let p = self.pixels.get(off..off + 4)?;
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Origin recorded in the header.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Non-fatal anomalies found in the header.
    pub fn warnings(&self) -> &[DecodeWarning] {
        &self.warnings
    }

    /// Copy the pixels into RGBA8 order.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = self.pixels.clone();
        swap_red_blue(&mut out);
        out
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Returns [`TgaError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], TgaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(TgaError::LayoutMismatch {
                expected: P::layout(),
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    ///
    /// Returns [`TgaError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(&self) -> Result<imgref::ImgRef<'_, P>, TgaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    ///
    /// Returns [`TgaError::LayoutMismatch`] if the pixel layout doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel>(&self) -> Result<imgref::ImgVec<P>, TgaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.width as usize,
            self.height as usize,
        ))
    }
}

#[cfg(feature = "simd")]
fn swap_red_blue(buf: &mut [u8]) {
    // Length is always a multiple of 4.
    if garb::bytes::bgra_to_rgba_inplace(buf).is_err() {
        swap_red_blue_scalar(buf);
    }
}

#[cfg(not(feature = "simd"))]
fn swap_red_blue(buf: &mut [u8]) {
    swap_red_blue_scalar(buf);
}

fn swap_red_blue_scalar(buf: &mut [u8]) {
    for px in buf.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
}

/// Decode request builder.
///
/// ```no_run
/// use zentga::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your TGA bytes
/// let limits = Limits { max_pixels: Some(16_000_000), ..Default::default() };
/// let image = DecodeRequest::new(data).with_limits(&limits).decode(Unstoppable)?;
/// println!("{}x{}", image.width, image.height);
/// # Ok::<(), zentga::TgaError>(())
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

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, TgaError> {
        crate::tga::decode(self.data, self.limits, &stop)
    }
}
