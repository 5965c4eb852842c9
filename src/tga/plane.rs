//! Pixel plane reconstruction, one strategy per image type.
//!
//! Every strategy walks the raw data in storage order and writes each pixel
//! at its [`map_coordinates`] position in a canonical BGRA8 buffer.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use super::colormap::ColorMap;
use super::header::{ImageType, TgaHeader};
use super::orient::{OriginMode, map_coordinates};
use crate::error::TgaError;
use crate::pixel::{PixelLayout, SourceFormat};

/// Plane decode strategy, selected from the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlaneKind {
    Blank,
    ColorMapped,
    TrueColor(SourceFormat),
}

impl PlaneKind {
    /// Pick a strategy, or fail for image types and depths with no decoder.
    ///
    /// Color-mapped depth checks happen in [`decode_color_mapped`], after the
    /// color map itself has been validated.
    pub(crate) fn select(header: &TgaHeader) -> Result<Self, TgaError> {
        match header.image_type {
            ImageType::NoData => Ok(Self::Blank),
            ImageType::ColorMapped => Ok(Self::ColorMapped),
            ImageType::TrueColor => SourceFormat::from_bit_depth(header.image.pixel_depth)
                .map(Self::TrueColor)
                .ok_or_else(|| {
                    TgaError::InvalidHeader(alloc::format!(
                        "invalid pixel format: {}-bit true-color",
                        header.image.pixel_depth
                    ))
                }),
            ImageType::BlackAndWhite => Err(TgaError::UnsupportedVariant(
                "black-and-white TGA images are not supported".into(),
            )),
            ImageType::RleColorMapped | ImageType::RleTrueColor | ImageType::RleBlackAndWhite => {
                Err(TgaError::UnsupportedVariant(
                    "run-length encoded TGA images are not supported".into(),
                ))
            }
        }
    }
}

/// Output geometry shared by the strategies.
#[derive(Clone, Copy, Debug)]
struct Plane {
    width: u32,
    height: u32,
    mode: OriginMode,
}

impl Plane {
    fn new(header: &TgaHeader) -> Self {
        Self {
            width: u32::from(header.image.width),
            height: u32::from(header.image.height),
            mode: header.image.descriptor.origin_mode(),
        }
    }

    fn alloc(&self) -> Vec<u8> {
        let bpp = PixelLayout::Bgra8.bytes_per_pixel();
        vec![0u8; self.width as usize * self.height as usize * bpp]
    }

    /// Visit storage rows top to bottom, handing each its output row and
    /// source bytes.
    fn for_each_row<'r>(
        &self,
        raw: &'r [u8],
        src_bpp: usize,
        out: &mut [u8],
        stop: &dyn Stop,
        mut f: impl FnMut(&'r [u8], &mut [u8]) -> Result<(), TgaError>,
    ) -> Result<(), TgaError> {
        let w = self.width as usize;
        let src_stride = w * src_bpp;
        let dst_stride = w * 4;
        let rows = raw.chunks_exact(src_stride).take(self.height as usize);
        for (y, src_row) in (0..self.height).zip(rows) {
            if y % 16 == 0 {
                stop.check()?;
            }
            let (_, ry) = map_coordinates(self.width, self.height, self.mode, 0, y);
            let dst_start = ry as usize * dst_stride;
            f(src_row, &mut out[dst_start..dst_start + dst_stride])?;
        }
        Ok(())
    }

    /// Output column for storage column `x`.
    #[inline]
    fn column(&self, x: u32) -> usize {
        let (rx, _) = map_coordinates(self.width, self.height, self.mode, x, 0);
        rx as usize
    }
}

/// Type 0: no image data, a zero-filled image of the declared size.
pub(crate) fn decode_blank(header: &TgaHeader) -> Vec<u8> {
    Plane::new(header).alloc()
}

/// Type 1: one 8-bit color map index per pixel.
pub(crate) fn decode_color_mapped(
    header: &TgaHeader,
    color_map: &ColorMap,
    raw: &[u8],
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    if header.image.pixel_depth != 8 {
        return Err(TgaError::UnsupportedVariant(alloc::format!(
            "color-mapped TGA with {}-bit indices is not supported",
            header.image.pixel_depth
        )));
    }
    let plane = Plane::new(header);
    check_raw_len(&plane, raw, 1)?;
    let mut out = plane.alloc();
    plane.for_each_row(raw, 1, &mut out, stop, |src, dst| {
        for (x, &index) in (0..plane.width).zip(src) {
            let rx = plane.column(x);
            dst[rx * 4..rx * 4 + 4].copy_from_slice(&color_map.get(index)?);
        }
        Ok(())
    })?;
    Ok(out)
}

/// Type 2: direct 16, 24 or 32-bit pixels.
pub(crate) fn decode_true_color(
    header: &TgaHeader,
    format: SourceFormat,
    raw: &[u8],
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    let plane = Plane::new(header);
    let bpp = format.bytes_per_pixel();
    check_raw_len(&plane, raw, bpp)?;
    let mut out = plane.alloc();
    if format == SourceFormat::Rgba8 && plane.mode.is_identity() {
        // Storage already is top-left BGRA8.
        plane.for_each_row(raw, bpp, &mut out, stop, |src, dst| {
            dst.copy_from_slice(src);
            Ok(())
        })?;
        return Ok(out);
    }
    plane.for_each_row(raw, bpp, &mut out, stop, |src, dst| {
        for (x, px) in (0..plane.width).zip(src.chunks_exact(bpp)) {
            let rx = plane.column(x);
            dst[rx * 4..rx * 4 + 4].copy_from_slice(&format.to_bgra8(px));
        }
        Ok(())
    })?;
    Ok(out)
}

fn check_raw_len(plane: &Plane, raw: &[u8], bpp: usize) -> Result<(), TgaError> {
    let needed = plane.width as usize * plane.height as usize * bpp;
    if raw.len() < needed {
        return Err(TgaError::UnexpectedEof);
    }
    Ok(())
}
