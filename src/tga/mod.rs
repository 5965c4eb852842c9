//! TGA (Truevision Targa) decoder.
//!
//! Supports uncompressed color-mapped (8-bit indices into a 16/24/32-bit
//! color map), uncompressed true-color (16/24/32-bit) and "no image data"
//! files. Run-length encoded and black-and-white images are recognized and
//! rejected with [`TgaError::UnsupportedVariant`].
//!
//! Decoding runs: header → color map → raw image data → plane strategy. Any
//! failure discards everything built so far.

mod colormap;
pub(crate) mod cursor;
pub(crate) mod header;
pub(crate) mod orient;
mod plane;

use enough::Stop;

use crate::decode::{DecodeOutput, DecodeWarning, Origin};
use crate::error::TgaError;
use crate::limits::Limits;
use colormap::ColorMap;
use cursor::Cursor;
use header::HeaderParser;
use plane::PlaneKind;

/// Decode a complete TGA file.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, TgaError> {
    decode_with(&mut HeaderParser::default(), data, limits, stop)
}

fn decode_with(
    parser: &mut HeaderParser,
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, TgaError> {
    let mut cursor = Cursor::new(data);
    let header = parser.parse(&mut cursor)?;
    let width = u32::from(header.image.width);
    let height = u32::from(header.image.height);
    Limits::check_output(limits, width, height)?;

    let color_map_data = if header.has_color_map {
        Some(cursor.read_bytes(header.color_map.byte_len())?)
    } else {
        None
    };

    // RLE and unsupported types fail here, before image data is touched.
    let kind = PlaneKind::select(&header)?;

    let raw: &[u8] = if header.image_type.has_raw_image_data() {
        cursor.read_bytes(header.image.raw_data_len()?)?
    } else {
        &[]
    };

    stop.check()?;
    let pixels = match kind {
        PlaneKind::Blank => plane::decode_blank(&header),
        PlaneKind::ColorMapped => {
            let color_map = ColorMap::load(&header.color_map, color_map_data.unwrap_or(&[]))?;
            plane::decode_color_mapped(&header, &color_map, raw, stop)?
        }
        PlaneKind::TrueColor(format) => plane::decode_true_color(&header, format, raw, stop)?,
    };

    Ok(DecodeOutput::new(
        pixels,
        width,
        height,
        Origin {
            x: header.image.origin_x,
            y: header.image.origin_y,
        },
        core::mem::take(&mut parser.warnings),
    ))
}

/// Stateful decoder that holds on to the most recent result.
///
/// [`image`](Self::image) only succeeds after a successful
/// [`decode`](Self::decode); a failed decode never leaves an earlier image
/// reachable. Callers sharing one instance across threads must serialize
/// access themselves; [`crate::decode_tga`] is the stateless alternative.
///
/// ```no_run
/// use zentga::{TgaDecoder, Unstoppable};
///
/// let data: &[u8] = &[]; // your TGA bytes
/// let mut decoder = TgaDecoder::new();
/// if decoder.decode(data, Unstoppable).is_ok() {
///     let image = decoder.image()?;
///     println!("{}x{} at {:?}", image.width, image.height, decoder.origin());
/// }
/// # Ok::<(), zentga::TgaError>(())
/// ```
#[derive(Debug, Default)]
pub struct TgaDecoder {
    limits: Option<Limits>,
    image: Option<DecodeOutput>,
    origin: Option<Origin>,
    warnings: alloc::vec::Vec<DecodeWarning>,
}

impl TgaDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode `data`, replacing any previous result.
    pub fn decode(&mut self, data: &[u8], stop: impl Stop) -> Result<(), TgaError> {
        self.image = None;
        let mut parser = HeaderParser::default();
        let result = decode_with(&mut parser, data, self.limits.as_ref(), &stop);
        self.origin = parser.origin;
        match result {
            Ok(image) => {
                self.warnings = image.warnings().to_vec();
                self.image = Some(image);
                Ok(())
            }
            Err(e) => {
                self.warnings = parser.warnings;
                Err(e)
            }
        }
    }

    /// The image from the last decode, if it succeeded.
    pub fn image(&self) -> Result<&DecodeOutput, TgaError> {
        self.image
            .as_ref()
            .ok_or(TgaError::InvalidState("bad image decode"))
    }

    /// Move the image out, leaving the decoder without a result.
    pub fn take_image(&mut self) -> Result<DecodeOutput, TgaError> {
        self.image
            .take()
            .ok_or(TgaError::InvalidState("bad image decode"))
    }

    /// Origin read by the last decode, even if it later failed. `None` when
    /// the header was rejected before the origin field.
    pub fn origin(&self) -> Option<Origin> {
        self.origin
    }

    /// Warnings raised by the last decode, successful or not.
    pub fn warnings(&self) -> &[DecodeWarning] {
        &self.warnings
    }
}
