use crate::decode::{DecodeWarning, Origin};
use crate::error::TgaError;
use crate::tga::cursor::Cursor;
use crate::tga::header::{HeaderParser, ImageType, TgaHeader};
use crate::tga::orient::OriginMode;

/// Header-level facts about a TGA file, available without decoding pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub image_type: ImageType,
    /// Bits per stored pixel (or per color map index).
    pub bits_per_pixel: u8,
    /// Attribute (alpha) bits per pixel declared by the descriptor.
    pub alpha_bits: u8,
    pub origin: Origin,
    pub origin_mode: OriginMode,
    /// Color map entry count, 0 when the file has none.
    pub color_map_len: u16,
    pub warnings: alloc::vec::Vec<DecodeWarning>,
    header: TgaHeader,
}

impl ImageInfo {
    /// Parse and validate the header only. Color map and pixel data are
    /// neither read nor required to be present.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        let mut parser = HeaderParser::default();
        let header = parser.parse(&mut Cursor::new(data))?;
        let spec = &header.image;
        Ok(Self {
            width: u32::from(spec.width),
            height: u32::from(spec.height),
            image_type: header.image_type,
            bits_per_pixel: spec.pixel_depth,
            alpha_bits: spec.descriptor.alpha_bits(),
            origin: Origin {
                x: spec.origin_x,
                y: spec.origin_y,
            },
            origin_mode: spec.descriptor.origin_mode(),
            color_map_len: header.color_map.length,
            warnings: parser.warnings,
            header,
        })
    }

    /// The full validated header.
    pub fn header(&self) -> &TgaHeader {
        &self.header
    }
}
