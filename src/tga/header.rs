//! TGA header parsing and validation.
//!
//! Layout (all multi-byte fields little-endian):
//!
//! ```text
//!  0  id length            u8
//!  1  color map type       u8   (0 or 1)
//!  2  image type           u8
//!  3  color map spec       5 bytes: first index u16, length u16, entry size u8
//!  8  image spec           10 bytes: x u16, y u16, width u16, height u16,
//!                                    pixel depth u8, descriptor u8
//! 18  image ID             `id length` bytes
//! ```

use alloc::vec::Vec;

use super::cursor::Cursor;
use super::orient::OriginMode;
use crate::decode::{DecodeWarning, Origin};
use crate::error::TgaError;

/// Size of the fixed header, before the image ID field.
pub const HEADER_LEN: usize = 18;

/// Image type field values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ImageType {
    NoData = 0,
    ColorMapped = 1,
    TrueColor = 2,
    BlackAndWhite = 3,
    RleColorMapped = 9,
    RleTrueColor = 10,
    RleBlackAndWhite = 11,
}

impl ImageType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::NoData),
            1 => Some(Self::ColorMapped),
            2 => Some(Self::TrueColor),
            3 => Some(Self::BlackAndWhite),
            9 => Some(Self::RleColorMapped),
            10 => Some(Self::RleTrueColor),
            11 => Some(Self::RleBlackAndWhite),
            _ => None,
        }
    }

    pub fn is_rle(self) -> bool {
        matches!(
            self,
            Self::RleColorMapped | Self::RleTrueColor | Self::RleBlackAndWhite
        )
    }

    /// Whether an uncompressed image data block follows the color map.
    pub fn has_raw_image_data(self) -> bool {
        matches!(
            self,
            Self::ColorMapped | Self::TrueColor | Self::BlackAndWhite
        )
    }
}

/// Color map specification. All zero when the file has no color map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorMapSpec {
    pub first_entry_index: u16,
    pub length: u16,
    /// Bits per color map entry.
    pub entry_bits: u8,
}

impl ColorMapSpec {
    /// Size of the color map data block in bytes.
    pub fn byte_len(&self) -> usize {
        usize::from(self.length) * usize::from(self.entry_bits) / 8
    }
}

/// Image descriptor byte: alpha bits (0-3), origin mode (4-5), reserved (6-7).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Descriptor(pub u8);

impl Descriptor {
    pub fn alpha_bits(self) -> u8 {
        self.0 & 0x0f
    }

    pub fn origin_mode(self) -> OriginMode {
        OriginMode::from_bits((self.0 >> 4) & 0b11)
    }

    /// Must be zero; a nonzero value only produces a warning.
    pub fn reserved_bits(self) -> u8 {
        (self.0 >> 6) & 0b11
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSpec {
    pub origin_x: u16,
    pub origin_y: u16,
    /// Never zero.
    pub width: u16,
    /// Never zero.
    pub height: u16,
    pub pixel_depth: u8,
    pub descriptor: Descriptor,
}

impl ImageSpec {
    /// `width * height * pixel_depth / 8`, the size of an uncompressed image
    /// data block.
    pub fn raw_data_len(&self) -> Result<usize, TgaError> {
        usize::from(self.width)
            .checked_mul(usize::from(self.height))
            .and_then(|px| px.checked_mul(usize::from(self.pixel_depth)))
            .map(|bits| bits / 8)
            .ok_or(TgaError::DimensionsTooLarge {
                width: u32::from(self.width),
                height: u32::from(self.height),
            })
    }
}

/// A validated TGA header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TgaHeader {
    pub id_length: u8,
    pub has_color_map: bool,
    pub image_type: ImageType,
    pub color_map: ColorMapSpec,
    pub image: ImageSpec,
}

/// Parses the header and records side observations that outlive a failed
/// parse: the image origin once it has been read, and non-fatal warnings.
#[derive(Debug, Default)]
pub(crate) struct HeaderParser {
    pub origin: Option<Origin>,
    pub warnings: Vec<DecodeWarning>,
}

impl HeaderParser {
    /// Read and validate the header, leaving `cursor` at the first byte after
    /// the image ID field (the start of the color map data, if any).
    pub(crate) fn parse(&mut self, cursor: &mut Cursor<'_>) -> Result<TgaHeader, TgaError> {
        let id_length = cursor.read_u8()?;

        let color_map_type = cursor.read_u8()?;
        if color_map_type > 1 {
            return Err(TgaError::InvalidHeader(alloc::format!(
                "invalid color map type {color_map_type}"
            )));
        }
        let has_color_map = color_map_type == 1;

        let raw_type = cursor.read_u8()?;
        let image_type = ImageType::from_u8(raw_type).ok_or_else(|| {
            TgaError::InvalidHeader(alloc::format!("invalid image type {raw_type}"))
        })?;

        // The 5 color map spec bytes are present either way.
        let color_map = if has_color_map {
            ColorMapSpec {
                first_entry_index: cursor.read_u16_le()?,
                length: cursor.read_u16_le()?,
                entry_bits: cursor.read_u8()?,
            }
        } else {
            cursor.skip(5)?;
            ColorMapSpec::default()
        };

        let origin_x = cursor.read_u16_le()?;
        let origin_y = cursor.read_u16_le()?;
        self.origin = Some(Origin {
            x: origin_x,
            y: origin_y,
        });

        let width = cursor.read_u16_le()?;
        if width == 0 {
            return Err(TgaError::InvalidHeader("zero dimension: width is zero".into()));
        }
        let height = cursor.read_u16_le()?;
        if height == 0 {
            return Err(TgaError::InvalidHeader("zero dimension: height is zero".into()));
        }

        let pixel_depth = cursor.read_u8()?;
        let descriptor = Descriptor(cursor.read_u8()?);
        if descriptor.reserved_bits() != 0 {
            let warning = DecodeWarning::ReservedDescriptorBits(descriptor.reserved_bits());
            warning.emit();
            self.warnings.push(warning);
        }

        // Image ID, unused.
        cursor.skip(usize::from(id_length))?;

        Ok(TgaHeader {
            id_length,
            has_color_map,
            image_type,
            color_map,
            image: ImageSpec {
                origin_x,
                origin_y,
                width,
                height,
                pixel_depth,
                descriptor,
            },
        })
    }
}
