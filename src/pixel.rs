/// Pixel memory layout.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// 4 channels, 8-bit BGRA. The canonical layout of every decoded image.
    Bgra8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Bgra8 | Self::Rgba8 => 4,
        }
    }
}

/// Pixel encodings found in TGA color maps and true-color image data.
///
/// TGA stores multi-byte pixels little-endian, so the channel bytes of the
/// 8-bit formats appear in B, G, R(, A) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    /// 16-bit `ARRRRRGG GGGBBBBB`, 5 bits per color channel. The attribute bit is ignored.
    Rgb5,
    /// 24-bit, 8 bits per channel.
    Rgb8,
    /// 32-bit, 8 bits per channel with alpha.
    Rgba8,
}

impl SourceFormat {
    /// Map a TGA bit depth (pixel depth or color-map entry size) to an encoding.
    pub fn from_bit_depth(bits: u8) -> Option<Self> {
        match bits {
            16 => Some(Self::Rgb5),
            24 => Some(Self::Rgb8),
            32 => Some(Self::Rgba8),
            _ => None,
        }
    }

    /// Bytes occupied by one encoded pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb5 => 2,
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }

    /// Convert one encoded pixel to canonical BGRA8.
    ///
    /// `src` must hold at least [`Self::bytes_per_pixel`] bytes.
    #[inline]
    pub fn to_bgra8(self, src: &[u8]) -> [u8; 4] {
        match self {
            Self::Rgb5 => {
                let v = u32::from(u16::from_le_bytes([src[0], src[1]]));
                [
                    expand_channel(v & 0x1f, 5),
                    expand_channel((v >> 5) & 0x1f, 5),
                    expand_channel((v >> 10) & 0x1f, 5),
                    0xff,
                ]
            }
            Self::Rgb8 => [src[0], src[1], src[2], 0xff],
            Self::Rgba8 => [src[0], src[1], src[2], src[3]],
        }
    }
}

/// Multiplier table for replicating an N-bit value into 8 bits.
const MUL_TABLE: [u32; 9] = [
    0,    // 0 bits
    0xff, // 1 bit:  0b11111111
    0x55, // 2 bits: 0b01010101
    0x49, // 3 bits: 0b01001001
    0x11, // 4 bits: 0b00010001
    0x21, // 5 bits: 0b00100001
    0x41, // 6 bits: 0b01000001
    0x81, // 7 bits: 0b10000001
    0x01, // 8 bits: 0b00000001
];

const SHIFT_TABLE: [u32; 9] = [0, 0, 0, 1, 0, 2, 4, 6, 0];

/// Scale an N-bit channel value (1..=8 bits) to the full 8-bit range, so that
/// zero stays zero and the maximum maps to 255.
#[inline]
pub(crate) fn expand_channel(v: u32, bits: u32) -> u8 {
    let bits = bits.clamp(0, 8) as usize;
    ((v.wrapping_mul(MUL_TABLE[bits])) >> SHIFT_TABLE[bits]) as u8
}

/// Typed pixels that can view a decoded buffer.
#[cfg(feature = "rgb")]
pub trait DecodePixel: Copy + 'static {
    /// Memory layout this pixel type corresponds to.
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::alt::BGRA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgra8
    }
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGBA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgba8
    }
}
