//! Scanline origin handling.
//!
//! TGA stores rows bottom-to-top unless the descriptor says otherwise, and may
//! mirror columns. Decoders walk storage order and write every pixel through
//! [`map_coordinates`], so output is always top-left origin.

/// The two origin bits of the image descriptor (descriptor bits 4 and 5).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OriginMode {
    /// Columns are stored right-to-left.
    pub flip_x: bool,
    /// The first stored row is the top row.
    pub top_origin: bool,
}

impl OriginMode {
    /// Build from the 2-bit field: bit 0 = right-to-left, bit 1 = top origin.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            flip_x: bits & 0b01 != 0,
            top_origin: bits & 0b10 != 0,
        }
    }

    /// Whether storage order already matches a top-left output.
    pub fn is_identity(self) -> bool {
        !self.flip_x && self.top_origin
    }
}

/// Translate a storage position `(x, y)` in `[0, width) × [0, height)` to its
/// top-left-origin output position.
///
/// The mapping is its own inverse.
#[inline]
pub fn map_coordinates(width: u32, height: u32, mode: OriginMode, x: u32, y: u32) -> (u32, u32) {
    debug_assert!(x < width && y < height);
    let rx = if mode.flip_x { width - 1 - x } else { x };
    let ry = if mode.top_origin { y } else { height - 1 - y };
    (rx, ry)
}
