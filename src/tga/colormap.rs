use alloc::vec::Vec;

use super::header::ColorMapSpec;
use crate::error::TgaError;
use crate::pixel::SourceFormat;

/// Color map converted to canonical BGRA8, indexed by the raw values stored
/// in color-mapped image data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ColorMap {
    entries: Vec<[u8; 4]>,
}

impl ColorMap {
    /// Convert the raw color map block. `raw` must be exactly
    /// [`ColorMapSpec::byte_len`] bytes.
    pub(crate) fn load(spec: &ColorMapSpec, raw: &[u8]) -> Result<Self, TgaError> {
        let format = SourceFormat::from_bit_depth(spec.entry_bits).ok_or_else(|| {
            TgaError::InvalidHeader(alloc::format!(
                "invalid color map color format: {}-bit entries",
                spec.entry_bits
            ))
        })?;
        let entries = raw
            .chunks_exact(format.bytes_per_pixel())
            .take(usize::from(spec.length))
            .map(|entry| format.to_bgra8(entry))
            .collect::<Vec<_>>();
        if entries.len() != usize::from(spec.length) {
            return Err(TgaError::UnexpectedEof);
        }
        Ok(Self { entries })
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up an index, failing for anything outside the table.
    #[inline]
    pub(crate) fn get(&self, index: u8) -> Result<[u8; 4], TgaError> {
        self.entries
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| {
                TgaError::InvalidData(alloc::format!(
                    "invalid color map index {index} (color map has {} entries)",
                    self.len()
                ))
            })
    }
}
