//! Bounds-checked little-endian reader over the input buffer.

use crate::error::TgaError;

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Move to an absolute offset. Seeking exactly to the end is allowed.
    pub(crate) fn set_position(&mut self, pos: usize) -> Result<(), TgaError> {
        if pos > self.data.len() {
            return Err(TgaError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    pub(crate) fn skip(&mut self, n: usize) -> Result<(), TgaError> {
        let new_pos = self.pos.checked_add(n).ok_or(TgaError::UnexpectedEof)?;
        self.set_position(new_pos)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, TgaError> {
        let b = *self.data.get(self.pos).ok_or(TgaError::UnexpectedEof)?;
        self.pos += 1;
        Ok(b)
    }

    pub(crate) fn read_u16_le(&mut self) -> Result<u16, TgaError> {
        let [a, b] = self.read_fixed_bytes::<2>()?;
        Ok(u16::from_le_bytes([a, b]))
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], TgaError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_bytes(N)?);
        Ok(buf)
    }

    /// Borrow the next `n` bytes and advance past them. Nothing is consumed
    /// when fewer than `n` bytes remain.
    pub(crate) fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], TgaError> {
        let end = self.pos.checked_add(n).ok_or(TgaError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(TgaError::UnexpectedEof)?;
        self.pos = end;
        Ok(bytes)
    }
}
