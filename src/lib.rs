//! # zentga
//!
//! TGA (Truevision Targa) image decoder.
//!
//! Every decode produces the same canonical layout: 8-bit BGRA, rows packed
//! top to bottom, regardless of the file's bit depth or scanline origin.
//!
//! ## Supported
//!
//! - **Type 0** — no image data (zero-filled image of the declared size)
//! - **Type 1** — uncompressed color-mapped, 8-bit indices, 16/24/32-bit color map
//! - **Type 2** — uncompressed true-color, 16 (5-5-5), 24 and 32-bit pixels
//! - All four scanline origins (bottom-left, bottom-right, top-left, top-right)
//!
//! ## Recognized but rejected
//!
//! Black-and-white (type 3) and run-length encoded (types 9, 10, 11) images
//! fail with [`TgaError::UnsupportedVariant`], which [`TgaError::kind`]
//! reports as [`ErrorKind::Unsupported`] rather than a format error.
//!
//! ## Non-Goals
//!
//! - Encoding
//! - Streaming or partial decode
//! - Footer and extension area parsing
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.image_type);
//!
//! let image = zentga::decode_tga(data, Unstoppable)?;
//! let top_left = image.pixel(0, 0); // [b, g, r, a]
//! let rgba = image.to_rgba8();
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod info;
mod limits;
mod pixel;
mod tga;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest, DecodeWarning, Origin};
pub use enough::{Stop, Unstoppable};
pub use error::{ErrorKind, TgaError};
pub use info::ImageInfo;
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::{PixelLayout, SourceFormat};
pub use tga::TgaDecoder;
pub use tga::header::{ColorMapSpec, Descriptor, HEADER_LEN, ImageSpec, ImageType, TgaHeader};
pub use tga::orient::{OriginMode, map_coordinates};

/// Decode a TGA file to canonical BGRA8.
pub fn decode_tga(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, TgaError> {
    tga::decode(data, None, &stop)
}

/// Decode a TGA file with resource limits.
pub fn decode_tga_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<DecodeOutput, TgaError> {
    tga::decode(data, Some(limits), &stop)
}

/// Read and validate only the header.
pub fn probe_tga(data: &[u8]) -> Result<ImageInfo, TgaError> {
    ImageInfo::from_bytes(data)
}
