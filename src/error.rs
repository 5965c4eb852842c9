use alloc::string::String;
use enough::StopReason;

/// Errors from TGA decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid decoder state: {0}")]
    InvalidState(&'static str),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

/// Coarse classification of a [`TgaError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input violates the TGA format's structural constraints.
    Format,
    /// The input is well-formed but uses a feature this decoder does not implement.
    Unsupported,
    /// The caller used the API out of order (no successful decode, wrong pixel type).
    InvalidState,
    /// A read ran past the end of the input.
    Bounds,
    /// A configured resource limit was exceeded.
    Limit,
    /// The decode was stopped through [`enough::Stop`].
    Cancelled,
}

impl TgaError {
    /// Classify this error. "Corrupt" and "recognized but unsupported" input
    /// are always distinguishable.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidHeader(_) | Self::InvalidData(_) => ErrorKind::Format,
            Self::UnsupportedVariant(_) => ErrorKind::Unsupported,
            Self::InvalidState(_) | Self::LayoutMismatch { .. } => ErrorKind::InvalidState,
            Self::UnexpectedEof => ErrorKind::Bounds,
            Self::DimensionsTooLarge { .. } | Self::LimitExceeded(_) => ErrorKind::Limit,
            Self::Cancelled(_) => ErrorKind::Cancelled,
        }
    }
}

impl From<StopReason> for TgaError {
    fn from(r: StopReason) -> Self {
        TgaError::Cancelled(r)
    }
}
