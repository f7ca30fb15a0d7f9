//! Error types.

use thiserror::Error;

/// Errors raised while validating the heat map configuration.
///
/// Short or ragged input is never an error: missing bytes render as zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The width was zero (or did not parse as a number).
    #[error("width must be greater than zero")]
    ZeroWidth,

    /// Bitmap rows must cover whole bytes.
    #[error("width {width} is not a multiple of 8, required by the u1 format")]
    UnalignedBitmapWidth {
        /// The rejected width in pixels.
        width: usize,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
