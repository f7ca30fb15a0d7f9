//! Geometry: How an input buffer folds into pixel-rows and output rows.

use crate::error::{ConfigError, Result};
use std::num::NonZeroUsize;

/// Upper bound on the bytes one glyph costs in the output stream.
///
/// `ESC[38;2;255;255;255m` + `ESC[48;2;255;255;255m` + `▀` + `ESC[0m`.
pub const MAX_GLYPH_BYTES: usize = 19 + 19 + 3 + 4;

/// Ceiling on the output capacity hint; larger maps grow the buffer on demand.
pub const MAX_CAPACITY_HINT: usize = 64 * 1024 * 1024;

/// Pixel encoding of the input data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DataFormat {
    /// One bit per pixel, eight pixels packed per byte, LSB first.
    U1,
    /// One byte per pixel.
    #[default]
    U8,
}

impl DataFormat {
    /// Interpret a command line format name.
    ///
    /// Only `u1` selects the bitmap format, anything else is a byte-map.
    pub fn from_arg(name: &str) -> Self {
        if name == "u1" { Self::U1 } else { Self::U8 }
    }

    /// Number of pixels stored in one input byte.
    #[inline]
    pub const fn pixels_per_byte(self) -> usize {
        match self {
            Self::U1 => 8,
            Self::U8 => 1,
        }
    }
}

/// Validated row geometry for one data format and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    format: DataFormat,
    width: NonZeroUsize,
}

impl Geometry {
    /// Create the geometry for `width` pixels per row.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroWidth`] for a zero width and
    /// [`ConfigError::UnalignedBitmapWidth`] when a `u1` width does not
    /// cover whole bytes.
    pub fn new(format: DataFormat, width: usize) -> Result<Self> {
        let width = NonZeroUsize::new(width).ok_or(ConfigError::ZeroWidth)?;
        if width.get() % format.pixels_per_byte() != 0 {
            return Err(ConfigError::UnalignedBitmapWidth { width: width.get() });
        }
        Ok(Self { format, width })
    }

    /// The data format.
    #[inline]
    pub const fn format(&self) -> DataFormat {
        self.format
    }

    /// Pixels per row, which is also glyphs per output row.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width.get()
    }

    /// Input bytes consumed per pixel-row.
    #[inline]
    pub const fn row_stride_bytes(&self) -> usize {
        self.width.get() / self.format.pixels_per_byte()
    }

    /// Number of pixel-rows needed for `len` input bytes (last one may be partial).
    #[inline]
    pub const fn pixel_height(&self, len: usize) -> usize {
        len.div_ceil(self.row_stride_bytes())
    }

    /// Number of terminal rows, two pixel-rows per row.
    #[inline]
    pub const fn output_rows(&self, len: usize) -> usize {
        self.pixel_height(len).div_ceil(2)
    }

    /// Number of blank lines inserted for `len` input bytes.
    ///
    /// A separator precedes every output row whose top pixel-row `y > 0`
    /// is a multiple of `stride`. Only even `y` are visited, so an odd
    /// stride fires every `2 * stride` pixel-rows.
    pub const fn separator_lines(&self, len: usize, stride: Option<NonZeroUsize>) -> usize {
        let Some(stride) = stride else {
            return 0;
        };
        let step = if stride.get() % 2 == 0 { stride.get() } else { stride.get().saturating_mul(2) };
        self.pixel_height(len).saturating_sub(1) / step
    }

    /// Capacity hint for the rendered output of `len` input bytes.
    ///
    /// Saturates instead of overflowing and never exceeds [`MAX_CAPACITY_HINT`].
    pub const fn estimated_output_len(&self, len: usize, stride: Option<NonZeroUsize>) -> usize {
        let row_len = self.width().saturating_mul(MAX_GLYPH_BYTES).saturating_add(1);
        let hint = self
            .output_rows(len)
            .saturating_mul(row_len)
            .saturating_add(self.separator_lines(len, stride));
        if hint > MAX_CAPACITY_HINT { MAX_CAPACITY_HINT } else { hint }
    }
}
