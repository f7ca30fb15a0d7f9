//! Render configuration.

use crate::color::ColorScheme;
use crate::error::Result;
use crate::layout::{DataFormat, Geometry};
use std::num::NonZeroUsize;

/// Default pixels per row.
pub const DEFAULT_WIDTH: usize = 64;

/// Everything the renderer needs besides the data itself.
///
/// # Example
///
/// ```
/// use heatmap::{ColorScheme, DataFormat, RenderConfig};
/// use std::num::NonZeroUsize;
///
/// let config = RenderConfig::new(DataFormat::U8, 32)?
///     .with_separator_stride(NonZeroUsize::new(16))
///     .with_color_scheme(ColorScheme::Ansi256);
/// assert_eq!(config.geometry().row_stride_bytes(), 32);
/// # Ok::<(), heatmap::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    geometry: Geometry,
    separator_stride: Option<NonZeroUsize>,
    color_scheme: ColorScheme,
}

impl RenderConfig {
    /// Create a grayscale configuration without separators.
    ///
    /// # Errors
    ///
    /// Fails when `width` is invalid for `format`, see [`Geometry::new`].
    pub fn new(format: DataFormat, width: usize) -> Result<Self> {
        Ok(Self {
            geometry: Geometry::new(format, width)?,
            separator_stride: None,
            color_scheme: ColorScheme::default(),
        })
    }

    /// Insert a blank line every `stride` pixel-rows (`None` disables them).
    ///
    /// The stride should be even to line up with the two-row packing.
    #[must_use]
    pub const fn with_separator_stride(mut self, stride: Option<NonZeroUsize>) -> Self {
        self.separator_stride = stride;
        self
    }

    /// Set the color scheme.
    #[must_use]
    pub const fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    /// The validated geometry.
    #[inline]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The data format.
    #[inline]
    pub const fn format(&self) -> DataFormat {
        self.geometry.format()
    }

    /// Pixel-rows between separator lines.
    #[inline]
    pub const fn separator_stride(&self) -> Option<NonZeroUsize> {
        self.separator_stride
    }

    /// The requested color scheme.
    #[inline]
    pub const fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    /// The scheme actually used for rendering.
    ///
    /// Bitmap pixels are either off or fully on, so `u1` always renders
    /// in grayscale.
    #[inline]
    pub const fn effective_color_scheme(&self) -> ColorScheme {
        match self.format() {
            DataFormat::U1 => ColorScheme::Grayscale,
            DataFormat::U8 => self.color_scheme,
        }
    }

    /// Capacity hint for the rendered output of `len` input bytes.
    #[inline]
    pub const fn estimated_output_len(&self, len: usize) -> usize {
        self.geometry.estimated_output_len(len, self.separator_stride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_new_defaults() {
        let config = RenderConfig::new(DataFormat::U8, DEFAULT_WIDTH).unwrap();
        assert_eq!(config.separator_stride(), None);
        assert_eq!(config.color_scheme(), ColorScheme::Grayscale);
        assert_eq!(config.geometry().width(), 64);
    }

    #[test]
    fn test_new_propagates_geometry_error() {
        assert_eq!(
            RenderConfig::new(DataFormat::U1, 12),
            Err(ConfigError::UnalignedBitmapWidth { width: 12 })
        );
    }

    #[test]
    fn test_bitmap_ignores_ansi256() {
        let config = RenderConfig::new(DataFormat::U1, 8)
            .unwrap()
            .with_color_scheme(ColorScheme::Ansi256);
        assert_eq!(config.color_scheme(), ColorScheme::Ansi256);
        assert_eq!(config.effective_color_scheme(), ColorScheme::Grayscale);
    }

    #[test]
    fn test_bytemap_uses_ansi256() {
        let config = RenderConfig::new(DataFormat::U8, 8)
            .unwrap()
            .with_color_scheme(ColorScheme::Ansi256);
        assert_eq!(config.effective_color_scheme(), ColorScheme::Ansi256);
    }
}
