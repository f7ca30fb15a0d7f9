//! Command line surface.
//!
//! All arguments are positional and optional:
//!
//! ```text
//! heatmap [FORMAT] [WIDTH] [SEPARATOR_STRIDE] [COLOR256]
//! ```
//!
//! Numeric arguments are lenient: anything that does not parse becomes 0.

use crate::color::ColorScheme;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::layout::DataFormat;
use clap::Parser;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Display binary data from stdin as a heat map in the terminal.
///
/// Every character cell shows two vertical pixels.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "heatmap", version, about, long_about = None)]
pub struct Args {
    /// Data format: `u1` (1 bit per pixel, LSB first) or `u8` (1 byte per pixel)
    #[arg(default_value = "u8")]
    pub format: String,

    /// Pixels per row; must be a multiple of 8 for `u1`
    #[arg(default_value_t = crate::config::DEFAULT_WIDTH.to_string(), allow_negative_numbers = true)]
    pub width: String,

    /// Insert a blank line every this many pixel-rows (should be even)
    #[arg(allow_negative_numbers = true)]
    pub separator_stride: Option<String>,

    /// Any value enables the 256-color palette (affects `u8` only)
    #[arg(allow_hyphen_values = true)]
    pub color256: Option<String>,

    /// Further arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl Args {
    /// Resolve the arguments into a validated configuration.
    ///
    /// A stride of 0 (or one that fails to parse) disables separators.
    ///
    /// # Errors
    ///
    /// Fails when the width is zero or, for `u1`, not a multiple of 8.
    pub fn to_config(&self) -> Result<RenderConfig> {
        let format = DataFormat::from_arg(&self.format);
        let width = parse_or_default(&self.width);
        let stride = self
            .separator_stride
            .as_deref()
            .map(parse_or_default)
            .and_then(NonZeroUsize::new);
        let scheme = if self.color256.is_some() {
            ColorScheme::Ansi256
        } else {
            ColorScheme::Grayscale
        };

        Ok(RenderConfig::new(format, width)?
            .with_separator_stride(stride)
            .with_color_scheme(scheme))
    }
}

/// Parse `value`, falling back to `T::default()` when it is malformed.
pub fn parse_or_default<T: FromStr + Default>(value: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        log::debug!("argument {value:?} is not a number, using default");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("heatmap").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default::<usize>("64"), 64);
        assert_eq!(parse_or_default::<usize>("abc"), 0);
        assert_eq!(parse_or_default::<usize>(""), 0);
        assert_eq!(parse_or_default::<usize>("-5"), 0);
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.format, "u8");
        assert_eq!(args.width, "64");
        assert_eq!(args.separator_stride, None);
        assert_eq!(args.color256, None);
        assert!(args.extra.is_empty());

        let config = args.to_config().unwrap();
        assert_eq!(config.format(), DataFormat::U8);
        assert_eq!(config.geometry().width(), 64);
        assert_eq!(config.separator_stride(), None);
        assert_eq!(config.color_scheme(), ColorScheme::Grayscale);
    }

    #[test]
    fn test_all_positionals() {
        let config = parse(&["u8", "32", "8", "yes"]).to_config().unwrap();
        assert_eq!(config.geometry().width(), 32);
        assert_eq!(config.separator_stride(), NonZeroUsize::new(8));
        assert_eq!(config.color_scheme(), ColorScheme::Ansi256);
    }

    #[test]
    fn test_bitmap_width_error() {
        assert_eq!(
            parse(&["u1", "9"]).to_config(),
            Err(ConfigError::UnalignedBitmapWidth { width: 9 })
        );
    }

    #[test]
    fn test_malformed_width_is_zero() {
        assert_eq!(parse(&["u8", "wide"]).to_config(), Err(ConfigError::ZeroWidth));
        assert_eq!(parse(&["u8", "-3"]).to_config(), Err(ConfigError::ZeroWidth));
    }

    #[test]
    fn test_malformed_stride_disables_separators() {
        let config = parse(&["u8", "16", "often"]).to_config().unwrap();
        assert_eq!(config.separator_stride(), None);
        let config = parse(&["u8", "16", "0"]).to_config().unwrap();
        assert_eq!(config.separator_stride(), None);
    }

    #[test]
    fn test_hyphenated_color_flag() {
        let config = parse(&["u8", "16", "2", "-x"]).to_config().unwrap();
        assert_eq!(config.color_scheme(), ColorScheme::Ansi256);
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let args = parse(&["u8", "16", "2", "x", "more", "--and-more"]);
        assert_eq!(args.extra, vec!["more", "--and-more"]);
        let config = args.to_config().unwrap();
        assert_eq!(config.geometry().width(), 16);
        assert_eq!(config.color_scheme(), ColorScheme::Ansi256);
    }

    #[test]
    fn test_unknown_format_is_bytemap() {
        let config = parse(&["f32", "8"]).to_config().unwrap();
        assert_eq!(config.format(), DataFormat::U8);
    }
}
