//! # Heatmap
//!
//! Display arbitrary binary data as a false-color heat map in the terminal.
//!
//! Byte values become colors (truecolor grayscale or the 256-color ANSI
//! palette) and every terminal character packs two vertically stacked
//! pixels using the upper half block `▀`: the foreground paints the top
//! pixel, the background the bottom one.
//!
//! ## Data Formats
//!
//! - **`u8`**: one byte per pixel, the byte is the intensity
//! - **`u1`**: one bit per pixel, eight pixels per byte (bit 0 first),
//!   set bits are white and clear bits black
//!
//! ## Example
//!
//! ```
//! use heatmap::{render, DataFormat, OutputBuffer, RenderConfig};
//!
//! let config = RenderConfig::new(DataFormat::U8, 4)?;
//! let mut output = OutputBuffer::new();
//! let stats = render(&[0, 85, 170, 255], &config, &mut output);
//!
//! assert_eq!(stats.output_rows, 1);
//! assert_eq!(stats.glyphs, 4);
//! # Ok::<(), heatmap::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod terminal;

// Re-exports for convenience
pub use color::{Color, ColorScheme, Glyph, Rgb, HALF_BLOCK};
pub use config::RenderConfig;
pub use error::ConfigError;
pub use layout::{DataFormat, Geometry};
pub use render::{render, RenderStats};
pub use terminal::OutputBuffer;
