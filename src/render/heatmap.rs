//! Heat map renderer: Fold a byte buffer into rows of half-block glyphs.
//!
//! The renderer walks the input top to bottom, two pixel-rows at a time.
//! Pixel-row `y` becomes the foreground of the output row and `y + 1` its
//! background. Reads past the end of the input yield zero, so a ragged
//! final row renders as black instead of failing.

use crate::color::ColorScheme;
use crate::config::RenderConfig;
use crate::layout::DataFormat;
use crate::terminal::OutputBuffer;

/// Intensity of a set bit in the `u1` format.
const BIT_ON: u8 = 255;

/// Statistics about a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Number of heat map rows written.
    pub output_rows: usize,
    /// Number of blank separator lines written.
    pub separator_lines: usize,
    /// Number of half-block glyphs written.
    pub glyphs: usize,
    /// Number of bytes appended to the output buffer.
    pub bytes_written: usize,
}

/// Render `data` as a heat map into `output`.
///
/// Output is appended in strict top-to-bottom, left-to-right order and is
/// fully determined by `data` and `config`.
///
/// # Arguments
///
/// * `data` - The raw input bytes
/// * `config` - Geometry, separator stride and color scheme
/// * `output` - Buffer to append the ANSI text to
///
/// # Returns
///
/// Statistics about the render pass.
pub fn render(data: &[u8], config: &RenderConfig, output: &mut OutputBuffer) -> RenderStats {
    let geometry = config.geometry();
    let stride = geometry.row_stride_bytes();
    let height = geometry.pixel_height(data.len());
    let scheme = config.effective_color_scheme();
    let start_len = output.len();

    let mut stats = RenderStats::default();

    for y in (0..height).step_by(2) {
        if y > 0 && config.separator_stride().is_some_and(|s| y % s.get() == 0) {
            output.newline();
            stats.separator_lines += 1;
        }

        let top_offset = y * stride;
        let bottom_offset = top_offset + stride;
        for x in 0..stride {
            let top = byte_at(data, top_offset + x);
            let bottom = byte_at(data, bottom_offset + x);

            stats.glyphs += match config.format() {
                DataFormat::U8 => render_byte(output, scheme, top, bottom),
                DataFormat::U1 => render_bits(output, top, bottom),
            };
        }

        output.newline();
        stats.output_rows += 1;
    }

    stats.bytes_written = output.len() - start_len;
    stats
}

/// Read one byte, zero-filling past the end of the input.
#[inline]
fn byte_at(data: &[u8], offset: usize) -> u8 {
    data.get(offset).copied().unwrap_or(0)
}

/// One glyph for one byte-map pixel pair.
#[inline]
fn render_byte(output: &mut OutputBuffer, scheme: ColorScheme, top: u8, bottom: u8) -> usize {
    output.write_glyph(scheme.glyph(top, bottom));
    1
}

/// Eight glyphs for one bitmap byte pair, bit 0 first.
#[inline]
fn render_bits(output: &mut OutputBuffer, top: u8, bottom: u8) -> usize {
    for bit in 0..8 {
        let glyph = ColorScheme::Grayscale.glyph(bit_intensity(top, bit), bit_intensity(bottom, bit));
        output.write_glyph(glyph);
    }
    8
}

#[inline]
const fn bit_intensity(byte: u8, bit: u32) -> u8 {
    if byte & (1 << bit) != 0 { BIT_ON } else { 0 }
}
