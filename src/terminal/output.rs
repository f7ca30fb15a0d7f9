//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crate::color::{Color, Glyph, HALF_BLOCK};
use std::io::Write;

/// Pre-allocated buffer for building the heat map text.
///
/// All output is accumulated here, then flushed with a single `write_all()`,
/// so nothing reaches the terminal until the whole map is rendered.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer with a small default capacity (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its contents.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Set foreground color.
    #[inline]
    pub fn set_fg(&mut self, color: Color) {
        let _ = match color {
            Color::Rgb(rgb) => write!(self.data, "\x1b[38;2;{};{};{}m", rgb.r, rgb.g, rgb.b),
            Color::Indexed(index) => write!(self.data, "\x1b[38;5;{index}m"),
        };
    }

    /// Set background color.
    #[inline]
    pub fn set_bg(&mut self, color: Color) {
        let _ = match color {
            Color::Rgb(rgb) => write!(self.data, "\x1b[48;2;{};{};{}m", rgb.r, rgb.g, rgb.b),
            Color::Indexed(index) => write!(self.data, "\x1b[48;5;{index}m"),
        };
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Write one half-block glyph followed by a reset, so colors never
    /// bleed into the next cell or line.
    #[inline]
    pub fn write_glyph(&mut self, glyph: Glyph) {
        let mut utf8 = [0u8; 4];
        self.set_fg(glyph.top);
        self.set_bg(glyph.bottom);
        self.data
            .extend_from_slice(HALF_BLOCK.encode_utf8(&mut utf8).as_bytes());
        self.reset_attrs();
    }

    /// End the current line.
    #[inline]
    pub fn newline(&mut self) {
        self.data.push(b'\n');
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_truecolor_sequences() {
        let mut out = OutputBuffer::new();
        out.set_fg(Color::Rgb(Rgb::new(1, 2, 3)));
        out.set_bg(Color::Rgb(Rgb::new(4, 5, 6)));
        assert_eq!(out.as_bytes(), b"\x1b[38;2;1;2;3m\x1b[48;2;4;5;6m");
    }

    #[test]
    fn test_indexed_sequences() {
        let mut out = OutputBuffer::new();
        out.set_fg(Color::Indexed(196));
        out.set_bg(Color::Indexed(0));
        assert_eq!(out.as_bytes(), b"\x1b[38;5;196m\x1b[48;5;0m");
    }

    #[test]
    fn test_write_glyph_resets_after() {
        let mut out = OutputBuffer::new();
        out.write_glyph(Glyph::new(Rgb::WHITE.into(), Rgb::BLACK.into()));
        assert_eq!(
            out.as_bytes(),
            "\x1b[38;2;255;255;255m\x1b[48;2;0;0;0m\u{2580}\x1b[0m".as_bytes()
        );
    }

    #[test]
    fn test_flush_to_writes_everything() {
        let mut out = OutputBuffer::new();
        out.write_glyph(Glyph::new(Color::Indexed(7), Color::Indexed(8)));
        out.newline();

        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, out.as_bytes());
        assert!(sink.ends_with(b"\n"));
    }

    #[test]
    fn test_clear() {
        let mut out = OutputBuffer::new();
        out.newline();
        assert_eq!(out.len(), 1);
        out.clear();
        assert!(out.is_empty());
    }
}
