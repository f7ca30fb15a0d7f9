//! Color model: intensities, terminal colors and the half-block glyph.
//!
//! Every pixel of the heat map is an 8-bit intensity. A [`ColorScheme`]
//! turns that intensity into a terminal [`Color`], and a [`Glyph`] pairs
//! the colors of two vertically stacked pixels into one character cell.

/// The upper half block, `▀` (U+2580).
///
/// The foreground paints the top pixel, the background paints the bottom one.
pub const HALF_BLOCK: char = '\u{2580}';

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A gray level where every channel equals `intensity`.
    #[inline]
    pub const fn gray(intensity: u8) -> Self {
        Self::new(intensity, intensity, intensity)
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::gray(0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::gray(255);
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// A color as the terminal understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// 24-bit true color (`38;2;R;G;B` / `48;2;R;G;B`).
    Rgb(Rgb),
    /// Entry of the fixed 256-color ANSI palette (`38;5;N` / `48;5;N`).
    Indexed(u8),
}

impl From<Rgb> for Color {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

/// How intensities map to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ColorScheme {
    /// Truecolor gray ramp, R = G = B = intensity.
    #[default]
    Grayscale,
    /// The intensity is used directly as a 256-color palette index.
    ///
    /// The palette's own mapping applies, so this is not a gray ramp.
    Ansi256,
}

impl ColorScheme {
    /// Map one intensity to a terminal color.
    #[inline]
    pub const fn color_for(self, intensity: u8) -> Color {
        match self {
            Self::Grayscale => Color::Rgb(Rgb::gray(intensity)),
            Self::Ansi256 => Color::Indexed(intensity),
        }
    }

    /// Build the glyph for a vertically stacked pair of intensities.
    #[inline]
    pub const fn glyph(self, top: u8, bottom: u8) -> Glyph {
        Glyph::new(self.color_for(top), self.color_for(bottom))
    }
}

/// One character cell of the heat map: two pixels, one above the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    /// Color of the upper pixel (drawn as the foreground).
    pub top: Color,
    /// Color of the lower pixel (drawn as the background).
    pub bottom: Color,
}

impl Glyph {
    /// Create a glyph from its two pixel colors.
    #[inline]
    pub const fn new(top: Color, bottom: Color) -> Self {
        Self { top, bottom }
    }
}
