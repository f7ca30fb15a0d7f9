//! Layout module: Row geometry of the heat map.
//!
//! Geometry is validated once, before any input is rendered.

mod geometry;

pub use geometry::{DataFormat, Geometry, MAX_CAPACITY_HINT, MAX_GLYPH_BYTES};
