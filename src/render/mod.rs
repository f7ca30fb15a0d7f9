//! Render module: Turn raw bytes into heat map text.
//!
//! This module contains:
//! - [`render`]: The single-pass renderer
//! - [`RenderStats`]: Counters describing what a render pass wrote

mod heatmap;

pub use heatmap::{render, RenderStats};
