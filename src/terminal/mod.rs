//! Terminal module: ANSI escape sequence output.

mod output;

pub use output::OutputBuffer;
