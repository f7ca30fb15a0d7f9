//! `heatmap`: Render binary data from stdin as a terminal heat map.
//!
//! ```text
//! heatmap [u1|u8] [WIDTH] [SEPARATOR_STRIDE] [COLOR256] < data.bin
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use heatmap::{cli::Args, render, OutputBuffer};
use std::io::{self, Read};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.to_config().context("invalid heat map configuration")?;
    log::debug!("{config:?}");

    let mut stdin = io::stdin();
    if stdin.is_tty() {
        log::warn!("reading data from a terminal, end input with Ctrl-D");
    }

    let mut data = Vec::new();
    stdin
        .read_to_end(&mut data)
        .context("failed to read data from stdin")?;
    log::debug!("read {} bytes", data.len());

    let mut output = OutputBuffer::with_capacity(config.estimated_output_len(data.len()));
    let stats = render(&data, &config, &mut output);
    log::debug!("{stats:?}");

    output
        .flush_to(&mut io::stdout().lock())
        .context("failed to write heat map to stdout")
}
