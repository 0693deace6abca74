//! `hlsembed render --url <url>` – print one embed.

use anyhow::{Context, Result};
use hlsembed_core::config::EmbedConfig;
use hlsembed_core::embed;
use std::io::{self, Write};

fn write_render<W: Write>(cfg: &EmbedConfig, url: Option<&str>, mut out: W) -> Result<()> {
    let rendered = embed::render_url(url, cfg);
    if !rendered.is_player() {
        tracing::info!("no usable stream url; printed usage hint");
    }
    writeln!(out, "{rendered}").context("write stdout")?;
    Ok(())
}

pub fn run_render(cfg: &EmbedConfig, url: Option<&str>) -> Result<()> {
    write_render(cfg, url, io::stdout().lock())
}
