//! `hlsembed expand [path]` – expand shortcode tags in a document.

use anyhow::{Context, Result};
use hlsembed_core::config::EmbedConfig;
use hlsembed_core::shortcode;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// `None` and `-` mean stdin.
fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new("-"))
}

fn expand_stream<R: Read, W: Write>(cfg: &EmbedConfig, mut input: R, mut out: W) -> Result<()> {
    let mut doc = String::new();
    input.read_to_string(&mut doc).context("read input")?;
    let expanded = shortcode::expand(&doc, &cfg.shortcode_tag, cfg);
    out.write_all(expanded.as_bytes()).context("write stdout")?;
    out.flush().context("write stdout")?;
    Ok(())
}

pub fn run_expand(cfg: &EmbedConfig, path: Option<&Path>) -> Result<()> {
    let stdout = io::stdout().lock();
    match path {
        Some(p) if !is_stdin(path) => {
            let file = File::open(p).with_context(|| format!("open {}", p.display()))?;
            expand_stream(cfg, file, stdout)
        }
        _ => expand_stream(cfg, io::stdin().lock(), stdout),
    }
}
