//! `hlsembed config` – show config location and effective values.

use anyhow::Result;
use hlsembed_core::config::{self, EmbedConfig};
use std::path::Path;

pub fn run_config(cfg: &EmbedConfig, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", config::to_toml(cfg)?);
    Ok(())
}
