//! CLI for the hlsembed live-stream embed generator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use hlsembed_core::config::{self, EmbedConfig};
use std::path::{Path, PathBuf};

use commands::{run_completions, run_config, run_expand, run_manpage, run_render};

/// Top-level CLI for hlsembed.
#[derive(Debug, Parser)]
#[command(name = "hlsembed")]
#[command(about = "hlsembed: HTML5 video embeds for HLS live streams via hls.js", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/hlsembed/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the embed for a stream URL (or the usage hint when none is given).
    Render {
        /// HLS playlist URL, e.g. http://host:8088/hls/KEY.m3u8.
        #[arg(long)]
        url: Option<String>,
    },

    /// Expand every shortcode tag in a document and print the result.
    Expand {
        /// Input document; stdin when omitted or `-`.
        path: Option<PathBuf>,
    },

    /// Show the config file location and the effective configuration.
    Config,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a roff man page.
    Manpage,
}

fn load_config(path: Option<&Path>) -> Result<(EmbedConfig, PathBuf)> {
    match path {
        Some(p) => Ok((config::load_from(p)?, p.to_path_buf())),
        None => Ok((config::load_or_init()?, config::config_path()?)),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Completions and man page describe the CLI itself and need no config.
        let config_override = cli.config;
        let load = || -> Result<(EmbedConfig, PathBuf)> {
            let (cfg, path) = load_config(config_override.as_deref())?;
            tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
            Ok((cfg, path))
        };

        match cli.command {
            CliCommand::Render { url } => {
                let (cfg, _) = load()?;
                run_render(&cfg, url.as_deref())?;
            }
            CliCommand::Expand { path } => {
                let (cfg, _) = load()?;
                run_expand(&cfg, path.as_deref())?;
            }
            CliCommand::Config => {
                let (cfg, path) = load()?;
                run_config(&cfg, &path)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Manpage => run_manpage()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
