//! CLI command handlers. Each command is in its own file.

mod completions;
mod config;
mod expand;
mod render;

pub use completions::{run_completions, run_manpage};
pub use config::run_config;
pub use expand::run_expand;
pub use render::run_render;
