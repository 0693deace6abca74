//! Renders HTML5 `<video>` embeds that play HLS live streams through hls.js.
//!
//! The entry points are [`embed::render`] for a parsed attribute set and
//! [`shortcode::expand`] for whole documents containing shortcode tags.

pub mod config;
pub mod embed;
pub mod escape;
pub mod logging;
pub mod shortcode;
pub mod url_policy;

pub use config::EmbedConfig;
pub use embed::{render, render_nth, render_url, Rendered};
pub use shortcode::{expand, Attributes};
pub use url_policy::{StreamUrl, UrlError};
