//! Stream embed renderer.
//!
//! Turns a `url` attribute into a `<video>` element driven by hls.js, or into
//! the configured usage hint when no usable URL was given.

mod template;

use crate::config::EmbedConfig;
use crate::escape::HtmlText;
use crate::shortcode::Attributes;
use crate::url_policy::{StreamUrl, UrlError};
use std::fmt;

/// The only attribute the renderer reads.
pub const URL_ATTR: &str = "url";

/// Outcome of one render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Video element plus hls.js bootstrap.
    Player(String),
    /// Usage hint shown instead of a player.
    Usage(String),
}

impl Rendered {
    pub fn as_str(&self) -> &str {
        match self {
            Rendered::Player(s) | Rendered::Usage(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Rendered::Player(s) | Rendered::Usage(s) => s,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Rendered::Player(_))
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders the embed for a set of tag attributes.
///
/// Attributes other than `url` are ignored. A missing, blank, or
/// disallowed-scheme URL yields [`Rendered::Usage`]; this never fails.
pub fn render(attrs: &Attributes, cfg: &EmbedConfig) -> Rendered {
    render_nth(attrs, cfg, 0)
}

/// Renders the `index`-th player of a page (zero-based), using
/// [`element_id_for`] so several players on one page keep distinct ids.
pub fn render_nth(attrs: &Attributes, cfg: &EmbedConfig, index: usize) -> Rendered {
    render_as(attrs.get(URL_ATTR), cfg, &element_id_for(cfg, index))
}

/// Renders the embed for an optional raw URL.
pub fn render_url(url: Option<&str>, cfg: &EmbedConfig) -> Rendered {
    render_as(url, cfg, &cfg.element_id)
}

/// Element id of the `index`-th player on a page: the configured id for the
/// first, then `{element_id}-2`, `{element_id}-3`, and so on.
pub fn element_id_for(cfg: &EmbedConfig, index: usize) -> String {
    match index {
        0 => cfg.element_id.clone(),
        n => format!("{}-{}", cfg.element_id, n + 1),
    }
}

fn render_as(url: Option<&str>, cfg: &EmbedConfig, element_id: &str) -> Rendered {
    let raw = url.unwrap_or("");
    match StreamUrl::parse(raw, &cfg.allowed_schemes) {
        Ok(stream) => {
            tracing::debug!(url = stream.as_raw(), element_id, "render stream embed");
            Rendered::Player(template::player(&stream, cfg, element_id))
        }
        Err(UrlError::Empty) => {
            tracing::debug!("no stream url given; rendering usage hint");
            Rendered::Usage(usage_hint(cfg))
        }
        Err(err @ UrlError::DisallowedScheme(_)) => {
            tracing::warn!("{}; rendering usage hint", err);
            Rendered::Usage(usage_hint(cfg))
        }
    }
}

fn usage_hint(cfg: &EmbedConfig) -> String {
    format!("<p>{}</p>", HtmlText(&cfg.usage_hint))
}
