use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Presentation attributes of the `<video>` element (optional `[video]` table in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub controls: bool,
    pub autoplay: bool,
    /// Browsers only honour autoplay for muted media.
    pub muted: bool,
    /// Value of the `width` attribute (e.g. `100%` or `640`).
    pub width: String,
    /// Inline `style` attribute.
    pub style: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            controls: true,
            autoplay: true,
            muted: true,
            width: "100%".to_string(),
            style: "max-width:100%;height:auto;background:#000;".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/hlsembed/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Shortcode tag name recognized by `expand` (without brackets).
    pub shortcode_tag: String,
    /// `id` of the emitted `<video>` element; the script looks it up by this id.
    pub element_id: String,
    /// Where the page loads hls.js from.
    pub hls_js_src: String,
    /// Text shown instead of a player when no usable URL is given.
    pub usage_hint: String,
    /// Text revealed when neither hls.js nor native HLS playback is available.
    pub unsupported_message: String,
    /// URL schemes admitted for the stream; relative URLs are always admitted.
    pub allowed_schemes: Vec<String>,
    pub video: VideoConfig,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            shortcode_tag: "channel44_live".to_string(),
            element_id: "channel44-video".to_string(),
            hls_js_src: "https://cdn.jsdelivr.net/npm/hls.js@latest".to_string(),
            usage_hint:
                "Usage: [channel44_live url=\"http://69.167.167.129:8088/hls/YOUR-STREAM-KEY.m3u8\"]"
                    .to_string(),
            unsupported_message: "Live playback is not supported in this browser.".to_string(),
            allowed_schemes: vec!["http".to_string(), "https".to_string()],
            video: VideoConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("element_id `{0}` may only contain ASCII letters, digits, `-` and `_`")]
    InvalidElementId(String),
    #[error("shortcode_tag `{0}` may only contain ASCII letters, digits, `-` and `_`")]
    InvalidShortcodeTag(String),
}

fn is_ident(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl EmbedConfig {
    /// Checks the fields that end up unescaped in markup or in tag matching.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.element_id.is_empty() {
            return Err(ConfigError::EmptyField("element_id"));
        }
        if !is_ident(&self.element_id) {
            return Err(ConfigError::InvalidElementId(self.element_id.clone()));
        }
        if self.shortcode_tag.is_empty() {
            return Err(ConfigError::EmptyField("shortcode_tag"));
        }
        if !is_ident(&self.shortcode_tag) {
            return Err(ConfigError::InvalidShortcodeTag(self.shortcode_tag.clone()));
        }
        if self.hls_js_src.trim().is_empty() {
            return Err(ConfigError::EmptyField("hls_js_src"));
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hlsembed")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EmbedConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = EmbedConfig::default();
        let toml = to_toml(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Serialize a configuration the way `load_or_init` writes it.
pub fn to_toml(cfg: &EmbedConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<EmbedConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: EmbedConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = EmbedConfig::default();
        assert_eq!(cfg.shortcode_tag, "channel44_live");
        assert_eq!(cfg.element_id, "channel44-video");
        assert_eq!(cfg.hls_js_src, "https://cdn.jsdelivr.net/npm/hls.js@latest");
        assert_eq!(cfg.allowed_schemes, vec!["http", "https"]);
        assert!(cfg.video.controls && cfg.video.autoplay && cfg.video.muted);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = EmbedConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: EmbedConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            element_id = "studio-a"
            allowed_schemes = ["https"]

            [video]
            autoplay = false
        "#;
        let cfg: EmbedConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.element_id, "studio-a");
        assert_eq!(cfg.allowed_schemes, vec!["https"]);
        assert!(!cfg.video.autoplay);
        assert!(cfg.video.muted);
        assert_eq!(cfg.video.width, "100%");
        assert_eq!(cfg.shortcode_tag, "channel44_live");
    }

    #[test]
    fn validate_rejects_bad_ids() {
        let mut cfg = EmbedConfig::default();
        cfg.element_id = "a\"b".to_string();
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidElementId("a\"b".to_string()))
        );

        let mut cfg = EmbedConfig::default();
        cfg.element_id.clear();
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyField("element_id")));

        let mut cfg = EmbedConfig::default();
        cfg.shortcode_tag = "live stream".to_string();
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidShortcodeTag(_))
        ));

        let mut cfg = EmbedConfig::default();
        cfg.hls_js_src = "  ".to_string();
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyField("hls_js_src")));
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "shortcode_tag = \"live\"").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.shortcode_tag, "live");
        assert_eq!(cfg.element_id, "channel44-video");
    }

    #[test]
    fn load_from_invalid_file_errors() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "element_id = \"<bad>\"").unwrap();
        f.flush().unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("element_id"));
    }
}
