//! Stream URL admission.
//!
//! A [`StreamUrl`] is the trimmed, non-empty text of a user-supplied URL whose
//! scheme (if it has one) is on the configured allow-list. The text is kept
//! byte for byte; it is never normalized, and it can only leave this type
//! through one of the context escapers in [`crate::escape`].

use crate::escape::{HtmlAttr, JsString};
use thiserror::Error;
use url::{ParseError, Url};

/// Why a raw URL was not admitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("stream URL is empty")]
    Empty,
    #[error("stream URL scheme `{0}` is not allowed")]
    DisallowedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamUrl(String);

impl StreamUrl {
    /// Admits `raw` if it is non-empty after trimming and its scheme, when
    /// present, matches one of `allowed_schemes` (case-insensitive).
    ///
    /// Relative references (`/hls/a.m3u8`, `//cdn/a.m3u8`, `a.m3u8`) have no
    /// scheme and are always admitted.
    pub fn parse<S: AsRef<str>>(raw: &str, allowed_schemes: &[S]) -> Result<Self, UrlError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UrlError::Empty);
        }

        if let Some(scheme) = detect_scheme(trimmed) {
            let allowed = allowed_schemes
                .iter()
                .any(|s| s.as_ref().eq_ignore_ascii_case(&scheme));
            if !allowed {
                return Err(UrlError::DisallowedScheme(scheme));
            }
        }

        Ok(StreamUrl(trimmed.to_string()))
    }

    /// Escaped for a quoted HTML attribute.
    pub fn attr(&self) -> HtmlAttr<'_> {
        HtmlAttr(&self.0)
    }

    /// Escaped for a double-quoted script string literal.
    pub fn js(&self) -> JsString<'_> {
        JsString(&self.0)
    }

    /// Raw admitted text, for logging and comparisons.
    pub fn as_raw(&self) -> &str {
        &self.0
    }
}

/// Lowercase scheme of `s`, or `None` for a relative reference.
///
/// Uses the WHATWG parser so that tab/newline tricks such as
/// `java\tscript:` resolve to the scheme a browser would see. Text the parser
/// rejects for other reasons (bad port, bad host) falls back to a plain
/// RFC 3986 scheme prefix check.
fn detect_scheme(s: &str) -> Option<String> {
    match Url::parse(s) {
        Ok(u) => Some(u.scheme().to_string()),
        Err(ParseError::RelativeUrlWithoutBase) => None,
        Err(_) => scheme_prefix(s).map(|p| p.to_ascii_lowercase()),
    }
}

fn scheme_prefix(s: &str) -> Option<&str> {
    let (head, _) = s.split_once(':')?;
    let mut chars = head.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(head)
    } else {
        None
    }
}
