//! Shortcode tags in page content.
//!
//! A tag looks like `[channel44_live url="..."]` (optionally self-closed as
//! `[channel44_live url="..." /]`). Doubling the brackets, `[[channel44_live]]`,
//! escapes the tag: it is emitted literally with one pair of brackets removed.
//! Enclosing forms (`[tag]...[/tag]`) are not recognized; the closing tag is
//! left in place as text.
//!
//! Every rendered player on a page gets its own element id (see
//! [`embed::element_id_for`]).

mod attrs;

pub use attrs::{parse_attributes, Attributes};

use crate::config::EmbedConfig;
use crate::embed;
use std::ops::Range;

/// One tag occurrence in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// Byte range in the source, including the extra brackets of an escaped tag.
    pub span: Range<usize>,
    pub attrs: Attributes,
    /// `[[tag ...]]`: replaced by its inner `[tag ...]` text, not rendered.
    pub escaped: bool,
}

fn ends_tag_name(c: Option<char>) -> bool {
    match c {
        None => false,
        Some(c) => c.is_whitespace() || c == ']' || c == '/',
    }
}

/// Offset of the `]` that ends a tag's attribute text.
///
/// A `]` inside a quoted value (`url="a]b"`) does not count. Quotes only open
/// right after `=`, so apostrophes in bare words stay literal. If a quote is
/// never closed, the first `]` wins.
fn closing_bracket(attrs: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut after_eq = false;
    for (i, c) in attrs.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                ']' => return Some(i),
                '"' | '\'' if after_eq => quote = Some(c),
                _ => {}
            },
        }
        if quote.is_none() && !c.is_whitespace() {
            after_eq = c == '=';
        }
    }
    attrs.find(']')
}

/// Finds every occurrence of `[tag ...]` in `content`, left to right.
///
/// An opening bracket without a matching `]` is plain text.
pub fn find_tags(content: &str, tag: &str) -> Vec<TagMatch> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(rel) = content[pos..].find('[') {
        let open = pos + rel;
        let double = content[open + 1..].starts_with('[');
        let name_at = if double { open + 2 } else { open + 1 };

        let named = content[name_at..].starts_with(tag)
            && ends_tag_name(content[name_at + tag.len()..].chars().next());
        if !named {
            pos = open + 1;
            continue;
        }

        let attrs_at = name_at + tag.len();
        let close = match closing_bracket(&content[attrs_at..]) {
            Some(rel) => attrs_at + rel,
            None => break,
        };

        if double && !content[close + 1..].starts_with(']') {
            // `[[tag]` is a literal `[` followed by a normal tag.
            pos = open + 1;
            continue;
        }

        let raw_attrs = content[attrs_at..close].trim_end();
        let raw_attrs = raw_attrs.strip_suffix('/').unwrap_or(raw_attrs);

        let end = if double { close + 2 } else { close + 1 };
        found.push(TagMatch {
            span: open..end,
            attrs: parse_attributes(raw_attrs),
            escaped: double,
        });
        pos = end;
    }

    found
}

/// Replaces every `tag` occurrence in `content` with its rendered embed.
///
/// Text outside the tags is copied through untouched.
pub fn expand(content: &str, tag: &str, cfg: &EmbedConfig) -> String {
    let tags = find_tags(content, tag);
    if tags.is_empty() {
        return content.to_string();
    }

    let mut out = String::with_capacity(content.len() + tags.len() * 1024);
    let mut last = 0;
    let mut players = 0;
    for m in &tags {
        out.push_str(&content[last..m.span.start]);
        if m.escaped {
            out.push_str(&content[m.span.start + 1..m.span.end - 1]);
        } else {
            let rendered = embed::render_nth(&m.attrs, cfg, players);
            if rendered.is_player() {
                players += 1;
            }
            out.push_str(rendered.as_str());
        }
        last = m.span.end;
    }
    out.push_str(&content[last..]);

    tracing::debug!(tag, count = tags.len(), players, "expanded shortcodes");
    out
}
