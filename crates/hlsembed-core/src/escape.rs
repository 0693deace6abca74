//! Context-specific escaping for markup output.
//!
//! Each wrapper escapes its value for exactly one syntactic position. The
//! renderer only ever writes user-supplied text through one of these, so
//! the attribute and script-string encodings cannot be mixed up.

use std::fmt::{self, Write};

/// Value placed inside a quoted HTML attribute (`"..."` or `'...'`).
#[derive(Debug, Clone, Copy)]
pub struct HtmlAttr<'a>(pub &'a str);

impl fmt::Display for HtmlAttr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&html_escape::encode_quoted_attribute(self.0))
    }
}

/// Value placed in HTML text content.
#[derive(Debug, Clone, Copy)]
pub struct HtmlText<'a>(pub &'a str);

impl fmt::Display for HtmlText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&html_escape::encode_text(self.0))
    }
}

/// Value placed between the double quotes of a string literal inside a
/// `<script>` element.
///
/// Only JSON-compatible escapes are produced. Markup-significant characters
/// (`<`, `>`, `&`, `'`) become `\uXXXX` so the literal can never close the
/// script element or an enclosing attribute.
#[derive(Debug, Clone, Copy)]
pub struct JsString<'a>(pub &'a str);

impl fmt::Display for JsString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '<' | '>' | '&' | '\'' | '\u{2028}' | '\u{2029}' => {
                    write!(f, "\\u{:04x}", c as u32)?
                }
                c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
