//! Shortcode attribute lists (`url="..." key='v' flag=x`).

/// Attribute names (lowercased) and values in source order.
///
/// Lookups return the last occurrence, so a repeated name overrides an
/// earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into().to_ascii_lowercase(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Parses the attribute text of a shortcode tag.
///
/// Accepts `name="value"`, `name='value'` and `name=value` (whitespace
/// around `=` allowed). Names are lowercased. Positional values (quoted or
/// bare, without a name) are skipped.
pub fn parse_attributes(text: &str) -> Attributes {
    let mut attrs = Attributes::new();
    let mut rest = text;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        let name_len = rest
            .char_indices()
            .find(|&(_, c)| !is_name_char(c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        if name_len > 0 {
            let name = &rest[..name_len];
            let after = rest[name_len..].trim_start();
            if let Some(value_part) = after.strip_prefix('=') {
                let (value, remaining) = take_value(value_part.trim_start());
                attrs.insert(name, value);
                rest = remaining;
                continue;
            }
        }

        // Positional value: skip one (possibly quoted) token.
        let (_, remaining) = take_value(rest);
        rest = remaining;
    }

    attrs
}

/// Splits a quoted or bare value off the front of `s`.
fn take_value(s: &str) -> (&str, &str) {
    let mut chars = s.chars();
    match chars.next() {
        Some(q @ ('"' | '\'')) => {
            let body = &s[1..];
            match body.find(q) {
                Some(end) => (&body[..end], &body[end + 1..]),
                // Unterminated quote: take the rest.
                None => (body, ""),
            }
        }
        Some(_) => {
            let end = s.find(char::is_whitespace).unwrap_or(s.len());
            (&s[..end], &s[end..])
        }
        None => ("", ""),
    }
}
