//! Small HTML helpers shared by block renderers and the page renderer.

use serde_json::{Map, Value};

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Returns `url` when it is a relative path, fragment, or http(s)/mailto/tel
/// link; anything else (e.g. `javascript:`) becomes `#`.
pub fn safe_url(url: &str) -> &str {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    let allowed = trimmed.starts_with('/')
        || trimmed.starts_with('#')
        || lower.starts_with("https://")
        || lower.starts_with("http://")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:");
    if allowed && !trimmed.starts_with("//") { trimmed } else { "#" }
}

/// String field of a content object; missing or non-string gives `""`.
pub(crate) fn text<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a str {
    obj.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// Escaped string field.
pub(crate) fn esc(obj: &Map<String, Value>, key: &str) -> String {
    escape_html(text(obj, key))
}

/// Array field of a content object; missing or non-array gives an empty slice.
pub(crate) fn items<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Object entries of an array field, skipping anything that is not an object.
pub(crate) fn objects<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> impl Iterator<Item = &'a Map<String, Value>> {
    items(obj, key).iter().filter_map(Value::as_object)
}

pub(crate) fn flag(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Opening tag shared by every built-in block.
pub(crate) fn section_open(kind: &str) -> String {
    format!(r#"<section class="pc-block pc-{kind}">"#)
}

/// `<h2>` for a non-empty title, nothing otherwise.
pub(crate) fn heading(obj: &Map<String, Value>, key: &str) -> String {
    match text(obj, key) {
        "" => String::new(),
        title => format!("<h2>{}</h2>", escape_html(title)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn safe_url_filters_schemes() {
        assert_eq!(safe_url("https://example.com"), "https://example.com");
        assert_eq!(safe_url("/signup"), "/signup");
        assert_eq!(safe_url("#pricing"), "#pricing");
        assert_eq!(safe_url("mailto:hi@example.com"), "mailto:hi@example.com");
        assert_eq!(safe_url("javascript:alert(1)"), "#");
        assert_eq!(safe_url("JavaScript:alert(1)"), "#");
        assert_eq!(safe_url("//evil.example"), "#");
        assert_eq!(safe_url(""), "#");
    }
}
