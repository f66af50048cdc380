use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("NON_SLUG_CHARS regex should compile"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex should compile"));

/// HTML-escape text content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// HTML-escape attribute values (same rules as text for this codebase).
pub fn escape_attr(s: &str) -> String {
    escape_text(s)
}

/// Compute a slug suitable for ids/anchors.
///
/// Lowercases, drops everything except ASCII word characters, whitespace and
/// hyphens, then turns each whitespace run into a single hyphen. Unlike a
/// typical slugger it keeps repeated or trailing hyphens and may return an
/// empty string, so `"A - B"` becomes `"a---b"`.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let kept = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&kept, "-");
    hyphenated.trim().to_string()
}

#[cfg(test)]
mod tests;
