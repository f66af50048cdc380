//! Bionic reading: emphasise the leading part of every word so the eye can
//! skim along the bold prefixes.

use crate::config::BIONIC_RATIO;

/// Number of leading characters to emphasise in a word of `len` characters.
///
/// This is `ceil(len * 0.4)`, never less than one.
pub fn emphasis_len(len: usize) -> usize {
    let (num, den) = BIONIC_RATIO;
    (len * num).div_ceil(den).max(1)
}

/// Wrap the leading part of each word of `text` in `<b>`.
///
/// Whitespace is reproduced exactly. The input is taken to be a safe HTML
/// fragment and is not escaped.
pub fn transform(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    for token in split_keeping_whitespace(text) {
        if token.chars().all(char::is_whitespace) {
            out.push_str(token);
        } else {
            emphasise_word(token, &mut out);
        }
    }
    out
}

/// Split `word` into its emphasised head and plain tail.
pub(crate) fn split_word(word: &str) -> (&str, &str) {
    let bold = emphasis_len(word.chars().count());
    let split = word
        .char_indices()
        .nth(bold)
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    word.split_at(split)
}

fn emphasise_word(word: &str, out: &mut String) {
    let (head, tail) = split_word(word);
    out.push_str("<b>");
    out.push_str(head);
    out.push_str("</b>");
    out.push_str(tail);
}

/// Split into alternating runs of whitespace and non-whitespace.
pub(crate) fn split_keeping_whitespace(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let ws = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|&(_, c)| c.is_whitespace() != ws)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        rest = tail;
        Some(token)
    })
}
