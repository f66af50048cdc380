//! Reading-time estimate for a post body.
//!
//! Markup and code are stripped before counting, so only prose contributes to
//! the estimate.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::WORDS_PER_MINUTE;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("HTML_TAG regex should compile"));
static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[\s\S]*?```").expect("FENCED_CODE regex should compile"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]*`").expect("INLINE_CODE regex should compile"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: u32,
}

/// Estimated minutes needed to read `content`, rounded up.
///
/// Returns 0 when nothing but markup and code remains.
pub fn estimate(content: &str) -> u32 {
    measure(content).minutes
}

pub fn measure(content: &str) -> ReadingTime {
    let words = word_count(content);
    let minutes = u32::try_from(words.div_ceil(WORDS_PER_MINUTE)).unwrap_or(u32::MAX);
    ReadingTime { words, minutes }
}

/// Number of whitespace-separated words left once tags and code are removed.
pub fn word_count(content: &str) -> usize {
    strip_markup(content).split_whitespace().count()
}

// Order matters: tags go first, then whole fences, then the inline spans that
// remain.
fn strip_markup(content: &str) -> String {
    let text = HTML_TAG.replace_all(content, "");
    let text = FENCED_CODE.replace_all(&text, "");
    INLINE_CODE.replace_all(&text, "").into_owned()
}
