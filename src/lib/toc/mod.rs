//! Table of contents: a flat outline of the h2 and h3 headings found in the
//! Markdown source, plus a margin-nav rendering of that outline.

use std::{fmt::Write as _, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::{
    config::{TOC_MAX_DEPTH, TOC_MIN_DEPTH},
    utils::{escape_attr, escape_text, slugify},
};

// `R` makes `\r\n` count as a line break so the carriage return never ends up
// in the heading text.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?mR)^(#{{{TOC_MIN_DEPTH},{TOC_MAX_DEPTH}}})\s+(.+)$"))
        .expect("HEADING regex should compile")
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocItem {
    pub depth: usize,
    pub text: String,
    pub slug: String,
}

/// Collect the h2/h3 ATX headings of `content` in document order.
///
/// Slugs are not deduplicated: two identical headings give two identical
/// slugs.
pub fn extract(content: &str) -> Vec<TocItem> {
    HEADING
        .captures_iter(content)
        .map(|caps| {
            let text = caps[2].to_string();
            TocItem {
                depth: caps[1].len(),
                slug: slugify(&text),
                text,
            }
        })
        .collect()
}

/// Render the outline as a numbered `<nav>`, nesting h3 entries under the
/// preceding h2. An h3 with no h2 before it is promoted to a top-level entry.
/// Returns an empty string when there is nothing to list.
pub fn render_html(items: &[TocItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut top_n: usize = 0;
    let mut sub_n: usize = 0;
    let mut li_open = false;
    let mut sub_open = false;

    let mut s = String::new();
    s.push_str(r#"<nav class="toc" aria-label="Contents">"#);
    s.push_str(r#"<p class="toc-title">Contents</p>"#);
    s.push_str(r#"<ol class="toc-list">"#);

    for (i, item) in items.iter().enumerate() {
        let nested = item.depth > TOC_MIN_DEPTH && li_open;

        if !nested {
            if li_open {
                if sub_open {
                    s.push_str("</ol>");
                    sub_open = false;
                }
                s.push_str("</li>");
            }
            top_n += 1;
            sub_n = 0;
            li_open = true;

            s.push_str(r#"<li class="toc-l1">"#);
            push_link(&mut s, &format!("{top_n:02}"), item);

            let next_nested = items.get(i + 1).is_some_and(|n| n.depth > TOC_MIN_DEPTH);
            if next_nested {
                s.push_str(r#"<ol class="toc-sub">"#);
                sub_open = true;
            }
        } else {
            sub_n += 1;
            s.push_str(r#"<li class="toc-l2">"#);
            push_link(&mut s, &format!("{top_n:02}.{sub_n}"), item);
            s.push_str("</li>");
        }
    }

    if li_open {
        if sub_open {
            s.push_str("</ol>");
        }
        s.push_str("</li>");
    }

    s.push_str("</ol></nav>");
    s
}

fn push_link(s: &mut String, num: &str, item: &TocItem) {
    // Writing into a String cannot fail.
    let _ = write!(
        s,
        r##"<a href="#{}"><span class="toc-num">{num}</span><span class="toc-text">{}</span></a>"##,
        escape_attr(&item.slug),
        escape_text(&item.text),
    );
}
