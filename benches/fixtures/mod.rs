use std::time::Duration;

use libpostkit::types::{IsoDate, Post, Tag};

/// Options to synthesize a post body for benchmarking.
#[derive(Clone, Debug)]
pub struct BodyOptions {
    pub words: usize,
    pub sections: usize,
    pub with_code: bool,
    pub with_html: bool,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            words: 1_500,
            sections: 8,
            with_code: true,
            with_html: true,
        }
    }
}

/// Generate a Markdown body with `sections` h2 headings, each followed by an
/// h3 and an even share of the prose.
pub fn markdown_body(opts: &BodyOptions) -> String {
    let sections = opts.sections.max(1);
    let per_section = opts.words / sections;
    let prose = "lorem ipsum dolor sit amet consectetur adipiscing elit ";
    let words_in_prose = prose.split_whitespace().count();

    let mut body = String::new();
    for i in 0..sections {
        body.push_str(&format!("## Section {i}: Overview & Notes\n\n"));
        body.push_str(&prose.repeat(per_section / words_in_prose / 2));
        body.push_str(&format!("\n\n### Detail {i}\n\n"));
        if opts.with_html {
            body.push_str("<aside class=\"note\">an aside</aside>\n");
        }
        body.push_str(&prose.repeat(per_section / words_in_prose / 2));
        if opts.with_code {
            body.push_str("\n\n```rs\nfn main() { println!(\"hi\"); }\n```\n\nSee `main` above.\n");
        }
        body.push('\n');
    }
    body
}

/// A collection of posts with overlapping tags and spread-out dates.
pub fn posts(count: usize) -> Vec<Post> {
    const TAGS: [&str; 8] = ["rust", "web", "css", "linux", "nix", "math", "music", "travel"];
    let start = IsoDate::parse("2020-01-01").expect("valid date").as_date();
    (0..count)
        .map(|i| Post {
            slug: format!("post-{i}"),
            title: format!("Post {i:04}"),
            tags: [TAGS[i % 8], TAGS[(i * 3) % 8], TAGS[(i * 5 + 1) % 8]]
                .into_iter()
                .filter_map(Tag::parse)
                .collect(),
            date: (start + time::Duration::days((i * 7 % 1_500) as i64)).into(),
        })
        .collect()
}

pub fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}
