use color_eyre::Section;
use gray_matter::{Matter, engine::YAML};
use serde::Deserialize;
use tracing::warn;

use crate::types::{IsoDate, Tag, Tags};

/// Front matter of a post.
#[derive(Deserialize, Default, Debug)]
pub struct Header {
    title: Option<String>,
    slug: Option<String>,
    #[serde(alias = "ctime", alias = "pubDate")]
    date: Option<String>,
    tags: Option<Vec<String>>,
}

impl TryFrom<&str> for Header {
    type Error = color_eyre::Report;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        split_front_matter(value).map(|(header, _)| header)
    }
}

/// Separate the front matter of `source` from its Markdown body.
///
/// A document without front matter yields a default header and the whole
/// source as body.
pub fn split_front_matter(source: &str) -> color_eyre::Result<(Header, String)> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse::<Header>(source)
        .with_note(|| "While parsing frontmatter.")?;
    Ok((parsed.data.unwrap_or_default(), parsed.content))
}

impl Header {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn date(&self) -> Option<IsoDate> {
        self.date.as_deref().and_then(IsoDate::parse)
    }

    /// Tags from the front matter, trimmed. Blank entries are dropped with a
    /// warning.
    pub fn tags(&self) -> Tags {
        self.tags
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .filter_map(|raw| {
                let tag = Tag::parse(raw);
                if tag.is_none() {
                    warn!(tag = %raw, "Dropping blank tag");
                }
                tag
            })
            .collect()
    }
}
