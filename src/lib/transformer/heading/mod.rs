use std::collections::VecDeque;

use pulldown_cmark::{CowStr, Event, HeadingLevel, Tag, TagEnd};

use crate::{transformer::Transformer, utils::slugify};

/// Give h2 and h3 headings an `id` so the links emitted by
/// [`crate::toc::render_html`] resolve.
///
/// The id is the slug of the heading's parsed text and inline code.
/// [`crate::toc::extract`] slugs the raw source line instead, so the two
/// disagree when the heading holds Markdown syntax the parser consumes:
/// links (`[a](b)`), closing ATX hashes (`## Foo ##` gives `foo-` there but
/// `foo` here), entities and escapes (`&amp;` keeps `amp` there), or
/// trailing whitespace. Headings that already carry an explicit id keep it.
/// Ids are not deduplicated.
pub struct HeadingAnchorTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    inner: I,
    /// Events of a finished heading waiting to be handed out.
    pending: VecDeque<Event<'a>>,
}

impl<'a, I> Iterator for HeadingAnchorTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(ev) = self.pending.pop_front() {
            return Some(ev);
        }

        match self.inner.next()? {
            Event::Start(Tag::Heading {
                level: level @ (HeadingLevel::H2 | HeadingLevel::H3),
                id: None,
                classes,
                attrs,
            }) => {
                let mut title = String::new();
                for ev in self.inner.by_ref() {
                    let done = matches!(ev, Event::End(TagEnd::Heading(_)));
                    if let Event::Text(t) | Event::Code(t) = &ev {
                        title.push_str(t);
                    }
                    self.pending.push_back(ev);
                    if done {
                        break;
                    }
                }

                let slug = slugify(&title);
                let id = (!slug.is_empty()).then(|| CowStr::from(slug));
                Some(Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }))
            }
            other => Some(other),
        }
    }
}

impl<'a, I> Transformer<'a, I> for HeadingAnchorTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    fn transform(inner: I) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }
}
