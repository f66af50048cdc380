use pulldown_cmark::{CowStr, Event, Tag, TagEnd, TextMergeStream};

use crate::{
    bionic::{split_keeping_whitespace, split_word},
    transformer::Transformer,
    utils::escape_text,
};

/// Renders prose in bionic form.
///
/// Adjacent `Text` events are merged first, since the parser splits a single
/// word at entities, escapes and brackets. Each merged run is then replaced by
/// inline HTML with the leading part of every word wrapped in `<b>`. Text inside code blocks, images and metadata blocks
/// is left alone, as are inline code and raw HTML.
pub struct BionicTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    inner: TextMergeStream<'a, I>,
    /// How many skipped containers we are currently inside.
    opaque_depth: usize,
}

impl<'a, I> Iterator for BionicTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let ev = self.inner.next()?;
        Some(match ev {
            Event::Start(tag @ (Tag::CodeBlock(_) | Tag::Image { .. } | Tag::MetadataBlock(_))) => {
                self.opaque_depth += 1;
                Event::Start(tag)
            }
            Event::End(end @ (TagEnd::CodeBlock | TagEnd::Image | TagEnd::MetadataBlock(_))) => {
                self.opaque_depth = self.opaque_depth.saturating_sub(1);
                Event::End(end)
            }
            Event::Text(text) if self.opaque_depth == 0 => {
                Event::InlineHtml(CowStr::from(emphasise_escaped(&text)))
            }
            other => other,
        })
    }
}

impl<'a, I> Transformer<'a, I> for BionicTransformer<'a, I>
where
    I: Iterator<Item = Event<'a>>,
{
    fn transform(inner: I) -> Self {
        Self {
            inner: TextMergeStream::new(inner),
            opaque_depth: 0,
        }
    }
}

/// Same split as [`crate::bionic::transform`], but escaping both halves of
/// every word so plain text becomes safe HTML.
fn emphasise_escaped(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for token in split_keeping_whitespace(text) {
        if token.starts_with(char::is_whitespace) {
            out.push_str(token);
            continue;
        }
        let (head, tail) = split_word(token);
        out.push_str("<b>");
        out.push_str(&escape_text(head));
        out.push_str("</b>");
        out.push_str(&escape_text(tail));
    }
    out
}

#[cfg(test)]
mod tests;
