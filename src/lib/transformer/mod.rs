//! A transformer is an adapter over an iterator of pulldown-cmark `Event`. It
//! intercepts the events it cares about and yields rewritten ones, leaving the
//! rest untouched. This is how the text utilities are applied to a parsed
//! Markdown body instead of raw source: `BionicTransformer` rewrites prose
//! `Text` events into emphasised HTML, and `HeadingAnchorTransformer` gives
//! h2/h3 headings the same ids the table of contents links to.
use pulldown_cmark::Event;

pub mod bionic;
pub mod heading;

/// A transformer over events, that takes in an inner iterator and returns
/// another iterator of events, which returns transformed events.
pub trait Transformer<'a, I>: Iterator<Item = Event<'a>> + Sized
where
    I: Iterator<Item = Event<'a>>,
{
    /// Wrap an inner iterator with the transformer
    fn transform(inner: I) -> Self;
}

/// Wrap an event iterator with another transformer, allowing for chaining.
pub trait WithTransformer<'a>: Iterator<Item = Event<'a>> + Sized {
    /// Wrap ourselves with some transformer
    fn with_transformer<T: Transformer<'a, Self>>(self) -> T {
        T::transform(self)
    }
}

/// Blanket implementation over any event iterator
impl<'a, I: Iterator<Item = Event<'a>>> WithTransformer<'a> for I {}
