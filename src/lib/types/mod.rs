//! Shared data types for the content utilities.
//! Implemented as newtypes to enforce invariants.

use std::{collections::BTreeSet, fmt};

use serde::{Serialize, Serializer};
use time::{
    Date, OffsetDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

const ISO_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date in `YYYY-MM-DD` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoDate(Date);

impl IsoDate {
    /// Accepts a bare `YYYY-MM-DD` date or an RFC 3339 timestamp, whose time
    /// and offset are discarded.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Date::parse(s, ISO_FORMAT)
            .or_else(|_| OffsetDateTime::parse(s, &Rfc3339).map(|dt| dt.date()))
            .ok()
            .map(Self)
    }

    pub fn as_str(&self) -> String {
        self.0.format(ISO_FORMAT).unwrap_or_default()
    }

    pub fn as_date(&self) -> Date {
        self.0
    }

    /// Absolute distance to `other`, in days.
    pub fn days_between(&self, other: &IsoDate) -> f64 {
        (self.0 - other.0).whole_days().unsigned_abs() as f64
    }
}

impl From<Date> for IsoDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl Serialize for IsoDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Tags used to categorise posts. Any non-blank string, stored trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of tags attached to a post. Duplicates collapse and order is not
/// significant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tags(BTreeSet<Tag>);

impl Tags {
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self(tags.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }

    /// Number of tags present in both sets.
    pub fn shared_with(&self, other: &Tags) -> usize {
        self.0.intersection(&other.0).count()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::collections::btree_set::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Tag> for Tags {
    fn from_iter<T: IntoIterator<Item = Tag>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// A published post, as seen by the related-posts ranking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub tags: Tags,
    pub date: IsoDate,
}
