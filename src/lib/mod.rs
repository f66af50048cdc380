//! Content utilities for a static blog: reading-time estimates, bionic
//! reading, related-post ranking and table-of-contents extraction, plus a
//! loader for Markdown posts with front matter.

pub mod bionic;
pub mod config;
pub mod content;
pub mod header;
pub mod reading_time;
pub mod related;
pub mod toc;
pub mod transformer;
pub mod types;
pub mod utils;
