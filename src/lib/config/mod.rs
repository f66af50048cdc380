pub const INPUT_DIR: &str = "contents";

// Reading speed used by the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Fraction of each word emphasised by the bionic transform, as
/// `numerator / denominator` so the rounding stays exact.
pub const BIONIC_RATIO: (usize, usize) = (2, 5);

/// Points awarded for each tag shared between two posts.
pub const RELATED_TAG_WEIGHT: f64 = 2.0;
pub const RELATED_POSTS_LIMIT: usize = 3;

// Heading levels collected into the table of contents.
pub const TOC_MIN_DEPTH: usize = 2;
pub const TOC_MAX_DEPTH: usize = 3;
