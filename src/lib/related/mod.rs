//! Related-posts ranking by shared tags, with a small bonus for posts
//! published close together.

use crate::{config::RELATED_TAG_WEIGHT, types::Post};

/// Relevance of `candidate` to `current`.
///
/// Each shared tag is worth [`RELATED_TAG_WEIGHT`]; the recency bonus
/// `1 / (days + 1)` lies in `(0, 1]` and peaks when both dates coincide.
pub fn score(current: &Post, candidate: &Post) -> f64 {
    let shared = current.tags.shared_with(&candidate.tags) as f64;
    let days = current.date.days_between(&candidate.date);
    RELATED_TAG_WEIGHT * shared + 1.0 / (days + 1.0)
}

/// Up to `limit` posts from `candidates` most related to `current`, best
/// first. `current` itself is excluded by slug. Posts with equal scores keep
/// their order from `candidates`.
pub fn rank<'a>(current: &Post, candidates: &'a [Post], limit: usize) -> Vec<&'a Post> {
    rank_scored(current, candidates, limit)
        .into_iter()
        .map(|(post, _)| post)
        .collect()
}

/// Like [`rank`], keeping each post's score alongside it.
pub fn rank_scored<'a>(
    current: &Post,
    candidates: &'a [Post],
    limit: usize,
) -> Vec<(&'a Post, f64)> {
    let mut scored: Vec<(&'a Post, f64)> = candidates
        .iter()
        .filter(|p| p.slug != current.slug)
        .map(|p| (p, score(current, p)))
        .collect();

    // `sort_by` is stable, which keeps ties in input order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(limit);
    scored
}
