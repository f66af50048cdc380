//! Loading posts from a directory of Markdown files with YAML front matter.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{Section, eyre::eyre};
use itertools::{Either, Itertools};
use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{header::split_front_matter, types::Post};

/// A post together with the Markdown it was read from.
#[derive(Clone, Debug)]
pub struct Entry {
    pub post: Post,
    /// Markdown body with the front matter removed.
    pub body: String,
    /// Path of the source file, relative to the content root.
    pub rel_path: PathBuf,
}

/// Load every dated `.md` post below `root`, ordered by path.
///
/// Files without a valid `date` are skipped with a warning. Two posts with
/// the same slug are an error.
pub fn load_dir(root: &Path) -> color_eyre::Result<Vec<Entry>> {
    let sources = discover_sources(root)?;
    debug!(count = sources.len(), root = %root.display(), "Discovered sources");

    let (entries, errors): (Vec<Option<Entry>>, Vec<color_eyre::Report>) = sources
        .into_par_iter()
        .map(|(rel_path, source)| {
            parse_entry(&rel_path, &source)
                .with_note(|| format!("While parsing {}", rel_path.display()))
        })
        .collect::<Vec<_>>()
        .into_iter()
        .partition_map(|r| match r {
            Ok(v) => Either::Left(v),
            Err(e) => Either::Right(e),
        });

    if let Some(first) = errors.into_iter().next() {
        return Err(first);
    }

    let entries: Vec<Entry> = entries.into_iter().flatten().collect();

    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert(entry.post.slug.as_str()) {
            return Err(eyre!(
                "Duplicate slug {:?} (second seen in {})",
                entry.post.slug,
                entry.rel_path.display()
            ));
        }
    }

    Ok(entries)
}

/// Turn one source file into an [`Entry`].
///
/// Returns `Ok(None)` when the front matter has no usable date, since such a
/// file cannot take part in ranking.
pub fn parse_entry(rel_path: &Path, source: &str) -> color_eyre::Result<Option<Entry>> {
    let (header, body) = split_front_matter(source)?;

    let Some(date) = header.date() else {
        warn!(path = %rel_path.display(), "Skipping post without a valid date");
        return Ok(None);
    };

    let slug = header
        .slug()
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| slug_from_path(rel_path));

    let title = header
        .title()
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| slug.clone());

    Ok(Some(Entry {
        post: Post {
            slug,
            title,
            tags: header.tags(),
            date,
        },
        body,
        rel_path: rel_path.to_path_buf(),
    }))
}

/// Relative path without its extension, using forward slashes.
fn slug_from_path(rel_path: &Path) -> String {
    rel_path
        .with_extension("")
        .to_string_lossy()
        .replace('\\', "/")
}

fn discover_sources(root: &Path) -> color_eyre::Result<Vec<(PathBuf, String)>> {
    let mut md_paths: Vec<PathBuf> = Vec::new();
    let mut walk_errors: Vec<walkdir::Error> = Vec::new();

    for item in WalkDir::new(root) {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == "md")
                {
                    md_paths.push(entry.path().to_path_buf());
                }
            }
            Err(e) => walk_errors.push(e),
        }
    }

    if !walk_errors.is_empty() {
        return Err(eyre!(
            "Failed to open some directory entries: {walk_errors:?}"
        ));
    }

    md_paths.sort();

    let mut docs: Vec<(PathBuf, String)> = Vec::with_capacity(md_paths.len());
    let mut file_errors: Vec<(PathBuf, std::io::Error)> = Vec::new();

    for path in md_paths {
        match fs::read_to_string(&path) {
            Ok(content) => {
                let rel = path
                    .strip_prefix(root)
                    .map(ToOwned::to_owned)
                    .map_err(|_| eyre!("Path outside content root: {}", path.display()))?;
                docs.push((rel, content));
            }
            Err(e) => file_errors.push((path, e)),
        }
    }

    if !file_errors.is_empty() {
        return Err(eyre!("Failed to open some files: {file_errors:?}"));
    }

    Ok(docs)
}
