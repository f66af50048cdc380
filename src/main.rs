use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use color_eyre::{Section, eyre::eyre};
use libpostkit::{
    bionic,
    config::{INPUT_DIR, RELATED_POSTS_LIMIT},
    content::{Entry, load_dir},
    header::split_front_matter,
    reading_time::{self, ReadingTime},
    related::rank_scored,
    toc::{self, TocItem},
    types::Post,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "postkit",
    version,
    about = "Reading time, bionic text, related posts and TOCs for Markdown posts"
)]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the reading time of a Markdown file, in minutes
    ReadingTime { file: PathBuf },
    /// Emphasise the leading part of every word of a file
    Bionic { file: PathBuf },
    /// List the h2/h3 outline of a Markdown file
    Toc {
        file: PathBuf,
        /// Render the outline as an HTML nav
        #[arg(long)]
        html: bool,
    },
    /// Rank the posts most related to the one with SLUG
    Related {
        slug: String,
        #[arg(short, long, default_value_t = RELATED_POSTS_LIMIT)]
        limit: usize,
        #[arg(short, long, default_value = INPUT_DIR)]
        dir: PathBuf,
    },
    /// Reading time and related posts for every post
    Report {
        #[arg(short, long, default_value = INPUT_DIR)]
        dir: PathBuf,
        #[arg(short, long, default_value_t = RELATED_POSTS_LIMIT)]
        limit: usize,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::ReadingTime { file } => {
            let body = read_body(&file)?;
            let rt = reading_time::measure(&body);
            if cli.json {
                print_json(&rt)?;
            } else {
                println!("{} min ({} words)", rt.minutes, rt.words);
            }
        }
        Command::Bionic { file } => {
            let body = read_body(&file)?;
            let out = bionic::transform(&body);
            if cli.json {
                print_json(&out)?;
            } else {
                print!("{out}");
            }
        }
        Command::Toc { file, html } => {
            let body = read_body(&file)?;
            let items = toc::extract(&body);
            if cli.json {
                print_json(&items)?;
            } else if html {
                println!("{}", toc::render_html(&items));
            } else {
                print_outline(&items);
            }
        }
        Command::Related { slug, limit, dir } => {
            let entries = load_dir(&dir).with_note(|| format!("While loading {}", dir.display()))?;
            let posts: Vec<Post> = entries.into_iter().map(|e| e.post).collect();
            let current = posts
                .iter()
                .find(|p| p.slug == slug)
                .ok_or_else(|| eyre!("No post with slug {slug:?} in {}", dir.display()))?;

            let ranked: Vec<Related<'_>> = rank_scored(current, &posts, limit)
                .into_iter()
                .map(|(post, score)| Related { post, score })
                .collect();
            debug!(slug = %slug, found = ranked.len(), "Ranked related posts");

            if cli.json {
                print_json(&ranked)?;
            } else {
                for r in &ranked {
                    println!("{:>6.3}  {}  {}", r.score, r.post.slug, r.post.title);
                }
            }
        }
        Command::Report { dir, limit } => {
            let entries = load_dir(&dir).with_note(|| format!("While loading {}", dir.display()))?;
            info!(posts = entries.len(), "Building report");
            let posts: Vec<Post> = entries.iter().map(|e| e.post.clone()).collect();
            let rows = build_report(&entries, &posts, limit);

            if cli.json {
                print_json(&rows)?;
            } else {
                for row in &rows {
                    println!(
                        "{}\t{} min\t{}",
                        row.slug,
                        row.reading_time.minutes,
                        row.related.join(", ")
                    );
                }
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct Related<'a> {
    #[serde(flatten)]
    post: &'a Post,
    score: f64,
}

#[derive(Serialize)]
struct ReportRow<'a> {
    slug: &'a str,
    title: &'a str,
    reading_time: ReadingTime,
    headings: usize,
    related: Vec<&'a str>,
}

fn build_report<'a>(entries: &'a [Entry], posts: &'a [Post], limit: usize) -> Vec<ReportRow<'a>> {
    entries
        .par_iter()
        .map(|entry| ReportRow {
            slug: &entry.post.slug,
            title: &entry.post.title,
            reading_time: reading_time::measure(&entry.body),
            headings: toc::extract(&entry.body).len(),
            related: rank_scored(&entry.post, posts, limit)
                .into_iter()
                .map(|(p, _)| p.slug.as_str())
                .collect(),
        })
        .collect()
}

fn read_body(file: &Path) -> color_eyre::Result<String> {
    let source =
        read_to_string(file).with_note(|| format!("While reading {}", file.display()))?;
    let (_, body) = split_front_matter(&source)?;
    Ok(body)
}

fn print_outline(items: &[TocItem]) {
    for item in items {
        let indent = "  ".repeat(item.depth.saturating_sub(2));
        println!("{indent}- {} (#{})", item.text, item.slug);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> color_eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
