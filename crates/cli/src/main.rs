//! Interactive shell over the movie catalog.
//!
//! Loads the dataset once, then reads commands from stdin until EOF:
//!
//! ```text
//! prefix <text>        titles starting with <text>
//! user <id>            the movies a user rated, their rating first
//! top <n> <genre>      best-rated movies of a genre (>= 1000 ratings)
//! tags <tag...>        movies carrying every tag; quote multi-word tags
//! ```
//!
//! Query output goes to stdout; diagnostics go to stderr so the tables stay
//! pipeable.

use anyhow::{Context, Result};
use catalog::{render_rated_rows, render_user_rows, Catalog, CatalogConfig};
use clap::Parser;
use colored::Colorize;
use data_loader::load_catalog;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Movie catalog query shell
#[derive(Parser)]
#[command(name = "reel-index")]
#[command(about = "In-memory prefix/user/top/tags queries over MovieLens CSVs", long_about = None)]
struct Cli {
    /// Path to the dataset directory (movies.csv, ratings.csv, tags.csv)
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Movie table capacity (must exceed the number of distinct movies)
    #[arg(long, default_value = "30000")]
    movie_capacity: usize,

    /// User table capacity
    #[arg(long, default_value = "300000")]
    user_capacity: usize,

    /// Tag table capacity
    #[arg(long, default_value = "500000")]
    tag_capacity: usize,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CatalogConfig {
        movie_capacity: cli.movie_capacity,
        user_capacity: cli.user_capacity,
        tag_capacity: cli.tag_capacity,
    };

    eprintln!("Loading dataset from {}...", cli.data_dir.display());
    let start = Instant::now();
    let (catalog, summary) = load_catalog(&cli.data_dir, config)
        .with_context(|| format!("failed to load dataset from {}", cli.data_dir.display()))?;
    eprintln!(
        "{} Loaded {} movies, {} ratings, {} tags in {:?}",
        "✓".green(),
        summary.movies,
        summary.ratings,
        summary.tags,
        start.elapsed()
    );

    run_shell(&catalog)
}

/// Reads commands from stdin until EOF, one per line.
fn run_shell(catalog: &Catalog) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        dispatch(catalog, &line, &mut stdout)?;
    }

    Ok(())
}

/// Tokenizes one command line and runs the matching query.
///
/// Invalid arguments are reported on stderr or the command is silently
/// ignored; the catalog is never queried with them.
fn dispatch(catalog: &Catalog, line: &str, out: &mut impl Write) -> Result<()> {
    let (command, rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest),
        None => (line.trim(), ""),
    };

    match command {
        "prefix" => {
            let prefix = rest.trim();
            if !prefix.is_empty() {
                write!(out, "{}", render_rated_rows(&catalog.prefix_query(prefix)))?;
            }
        }
        "user" => {
            let token = match rest.split_whitespace().next() {
                Some(token) => token,
                None => return Ok(()),
            };
            match token.parse() {
                Ok(user_id) => match catalog.user_query(user_id) {
                    Some(rows) => write!(out, "{}", render_user_rows(&rows))?,
                    None => writeln!(out, "User not found")?,
                },
                Err(_) => eprintln!("Invalid user id"),
            }
        }
        "top" => {
            let (n_token, genre) = match rest.trim().split_once(char::is_whitespace) {
                Some((n_token, genre)) => (n_token, genre.trim()),
                None => return Ok(()),
            };
            let n: usize = match n_token.parse() {
                Ok(n) => n,
                Err(_) => return Ok(()),
            };
            if n > 0 && !genre.is_empty() {
                write!(out, "{}", render_rated_rows(&catalog.top_query(n, genre)))?;
            }
        }
        "tags" => {
            let tags = parse_tags_line(rest);
            if !tags.is_empty() {
                write!(out, "{}", render_rated_rows(&catalog.tags_query(&tags)))?;
            }
        }
        _ => eprintln!("Unknown command"),
    }

    Ok(())
}

/// Splits the argument part of a `tags` command into tags, honoring single
/// quotes around multi-word tags: `'dark hero' drama` -> ["dark hero",
/// "drama"]. Quote characters themselves are dropped.
fn parse_tags_line(line: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '\'' {
            in_quotes = !in_quotes;
            continue;
        }

        if ch.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                tags.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        tags.push(current);
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_plain() {
        assert_eq!(parse_tags_line("drama comedy"), vec!["drama", "comedy"]);
    }

    #[test]
    fn test_parse_tags_quoted_multiword() {
        assert_eq!(
            parse_tags_line("'dark hero' drama"),
            vec!["dark hero", "drama"]
        );
    }

    #[test]
    fn test_parse_tags_unterminated_quote_runs_to_end() {
        assert_eq!(parse_tags_line("'dark hero drama"), vec!["dark hero drama"]);
    }

    #[test]
    fn test_parse_tags_empty() {
        assert!(parse_tags_line("").is_empty());
        assert!(parse_tags_line("   ").is_empty());
        assert!(parse_tags_line("''").is_empty());
    }
}
