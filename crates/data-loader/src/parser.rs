//! Parsers for the MovieLens CSV files.
//!
//! - movies.csv:  movieId,title,genres[,year]  (titles may be double-quoted
//!   because they can contain commas)
//! - ratings.csv: userId,movieId,rating[,timestamp]
//! - tags.csv:    userId,movieId,tag[,timestamp]
//!
//! Each `parse_*_line` function turns one data line into a record, or `None`
//! when the line is malformed. The file-level readers skip the header line,
//! skip malformed rows (counting them), and never fail on bad data - only
//! on I/O.

use crate::error::Result;
use catalog::{MovieId, UserId};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// One row of movies.csv.
///
/// `genres` keeps everything after the title field, which in this dataset
/// is the pipe-separated genre list followed by a comma and the year
/// column. The catalog stores it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: String,
}

/// One row of ratings.csv (timestamp ignored).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RatingRecord {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: f32,
}

/// One row of tags.csv, with the tag already trimmed and lowercased.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRecord {
    pub movie_id: MovieId,
    pub tag: String,
}

/// Parsed rows of one file plus the number of malformed rows skipped.
#[derive(Debug)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

/// Parses one movies.csv data line.
pub fn parse_movie_line(line: &str) -> Option<MovieRecord> {
    let (movie_id, rest) = line.split_once(',')?;
    let movie_id: MovieId = movie_id.trim().parse().ok()?;

    let (title, genres) = if let Some(quoted) = rest.strip_prefix('"') {
        // Quoted title: take up to the closing quote, then resynchronize on
        // the comma that follows it
        let (title, after) = quoted.split_once('"')?;
        (title, after.strip_prefix(',').unwrap_or(after))
    } else {
        match rest.split_once(',') {
            Some((title, genres)) => (title, genres),
            None => (rest, ""),
        }
    };

    Some(MovieRecord {
        movie_id,
        title: title.trim().to_string(),
        genres: genres.trim().to_string(),
    })
}

/// Parses one ratings.csv data line; fields beyond the third are ignored.
pub fn parse_rating_line(line: &str) -> Option<RatingRecord> {
    let mut fields = line.split(',');
    let user_id: UserId = fields.next()?.trim().parse().ok()?;
    let movie_id: MovieId = fields.next()?.trim().parse().ok()?;
    let rating: f32 = fields.next()?.trim().parse().ok()?;

    Some(RatingRecord {
        user_id,
        movie_id,
        rating,
    })
}

/// Parses one tags.csv data line, normalizing the tag (trim + lowercase).
///
/// Rows whose tag normalizes to the empty string are malformed. A tag
/// containing a comma will be cut short at it; that is the upstream format's
/// problem, not ours to repair.
pub fn parse_tag_line(line: &str) -> Option<TagRecord> {
    let mut fields = line.split(',');
    let _user_id = fields.next()?;
    let movie_id: MovieId = fields.next()?.trim().parse().ok()?;
    let tag = fields.next()?.trim().to_lowercase();
    if tag.is_empty() {
        return None;
    }

    Some(TagRecord { movie_id, tag })
}

/// Parse the movies.csv file
pub fn parse_movies(path: &Path) -> Result<Parsed<MovieRecord>> {
    parse_file(path, parse_movie_line)
}

/// Parse the ratings.csv file
pub fn parse_ratings(path: &Path) -> Result<Parsed<RatingRecord>> {
    parse_file(path, parse_rating_line)
}

/// Parse the tags.csv file
pub fn parse_tags(path: &Path) -> Result<Parsed<TagRecord>> {
    parse_file(path, parse_tag_line)
}

/// Reads `path` line by line, skipping the header and empty lines, parsing
/// the rest with `parse_line` and counting the rows it rejects.
fn parse_file<T>(path: &Path, parse_line: impl Fn(&str) -> Option<T>) -> Result<Parsed<T>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 || line.is_empty() {
            continue; // header or blank line
        }

        match parse_line(&line) {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                debug!(file = %path.display(), line = index + 1, "skipping malformed row");
            }
        }
    }

    Ok(Parsed { records, skipped })
}
