//! Fixed-width table rendering for query results.
//!
//! Columns are right-aligned: ID(6), Title(40, clipped), Genres(25, clipped,
//! text before the first comma of the raw genres field), Year(6, text after
//! that comma), AvgRate(10, six decimals), count(8). The user table inserts
//! UserRate(10) before GlobalAvg(10). An empty row set renders to an empty
//! string - no header, no separator.

use crate::query::{RatedMovieRow, UserMovieRow};
use std::fmt::Write;

/// Renders prefix/top/tags results.
pub fn render_rated_rows(rows: &[RatedMovieRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6} | {:>40} | {:>25} | {:>6} | {:>10} | {:>8}",
        "ID", "Title", "Genres", "Year", "AvgRate", "count"
    );
    let _ = writeln!(out, "{}", "-".repeat(105));

    for row in rows {
        let (genres, year) = split_genres(&row.genres);
        let _ = writeln!(
            out,
            "{:>6} | {:>40} | {:>25} | {:>6} | {:>10.6} | {:>8}",
            row.movie_id,
            clip(&row.title, 40),
            clip(genres, 25),
            year,
            row.average,
            row.rating_count
        );
    }

    out
}

/// Renders user-query results, with the user's own rating ahead of the
/// global average.
pub fn render_user_rows(rows: &[UserMovieRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6} | {:>40} | {:>25} | {:>6} | {:>10} | {:>10} | {:>8}",
        "ID", "Title", "Genres", "Year", "UserRate", "GlobalAvg", "count"
    );
    let _ = writeln!(out, "{}", "-".repeat(110));

    for row in rows {
        let (genres, year) = split_genres(&row.genres);
        let _ = writeln!(
            out,
            "{:>6} | {:>40} | {:>25} | {:>6} | {:>10.6} | {:>10.6} | {:>8}",
            row.movie_id,
            clip(&row.title, 40),
            clip(genres, 25),
            year,
            row.user_rating,
            row.global_average,
            row.rating_count
        );
    }

    out
}

/// Splits the raw genres field at its first comma into (genre list, year).
fn split_genres(genres: &str) -> (&str, &str) {
    match genres.split_once(',') {
        Some((list, year)) => (list, year),
        None => (genres, ""),
    }
}

/// First `width` characters of `s`.
fn clip(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}
