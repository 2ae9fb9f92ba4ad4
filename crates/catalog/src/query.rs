//! The four read-only queries over a loaded catalog.
//!
//! Every query builds a transient row list, drops movies nobody has rated,
//! sorts with a total-order comparator (ties always end at the movie id,
//! ascending) and truncates where the query calls for it. Rendering is a
//! separate concern (see `render`).

use crate::catalog::Catalog;
use crate::sort::quick_sort;
use crate::types::{MovieId, UserId};
use serde::Serialize;

/// Minimum global rating count for a movie to appear in `top_query`.
pub const TOP_QUERY_MIN_RATINGS: u32 = 1000;

/// Maximum number of rows returned by `user_query`.
pub const USER_QUERY_LIMIT: usize = 20;

/// One result row carrying a movie's global rating statistics.
#[derive(Debug, Clone, Serialize)]
pub struct RatedMovieRow {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: String,
    pub average: f64,
    pub rating_count: u32,
}

/// One result row of `user_query`: the user's own rating next to the
/// movie's global statistics.
#[derive(Debug, Clone, Serialize)]
pub struct UserMovieRow {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: String,
    pub user_rating: f32,
    pub global_average: f64,
    pub rating_count: u32,
}

/// Normalizes a tag from interactive input: trim, strip one layer of
/// surrounding single quotes, trim again, lowercase.
pub fn normalize_tag(raw: &str) -> String {
    let mut tag = raw.trim();
    if tag.len() >= 2 && tag.starts_with('\'') && tag.ends_with('\'') {
        tag = &tag[1..tag.len() - 1];
    }
    tag.trim().to_lowercase()
}

impl Catalog {
    /// Rated movies whose title starts with `prefix`, best average first.
    pub fn prefix_query(&self, prefix: &str) -> Vec<RatedMovieRow> {
        let mut rows: Vec<RatedMovieRow> = self
            .titles_with_prefix(prefix)
            .into_iter()
            .filter_map(|movie_id| self.rated_row(movie_id))
            .collect();

        quick_sort(&mut rows, rated_row_precedes);
        rows
    }

    /// The movies a user rated, their own rating first, at most
    /// [`USER_QUERY_LIMIT`] rows. `None` means the user does not exist
    /// (distinct from a user whose rated movies all fell away).
    pub fn user_query(&self, user_id: UserId) -> Option<Vec<UserMovieRow>> {
        let user = self.user(user_id)?;

        let mut rows: Vec<UserMovieRow> = user
            .ratings
            .iter()
            .filter_map(|user_rating| {
                let movie = self.movie(user_rating.movie_id)?;
                let average = movie.average()?;
                Some(UserMovieRow {
                    movie_id: movie.id,
                    title: movie.title.clone(),
                    genres: movie.genres.clone(),
                    user_rating: user_rating.rating,
                    global_average: average,
                    rating_count: movie.rating_count,
                })
            })
            .collect();

        quick_sort(&mut rows, |a: &UserMovieRow, b: &UserMovieRow| {
            if a.user_rating != b.user_rating {
                return a.user_rating > b.user_rating;
            }
            if a.global_average != b.global_average {
                return a.global_average > b.global_average;
            }
            a.movie_id < b.movie_id
        });

        rows.truncate(USER_QUERY_LIMIT);
        Some(rows)
    }

    /// The `n` best-rated movies among those with at least
    /// [`TOP_QUERY_MIN_RATINGS`] ratings whose genre text contains `genre`
    /// as a literal, case-sensitive substring.
    ///
    /// The candidates come from a raw scan of the movie table; only the
    /// sorted order is meaningful.
    pub fn top_query(&self, n: usize, genre: &str) -> Vec<RatedMovieRow> {
        if n == 0 {
            return Vec::new();
        }

        let mut rows: Vec<RatedMovieRow> = self
            .iter_movies()
            .filter(|movie| movie.rating_count >= TOP_QUERY_MIN_RATINGS)
            .filter(|movie| movie.genres.contains(genre))
            .filter_map(|movie| {
                let average = movie.average()?;
                Some(RatedMovieRow {
                    movie_id: movie.id,
                    title: movie.title.clone(),
                    genres: movie.genres.clone(),
                    average,
                    rating_count: movie.rating_count,
                })
            })
            .collect();

        quick_sort(&mut rows, rated_row_precedes);
        rows.truncate(n);
        rows
    }

    /// Rated movies carrying every one of `tags` (after normalization),
    /// best average first. The result does not depend on tag order.
    pub fn tags_query(&self, tags: &[String]) -> Vec<RatedMovieRow> {
        if tags.is_empty() {
            return Vec::new();
        }

        let lists: Vec<&[MovieId]> = tags
            .iter()
            .map(|raw| {
                let tag = normalize_tag(raw);
                if tag.is_empty() {
                    &[][..]
                } else {
                    self.movies_for_tag(&tag)
                }
            })
            .collect();

        // Any empty list empties the intersection
        if lists.iter().any(|list| list.is_empty()) {
            return Vec::new();
        }

        // Scan the shortest list, membership-check against all others. The
        // per-tag lists are small relative to the corpus, so the linear
        // membership scan beats building throwaway sets.
        let shortest = lists
            .iter()
            .enumerate()
            .min_by_key(|(_, list)| list.len())
            .map(|(i, _)| i)
            .unwrap_or(0);

        let mut rows: Vec<RatedMovieRow> = lists[shortest]
            .iter()
            .copied()
            .filter(|movie_id| {
                lists
                    .iter()
                    .enumerate()
                    .all(|(i, list)| i == shortest || list.contains(movie_id))
            })
            .filter_map(|movie_id| self.rated_row(movie_id))
            .collect();

        quick_sort(&mut rows, rated_row_precedes);
        rows
    }

    /// Resolves a movie id into a result row, or `None` for an unknown or
    /// unrated movie.
    fn rated_row(&self, movie_id: MovieId) -> Option<RatedMovieRow> {
        let movie = self.movie(movie_id)?;
        let average = movie.average()?;
        Some(RatedMovieRow {
            movie_id: movie.id,
            title: movie.title.clone(),
            genres: movie.genres.clone(),
            average,
            rating_count: movie.rating_count,
        })
    }
}

/// Shared ordering for prefix, top and tags queries:
/// average desc, rating count desc, movie id asc.
fn rated_row_precedes(a: &RatedMovieRow, b: &RatedMovieRow) -> bool {
    if a.average != b.average {
        return a.average > b.average;
    }
    if a.rating_count != b.rating_count {
        return a.rating_count > b.rating_count;
    }
    a.movie_id < b.movie_id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("drama"), "drama");
        assert_eq!(normalize_tag("  Drama \t"), "drama");
        assert_eq!(normalize_tag("'dark hero'"), "dark hero");
        assert_eq!(normalize_tag(" 'Dark Hero' "), "dark hero");
        // Only one layer of quotes comes off
        assert_eq!(normalize_tag("''x''"), "'x'");
        // A lone quote is not a pair
        assert_eq!(normalize_tag("'"), "'");
        assert_eq!(normalize_tag(""), "");
        assert_eq!(normalize_tag("  "), "");
    }
}
