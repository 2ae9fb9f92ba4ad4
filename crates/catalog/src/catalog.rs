//! The catalog: the three slot-table indices plus the title trie.
//!
//! The load phase populates everything through the three load operations
//! (`insert_movie`, `record_rating`, `tag_movie`); after that the structures
//! are only read. Nothing is ever removed.

use crate::error::Result;
use crate::slot::SlotTable;
use crate::trie::TitleTrie;
use crate::types::{Movie, MovieId, User, UserId, UserRating};

/// Slot-table capacities, fixed at construction.
///
/// There is no resize path: each capacity must exceed the expected number of
/// distinct keys (movie ids, user ids, normalized tags). The defaults are
/// sized for the MovieLens dataset the tool was written against.
#[derive(Debug, Clone, Copy)]
pub struct CatalogConfig {
    pub movie_capacity: usize,
    pub user_capacity: usize,
    pub tag_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            movie_capacity: 30_000,
            user_capacity: 300_000,
            tag_capacity: 500_000,
        }
    }
}

/// In-memory analytical index over movies, ratings and tags.
pub struct Catalog {
    movies: SlotTable<MovieId, Movie>,
    users: SlotTable<UserId, User>,
    /// Tag entries keep set semantics: no duplicate movie ids, insertion
    /// order otherwise preserved
    tags: SlotTable<String, Vec<MovieId>>,
    titles: TitleTrie,
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            movies: SlotTable::new("movie", config.movie_capacity),
            users: SlotTable::new("user", config.user_capacity),
            tags: SlotTable::new("tag", config.tag_capacity),
            titles: TitleTrie::new(),
        }
    }

    // Load operations - consumed by the ingestion collaborator

    /// Registers a movie, overwriting title and genres on a repeated id, and
    /// indexes the title in the trie.
    pub fn insert_movie(&mut self, movie_id: MovieId, title: &str, genres: &str) -> Result<()> {
        let movie = self
            .movies
            .insert_or_get_with(movie_id, || Movie::new(movie_id))?;
        movie.title = title.to_string();
        movie.genres = genres.to_string();

        self.titles.insert(title, movie_id);
        Ok(())
    }

    /// Accumulates one rating into the movie's counters and appends it to
    /// the user's history, creating either entry on first reference.
    pub fn record_rating(&mut self, user_id: UserId, movie_id: MovieId, rating: f32) -> Result<()> {
        let movie = self
            .movies
            .insert_or_get_with(movie_id, || Movie::new(movie_id))?;
        movie.rating_count += 1;
        movie.rating_sum += f64::from(rating);

        let user = self.users.insert_or_get_with(user_id, || User::new(user_id))?;
        user.ratings.push(UserRating { movie_id, rating });
        Ok(())
    }

    /// Associates `movie_id` with an already-normalized tag, ignoring the
    /// call if the pair is known.
    pub fn tag_movie(&mut self, movie_id: MovieId, tag: &str) -> Result<()> {
        let movie_ids = self.tags.insert_or_get_with(tag.to_string(), Vec::new)?;
        if !movie_ids.contains(&movie_id) {
            movie_ids.push(movie_id);
        }
        Ok(())
    }

    // Read accessors - consumed by the query engine

    pub fn movie(&self, movie_id: MovieId) -> Option<&Movie> {
        self.movies.find(&movie_id)
    }

    pub fn user(&self, user_id: UserId) -> Option<&User> {
        self.users.find(&user_id)
    }

    /// Movie ids carrying `tag` (already normalized), empty slice if none.
    pub fn movies_for_tag(&self, tag: &str) -> &[MovieId] {
        self.tags.find(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Movie ids whose title starts with `prefix`, in trie order.
    pub fn titles_with_prefix(&self, prefix: &str) -> Vec<MovieId> {
        self.titles.search_prefix(prefix)
    }

    /// All movies in physical slot order; top-N query fodder, re-sorted by
    /// the caller.
    pub fn iter_movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.occupied().map(|(_, movie)| movie)
    }

    /// (movies, users, distinct tags) for load reporting.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.movies.len(), self.users.len(), self.tags.len())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
