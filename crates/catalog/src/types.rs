//! Core domain types for the MovieLens catalog.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with movie IDs

/// Unique identifier for a movie
pub type MovieId = u32;

/// Unique identifier for a user
pub type UserId = u32;

// =============================================================================
// Movie
// =============================================================================

/// A movie together with its rating accumulators.
///
/// `genres` is kept as the raw text from the dataset: the segment before the
/// first comma is the pipe-separated genre list, anything after it is the
/// year column. The split only happens at render time; queries treat the
/// whole field as opaque text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genres: String,
    /// Number of ratings received so far
    pub rating_count: u32,
    /// Running sum of all rating values
    pub rating_sum: f64,
}

impl Movie {
    /// Creates an empty movie entry for `id`, to be filled in by the loader.
    pub fn new(id: MovieId) -> Self {
        Self {
            id,
            title: String::new(),
            genres: String::new(),
            rating_count: 0,
            rating_sum: 0.0,
        }
    }

    /// Global average rating, or `None` for a movie nobody has rated.
    ///
    /// Movies without ratings are excluded from every query, so callers
    /// filter on `None` rather than defaulting to zero.
    pub fn average(&self) -> Option<f64> {
        if self.rating_count == 0 {
            None
        } else {
            Some(self.rating_sum / f64::from(self.rating_count))
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// One (movie, rating) pair from a user's history
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserRating {
    pub movie_id: MovieId,
    pub rating: f32,
}

/// A user and their ratings in insertion order.
///
/// The sequence is append-only; duplicates across movies are kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub ratings: Vec<UserRating>,
}

impl User {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            ratings: Vec::new(),
        }
    }
}
