//! # Catalog Crate
//!
//! In-memory analytical index over the MovieLens movies, ratings and tags
//! datasets, answering four read-only queries: title prefix search, a
//! user's ranked ratings, per-genre top-N by global average, and multi-tag
//! intersection search.
//!
//! The associative structures are built from scratch on purpose: three
//! fixed-capacity open-addressing hash tables (movies, users, tags) and an
//! ASCII trie over titles, plus a comparator-driven quicksort that gives
//! every query its deterministic tie-break order.
//!
//! ## Main Components
//!
//! - **slot**: generic open-addressing slot table with linear probing
//! - **trie**: prefix tree over movie titles
//! - **sort**: comparator-parameterized in-place sort
//! - **catalog**: the owning context and its load operations
//! - **query**: the four query algorithms
//! - **render**: fixed-width result tables
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Catalog, CatalogConfig};
//!
//! let mut catalog = Catalog::with_config(CatalogConfig {
//!     movie_capacity: 64,
//!     user_capacity: 64,
//!     tag_capacity: 64,
//! });
//! catalog.insert_movie(1, "Toy Story (1995)", "Animation|Comedy,1995").unwrap();
//! catalog.record_rating(10, 1, 4.0).unwrap();
//!
//! let rows = catalog.prefix_query("Toy");
//! assert_eq!(rows[0].average, 4.0);
//! ```

pub mod catalog;
pub mod error;
pub mod query;
pub mod render;
pub mod slot;
pub mod sort;
pub mod trie;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CatalogConfig};
pub use error::{CatalogError, Result};
pub use query::{
    normalize_tag, RatedMovieRow, UserMovieRow, TOP_QUERY_MIN_RATINGS, USER_QUERY_LIMIT,
};
pub use render::{render_rated_rows, render_user_rows};
pub use trie::TitleTrie;
pub use types::{Movie, MovieId, User, UserId, UserRating};
