//! # Data Loader Crate
//!
//! Loads the MovieLens CSV files (movies.csv, ratings.csv, tags.csv) into a
//! [`catalog::Catalog`].
//!
//! ## Main Components
//!
//! - **parser**: per-line and per-file CSV parsing, malformed-row skipping
//! - **loader**: applying parsed records to the catalog, parallel file parse
//! - **error**: error types for data loading
//!
//! Malformed rows never abort a load; they are skipped and counted. The
//! catalog only ever sees well-formed, already-parsed records.
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogConfig;
//! use data_loader::load_catalog;
//! use std::path::Path;
//!
//! let (catalog, summary) = load_catalog(Path::new("data"), CatalogConfig::default())?;
//! println!("{} movies, {} ratings", summary.movies, summary.ratings);
//! ```

pub mod error;
pub mod loader;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{LoadError, Result};
pub use loader::{
    apply_movies, apply_ratings, apply_tags, load_catalog, load_movies, load_ratings, load_tags,
    LoadSummary,
};
pub use parser::{MovieRecord, Parsed, RatingRecord, TagRecord};
