//! Building a catalog from the parsed CSV records.
//!
//! The three files are parsed in parallel (nested `rayon::join`, the same
//! three-way split as parsing them one by one would give), then applied to
//! the catalog serially: movies first, then ratings, then tags. The catalog
//! itself is only ever touched from one thread.

use crate::error::Result;
use crate::parser::{self, MovieRecord, Parsed, RatingRecord, TagRecord};
use catalog::{Catalog, CatalogConfig};
use std::path::Path;
use tracing::info;

/// Per-file counts from a full dataset load.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadSummary {
    pub movies: usize,
    pub ratings: usize,
    pub tags: usize,
    /// Malformed rows skipped across all three files
    pub skipped: usize,
}

/// Feeds parsed movie records into the catalog.
pub fn apply_movies(catalog: &mut Catalog, records: &[MovieRecord]) -> Result<()> {
    for record in records {
        catalog.insert_movie(record.movie_id, &record.title, &record.genres)?;
    }
    Ok(())
}

/// Feeds parsed ratings into the catalog.
pub fn apply_ratings(catalog: &mut Catalog, records: &[RatingRecord]) -> Result<()> {
    for record in records {
        catalog.record_rating(record.user_id, record.movie_id, record.rating)?;
    }
    Ok(())
}

/// Feeds parsed tag records into the catalog.
pub fn apply_tags(catalog: &mut Catalog, records: &[TagRecord]) -> Result<()> {
    for record in records {
        catalog.tag_movie(record.movie_id, &record.tag)?;
    }
    Ok(())
}

/// Loads movies.csv into the catalog; returns the number of applied rows.
pub fn load_movies(path: &Path, catalog: &mut Catalog) -> Result<usize> {
    let parsed = parser::parse_movies(path)?;
    apply_movies(catalog, &parsed.records)?;
    Ok(parsed.records.len())
}

/// Loads ratings.csv into the catalog; returns the number of applied rows.
pub fn load_ratings(path: &Path, catalog: &mut Catalog) -> Result<usize> {
    let parsed = parser::parse_ratings(path)?;
    apply_ratings(catalog, &parsed.records)?;
    Ok(parsed.records.len())
}

/// Loads tags.csv into the catalog; returns the number of applied rows.
pub fn load_tags(path: &Path, catalog: &mut Catalog) -> Result<usize> {
    let parsed = parser::parse_tags(path)?;
    apply_tags(catalog, &parsed.records)?;
    Ok(parsed.records.len())
}

/// Loads the whole dataset directory (movies.csv, ratings.csv, tags.csv)
/// into a fresh catalog.
pub fn load_catalog(data_dir: &Path, config: CatalogConfig) -> Result<(Catalog, LoadSummary)> {
    let movies_path = data_dir.join("movies.csv");
    let ratings_path = data_dir.join("ratings.csv");
    let tags_path = data_dir.join("tags.csv");

    // Parse all three files in parallel; nested joins give three-way
    // parallelism. Applying happens serially below.
    let ((movies, ratings), tags) = rayon::join(
        || {
            rayon::join(
                || parser::parse_movies(&movies_path),
                || parser::parse_ratings(&ratings_path),
            )
        },
        || parser::parse_tags(&tags_path),
    );

    let movies: Parsed<MovieRecord> = movies?;
    let ratings: Parsed<RatingRecord> = ratings?;
    let tags: Parsed<TagRecord> = tags?;

    let summary = LoadSummary {
        movies: movies.records.len(),
        ratings: ratings.records.len(),
        tags: tags.records.len(),
        skipped: movies.skipped + ratings.skipped + tags.skipped,
    };

    let mut catalog = Catalog::with_config(config);
    apply_movies(&mut catalog, &movies.records)?;
    apply_ratings(&mut catalog, &ratings.records)?;
    apply_tags(&mut catalog, &tags.records)?;

    let (movie_count, user_count, tag_count) = catalog.counts();
    info!(
        movies = summary.movies,
        ratings = summary.ratings,
        tags = summary.tags,
        skipped = summary.skipped,
        distinct_movies = movie_count,
        distinct_users = user_count,
        distinct_tags = tag_count,
        "dataset loaded"
    );

    Ok((catalog, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_movie_line, parse_rating_line, parse_tag_line};
    use catalog::CatalogConfig;

    fn small_catalog() -> Catalog {
        Catalog::with_config(CatalogConfig {
            movie_capacity: 64,
            user_capacity: 64,
            tag_capacity: 64,
        })
    }

    #[test]
    fn test_apply_parsed_lines_end_to_end() {
        let mut catalog = small_catalog();

        let movies: Vec<MovieRecord> = [
            "1,Toy Story (1995),Adventure|Animation,1995",
            "11,\"American President, The (1995)\",Comedy|Drama,1995",
        ]
        .iter()
        .filter_map(|line| parse_movie_line(line))
        .collect();
        apply_movies(&mut catalog, &movies).unwrap();

        let ratings: Vec<RatingRecord> = ["1,1,4.0,0", "2,1,5.0,0", "3,1,3.0,0", "1,11,2.0,0"]
            .iter()
            .filter_map(|line| parse_rating_line(line))
            .collect();
        apply_ratings(&mut catalog, &ratings).unwrap();

        let tags: Vec<TagRecord> = ["1,1,Pixar,0", "2,1,pixar,0", "3,11,Politics,0"]
            .iter()
            .filter_map(|line| parse_tag_line(line))
            .collect();
        apply_tags(&mut catalog, &tags).unwrap();

        let rows = catalog.prefix_query("Toy");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].average, 4.0);
        assert_eq!(rows[0].rating_count, 3);

        // Duplicate (tag, movie) pairs collapse
        assert_eq!(catalog.movies_for_tag("pixar"), &[1]);
        assert_eq!(catalog.movies_for_tag("politics"), &[11]);
    }

    #[test]
    fn test_capacity_error_propagates() {
        let mut catalog = Catalog::with_config(CatalogConfig {
            movie_capacity: 1,
            user_capacity: 64,
            tag_capacity: 64,
        });

        let records = vec![
            MovieRecord {
                movie_id: 1,
                title: "A".to_string(),
                genres: String::new(),
            },
            MovieRecord {
                movie_id: 2,
                title: "B".to_string(),
                genres: String::new(),
            },
        ];

        let err = apply_movies(&mut catalog, &records).unwrap_err();
        assert!(matches!(err, crate::error::LoadError::Catalog(_)));
    }
}
