//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while populating the catalog's indices.
///
/// The slot tables have a fixed capacity chosen at construction and no
/// resize path, so running out of slots is fatal for the load phase.
/// Callers are expected to size capacities above the expected number of
/// distinct keys (see `CatalogConfig`).
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A slot table ran out of usable slots during insertion
    #[error("{table} table is full (capacity {capacity})")]
    CapacityExceeded {
        table: &'static str,
        capacity: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
