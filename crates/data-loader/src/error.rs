//! Error types for the data-loader crate.
//!
//! Malformed data rows are not errors here - they are skipped and counted.
//! Only I/O failures and catalog capacity exhaustion surface as errors.

use thiserror::Error;

/// Errors that can occur during data loading
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error while opening or reading a data file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog rejected a record (a slot table filled up)
    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, LoadError>;
