//! Error types for the catalog crate.

use stayfind_geo::GeoError;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Page numbers are 1-based
    #[error("Invalid page {0}: pages are numbered from 1")]
    InvalidPage(u32),

    /// Page size must hold at least one result
    #[error("Invalid page size {0}: must be at least 1")]
    InvalidPageSize(u32),

    /// No record with the given id
    #[error("No hotel with id {id}")]
    NotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// A record with the same display name already exists
    #[error("A hotel named {name:?} already exists")]
    DuplicateName {
        /// The conflicting name.
        name: String,
    },

    /// Distance computation failed
    #[error(transparent)]
    Distance(#[from] GeoError),
}

/// Error code for programmatic handling.
/// Range: 11xxx for catalog errors; distance failures carry the geo code.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorCode {
    /// Invalid page number
    InvalidPage = 11001,
    /// Invalid page size
    InvalidPageSize = 11002,
    /// Record not found
    NotFound = 11003,
    /// Duplicate display name
    DuplicateName = 11004,
    /// Distance computation failed
    Distance = 11005,
}

impl CatalogError {
    /// Returns the error code for this error.
    pub fn code(&self) -> CatalogErrorCode {
        match self {
            CatalogError::InvalidPage(_) => CatalogErrorCode::InvalidPage,
            CatalogError::InvalidPageSize(_) => CatalogErrorCode::InvalidPageSize,
            CatalogError::NotFound { .. } => CatalogErrorCode::NotFound,
            CatalogError::DuplicateName { .. } => CatalogErrorCode::DuplicateName,
            CatalogError::Distance(_) => CatalogErrorCode::Distance,
        }
    }
}
