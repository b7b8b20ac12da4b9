//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Vincenty iteration exhausted its budget without converging.
    #[error("distance computation did not converge after {iterations} iterations")]
    NoConvergence {
        /// Number of iterations attempted before giving up.
        iterations: u32,
    },

    /// Invalid coordinate values
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Unrecognized algorithm name in configuration
    #[error("Unknown distance algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Error code for integration with catalog error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Iterative formula failed to converge
    NoConvergence = 10001,
    /// Invalid coordinate values
    InvalidCoordinate = 10002,
    /// Unrecognized algorithm name
    UnknownAlgorithm = 10003,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::NoConvergence { .. } => GeoErrorCode::NoConvergence,
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::UnknownAlgorithm(_) => GeoErrorCode::UnknownAlgorithm,
        }
    }
}
