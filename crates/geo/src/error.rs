//! Error types for the geolocation crate.

use crate::Coordinate;
use thiserror::Error;

/// Result type alias for geolocation operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geolocation operations.
///
/// Every variant is an invalid-coordinate failure; the variant names which
/// input was rejected. The rejected value is kept for callers that want to
/// report it, but the display message is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    /// The origin of a two-point calculation is out of range
    #[error("Invalid origin coordinates supplied.")]
    InvalidOrigin(Coordinate),

    /// The destination of a two-point calculation is out of range
    #[error("Invalid destination coordinates supplied.")]
    InvalidDestination(Coordinate),

    /// The origin of a boundary calculation is out of range
    #[error("Invalid coordinates supplied.")]
    InvalidCoordinates(Coordinate),
}

/// Error code for programmatic handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoErrorCode {
    /// Invalid origin coordinate
    InvalidOrigin = 10001,
    /// Invalid destination coordinate
    InvalidDestination = 10002,
    /// Invalid boundary origin coordinate
    InvalidCoordinates = 10003,
}

impl GeoErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidOrigin(_) => GeoErrorCode::InvalidOrigin,
            GeoError::InvalidDestination(_) => GeoErrorCode::InvalidDestination,
            GeoError::InvalidCoordinates(_) => GeoErrorCode::InvalidCoordinates,
        }
    }

    /// The rejected coordinate.
    pub fn coordinate(&self) -> Coordinate {
        match *self {
            GeoError::InvalidOrigin(c)
            | GeoError::InvalidDestination(c)
            | GeoError::InvalidCoordinates(c) => c,
        }
    }
}
