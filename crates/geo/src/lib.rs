//! Great-circle geodesy on a spherical Earth.
//!
//! This crate provides:
//! - Coordinate validation
//! - Haversine distance, rhumb-line bearing and compass direction
//! - Bounding rectangles for cheap radius pre-filtering
//! - Batch search-by-radius with optional parallelism
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use geolocation::{Coordinate, Direction, DistanceUnit, direction_between, distance_between};
//!
//! let origin = Coordinate::new(34.0675918, -118.3977091);
//! let destination = Coordinate::new(35.076234, -118.9078687);
//!
//! let miles = distance_between(&origin, &destination, 1, DistanceUnit::Miles).unwrap();
//! assert_eq!(miles, 75.5);
//! assert_eq!(direction_between(&origin, &destination).unwrap(), Direction::NW);
//! ```

pub mod angle;
pub mod batch;
mod boundaries;
mod calculator;
mod error;
mod units;
pub mod validation;

#[cfg(feature = "wasm")]
mod wasm;

pub use batch::{
    BatchOptions, DistanceResult, LocationItem, calculate_distances, find_within_radius,
};
pub use boundaries::CoordinateBoundaries;
pub use calculator::{
    DEFAULT_DECIMAL_PLACES, Direction, bearing_between, direction_between, distance_between,
    get_bearing, get_direction, get_distance, round_to,
};
pub use error::{GeoError, GeoErrorCode, Result};
pub use units::{DistanceUnit, ParseUnitError};
pub use validation::validate;

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// No range check happens here; every calculation validates its inputs.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        validate(self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(34.0675918, -118.3977091);
        assert_eq!(coord.latitude, 34.0675918);
        assert_eq!(coord.longitude, -118.3977091);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (35.076234, -118.9078687).into();
        assert_eq!(coord.latitude, 35.076234);
    }

    #[test]
    fn test_equal_coordinates_are_interchangeable() {
        let a = Coordinate::new(35.076234, -118.9078687);
        let b: Coordinate = (35.076234, -118.9078687).into();
        assert_eq!(a, b);
        assert_eq!(
            distance_between(&a, &b, 3, DistanceUnit::Meters).unwrap(),
            0.0
        );
    }
}
