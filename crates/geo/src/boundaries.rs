//! Bounding rectangle around a search radius.
//!
//! A [`CoordinateBoundaries`] is a cheap pre-filter: for short radii away
//! from the poles every point within the great-circle radius of the origin
//! falls inside the rectangle, but not every point inside the rectangle is
//! within the radius. Callers still compute the exact distance for the points
//! that survive.
//!
//! The longitude half-width is `distance / degree_length / cos(latitude)`.
//! The circle's true east-west reach is `asin(sin(d / R) / cos(latitude))`,
//! which grows faster as the circle nears a pole, so at high latitude or for
//! large radii the rectangle is narrower than the circle.
//! [`crate::find_within_radius`] prunes with the true reach instead.
//!
//! Near the poles and the antimeridian the edges are reflected back into
//! range rather than wrapped, which can leave `min > max` on an axis. That is
//! reported through [`CoordinateBoundaries::wraps_latitude`] and
//! [`CoordinateBoundaries::wraps_longitude`]; the values themselves are left
//! as computed.

use crate::angle::to_radians;
use crate::validation::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE, validate};
use crate::{Coordinate, DistanceUnit, GeoError, Result};
use serde::Serialize;
use tracing::debug;

/// Immutable rectangle computed from an origin, a radius and a unit.
///
/// Changing an input means building a new value through one of the `with_*`
/// methods; each runs validation and the full calculation again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateBoundaries {
    latitude: f64,
    longitude: f64,
    distance: f64,
    unit: DistanceUnit,
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
}

impl CoordinateBoundaries {
    /// Computes the rectangle around `(latitude, longitude)` for `distance`
    /// expressed in `unit`.
    ///
    /// # Errors
    /// [`GeoError::InvalidCoordinates`] if the origin is out of range.
    ///
    /// # Example
    /// ```
    /// use geolocation::{CoordinateBoundaries, DistanceUnit};
    ///
    /// let bounds =
    ///     CoordinateBoundaries::new(34.0675918, -118.3977091, 25.0, DistanceUnit::Miles).unwrap();
    /// assert!((bounds.min_latitude() - 33.7053).abs() < 1e-4);
    /// assert!((bounds.max_longitude() - -117.9603).abs() < 1e-4);
    /// ```
    pub fn new(latitude: f64, longitude: f64, distance: f64, unit: DistanceUnit) -> Result<Self> {
        if !validate(latitude, longitude) {
            debug!(latitude, longitude, "rejected boundary origin");
            return Err(GeoError::InvalidCoordinates(Coordinate::new(latitude, longitude)));
        }

        let divisor = unit.degree_length();
        let latitude_factor = distance / divisor;
        let longitude_factor = distance / divisor / to_radians(latitude).cos().abs();

        let mut min_latitude = latitude - latitude_factor;
        let mut max_latitude = latitude + latitude_factor;
        let mut min_longitude = longitude - longitude_factor;
        let mut max_longitude = longitude + longitude_factor;

        if min_latitude < MIN_LATITUDE {
            min_latitude = MAX_LATITUDE - (MIN_LATITUDE - min_latitude);
        }
        if max_latitude > MAX_LATITUDE {
            max_latitude = MIN_LATITUDE + (max_latitude - MAX_LATITUDE);
        }
        if min_longitude < MIN_LONGITUDE {
            min_longitude = MAX_LONGITUDE - (MIN_LONGITUDE - min_longitude);
        }
        if max_longitude > MAX_LONGITUDE {
            max_longitude = MIN_LONGITUDE + (max_longitude - MAX_LONGITUDE);
        }

        Ok(Self {
            latitude,
            longitude,
            distance,
            unit,
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        })
    }

    /// Same as [`CoordinateBoundaries::new`] with a coordinate origin.
    pub fn from_coordinate(origin: &Coordinate, distance: f64, unit: DistanceUnit) -> Result<Self> {
        Self::new(origin.latitude, origin.longitude, distance, unit)
    }

    /// Rebuilds with a different origin latitude.
    pub fn with_latitude(&self, latitude: f64) -> Result<Self> {
        Self::new(latitude, self.longitude, self.distance, self.unit)
    }

    /// Rebuilds with a different origin longitude.
    pub fn with_longitude(&self, longitude: f64) -> Result<Self> {
        Self::new(self.latitude, longitude, self.distance, self.unit)
    }

    /// Rebuilds with a different radius.
    pub fn with_distance(&self, distance: f64) -> Result<Self> {
        Self::new(self.latitude, self.longitude, distance, self.unit)
    }

    /// Rebuilds with a different unit; the radius value is kept as is.
    pub fn with_unit(&self, unit: DistanceUnit) -> Result<Self> {
        Self::new(self.latitude, self.longitude, self.distance, unit)
    }

    /// Origin latitude, in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Origin longitude, in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Origin as a coordinate.
    pub fn origin(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Radius, in [`CoordinateBoundaries::unit`].
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Unit the radius is expressed in.
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Southern edge, in degrees.
    pub fn min_latitude(&self) -> f64 {
        self.min_latitude
    }

    /// Northern edge, in degrees.
    pub fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    /// Western edge, in degrees.
    pub fn min_longitude(&self) -> f64 {
        self.min_longitude
    }

    /// Eastern edge, in degrees.
    pub fn max_longitude(&self) -> f64 {
        self.max_longitude
    }

    /// True when reflection across a pole left `min_latitude > max_latitude`.
    pub fn wraps_latitude(&self) -> bool {
        self.min_latitude > self.max_latitude
    }

    /// True when reflection across the antimeridian left
    /// `min_longitude > max_longitude`.
    pub fn wraps_longitude(&self) -> bool {
        self.min_longitude > self.max_longitude
    }

    /// Plain range test against the four edges.
    ///
    /// This is `min <= value <= max` on both axes and nothing more, so it
    /// rejects everything on an axis that wraps.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.latitude >= self.min_latitude
            && coordinate.latitude <= self.max_latitude
            && coordinate.longitude >= self.min_longitude
            && coordinate.longitude <= self.max_longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::haversine;

    const ORIGIN: Coordinate = Coordinate::new(34.0675918, -118.3977091);
    const EPSILON: f64 = 1e-9;

    fn los_angeles_25_miles() -> CoordinateBoundaries {
        CoordinateBoundaries::from_coordinate(&ORIGIN, 25.0, DistanceUnit::Miles).unwrap()
    }

    #[test]
    fn test_rejects_invalid_origin() {
        let err = CoordinateBoundaries::new(-91.0675918, -118.3977091, 25.0, DistanceUnit::Miles)
            .unwrap_err();
        assert_eq!(
            err,
            GeoError::InvalidCoordinates(Coordinate::new(-91.0675918, -118.3977091))
        );
        assert_eq!(err.to_string(), "Invalid coordinates supplied.");
    }

    #[test]
    fn test_edges_in_miles() {
        let bounds = los_angeles_25_miles();
        assert!((bounds.min_latitude() - 33.705_272_959_420_29).abs() < EPSILON);
        assert!((bounds.max_latitude() - 34.429_910_640_579_71).abs() < EPSILON);
        assert!((bounds.min_longitude() - -118.835_092_926_750_5).abs() < EPSILON);
        assert!((bounds.max_longitude() - -117.960_325_273_249_5).abs() < EPSILON);
    }

    #[test]
    fn test_edges_in_kilometers() {
        let bounds =
            CoordinateBoundaries::from_coordinate(&ORIGIN, 25.0, DistanceUnit::Kilometers).unwrap();
        assert!((bounds.min_latitude() - 33.842_457_845_296_956).abs() < EPSILON);
        assert!((bounds.max_latitude() - 34.292_725_754_703_05).abs() < EPSILON);
        assert!((bounds.min_longitude() - -118.669_486_163_765).abs() < EPSILON);
        assert!((bounds.max_longitude() - -118.125_932_036_235).abs() < EPSILON);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let first = los_angeles_25_miles();
        let second = los_angeles_25_miles();
        assert_eq!(first.min_latitude().to_bits(), second.min_latitude().to_bits());
        assert_eq!(first.max_latitude().to_bits(), second.max_latitude().to_bits());
        assert_eq!(first.min_longitude().to_bits(), second.min_longitude().to_bits());
        assert_eq!(first.max_longitude().to_bits(), second.max_longitude().to_bits());
    }

    #[test]
    fn test_with_methods_recompute_everything() {
        let bounds = los_angeles_25_miles();

        let wider = bounds.with_distance(50.0).unwrap();
        let expected =
            CoordinateBoundaries::from_coordinate(&ORIGIN, 50.0, DistanceUnit::Miles).unwrap();
        assert_eq!(wider, expected);
        assert!(wider.min_latitude() < bounds.min_latitude());

        let metric = bounds.with_unit(DistanceUnit::Kilometers).unwrap();
        assert_eq!(metric.unit(), DistanceUnit::Kilometers);
        assert_eq!(metric.distance(), 25.0);
        assert!(metric.max_latitude() < bounds.max_latitude());

        let moved = bounds.with_latitude(0.0).unwrap().with_longitude(0.0).unwrap();
        assert_eq!(
            moved,
            CoordinateBoundaries::new(0.0, 0.0, 25.0, DistanceUnit::Miles).unwrap()
        );
        // `bounds` itself is unchanged
        assert_eq!(bounds, los_angeles_25_miles());
    }

    #[test]
    fn test_with_methods_reject_invalid_origin() {
        let bounds = los_angeles_25_miles();
        let err = bounds.with_latitude(-91.0675918).unwrap_err();
        assert_eq!(err.to_string(), "Invalid coordinates supplied.");
        let err = bounds.with_longitude(-197.3977091).unwrap_err();
        assert!(matches!(err, GeoError::InvalidCoordinates(_)));
    }

    #[test]
    fn test_zero_radius_collapses_to_origin() {
        let bounds =
            CoordinateBoundaries::from_coordinate(&ORIGIN, 0.0, DistanceUnit::Meters).unwrap();
        assert_eq!(bounds.min_latitude(), ORIGIN.latitude);
        assert_eq!(bounds.max_latitude(), ORIGIN.latitude);
        assert_eq!(bounds.min_longitude(), ORIGIN.longitude);
        assert_eq!(bounds.max_longitude(), ORIGIN.longitude);
        assert!(bounds.contains(&ORIGIN));
    }

    #[test]
    fn test_contains_every_point_on_the_radius() {
        for unit in DistanceUnit::ALL {
            let radius = 25.0 * unit.earth_radius() / DistanceUnit::Miles.earth_radius();
            let bounds = CoordinateBoundaries::from_coordinate(&ORIGIN, radius, unit).unwrap();
            for step in 0..72 {
                let heading = to_radians(step as f64 * 5.0);
                // Walk the circle at 99.9% of the radius
                let angular = 0.999 * radius / unit.earth_radius();
                let lat1 = to_radians(ORIGIN.latitude);
                let lat2 = (lat1.sin() * angular.cos()
                    + lat1.cos() * angular.sin() * heading.cos())
                .asin();
                let east = heading.sin() * angular.sin() * lat1.cos();
                let north = angular.cos() - lat1.sin() * lat2.sin();
                let lon2 = to_radians(ORIGIN.longitude) + east.atan2(north);
                let point = Coordinate::new(lat2.to_degrees(), lon2.to_degrees());

                let (lat, lon) = (point.latitude, point.longitude);
                let exact = haversine(ORIGIN.latitude, ORIGIN.longitude, lat, lon, unit);
                assert!(exact <= radius, "{unit}: {exact} > {radius}");
                assert!(bounds.contains(&point), "{unit}: {point:?} outside {bounds:?}");
            }
        }
    }

    #[test]
    fn test_reflection_across_north_pole() {
        let bounds = CoordinateBoundaries::new(89.9, 0.0, 69.0, DistanceUnit::Miles).unwrap();
        // 89.9 + 1.0 = 90.9, reflected to -89.1
        assert!((bounds.max_latitude() - -89.1).abs() < 1e-9);
        assert!(bounds.wraps_latitude());
        assert!(!bounds.contains(&Coordinate::new(89.95, 0.0)));
    }

    #[test]
    fn test_reflection_across_antimeridian() {
        let bounds = CoordinateBoundaries::new(0.0, 179.5, 69.0, DistanceUnit::Miles).unwrap();
        // 179.5 + 1.0 = 180.5, reflected to -179.5
        assert!((bounds.max_longitude() - -179.5).abs() < 1e-9);
        assert!((bounds.min_longitude() - 178.5).abs() < 1e-9);
        assert!(bounds.wraps_longitude());
        assert!(!bounds.wraps_latitude());

        let west = CoordinateBoundaries::new(0.0, -179.5, 69.0, DistanceUnit::Miles).unwrap();
        assert!((west.min_longitude() - 179.5).abs() < 1e-9);
        assert!(west.wraps_longitude());
    }

    #[test]
    fn test_longitude_span_narrower_than_circle_at_high_latitude() {
        // 498.5 mi due east-ish of (70, 0), yet past the 21.05 degree edge
        let bounds = CoordinateBoundaries::new(70.0, 0.0, 500.0, DistanceUnit::Miles).unwrap();
        let point = Coordinate::new(70.0, 21.2);
        let exact = haversine(70.0, 0.0, point.latitude, point.longitude, DistanceUnit::Miles);
        assert!(exact < 500.0, "{exact}");
        assert!(bounds.max_longitude() < point.longitude);
        assert!(!bounds.contains(&point));
    }

    #[test]
    fn test_accessors_report_inputs() {
        let bounds = los_angeles_25_miles();
        assert_eq!(bounds.latitude(), ORIGIN.latitude);
        assert_eq!(bounds.longitude(), ORIGIN.longitude);
        assert_eq!(bounds.origin(), ORIGIN);
        assert_eq!(bounds.distance(), 25.0);
        assert_eq!(bounds.unit(), DistanceUnit::Miles);
    }

    #[test]
    fn test_serializes_edges() {
        let value = serde_json::to_value(los_angeles_25_miles()).unwrap();
        assert!(value["min_latitude"].as_f64().is_some());
        assert_eq!(value["unit"], "miles");
    }
}
