//! Distance, bearing and compass direction between two coordinates.
//!
//! Distances use the haversine formula on a spherical Earth. Bearings use the
//! rhumb-line (Mercator) formula with shortest-path wraparound across the
//! antimeridian.

use crate::angle::{diff_radians, to_bearing_degrees, to_radians};
use crate::{Coordinate, DistanceUnit, GeoError, Result, validation::validate};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, PI, TAU};
use std::fmt;
use tracing::debug;

/// Decimal places used when the caller does not pick a precision.
pub const DEFAULT_DECIMAL_PLACES: i32 = 1;

/// Largest precision honoured by [`round_to`]; `f64` carries no more.
const MAX_DECIMAL_PLACES: i32 = 15;

/// One of the eight cardinal and ordinal compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North
    N,
    /// North-east
    NE,
    /// East
    E,
    /// South-east
    SE,
    /// South
    S,
    /// South-west
    SW,
    /// West
    W,
    /// North-west
    NW,
}

impl Direction {
    /// Classifies a bearing into a 45-degree compass sector.
    ///
    /// A bearing on a sector edge belongs to the sector counter-clockwise of
    /// it (67.5 is NE, 112.5 is E), except at 337.5 which is N.
    pub fn from_bearing(bearing: f64) -> Self {
        if bearing >= 337.5 || bearing <= 22.5 {
            Direction::N
        } else if bearing <= 67.5 {
            Direction::NE
        } else if bearing <= 112.5 {
            Direction::E
        } else if bearing <= 157.5 {
            Direction::SE
        } else if bearing <= 202.5 {
            Direction::S
        } else if bearing <= 247.5 {
            Direction::SW
        } else if bearing <= 292.5 {
            Direction::W
        } else {
            Direction::NW
        }
    }

    /// Compass label, e.g. `"NW"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rounds to `decimal_places` using round-half-to-even.
///
/// Zero rounds to an integer, negative values to tens, hundreds and so on.
/// Precision above 15 places is clamped to 15.
pub fn round_to(value: f64, decimal_places: i32) -> f64 {
    let places = decimal_places.min(MAX_DECIMAL_PLACES);
    if places >= 0 {
        let scale = 10f64.powi(places);
        (value * scale).round_ties_even() / scale
    } else {
        let scale = 10f64.powi(-places);
        (value / scale).round_ties_even() * scale
    }
}

/// Rejects the pair origin-first so the first invalid side is reported.
fn check_pair(origin_lat: f64, origin_lon: f64, dest_lat: f64, dest_lon: f64) -> Result<()> {
    if !validate(origin_lat, origin_lon) {
        debug!(
            latitude = origin_lat,
            longitude = origin_lon,
            "rejected origin coordinate"
        );
        return Err(GeoError::InvalidOrigin(Coordinate::new(origin_lat, origin_lon)));
    }
    if !validate(dest_lat, dest_lon) {
        debug!(
            latitude = dest_lat,
            longitude = dest_lon,
            "rejected destination coordinate"
        );
        return Err(GeoError::InvalidDestination(Coordinate::new(dest_lat, dest_lon)));
    }
    Ok(())
}

/// Unrounded haversine distance; both coordinates must already be valid.
#[inline]
pub(crate) fn haversine(
    origin_lat: f64,
    origin_lon: f64,
    dest_lat: f64,
    dest_lon: f64,
    unit: DistanceUnit,
) -> f64 {
    let d_lat = diff_radians(origin_lat, dest_lat);
    let d_lon = diff_radians(origin_lon, dest_lon);

    let a = (d_lat / 2.0).sin().powi(2)
        + to_radians(origin_lat).cos() * to_radians(dest_lat).cos() * (d_lon / 2.0).sin().powi(2);

    // Clamp: rounding can push sqrt(a) just past 1 for antipodal points
    unit.earth_radius() * 2.0 * a.sqrt().min(1.0).asin()
}

/// Unrounded rhumb-line bearing; both coordinates must already be valid.
#[inline]
pub(crate) fn rhumb_bearing(origin_lat: f64, origin_lon: f64, dest_lat: f64, dest_lon: f64) -> f64 {
    let mut d_lon = to_radians(dest_lon - origin_lon);
    let dest_term = (to_radians(dest_lat) / 2.0 + FRAC_PI_4).tan();
    let origin_term = (to_radians(origin_lat) / 2.0 + FRAC_PI_4).tan();
    let mut d_phi = (dest_term / origin_term).ln();
    // Both points on the south pole: the projection gives 0 / 0
    if d_phi.is_nan() {
        d_phi = 0.0;
    }

    if d_lon.abs() > PI {
        d_lon = if d_lon > 0.0 { d_lon - TAU } else { d_lon + TAU };
    }

    to_bearing_degrees(d_lon.atan2(d_phi))
}

/// Great-circle distance between two points, rounded to `decimal_places`.
///
/// # Errors
/// [`GeoError::InvalidOrigin`] or [`GeoError::InvalidDestination`], checked in
/// that order.
///
/// # Example
/// ```
/// use geolocation::{get_distance, DistanceUnit};
///
/// let miles = get_distance(
///     34.0675918,
///     -118.3977091,
///     35.076234,
///     -118.9078687,
///     1,
///     DistanceUnit::Miles,
/// )
/// .unwrap();
/// assert_eq!(miles, 75.5);
/// ```
pub fn get_distance(
    origin_lat: f64,
    origin_lon: f64,
    dest_lat: f64,
    dest_lon: f64,
    decimal_places: i32,
    unit: DistanceUnit,
) -> Result<f64> {
    check_pair(origin_lat, origin_lon, dest_lat, dest_lon)?;
    let distance = haversine(origin_lat, origin_lon, dest_lat, dest_lon, unit);
    Ok(round_to(distance, decimal_places))
}

/// Initial bearing from origin to destination, in degrees within `[0, 360)`.
///
/// # Errors
/// Same validation contract as [`get_distance`].
pub fn get_bearing(
    origin_lat: f64,
    origin_lon: f64,
    dest_lat: f64,
    dest_lon: f64,
) -> Result<f64> {
    check_pair(origin_lat, origin_lon, dest_lat, dest_lon)?;
    Ok(rhumb_bearing(origin_lat, origin_lon, dest_lat, dest_lon))
}

/// Compass direction from origin to destination.
///
/// # Errors
/// Same validation contract as [`get_distance`].
pub fn get_direction(
    origin_lat: f64,
    origin_lon: f64,
    dest_lat: f64,
    dest_lon: f64,
) -> Result<Direction> {
    let bearing = get_bearing(origin_lat, origin_lon, dest_lat, dest_lon)?;
    Ok(Direction::from_bearing(bearing))
}

/// [`get_distance`] over coordinate values.
pub fn distance_between(
    origin: &Coordinate,
    destination: &Coordinate,
    decimal_places: i32,
    unit: DistanceUnit,
) -> Result<f64> {
    get_distance(
        origin.latitude,
        origin.longitude,
        destination.latitude,
        destination.longitude,
        decimal_places,
        unit,
    )
}

/// [`get_bearing`] over coordinate values.
pub fn bearing_between(origin: &Coordinate, destination: &Coordinate) -> Result<f64> {
    get_bearing(
        origin.latitude,
        origin.longitude,
        destination.latitude,
        destination.longitude,
    )
}

/// [`get_direction`] over coordinate values.
pub fn direction_between(origin: &Coordinate, destination: &Coordinate) -> Result<Direction> {
    get_direction(
        origin.latitude,
        origin.longitude,
        destination.latitude,
        destination.longitude,
    )
}
