//! Coordinate range checks.

/// Lowest valid latitude, in degrees.
pub const MIN_LATITUDE: f64 = -90.0;
/// Highest valid latitude, in degrees.
pub const MAX_LATITUDE: f64 = 90.0;
/// Lowest valid longitude, in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
/// Highest valid longitude, in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// Returns true if the pair lies on the Earth's coordinate grid.
///
/// Both ranges are inclusive at both ends. NaN in either component fails.
#[inline]
pub fn validate(latitude: f64, longitude: f64) -> bool {
    (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
        && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}
