//! Batch distance calculations and search-by-radius.
//!
//! [`find_within_radius`] is the full candidate pipeline: prune to a window
//! around the origin, compute the exact distance for the survivors, then drop
//! anything beyond the radius.

use crate::angle::{to_degrees, to_radians};
use crate::calculator::{haversine, rhumb_bearing};
use crate::validation::{MAX_LATITUDE, MIN_LATITUDE, validate};
use crate::{Coordinate, CoordinateBoundaries, Direction, DistanceUnit, Result, round_to};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

/// Input item for batch distance calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationItem {
    /// Item ID
    pub id: i64,
    /// Item location
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl LocationItem {
    pub fn new(id: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            coordinate: Coordinate::new(latitude, longitude),
        }
    }
}

/// Result of a distance calculation for a single item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    /// The item ID
    pub id: i64,
    /// Distance from the origin, rounded to the requested precision
    pub distance: f64,
    /// Bearing from the origin, in degrees
    pub bearing: f64,
    /// Compass direction from the origin
    pub direction: Direction,
}

/// Options shared by the batch functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchOptions {
    /// Unit for distances and radii
    pub unit: DistanceUnit,
    /// Rounding precision for reported distances
    pub decimal_places: i32,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::default(),
            decimal_places: crate::DEFAULT_DECIMAL_PLACES,
        }
    }
}

/// Calculate distance, bearing and direction from an origin to every item.
///
/// Items with out-of-range coordinates are skipped. The origin is validated
/// up front.
///
/// # Errors
/// [`crate::GeoError::InvalidOrigin`] if the origin is out of range.
///
/// # Example
/// ```
/// use geolocation::batch::{BatchOptions, LocationItem, calculate_distances};
/// use geolocation::Coordinate;
///
/// let items = vec![
///     LocationItem::new(1, 35.076234, -118.9078687),
///     LocationItem::new(2, 95.0, 0.0),
/// ];
///
/// let origin = Coordinate::new(34.0675918, -118.3977091);
/// let results = calculate_distances(&origin, &items, BatchOptions::default()).unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].distance, 75.5);
/// ```
pub fn calculate_distances(
    origin: &Coordinate,
    items: &[LocationItem],
    options: BatchOptions,
) -> Result<Vec<DistanceResult>> {
    check_origin(origin)?;
    Ok(measure_all(origin, items, options, |_| true))
}

/// Calculate distances and return items sorted by distance.
///
/// # Arguments
/// * `max_results` - Maximum number of results to return (None for all)
pub fn calculate_distances_sorted(
    origin: &Coordinate,
    items: &[LocationItem],
    options: BatchOptions,
    max_results: Option<usize>,
) -> Result<Vec<DistanceResult>> {
    let mut results = calculate_distances(origin, items, options)?;
    sort_by_distance(&mut results);

    if let Some(max) = max_results {
        results.truncate(max);
    }

    Ok(results)
}

/// Find the items within `radius` of `origin`, closest first.
///
/// Candidates are first pruned to a window that holds the whole circle. The
/// latitude edges come from a [`CoordinateBoundaries`] rectangle, unless the
/// circle reaches a pole. The longitude half-width is the circle's true
/// east-west reach, `asin(sin(radius / R) / cos(latitude))`, measured across
/// the antimeridian; the rectangle's own longitude span is narrower than that
/// at high latitude. When the circle contains a pole every longitude is a
/// candidate. The final filter compares the unrounded distance against the
/// radius.
///
/// # Errors
/// [`crate::GeoError::InvalidOrigin`] if the origin is out of range.
pub fn find_within_radius(
    origin: &Coordinate,
    items: &[LocationItem],
    radius: f64,
    options: BatchOptions,
) -> Result<Vec<DistanceResult>> {
    check_origin(origin)?;
    let window = SearchWindow::new(origin, radius, options.unit)?;

    let candidates: Vec<LocationItem> = items
        .iter()
        .filter(|item| window.admits(&item.coordinate))
        .copied()
        .collect();

    debug!(
        total = items.len(),
        candidates = candidates.len(),
        prune_latitude = window.latitude.is_some(),
        prune_longitude = window.longitude_reach.is_some(),
        "pruned with search window"
    );

    let mut results = measure_all(origin, &candidates, options, |exact| exact <= radius);
    sort_by_distance(&mut results);

    debug!(
        matched = results.len(),
        radius,
        unit = %options.unit,
        "radius search complete"
    );

    Ok(results)
}

/// Slack on the longitude reach so rounding never drops a point on the circle.
const LONGITUDE_SLACK_DEGREES: f64 = 1e-9;

/// Degree-space window holding every point within a radius of the origin.
///
/// `None` on an axis means that axis is not pruned.
#[derive(Debug, Clone, Copy)]
struct SearchWindow {
    origin_longitude: f64,
    latitude: Option<(f64, f64)>,
    longitude_reach: Option<f64>,
}

impl SearchWindow {
    fn new(origin: &Coordinate, radius: f64, unit: DistanceUnit) -> Result<Self> {
        let bounds = CoordinateBoundaries::from_coordinate(origin, radius, unit)?;

        // Past a pole the reflected edges need not bracket the origin
        let reach = radius / unit.degree_length();
        let latitude = (origin.latitude - reach >= MIN_LATITUDE
            && origin.latitude + reach <= MAX_LATITUDE)
            .then(|| (bounds.min_latitude(), bounds.max_latitude()));

        let angular = radius / unit.earth_radius();
        let origin_phi = to_radians(origin.latitude);
        let longitude_reach = (angular + origin_phi.abs() < FRAC_PI_2).then(|| {
            to_degrees((angular.sin() / origin_phi.cos()).asin()) + LONGITUDE_SLACK_DEGREES
        });

        Ok(Self {
            origin_longitude: origin.longitude,
            latitude,
            longitude_reach,
        })
    }

    fn admits(&self, coordinate: &Coordinate) -> bool {
        let latitude = coordinate.latitude;
        let longitude = coordinate.longitude;
        self.latitude
            .is_none_or(|(min, max)| (min..=max).contains(&latitude))
            && self
                .longitude_reach
                .is_none_or(|reach| longitude_gap(self.origin_longitude, longitude) <= reach)
    }
}

/// Absolute longitude difference in `[0, 180]`, the short way round.
fn longitude_gap(from: f64, to: f64) -> f64 {
    ((to - from + 540.0) % 360.0 - 180.0).abs()
}

fn check_origin(origin: &Coordinate) -> Result<()> {
    if origin.is_valid() {
        Ok(())
    } else {
        Err(crate::GeoError::InvalidOrigin(*origin))
    }
}

fn measure_all<F>(
    origin: &Coordinate,
    items: &[LocationItem],
    options: BatchOptions,
    keep: F,
) -> Vec<DistanceResult>
where
    F: Fn(f64) -> bool + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .filter_map(|item| measure(origin, item, options, &keep))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .filter_map(|item| measure(origin, item, options, &keep))
            .collect()
    }
}

/// Measure a single item against an already validated origin.
#[inline]
fn measure<F>(
    origin: &Coordinate,
    item: &LocationItem,
    options: BatchOptions,
    keep: &F,
) -> Option<DistanceResult>
where
    F: Fn(f64) -> bool,
{
    let target = &item.coordinate;
    if !validate(target.latitude, target.longitude) {
        debug!(
            id = item.id,
            latitude = target.latitude,
            longitude = target.longitude,
            "skipping invalid item"
        );
        return None;
    }

    let (lat, lon) = (target.latitude, target.longitude);
    let exact = haversine(origin.latitude, origin.longitude, lat, lon, options.unit);
    if !keep(exact) {
        return None;
    }

    let bearing = rhumb_bearing(origin.latitude, origin.longitude, lat, lon);
    Some(DistanceResult {
        id: item.id,
        distance: round_to(exact, options.decimal_places),
        bearing,
        direction: Direction::from_bearing(bearing),
    })
}

fn sort_by_distance(results: &mut [DistanceResult]) {
    results.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.id.cmp(&b.id)));
}
