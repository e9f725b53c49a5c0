//! WASM bindings for the geolocation crate.
//!
//! These bindings allow the crate to be used from JavaScript/TypeScript
//! in both browser and Deno environments. Units are passed as strings
//! (`"mi"`, `"nmi"`, `"km"`, `"m"`).

use crate::batch::{BatchOptions, LocationItem, find_within_radius};
use crate::{
    Coordinate, CoordinateBoundaries, DistanceUnit, get_bearing, get_direction, get_distance,
};
use wasm_bindgen::prelude::*;

fn parse_unit(unit: &str) -> Result<DistanceUnit, JsValue> {
    unit.parse::<DistanceUnit>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js_error(err: crate::GeoError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Calculate distance between two coordinates.
///
/// # Returns
/// Distance in `unit`, rounded to `decimal_places`
#[wasm_bindgen]
pub fn distance(
    lat1: f64,
    lng1: f64,
    lat2: f64,
    lng2: f64,
    decimal_places: i32,
    unit: &str,
) -> Result<f64, JsValue> {
    get_distance(lat1, lng1, lat2, lng2, decimal_places, parse_unit(unit)?).map_err(to_js_error)
}

/// Calculate the bearing in degrees from the first point to the second.
#[wasm_bindgen]
pub fn bearing(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<f64, JsValue> {
    get_bearing(lat1, lng1, lat2, lng2).map_err(to_js_error)
}

/// Compass label (`"N"`, `"NE"`, ...) from the first point to the second.
#[wasm_bindgen]
pub fn direction(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<String, JsValue> {
    get_direction(lat1, lng1, lat2, lng2)
        .map(|d| d.as_str().to_string())
        .map_err(to_js_error)
}

/// Bounding rectangle around a radius.
///
/// # Returns
/// JSON string with the origin, radius and the four edges
#[wasm_bindgen]
pub fn boundaries(lat: f64, lng: f64, radius: f64, unit: &str) -> Result<String, JsValue> {
    let bounds =
        CoordinateBoundaries::new(lat, lng, radius, parse_unit(unit)?).map_err(to_js_error)?;

    serde_json::to_string(&bounds)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Filter locations within a radius.
///
/// # Arguments
/// * `locations_json` - JSON array of `{ "id", "latitude", "longitude" }`
///
/// # Returns
/// JSON string of filtered results, closest first
#[wasm_bindgen]
pub fn filter_within_radius(
    user_lat: f64,
    user_lng: f64,
    locations_json: &str,
    radius: f64,
    unit: &str,
) -> Result<String, JsValue> {
    let items: Vec<LocationItem> = serde_json::from_str(locations_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let options = BatchOptions {
        unit: parse_unit(unit)?,
        ..BatchOptions::default()
    };
    let origin = Coordinate::new(user_lat, user_lng);
    let results = find_within_radius(&origin, &items, radius, options).map_err(to_js_error)?;

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
