//! Terminal output helpers.

use geolocation::{CoordinateBoundaries, DistanceResult, DistanceUnit};
use owo_colors::OwoColorize;

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a header
pub fn header(message: &str) {
    println!("{}", message.bold());
    println!("{}", "─".repeat(message.chars().count()));
}

/// Format a distance with its unit symbol
pub fn format_distance(distance: f64, unit: DistanceUnit) -> String {
    format!("{} {}", distance, unit)
}

/// Print a bounding rectangle as a small table
pub fn print_boundaries(bounds: &CoordinateBoundaries) {
    header(&format!(
        "Boundaries for {} around ({}, {})",
        format_distance(bounds.distance(), bounds.unit()),
        bounds.latitude(),
        bounds.longitude()
    ));
    println!("{:<14} {}", "min latitude".dimmed(), bounds.min_latitude());
    println!("{:<14} {}", "max latitude".dimmed(), bounds.max_latitude());
    println!("{:<14} {}", "min longitude".dimmed(), bounds.min_longitude());
    println!("{:<14} {}", "max longitude".dimmed(), bounds.max_longitude());
    if bounds.wraps_latitude() || bounds.wraps_longitude() {
        eprintln!(
            "{} rectangle wraps across a pole or the antimeridian (min > max)",
            "⚠".yellow()
        );
    }
}

/// Print radius search results, one per line
pub fn print_results(results: &[DistanceResult], unit: DistanceUnit) {
    header(&format!("{} match(es)", results.len()));
    for result in results {
        println!(
            "{:>8}  {:>14}  {:>8.2}°  {}",
            result.id,
            format_distance(result.distance, unit),
            result.bearing,
            result.direction.green()
        );
    }
}
