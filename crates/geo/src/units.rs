//! Distance units and their Earth-size constants.
//!
//! All values derive from a spherical Earth with a mean radius of 6371 km.
//! The degree lengths are rounded down from `radius * PI / 180`, which keeps
//! boundary rectangles at least as large as the circle they approximate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit in which distances are supplied and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Statute miles
    #[default]
    #[serde(alias = "mi")]
    Miles,
    /// Nautical miles
    #[serde(alias = "nmi")]
    NauticalMiles,
    /// Kilometers
    #[serde(alias = "km")]
    Kilometers,
    /// Meters
    #[serde(alias = "m")]
    Meters,
}

struct UnitConstants {
    earth_radius: f64,
    degree_length: f64,
    symbol: &'static str,
}

const MILES: UnitConstants = UnitConstants {
    earth_radius: 3959.0,
    degree_length: 69.0,
    symbol: "mi",
};
const NAUTICAL_MILES: UnitConstants = UnitConstants {
    earth_radius: 3440.0,
    degree_length: 60.0,
    symbol: "nmi",
};
const KILOMETERS: UnitConstants = UnitConstants {
    earth_radius: 6371.0,
    degree_length: 111.045,
    symbol: "km",
};
const METERS: UnitConstants = UnitConstants {
    earth_radius: 6_371_000.0,
    degree_length: 111_045.0,
    symbol: "m",
};

impl DistanceUnit {
    /// All supported units.
    pub const ALL: [DistanceUnit; 4] = [
        DistanceUnit::Miles,
        DistanceUnit::NauticalMiles,
        DistanceUnit::Kilometers,
        DistanceUnit::Meters,
    ];

    #[inline]
    fn constants(self) -> &'static UnitConstants {
        match self {
            DistanceUnit::Miles => &MILES,
            DistanceUnit::NauticalMiles => &NAUTICAL_MILES,
            DistanceUnit::Kilometers => &KILOMETERS,
            DistanceUnit::Meters => &METERS,
        }
    }

    /// Earth radius expressed in this unit.
    #[inline]
    pub fn earth_radius(self) -> f64 {
        self.constants().earth_radius
    }

    /// Distance covered by one degree of latitude, in this unit.
    #[inline]
    pub fn degree_length(self) -> f64 {
        self.constants().degree_length
    }

    /// Short symbol, e.g. `km`.
    pub fn symbol(self) -> &'static str {
        self.constants().symbol
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when parsing an unknown unit name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown distance unit: {0} (expected mi, nmi, km or m)")]
pub struct ParseUnitError(pub String);

impl FromStr for DistanceUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(DistanceUnit::Miles),
            "nmi" | "nm" | "nautical_miles" | "nautical-miles" | "nauticalmiles" => {
                Ok(DistanceUnit::NauticalMiles)
            }
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(DistanceUnit::Kilometers)
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(DistanceUnit::Meters),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}
