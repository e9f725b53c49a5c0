//! Configuration file loading
//!
//! Settings come from the first of: `--config PATH`, `.geocalc.toml`,
//! `geocalc.toml`, `<config dir>/geocalc/config.toml`. Missing files fall
//! back to defaults; unreadable or malformed files are errors.

use anyhow::{Context, Result};
use geolocation::{DEFAULT_DECIMAL_PLACES, DistanceUnit};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Default unit for distances and radii
    #[serde(default)]
    pub unit: DistanceUnit,

    /// Default rounding precision for distances
    #[serde(default = "default_decimal_places")]
    pub decimal_places: i32,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::default(),
            decimal_places: default_decimal_places(),
            log_level: default_log_level(),
        }
    }
}

fn default_decimal_places() -> i32 {
    DEFAULT_DECIMAL_PLACES
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let settings = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => Settings::default(),
        };

        Ok(Self {
            settings,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let local = [".geocalc.toml", "geocalc.toml"]
        .into_iter()
        .map(PathBuf::from);
    let user = dirs::config_dir().map(|dir| dir.join("geocalc").join("config.toml"));

    local.chain(user).find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
