//! Overlay configuration and point-of-interest loading
//!
//! Configuration is a plain serde struct persisted as JSON. Loading and
//! validation failures surface here, at the collaborator boundary; the
//! engine itself never reads files.

use crate::core::{
    GeoCoordinate, PointOfInterest, ACCELEROMETER_REPORT_INTERVAL_MS, COMPASS_REPORT_INTERVAL_MS,
    DEFAULT_RANGE_KM, LABEL_BOX_HEIGHT, LABEL_BOX_WIDTH, MAX_COLLISION_SHIFTS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Engine-wide configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Visibility range in kilometers
    pub range_km: f64,
    /// User compass calibration offset in degrees
    pub compass_offset_deg: i32,
    /// Whether the compass drives the fused heading
    pub compass_follow: bool,
    /// Compass report interval request (milliseconds)
    pub compass_report_interval_ms: u32,
    /// Accelerometer report interval request (milliseconds)
    pub accelerometer_report_interval_ms: u32,
    /// Label box size in device-independent units
    pub label_box_width: f64,
    pub label_box_height: f64,
    /// Cap on upward collision shifts per label
    pub max_collision_shifts: u32,
    /// Enable verbose per-reading sensor logging
    pub debug_logging: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            range_km: DEFAULT_RANGE_KM,
            compass_offset_deg: 0,
            compass_follow: true,
            compass_report_interval_ms: COMPASS_REPORT_INTERVAL_MS,
            accelerometer_report_interval_ms: ACCELEROMETER_REPORT_INTERVAL_MS,
            label_box_width: LABEL_BOX_WIDTH,
            label_box_height: LABEL_BOX_HEIGHT,
            max_collision_shifts: MAX_COLLISION_SHIFTS,
            debug_logging: false,
        }
    }
}

impl OverlayConfig {
    /// Loads configuration from a JSON file, validating before returning
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: OverlayConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Serialization {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&path, content).map_err(|e| ConfigError::Io {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }

    /// Checks every parameter against its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.range_km.is_finite() || self.range_km < 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "range_km".to_string(),
                value: self.range_km.to_string(),
                reason: "Range must be finite and non-negative".to_string(),
            });
        }

        if self.label_box_width <= 0.0 || self.label_box_height <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "label_box".to_string(),
                value: format!("{}x{}", self.label_box_width, self.label_box_height),
                reason: "Label box dimensions must be positive".to_string(),
            });
        }

        if self.max_collision_shifts == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "max_collision_shifts".to_string(),
                value: "0".to_string(),
                reason: "At least one collision shift is required".to_string(),
            });
        }

        if self.compass_report_interval_ms == 0 || self.accelerometer_report_interval_ms == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "report_interval".to_string(),
                value: format!(
                    "compass {}ms, accelerometer {}ms",
                    self.compass_report_interval_ms, self.accelerometer_report_interval_ms
                ),
                reason: "Report intervals must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}

/// A loaded set of points of interest. The catalog is read once per
/// session from whatever source the collaborator owns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoiCatalog {
    pub points: Vec<PointOfInterest>,
}

impl PoiCatalog {
    pub fn new(points: Vec<PointOfInterest>) -> Self {
        Self { points }
    }

    /// Parses a catalog from a JSON array of `{name, coordinate}` records
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let points: Vec<PointOfInterest> =
            serde_json::from_str(json).map_err(|e| ConfigError::Serialization {
                message: format!("Failed to parse point catalog: {}", e),
            })?;
        Ok(Self { points })
    }

    /// Loads a catalog from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            message: format!("Failed to read point catalog '{}': {}", path_str, e),
        })?;

        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: PointOfInterest) {
        self.points.push(point);
    }
}

/// Configuration and catalog loading errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Parameter outside its valid range
    InvalidParameter { parameter: String, value: String, reason: String },
    /// File I/O failure
    Io { message: String },
    /// JSON serialization or parsing failure
    Serialization { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter { parameter, value, reason } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::Io { message } => write!(f, "I/O error: {}", message),
            ConfigError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let config = OverlayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.range_km, 10.0);
        assert_eq!(config.compass_report_interval_ms, 50);
        assert_eq!(config.accelerometer_report_interval_ms, 330);
    }

    #[test]
    fn test_negative_range_rejected() {
        let config = OverlayConfig { range_km: -1.0, ..OverlayConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_zero_shift_cap_rejected() {
        let config = OverlayConfig { max_collision_shifts: 0, ..OverlayConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let config = OverlayConfig {
            range_km: 2.5,
            compass_offset_deg: 45,
            ..OverlayConfig::default()
        };

        let temp_path = PathBuf::from("test_overlay_config.json");
        config.save_to_file(&temp_path).unwrap();
        let loaded = OverlayConfig::from_file(&temp_path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(temp_path);
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[
            {"name": "Brandenburger Tor", "coordinate": {"latitude": 52.51627, "longitude": 13.33777}},
            {"name": "Gold Else", "coordinate": {"latitude": 52.514057, "longitude": 13.350111}}
        ]"#;

        let catalog = PoiCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.points[0].name, "Brandenburger Tor");
        assert_eq!(
            catalog.points[1].coordinate,
            GeoCoordinate::new(52.514057, 13.350111)
        );
    }

    #[test]
    fn test_catalog_parse_error_surfaces() {
        let result = PoiCatalog::from_json_str("not json");
        assert!(matches!(result, Err(ConfigError::Serialization { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = PoiCatalog::from_file("no_such_catalog_file.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
