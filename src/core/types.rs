//! Core data types for the overlay engine

use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A named point of interest. Distance and viewing angle are derived per
/// filter pass and live on [`VisiblePoint`], never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub coordinate: GeoCoordinate,
}

impl PointOfInterest {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            coordinate: GeoCoordinate::new(latitude, longitude),
        }
    }
}

/// A point of interest that passed the field-of-view and range gates,
/// annotated with the values computed during that pass
#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePoint {
    pub point: PointOfInterest,
    /// Great-circle distance from the viewer, kilometers
    pub distance_km: f64,
    /// Signed angular offset from the viewer heading, degrees,
    /// in (-180, 180]; positive is left of heading
    pub angle_deg: f64,
}

/// Rendering mode decided by device tilt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiltMode {
    /// Device held flat: show the map
    #[default]
    Map,
    /// Device held upright: show the camera overlay
    Ar,
}

/// Axis-aligned screen rectangle in device-independent units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// AABB intersection test. Touching edges count as intersecting:
    /// two boxes are disjoint only when one lies strictly beyond the
    /// other horizontally or vertically.
    pub fn intersects(&self, other: &ScreenBox) -> bool {
        !(self.left + self.width < other.left
            || other.left + other.width < self.left
            || self.top + self.height < other.top
            || other.top + other.height < self.top)
    }
}

/// A label placed by the layout engine, ready for caption rendering
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub screen_box: ScreenBox,
    /// Two-line caption: name on the first line, distance in meters on
    /// the second
    pub caption: String,
    pub name: String,
    pub distance_km: f64,
}

/// One committed view of the mutable session state. Produced only by the
/// session executor; consumers read whole snapshots and never observe a
/// partial update.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSnapshot {
    /// None until the first location fix arrives
    pub position: Option<GeoCoordinate>,
    /// Fused compass heading, degrees in [0, 360)
    pub heading: f64,
    /// Visibility range in kilometers, non-negative
    pub range_km: f64,
    /// Debounced tilt mode
    pub tilt: TiltMode,
    /// Monotonically increasing commit counter
    pub version: u64,
}

impl Default for ViewerSnapshot {
    fn default() -> Self {
        Self {
            position: None,
            heading: 0.0,
            range_km: crate::core::DEFAULT_RANGE_KM,
            tilt: TiltMode::Map,
            version: 0,
        }
    }
}
