//! Geo-referenced AR overlay engine
//!
//! Spatial reasoning and label layout for overlaying points of interest
//! onto a live camera view: great-circle geometry, field-of-view
//! filtering, deterministic label placement, and the sensor fusion that
//! switches between map and AR presentation.

pub mod config;
pub mod core;
pub mod fusion;
pub mod sensors;
pub mod session;
pub mod spatial;
pub mod view;

// Re-export commonly used types
pub use config::{ConfigError, OverlayConfig, PoiCatalog};
pub use core::{
    GeoCoordinate, PlacedLabel, PointOfInterest, ScreenBox, TiltMode, ViewerSnapshot, VisiblePoint,
};
pub use fusion::{CompassFusion, ManualInput, StepDirection, TiltState};
pub use sensors::{
    select_tilt_source, ActiveTilt, CompassReading, CompassSource, DisplayOrientation,
    MockCompassSource, MockTiltSource, SensorError, SensorResult, SimpleOrientation, TiltCandidate,
    TiltChannel, TiltReading, TiltSource,
};
pub use session::{
    CallbackHandle, SessionCallback, SessionCore, SessionEvent, SessionExecutor, StateUpdate,
};
pub use spatial::{
    convert_distance, decimal_degree_to_dms, destination_point, dms_to_decimal_degree,
    earth_radius, haversine_distance, initial_bearing, midpoint, DistanceUnit,
};
pub use view::{filter_in_view, signed_view_angle, LabelLayoutEngine};
