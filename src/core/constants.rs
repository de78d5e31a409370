//! Physical constants and engine parameters

/// Approximate spherical Earth radius in kilometers.
/// The Earth is really an ellipsoid; the spherical value is accurate
/// enough for overlay ranges of a few tens of kilometers.
pub const EARTH_RADIUS_KM: f64 = 6378.135;

/// Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_378_135.0;

/// Earth radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3963.189;

/// Earth radius in feet
pub const EARTH_RADIUS_FEET: f64 = 20_925_640.0;

/// Half of the horizontal field of view, in degrees. Points whose signed
/// angular offset from the viewer heading exceeds this are off screen.
pub const FOV_HALF_ANGLE_DEG: f64 = 22.5;

/// Fixed label box size in device-independent units
pub const LABEL_BOX_WIDTH: f64 = 128.0;
pub const LABEL_BOX_HEIGHT: f64 = 50.0;

/// Fraction of the usable vertical band where labels initially sit
pub const LABEL_TOP_BAND: f64 = 0.75;

/// Upper bound on upward collision shifts per label. Past this the label
/// keeps its last position and residual overlap is accepted.
pub const MAX_COLLISION_SHIFTS: u32 = 64;

/// Verticality band bounds: readings strictly inside (0, 0.5) mean flat,
/// strictly inside (0.5, 1.0) mean vertical, everything else is ignored.
pub const VERTICALITY_FLAT_MAX: f64 = 0.5;
pub const VERTICALITY_VERTICAL_MAX: f64 = 1.0;

/// Minimum heading change (degrees) the compass fusion commits; smaller
/// deltas are jitter and are dropped.
pub const HEADING_DEADBAND_DEG: f64 = 8.0;

/// Default visibility range in kilometers
pub const DEFAULT_RANGE_KM: f64 = 10.0;

/// Default sensor report intervals (milliseconds)
pub const COMPASS_REPORT_INTERVAL_MS: u32 = 50;
pub const ACCELEROMETER_REPORT_INTERVAL_MS: u32 = 330;

/// Synthetic verticality readings for the binary simple-orientation
/// sensor, placed at the centers of the flat and vertical bands
pub const SIMPLE_FLAT_READING: f64 = 0.25;
pub const SIMPLE_VERTICAL_READING: f64 = 0.75;

/// Manual input step sizes
pub const MANUAL_HEADING_STEP_DEG: i32 = 30;
pub const MANUAL_PITCH_STEP: f64 = 0.1;
