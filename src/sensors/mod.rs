//! Sensor source abstraction
//!
//! Traits for the tilt and compass reading streams, the ranked fallback
//! that picks one tilt channel at startup, and scriptable mocks for
//! environments without hardware.

pub mod error;
pub mod mock;
pub mod select;
pub mod source;

pub use error::{SensorError, SensorResult};
pub use mock::{MockCompassSource, MockTiltSource};
pub use select::{select_tilt_source, ActiveTilt, TiltCandidate, TiltChannel};
pub use source::{
    CompassReading, CompassSource, DisplayOrientation, SimpleOrientation, TiltReading, TiltSource,
};
