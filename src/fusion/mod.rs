//! Sensor fusion: tilt mode decision and compass heading smoothing

pub mod compass;
pub mod manual;
pub mod tilt;

pub use compass::{display_heading_offset, CompassFusion};
pub use manual::{ManualInput, StepDirection};
pub use tilt::TiltState;
