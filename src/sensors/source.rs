//! Sensor source traits and reading types

use crate::core::{SIMPLE_FLAT_READING, SIMPLE_VERTICAL_READING};
use crate::sensors::error::SensorResult;
use nalgebra::Quaternion;

/// Physical display orientation reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayOrientation {
    #[default]
    Landscape,
    Portrait,
    LandscapeFlipped,
    PortraitFlipped,
    /// No orientation lock information available
    None,
}

/// Reading from the coarse orientation sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleOrientation {
    /// Device lying flat, screen up
    FaceUp,
    /// Device lying flat, screen down
    FaceDown,
    /// Any rotated/upright posture
    Upright,
}

/// One tilt-relevant sample from whichever sensor is active
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TiltReading {
    /// Coarse orientation change
    Simple(SimpleOrientation),
    /// Full orientation quaternion plus the display orientation at
    /// reading time, which selects the axis to consult
    Quaternion {
        rotation: Quaternion<f64>,
        orientation: DisplayOrientation,
    },
    /// Raw acceleration in g along the device axes
    Accelerometer { x: f64, y: f64, z: f64 },
}

impl TiltReading {
    /// Normalizes the reading to the scalar verticality signal consumed
    /// by the tilt state machine.
    ///
    /// The coarse sensor is binary, so it maps to fixed values at the
    /// centers of the flat and vertical bands. The quaternion axis
    /// follows the display orientation: X when landscape (either way),
    /// Y when portrait (either way), Z without orientation info. The
    /// accelerometer signal is the negated Y acceleration.
    pub fn verticality(&self) -> f64 {
        match self {
            TiltReading::Simple(SimpleOrientation::FaceUp) => SIMPLE_FLAT_READING,
            TiltReading::Simple(_) => SIMPLE_VERTICAL_READING,
            TiltReading::Quaternion { rotation, orientation } => match orientation {
                DisplayOrientation::Landscape | DisplayOrientation::LandscapeFlipped => rotation.i,
                DisplayOrientation::Portrait | DisplayOrientation::PortraitFlipped => rotation.j,
                DisplayOrientation::None => rotation.k,
            },
            TiltReading::Accelerometer { y, .. } => -1.0 * y,
        }
    }
}

/// One raw compass sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassReading {
    /// Magnetic-north heading in degrees
    pub magnetic_heading_deg: f64,
    /// Display orientation at reading time
    pub orientation: DisplayOrientation,
}

/// A source of tilt-relevant readings.
///
/// Implementations are non-blocking: `read` returns Ok(None) when no new
/// sample is pending. One source is selected at startup by the ranked
/// fallback in [`select_tilt_source`](crate::sensors::select_tilt_source);
/// the others are never polled.
pub trait TiltSource: Send {
    /// Read the next pending sample, if any
    fn read(&mut self) -> SensorResult<Option<TiltReading>>;

    /// Whether the underlying sensor is present and responsive
    fn is_available(&self) -> bool;

    /// Request a report interval; sources without configurable cadence
    /// may ignore this
    fn set_report_interval(&mut self, interval_ms: u32) -> SensorResult<()>;

    /// Human-readable sensor name for logs
    fn name(&self) -> &'static str;
}

/// A source of raw compass samples, same non-blocking contract as
/// [`TiltSource`]
pub trait CompassSource: Send {
    fn read(&mut self) -> SensorResult<Option<CompassReading>>;

    fn is_available(&self) -> bool;

    fn set_report_interval(&mut self, interval_ms: u32) -> SensorResult<()>;

    fn name(&self) -> &'static str;
}
