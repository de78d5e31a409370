//! Sensor error types and handling

use std::fmt;

/// Errors raised by sensor sources
#[derive(Debug, Clone, PartialEq)]
pub enum SensorError {
    /// The sensor is not present or stopped responding
    Unavailable { sensor: &'static str },
    /// A reading could not be obtained
    ReadFailure { sensor: &'static str, details: String },
    /// The requested report interval is below what the hardware supports
    UnsupportedInterval { requested_ms: u32, minimum_ms: u32 },
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Unavailable { sensor } => {
                write!(f, "Sensor unavailable: {}", sensor)
            }
            SensorError::ReadFailure { sensor, details } => {
                write!(f, "Read failure on {}: {}", sensor, details)
            }
            SensorError::UnsupportedInterval { requested_ms, minimum_ms } => {
                write!(
                    f,
                    "Report interval {}ms below hardware minimum {}ms",
                    requested_ms, minimum_ms
                )
            }
        }
    }
}

impl std::error::Error for SensorError {}

/// Result type for sensor operations
pub type SensorResult<T> = Result<T, SensorError>;
