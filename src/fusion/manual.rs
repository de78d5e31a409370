//! Manual sensor emulation
//!
//! Keyboard-style stepping for environments without physical sensors.
//! Steps accumulate here and the results feed the same compass deadband
//! and verticality band logic as real readings.

use crate::core::{MANUAL_HEADING_STEP_DEG, MANUAL_PITCH_STEP};

/// Direction of a discrete manual adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Increase,
    Decrease,
}

/// Accumulated manual heading and pitch state
#[derive(Debug, Clone, Default)]
pub struct ManualInput {
    heading_deg: i32,
    pitch: f64,
}

impl ManualInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one +/-30 degree heading step and returns the emulated
    /// raw heading, wrapped into [0, 360)
    pub fn step_heading(&mut self, direction: StepDirection) -> f64 {
        let delta = match direction {
            StepDirection::Increase => MANUAL_HEADING_STEP_DEG,
            StepDirection::Decrease => -MANUAL_HEADING_STEP_DEG,
        };
        self.heading_deg = (self.heading_deg + delta).rem_euclid(360);
        self.heading_deg as f64
    }

    /// Applies one +/-0.1 pitch step and returns the emulated
    /// verticality reading, clamped to [-1, 1]
    pub fn step_pitch(&mut self, direction: StepDirection) -> f64 {
        let delta = match direction {
            StepDirection::Increase => MANUAL_PITCH_STEP,
            StepDirection::Decrease => -MANUAL_PITCH_STEP,
        };
        self.pitch = (self.pitch + delta).clamp(-1.0, 1.0);
        self.pitch
    }

    pub fn heading(&self) -> f64 {
        self.heading_deg as f64
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }
}
