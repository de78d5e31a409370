//! Compass heading fusion
//!
//! Compensates raw magnetic readings for the display orientation and the
//! user-calibrated offset, then applies a deadband so the published
//! heading does not chatter with every reading.

use crate::core::HEADING_DEADBAND_DEG;
use crate::sensors::DisplayOrientation;

/// Heading offset (degrees) implied by the current display orientation
pub fn display_heading_offset(orientation: DisplayOrientation) -> f64 {
    match orientation {
        DisplayOrientation::Landscape => 0.0,
        DisplayOrientation::Portrait => 270.0,
        DisplayOrientation::LandscapeFlipped => 180.0,
        DisplayOrientation::PortraitFlipped => 90.0,
        DisplayOrientation::None => 0.0,
    }
}

/// Fused compass state
#[derive(Debug, Clone)]
pub struct CompassFusion {
    heading: f64,
    user_offset_deg: i32,
    follow: bool,
}

impl Default for CompassFusion {
    fn default() -> Self {
        Self {
            heading: 0.0,
            user_offset_deg: 0,
            follow: true,
        }
    }
}

impl CompassFusion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fused heading, degrees in [0, 360)
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Stores the user compass calibration offset, wrapped mod 360
    pub fn set_user_offset(&mut self, offset_deg: i32) {
        self.user_offset_deg = offset_deg % 360;
    }

    pub fn user_offset(&self) -> i32 {
        self.user_offset_deg
    }

    /// Enables or disables compass-driven heading. Disabling resets the
    /// heading to 0; readings are ignored until re-enabled. Returns the
    /// new heading when this call changed it.
    pub fn set_follow(&mut self, follow: bool) -> Option<f64> {
        if self.follow == follow {
            return None;
        }
        self.follow = follow;
        if !follow && self.heading != 0.0 {
            self.heading = 0.0;
            return Some(0.0);
        }
        None
    }

    pub fn follow(&self) -> bool {
        self.follow
    }

    /// Feeds one raw magnetic reading. The compensated heading is
    /// `(raw + display offset + user offset) mod 360`; it is committed
    /// only when it differs from the current heading by at least the
    /// deadband, measured as a plain absolute difference (a swing across
    /// north, e.g. 359 to 1, reads as a large delta and passes).
    /// Returns the committed heading, or None when the update was
    /// dropped.
    pub fn observe(&mut self, raw_magnetic_deg: f64, orientation: DisplayOrientation) -> Option<f64> {
        if !self.follow {
            return None;
        }

        let offset = display_heading_offset(orientation) + self.user_offset_deg as f64;
        let compensated = (raw_magnetic_deg + offset).rem_euclid(360.0);

        if (self.heading - compensated).abs() >= HEADING_DEADBAND_DEG {
            self.heading = compensated;
            Some(compensated)
        } else {
            None
        }
    }
}
