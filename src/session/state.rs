//! Viewer state and update messages
//!
//! The mutable session state lives in one [`SessionCore`]. Writers never
//! touch it directly; they describe the change as a [`StateUpdate`] and
//! the core applies updates one at a time, emitting events for the
//! changes that actually commit. Consumers read [`ViewerSnapshot`]s.

use crate::config::OverlayConfig;
use crate::core::{GeoCoordinate, TiltMode, ViewerSnapshot, DEFAULT_RANGE_KM};
use crate::fusion::{CompassFusion, ManualInput, StepDirection, TiltState};
use crate::sensors::{CompassReading, DisplayOrientation, TiltReading};
use crate::session::events::{CallbackHandle, EventRegistry, SessionCallback, SessionEvent};
use log::warn;

/// A state change submitted by a sensor callback or the UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateUpdate {
    /// New location fix from the location provider
    PositionFix(GeoCoordinate),
    /// Raw compass sample
    Compass(CompassReading),
    /// Raw tilt-relevant sample from the active sensor
    Tilt(TiltReading),
    /// New visibility range in kilometers
    Range(f64),
    /// Enable or disable compass-driven heading
    CompassFollow(bool),
    /// User compass calibration offset in degrees
    CompassOffset(i32),
    /// Manual heading step (emulated compass)
    StepHeading(StepDirection),
    /// Manual pitch step (emulated tilt)
    StepPitch(StepDirection),
}

/// Owner of the mutable viewer state. Apply is synchronous and
/// single-threaded by construction; the executor is the only caller in
/// the threaded setup, which serializes every write.
pub struct SessionCore {
    position: Option<GeoCoordinate>,
    range_km: f64,
    tilt: TiltState,
    compass: CompassFusion,
    manual: ManualInput,
    /// Most recent display orientation seen on any reading; manual
    /// heading steps reuse it for offset compensation
    last_orientation: DisplayOrientation,
    version: u64,
    events: EventRegistry,
}

impl Default for SessionCore {
    fn default() -> Self {
        Self {
            position: None,
            range_km: DEFAULT_RANGE_KM,
            tilt: TiltState::new(),
            compass: CompassFusion::new(),
            manual: ManualInput::new(),
            last_orientation: DisplayOrientation::default(),
            version: 0,
            events: EventRegistry::new(),
        }
    }
}

impl SessionCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a core seeded from configuration
    pub fn with_config(config: &OverlayConfig) -> Self {
        let mut core = Self::new();
        core.range_km = config.range_km;
        core.compass.set_user_offset(config.compass_offset_deg);
        core.compass.set_follow(config.compass_follow);
        core
    }

    /// Registers a session event callback
    pub fn register_callback(&mut self, callback: SessionCallback) -> CallbackHandle {
        self.events.register(callback)
    }

    /// Removes a previously registered callback
    pub fn unregister_callback(&mut self, handle: CallbackHandle) -> bool {
        self.events.unregister(handle)
    }

    /// Applies one update. Changes that commit bump the snapshot version
    /// and fire the matching event; updates suppressed by the deadband,
    /// the debounce, or value equality leave the state untouched.
    pub fn apply(&mut self, update: StateUpdate) {
        match update {
            StateUpdate::PositionFix(position) => {
                if self.position != Some(position) {
                    self.position = Some(position);
                    self.commit(SessionEvent::PositionChanged { position });
                }
            }
            StateUpdate::Compass(reading) => {
                self.last_orientation = reading.orientation;
                if let Some(heading) =
                    self.compass.observe(reading.magnetic_heading_deg, reading.orientation)
                {
                    self.commit(SessionEvent::HeadingChanged { heading });
                }
            }
            StateUpdate::Tilt(reading) => {
                if let TiltReading::Quaternion { orientation, .. } = reading {
                    self.last_orientation = orientation;
                }
                if let Some(mode) = self.tilt.observe(reading.verticality()) {
                    self.commit(SessionEvent::TiltModeChanged { mode });
                }
            }
            StateUpdate::Range(range_km) => {
                if range_km < 0.0 {
                    warn!("negative range {} clamped to 0", range_km);
                }
                let range_km = range_km.max(0.0);
                if self.range_km != range_km {
                    self.range_km = range_km;
                    self.commit(SessionEvent::RangeChanged { range_km });
                }
            }
            StateUpdate::CompassFollow(follow) => {
                if let Some(heading) = self.compass.set_follow(follow) {
                    self.commit(SessionEvent::HeadingChanged { heading });
                }
            }
            StateUpdate::CompassOffset(offset_deg) => {
                self.compass.set_user_offset(offset_deg);
            }
            StateUpdate::StepHeading(direction) => {
                let raw = self.manual.step_heading(direction);
                if let Some(heading) = self.compass.observe(raw, self.last_orientation) {
                    self.commit(SessionEvent::HeadingChanged { heading });
                }
            }
            StateUpdate::StepPitch(direction) => {
                let verticality = self.manual.step_pitch(direction);
                if let Some(mode) = self.tilt.observe(verticality) {
                    self.commit(SessionEvent::TiltModeChanged { mode });
                }
            }
        }
    }

    /// Current committed state
    pub fn snapshot(&self) -> ViewerSnapshot {
        ViewerSnapshot {
            position: self.position,
            heading: self.compass.heading(),
            range_km: self.range_km,
            tilt: self.tilt.current(),
            version: self.version,
        }
    }

    /// Debounced tilt mode
    pub fn current_mode(&self) -> TiltMode {
        self.tilt.current()
    }

    /// Fused compass heading in [0, 360)
    pub fn fused_heading(&self) -> f64 {
        self.compass.heading()
    }

    fn commit(&mut self, event: SessionEvent) {
        self.version += 1;
        self.events.emit(event);
    }
}
