//! Tilt state machine
//!
//! Consumes the normalized verticality signal and maintains the AR/map
//! decision. Two layers of noise suppression: band hysteresis on the raw
//! signal, and a startup debounce that keeps the externally visible mode
//! at its default until the sensor has produced more than one transition.

use crate::core::{TiltMode, VERTICALITY_FLAT_MAX, VERTICALITY_VERTICAL_MAX};
use log::debug;

/// Debounced tilt tracker
#[derive(Debug, Clone, Default)]
pub struct TiltState {
    /// Band latch: true once a reading lands in the vertical band,
    /// false once one lands in the flat band
    is_vertical: bool,
    /// Mode recorded at the latest latch transition; None until the
    /// first transition
    committed: Option<TiltMode>,
    /// Number of latch transitions observed since startup
    transitions: u32,
}

impl TiltState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one verticality reading through the band logic.
    ///
    /// Readings strictly inside (0, 0.5) select the flat band, strictly
    /// inside (0.5, 1.0) the vertical band; everything else (including
    /// the exact bounds) leaves the latch untouched. Returns the new
    /// externally visible mode when this reading changed it.
    pub fn observe(&mut self, verticality: f64) -> Option<TiltMode> {
        let before = self.current();

        if verticality > 0.0 && verticality < VERTICALITY_FLAT_MAX {
            if self.is_vertical {
                self.commit(TiltMode::Map);
            }
            self.is_vertical = false;
            debug!("map mode, verticality {:.5}", verticality);
        } else if verticality > VERTICALITY_FLAT_MAX && verticality < VERTICALITY_VERTICAL_MAX {
            if !self.is_vertical {
                self.commit(TiltMode::Ar);
            }
            self.is_vertical = true;
            debug!("ar mode, verticality {:.5}", verticality);
        } else {
            debug!("map mode (out of band), verticality {:.5}", verticality);
        }

        let after = self.current();
        (after != before).then_some(after)
    }

    /// The externally visible mode: the committed value once more than
    /// one transition has been observed, the default otherwise
    pub fn current(&self) -> TiltMode {
        match self.committed {
            Some(mode) if self.transitions > 1 => mode,
            _ => TiltMode::default(),
        }
    }

    /// Number of latch transitions so far
    pub fn transition_count(&self) -> u32 {
        self.transitions
    }

    fn commit(&mut self, mode: TiltMode) {
        if self.committed != Some(mode) {
            self.committed = Some(mode);
            self.transitions += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_map() {
        let state = TiltState::new();
        assert_eq!(state.current(), TiltMode::Map);
    }

    #[test]
    fn test_debounce_swallows_first_two_transitions() {
        let mut state = TiltState::new();

        // First crossing into the vertical band: latched but not visible
        assert_eq!(state.observe(0.8), None);
        assert_eq!(state.current(), TiltMode::Map);

        // Second crossing back to flat: still the default
        assert_eq!(state.observe(0.2), None);
        assert_eq!(state.current(), TiltMode::Map);

        // Third crossing finally surfaces
        assert_eq!(state.observe(0.8), Some(TiltMode::Ar));
        assert_eq!(state.current(), TiltMode::Ar);
    }

    #[test]
    fn test_repeated_in_band_readings_are_not_transitions() {
        let mut state = TiltState::new();
        for _ in 0..10 {
            state.observe(0.8);
        }
        // One latch transition no matter how many vertical readings
        assert_eq!(state.transition_count(), 1);
        assert_eq!(state.current(), TiltMode::Map);
    }

    #[test]
    fn test_out_of_band_readings_leave_latch_unchanged() {
        let mut state = TiltState::new();
        state.observe(0.8);
        state.observe(0.2);
        assert_eq!(state.transition_count(), 2);

        // Out-of-band values: negative, exact bounds, above one
        for v in [-0.3, 0.0, 0.5, 1.0, 1.7] {
            assert_eq!(state.observe(v), None);
        }
        assert_eq!(state.transition_count(), 2);
    }

    #[test]
    fn test_mode_tracks_after_debounce() {
        let mut state = TiltState::new();
        state.observe(0.8);
        state.observe(0.2);
        state.observe(0.8);
        assert_eq!(state.current(), TiltMode::Ar);

        assert_eq!(state.observe(0.2), Some(TiltMode::Map));
        assert_eq!(state.current(), TiltMode::Map);

        assert_eq!(state.observe(0.9), Some(TiltMode::Ar));
        assert_eq!(state.current(), TiltMode::Ar);
    }
}
