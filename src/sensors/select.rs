//! Ranked sensor selection
//!
//! A device may carry any subset of the tilt-capable sensors. At
//! startup the candidates are tried in a fixed priority order and the
//! first available one becomes the active channel; the rest are dropped
//! and never polled.

use crate::sensors::source::TiltSource;
use log::info;

/// Which physical channel feeds the verticality signal. Priority order:
/// `Simple` > `Quaternion` > `Accelerometer`; `None` means the device
/// has no usable tilt sensor and the mode stays at its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiltChannel {
    Simple,
    Quaternion,
    Accelerometer,
    #[default]
    None,
}

/// A candidate source tagged with the channel it would provide
pub struct TiltCandidate {
    pub channel: TiltChannel,
    pub source: Box<dyn TiltSource>,
}

impl TiltCandidate {
    pub fn new(channel: TiltChannel, source: Box<dyn TiltSource>) -> Self {
        Self { channel, source }
    }
}

/// The outcome of sensor selection: the winning source, or nothing
pub struct ActiveTilt {
    pub channel: TiltChannel,
    pub source: Option<Box<dyn TiltSource>>,
}

impl ActiveTilt {
    /// No tilt sensor present; the tilt mode will never change
    pub fn none() -> Self {
        Self { channel: TiltChannel::None, source: None }
    }
}

const PRIORITY: [TiltChannel; 3] = [
    TiltChannel::Simple,
    TiltChannel::Quaternion,
    TiltChannel::Accelerometer,
];

/// Picks the highest-priority available candidate. Candidates may arrive
/// in any order; unavailable ones are skipped. With no available
/// candidate the result is the `None` channel, a degraded but valid
/// state.
pub fn select_tilt_source(candidates: Vec<TiltCandidate>) -> ActiveTilt {
    let mut candidates = candidates;

    for wanted in PRIORITY {
        if let Some(index) = candidates
            .iter()
            .position(|c| c.channel == wanted && c.source.is_available())
        {
            let winner = candidates.swap_remove(index);
            info!("tilt sensor selected: {}", winner.source.name());
            return ActiveTilt {
                channel: winner.channel,
                source: Some(winner.source),
            };
        }
    }

    info!("no tilt sensor available, staying in map mode");
    ActiveTilt::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::mock::MockTiltSource;

    fn candidate(channel: TiltChannel, available: bool) -> TiltCandidate {
        let mut source = MockTiltSource::new("mock");
        source.set_available(available);
        TiltCandidate::new(channel, Box::new(source))
    }

    #[test]
    fn test_simple_sensor_wins() {
        let active = select_tilt_source(vec![
            candidate(TiltChannel::Accelerometer, true),
            candidate(TiltChannel::Simple, true),
            candidate(TiltChannel::Quaternion, true),
        ]);
        assert_eq!(active.channel, TiltChannel::Simple);
        assert!(active.source.is_some());
    }

    #[test]
    fn test_fallback_skips_unavailable() {
        let active = select_tilt_source(vec![
            candidate(TiltChannel::Simple, false),
            candidate(TiltChannel::Quaternion, false),
            candidate(TiltChannel::Accelerometer, true),
        ]);
        assert_eq!(active.channel, TiltChannel::Accelerometer);
    }

    #[test]
    fn test_no_sensor_degrades_to_none() {
        let active = select_tilt_source(vec![candidate(TiltChannel::Quaternion, false)]);
        assert_eq!(active.channel, TiltChannel::None);
        assert!(active.source.is_none());

        let empty = select_tilt_source(Vec::new());
        assert_eq!(empty.channel, TiltChannel::None);
    }
}
