//! Mock sensor sources for testing and development

use crate::sensors::error::{SensorError, SensorResult};
use crate::sensors::source::{CompassReading, CompassSource, TiltReading, TiltSource};
use std::collections::VecDeque;

/// Scriptable tilt source backed by a reading queue
pub struct MockTiltSource {
    name: &'static str,
    queue: VecDeque<TiltReading>,
    available: bool,
    report_interval_ms: u32,
    fail_reads: bool,
}

impl MockTiltSource {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            queue: VecDeque::new(),
            available: true,
            report_interval_ms: 0,
            fail_reads: false,
        }
    }

    /// Queues a reading for a later `read` call
    pub fn push_reading(&mut self, reading: TiltReading) {
        self.queue.push_back(reading);
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Makes every subsequent `read` fail, for error-path tests
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn report_interval_ms(&self) -> u32 {
        self.report_interval_ms
    }
}

impl TiltSource for MockTiltSource {
    fn read(&mut self) -> SensorResult<Option<TiltReading>> {
        if self.fail_reads {
            return Err(SensorError::ReadFailure {
                sensor: self.name,
                details: "scripted failure".to_string(),
            });
        }
        Ok(self.queue.pop_front())
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn set_report_interval(&mut self, interval_ms: u32) -> SensorResult<()> {
        self.report_interval_ms = interval_ms;
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Scriptable compass source backed by a reading queue
pub struct MockCompassSource {
    name: &'static str,
    queue: VecDeque<CompassReading>,
    available: bool,
    report_interval_ms: u32,
}

impl MockCompassSource {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            queue: VecDeque::new(),
            available: true,
            report_interval_ms: 0,
        }
    }

    pub fn push_reading(&mut self, reading: CompassReading) {
        self.queue.push_back(reading);
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn report_interval_ms(&self) -> u32 {
        self.report_interval_ms
    }
}

impl CompassSource for MockCompassSource {
    fn read(&mut self) -> SensorResult<Option<CompassReading>> {
        Ok(self.queue.pop_front())
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn set_report_interval(&mut self, interval_ms: u32) -> SensorResult<()> {
        self.report_interval_ms = interval_ms;
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::source::DisplayOrientation;

    #[test]
    fn test_tilt_queue_drains_in_order() {
        let mut source = MockTiltSource::new("tilt");
        source.push_reading(TiltReading::Accelerometer { x: 0.0, y: -0.8, z: 0.0 });
        source.push_reading(TiltReading::Accelerometer { x: 0.0, y: -0.2, z: 0.0 });

        let first = source.read().unwrap().unwrap();
        assert_eq!(first.verticality(), 0.8);
        let second = source.read().unwrap().unwrap();
        assert_eq!(second.verticality(), 0.2);
        assert!(source.read().unwrap().is_none());
    }

    #[test]
    fn test_scripted_read_failure() {
        let mut source = MockTiltSource::new("tilt");
        source.set_fail_reads(true);
        assert!(matches!(
            source.read(),
            Err(SensorError::ReadFailure { sensor: "tilt", .. })
        ));
    }

    #[test]
    fn test_compass_queue() {
        let mut source = MockCompassSource::new("compass");
        source.push_reading(CompassReading {
            magnetic_heading_deg: 42.0,
            orientation: DisplayOrientation::Landscape,
        });

        let reading = source.read().unwrap().unwrap();
        assert_eq!(reading.magnetic_heading_deg, 42.0);
        assert!(source.read().unwrap().is_none());
    }

    #[test]
    fn test_report_interval_is_stored() {
        let mut source = MockTiltSource::new("tilt");
        source.set_report_interval(330).unwrap();
        assert_eq!(source.report_interval_ms(), 330);
    }
}
