//! Session event callbacks
//!
//! Components interested in committed state changes (layout, mode
//! switch, map centering) register callbacks here. Events fire only on
//! actual changes: updates swallowed by the compass deadband or the
//! tilt debounce produce nothing.

use crate::core::{GeoCoordinate, TiltMode};
use std::collections::HashMap;

/// Committed change notifications
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// The debounced tilt mode switched
    TiltModeChanged { mode: TiltMode },
    /// The fused heading moved past the deadband
    HeadingChanged { heading: f64 },
    /// A new location fix was committed
    PositionChanged { position: GeoCoordinate },
    /// The visibility range was changed
    RangeChanged { range_km: f64 },
}

/// Callback function type for session events
pub type SessionCallback = Box<dyn Fn(SessionEvent) + Send>;

/// Callback registration handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackHandle(u32);

impl CallbackHandle {
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Registry of session event callbacks
#[derive(Default)]
pub struct EventRegistry {
    counter: u32,
    callbacks: HashMap<CallbackHandle, SessionCallback>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback and returns its handle
    pub fn register(&mut self, callback: SessionCallback) -> CallbackHandle {
        self.counter += 1;
        let handle = CallbackHandle(self.counter);
        self.callbacks.insert(handle, callback);
        handle
    }

    /// Removes a callback; returns false for an unknown handle
    pub fn unregister(&mut self, handle: CallbackHandle) -> bool {
        self.callbacks.remove(&handle).is_some()
    }

    /// Invokes every registered callback with the event
    pub fn emit(&self, event: SessionEvent) {
        for callback in self.callbacks.values() {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_register_emit_unregister() {
        let mut registry = EventRegistry::new();
        let hits = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&hits);
        let handle = registry.register(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        registry.emit(SessionEvent::RangeChanged { range_km: 5.0 });
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        assert!(registry.unregister(handle));
        registry.emit(SessionEvent::RangeChanged { range_km: 6.0 });
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        // Unregistering twice fails
        assert!(!registry.unregister(handle));
    }

    #[test]
    fn test_multiple_callbacks_all_fire() {
        let mut registry = EventRegistry::new();
        let hits = Arc::new(AtomicU32::new(0));

        for _ in 0..3 {
            let counter = Arc::clone(&hits);
            registry.register(Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        }

        registry.emit(SessionEvent::TiltModeChanged { mode: crate::core::TiltMode::Ar });
        assert_eq!(hits.load(Ordering::SeqCst), 3);
        assert_eq!(registry.len(), 3);
    }
}
