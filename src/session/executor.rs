//! Serialized state-update executor
//!
//! Sensor callbacks arrive from independent hardware threads at their
//! own cadences. Every write goes through one unbounded channel into a
//! single worker that owns the [`SessionCore`], so concurrent callbacks
//! can never race on viewer state. After each applied update the worker
//! publishes a fresh snapshot; consumers only ever see fully committed
//! state.

use crate::core::{TiltMode, ViewerSnapshot};
use crate::sensors::{CompassSource, SensorResult, TiltSource};
use crate::session::state::{SessionCore, StateUpdate};
use crossbeam_channel::{unbounded, Sender};
use log::debug;
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

enum Message {
    Update(StateUpdate),
    Shutdown,
}

/// Handle to the running session worker
pub struct SessionExecutor {
    sender: Sender<Message>,
    shared: Arc<RwLock<ViewerSnapshot>>,
    worker: Option<JoinHandle<()>>,
}

impl SessionExecutor {
    /// Moves the core into a worker thread and starts draining updates
    pub fn spawn(core: SessionCore) -> Self {
        let (sender, receiver) = unbounded();
        let shared = Arc::new(RwLock::new(core.snapshot()));
        let published = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            let mut core = core;
            while let Ok(Message::Update(update)) = receiver.recv() {
                core.apply(update);
                *published.write() = core.snapshot();
            }
            debug!("session executor stopped");
        });

        Self {
            sender,
            shared,
            worker: Some(worker),
        }
    }

    /// Enqueues a state update. Returns false once the worker has shut
    /// down; updates are otherwise applied in submission order.
    pub fn submit(&self, update: StateUpdate) -> bool {
        self.sender.send(Message::Update(update)).is_ok()
    }

    /// Drains every pending sample from a tilt source into the queue.
    /// Returns the number of samples submitted.
    pub fn drain_tilt(&self, source: &mut dyn TiltSource) -> SensorResult<u32> {
        let mut submitted = 0;
        while let Some(reading) = source.read()? {
            if self.submit(StateUpdate::Tilt(reading)) {
                submitted += 1;
            }
        }
        Ok(submitted)
    }

    /// Drains every pending sample from a compass source into the queue
    pub fn drain_compass(&self, source: &mut dyn CompassSource) -> SensorResult<u32> {
        let mut submitted = 0;
        while let Some(reading) = source.read()? {
            if self.submit(StateUpdate::Compass(reading)) {
                submitted += 1;
            }
        }
        Ok(submitted)
    }

    /// Latest committed snapshot
    pub fn snapshot(&self) -> ViewerSnapshot {
        self.shared.read().clone()
    }

    /// Debounced tilt mode from the latest snapshot
    pub fn current_mode(&self) -> TiltMode {
        self.shared.read().tilt
    }

    /// Fused heading from the latest snapshot
    pub fn fused_heading(&self) -> f64 {
        self.shared.read().heading
    }

    /// Stops the worker after it has applied everything already queued.
    /// Snapshots remain readable afterwards.
    pub fn shutdown(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = self.sender.send(Message::Shutdown);
            let _ = worker.join();
        }
    }
}

impl Drop for SessionExecutor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
