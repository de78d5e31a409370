//! Session state ownership, update serialization, and change events

pub mod events;
pub mod executor;
pub mod state;

pub use events::{CallbackHandle, EventRegistry, SessionCallback, SessionEvent};
pub use executor::SessionExecutor;
pub use state::{SessionCore, StateUpdate};
