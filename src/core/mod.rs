//! Core data types and constants for the overlay engine

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::{
    GeoCoordinate, PlacedLabel, PointOfInterest, ScreenBox, TiltMode, ViewerSnapshot,
    VisiblePoint,
};
