//! Spherical geometry and unit conversion primitives
//!
//! Everything here is a pure function over [`GeoCoordinate`](crate::core::GeoCoordinate)
//! values; there is no shared state and no failure mode beyond IEEE 754
//! propagation of non-finite inputs.

pub mod dms;
pub mod geodesy;
pub mod units;

pub use dms::{decimal_degree_to_dms, dms_to_decimal_degree};
pub use geodesy::{
    destination_point, haversine_distance, initial_bearing, midpoint, to_degrees, to_radians,
};
pub use units::{convert_distance, earth_radius, DistanceUnit};
