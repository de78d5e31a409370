//! Distance units and conversions

use crate::core::{
    EARTH_RADIUS_FEET, EARTH_RADIUS_KM, EARTH_RADIUS_METERS, EARTH_RADIUS_MILES,
};
use serde::{Deserialize, Serialize};

/// Units of distance measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    Miles,
    Feet,
    Yards,
}

// Per-unit conversion factors through the kilometer pivot:
// 1 mi = 1.609344 km, 1 yd = 0.9144 m, 1 ft = 0.3048 m.
const KM_PER_MILE: f64 = 1.609344;
const KM_PER_YARD: f64 = 0.0009144;
const KM_PER_FOOT: f64 = 0.0003048;
const KM_PER_METER: f64 = 0.001;

/// Earth radius expressed in the requested unit. The yard radius is
/// derived by converting the kilometer constant rather than carrying a
/// fifth constant.
pub fn earth_radius(unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometers => EARTH_RADIUS_KM,
        DistanceUnit::Meters => EARTH_RADIUS_METERS,
        DistanceUnit::Miles => EARTH_RADIUS_MILES,
        DistanceUnit::Feet => EARTH_RADIUS_FEET,
        DistanceUnit::Yards => {
            convert_distance(EARTH_RADIUS_KM, DistanceUnit::Kilometers, DistanceUnit::Yards)
        }
    }
}

/// Converts a distance between units, pivoting through kilometers.
/// Same-unit conversion returns the input bit-for-bit.
pub fn convert_distance(distance: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    if from == to {
        return distance;
    }

    let km = match from {
        DistanceUnit::Kilometers => distance,
        DistanceUnit::Meters => distance * KM_PER_METER,
        DistanceUnit::Miles => distance * KM_PER_MILE,
        DistanceUnit::Feet => distance * KM_PER_FOOT,
        DistanceUnit::Yards => distance * KM_PER_YARD,
    };

    match to {
        DistanceUnit::Kilometers => km,
        DistanceUnit::Meters => km / KM_PER_METER,
        DistanceUnit::Miles => km / KM_PER_MILE,
        DistanceUnit::Feet => km / KM_PER_FOOT,
        DistanceUnit::Yards => km / KM_PER_YARD,
    }
}
