//! Great-circle geometry on a spherical Earth
//!
//! Pure functions with no failure modes: NaN and infinity inputs
//! propagate per IEEE 754, finite inputs always yield finite results.

use crate::core::GeoCoordinate;
use crate::spatial::units::{earth_radius, DistanceUnit};
use std::f64::consts::PI;

/// Converts an angle in degrees to radians
pub fn to_radians(angle: f64) -> f64 {
    angle * (PI / 180.0)
}

/// Converts an angle in radians to degrees
pub fn to_degrees(angle: f64) -> f64 {
    angle * (180.0 / PI)
}

/// Great-circle distance between two coordinates using the haversine
/// formula. Symmetric in its arguments; zero for identical points.
pub fn haversine_distance(origin: GeoCoordinate, destination: GeoCoordinate, unit: DistanceUnit) -> f64 {
    let radius = earth_radius(unit);

    let d_lat = to_radians(destination.latitude - origin.latitude);
    let d_lon = to_radians(destination.longitude - origin.longitude);

    let a = (d_lat / 2.0).sin().powi(2)
        + to_radians(origin.latitude).cos().powi(2) * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

/// Initial bearing from `origin` toward `destination`, degrees clockwise
/// from north in [0, 360). For coincident points the bearing is
/// indeterminate; atan2(0, 0) makes this return 0, which callers rely on
/// as the stable degenerate result.
pub fn initial_bearing(origin: GeoCoordinate, destination: GeoCoordinate) -> f64 {
    let lat1 = to_radians(origin.latitude);
    let lat2 = to_radians(destination.latitude);
    let d_lon = to_radians(destination.longitude - origin.longitude);

    let dy = d_lon.sin() * lat2.cos();
    let dx = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    (to_degrees(dy.atan2(dx)) + 360.0) % 360.0
}

/// Forward geodesic projection: the point reached by travelling
/// `distance` from `origin` along `bearing_deg` (0 north, 90 east)
pub fn destination_point(
    origin: GeoCoordinate,
    bearing_deg: f64,
    distance: f64,
    unit: DistanceUnit,
) -> GeoCoordinate {
    let radius = earth_radius(unit);

    let lat = to_radians(origin.latitude);
    let lon = to_radians(origin.longitude);
    let bearing = to_radians(bearing_deg);

    let central_angle = distance / radius;
    let dest_lat =
        (lat.sin() * central_angle.cos() + lat.cos() * central_angle.sin() * bearing.cos()).asin();
    let dest_lon = lon
        + (bearing.sin() * central_angle.sin() * lat.cos())
            .atan2(central_angle.cos() - lat.sin() * dest_lat.sin());

    GeoCoordinate::new(to_degrees(dest_lat), to_degrees(dest_lon))
}

/// Point at half the great-circle arc between `a` and `b`, computed by
/// projecting from `a` along the a->b bearing for half the haversine
/// distance
pub fn midpoint(a: GeoCoordinate, b: GeoCoordinate) -> GeoCoordinate {
    let arc_length = haversine_distance(a, b, DistanceUnit::Kilometers);
    let bearing = initial_bearing(a, b);

    destination_point(a, bearing, arc_length / 2.0, DistanceUnit::Kilometers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERLIN: GeoCoordinate = GeoCoordinate { latitude: 52.5164, longitude: 13.3778 };
    const HAMBURG: GeoCoordinate = GeoCoordinate { latitude: 53.5511, longitude: 9.9937 };

    #[test]
    fn test_haversine_symmetry() {
        let ab = haversine_distance(BERLIN, HAMBURG, DistanceUnit::Kilometers);
        let ba = haversine_distance(HAMBURG, BERLIN, DistanceUnit::Kilometers);
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn test_haversine_identical_points_is_zero() {
        assert_eq!(haversine_distance(BERLIN, BERLIN, DistanceUnit::Kilometers), 0.0);
        assert_eq!(haversine_distance(BERLIN, BERLIN, DistanceUnit::Feet), 0.0);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Berlin to Hamburg is roughly 255 km
        let d = haversine_distance(BERLIN, HAMBURG, DistanceUnit::Kilometers);
        assert!(d > 250.0 && d < 260.0, "unexpected distance {}", d);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = GeoCoordinate::new(0.0, 0.0);
        let north = initial_bearing(origin, GeoCoordinate::new(1.0, 0.0));
        let east = initial_bearing(origin, GeoCoordinate::new(0.0, 1.0));
        let south = initial_bearing(origin, GeoCoordinate::new(-1.0, 0.0));
        let west = initial_bearing(origin, GeoCoordinate::new(0.0, -1.0));

        assert!((north - 0.0).abs() < 1e-9);
        assert!((east - 90.0).abs() < 1e-9);
        assert!((south - 180.0).abs() < 1e-9);
        assert!((west - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_degenerate_coincident_points() {
        assert_eq!(initial_bearing(BERLIN, BERLIN), 0.0);
    }

    #[test]
    fn test_bearing_range() {
        let points = [
            GeoCoordinate::new(52.54327, 13.359458),
            GeoCoordinate::new(52.514057, 13.350111),
            GeoCoordinate::new(-33.8688, 151.2093),
            GeoCoordinate::new(40.7128, -74.006),
        ];
        for p in points {
            let bearing = initial_bearing(BERLIN, p);
            assert!((0.0..360.0).contains(&bearing), "bearing {} out of range", bearing);
        }
    }

    #[test]
    fn test_destination_inverse_consistency() {
        // Projecting along the computed bearing for the computed distance
        // must reproduce the destination
        let distance = haversine_distance(BERLIN, HAMBURG, DistanceUnit::Kilometers);
        let bearing = initial_bearing(BERLIN, HAMBURG);
        let reached = destination_point(BERLIN, bearing, distance, DistanceUnit::Kilometers);

        assert!((reached.latitude - HAMBURG.latitude).abs() < 1e-3);
        assert!((reached.longitude - HAMBURG.longitude).abs() < 1e-3);
    }

    #[test]
    fn test_destination_unit_agreement() {
        let km = destination_point(BERLIN, 45.0, 10.0, DistanceUnit::Kilometers);
        let m = destination_point(BERLIN, 45.0, 10_000.0, DistanceUnit::Meters);
        assert!((km.latitude - m.latitude).abs() < 1e-9);
        assert!((km.longitude - m.longitude).abs() < 1e-9);
    }

    #[test]
    fn test_midpoint_is_equidistant() {
        let mid = midpoint(BERLIN, HAMBURG);
        let to_a = haversine_distance(mid, BERLIN, DistanceUnit::Kilometers);
        let to_b = haversine_distance(mid, HAMBURG, DistanceUnit::Kilometers);
        assert!((to_a - to_b).abs() < 1e-6, "midpoint skewed: {} vs {}", to_a, to_b);
    }

    #[test]
    fn test_radian_degree_round_trip() {
        for deg in [-720.0, -90.0, 0.0, 45.0, 180.0, 359.9] {
            assert!((to_degrees(to_radians(deg)) - deg).abs() < 1e-12);
        }
    }
}
