//! Field-of-view filtering of candidate points
//!
//! Given a committed viewer snapshot and the point-of-interest catalog,
//! produces the subset currently in view annotated with the distance and
//! signed angle computed during this pass.

use crate::core::{GeoCoordinate, PointOfInterest, ViewerSnapshot, VisiblePoint, FOV_HALF_ANGLE_DEG};
use crate::spatial::{haversine_distance, initial_bearing, DistanceUnit};

/// Signed angular offset of an item bearing from the viewer heading.
/// Differences beyond +/-180 fold back into the opposite sign so the
/// result stays within [-180, 180]. Positive means the item lies to the
/// left of the heading.
pub fn signed_view_angle(viewer_heading: f64, item_heading: f64) -> f64 {
    let angle = viewer_heading - item_heading;
    if angle > 180.0 {
        viewer_heading - (item_heading + 360.0)
    } else if angle < -180.0 {
        viewer_heading + 360.0 - item_heading
    } else {
        angle
    }
}

/// Selects the points inside the viewer's field of view and range.
///
/// A missing position is the normal "no fix yet" state and yields an
/// empty result, as does an empty catalog. The field-of-view gate keeps
/// points within [-22.5, 22.5] degrees of the heading; of those, the
/// range gate keeps points within `range_km` (both bounds inclusive).
/// Output order follows input order; the layout engine sorts by distance.
pub fn filter_in_view(points: &[PointOfInterest], viewer: &ViewerSnapshot) -> Vec<VisiblePoint> {
    let position = match viewer.position {
        Some(position) => position,
        None => return Vec::new(),
    };

    points
        .iter()
        .filter_map(|point| annotate_if_visible(point, position, viewer.heading, viewer.range_km))
        .collect()
}

fn annotate_if_visible(
    point: &PointOfInterest,
    position: GeoCoordinate,
    heading: f64,
    range_km: f64,
) -> Option<VisiblePoint> {
    let item_heading = initial_bearing(position, point.coordinate);
    let angle_deg = signed_view_angle(heading, item_heading);

    if angle_deg.abs() > FOV_HALF_ANGLE_DEG {
        return None;
    }

    let distance_km = haversine_distance(position, point.coordinate, DistanceUnit::Kilometers);
    if distance_km > range_km {
        return None;
    }

    Some(VisiblePoint {
        point: point.clone(),
        distance_km,
        angle_deg,
    })
}
