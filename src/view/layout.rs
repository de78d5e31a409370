//! Label placement over the camera overlay
//!
//! Maps in-view points to non-overlapping screen boxes. Placement is
//! deterministic for a given input: nearest points are placed first and
//! later labels are pushed upward until they clear everything already
//! placed, up to a bounded number of shifts.

use crate::core::{
    PlacedLabel, ScreenBox, VisiblePoint, FOV_HALF_ANGLE_DEG, LABEL_BOX_HEIGHT, LABEL_BOX_WIDTH,
    LABEL_TOP_BAND, MAX_COLLISION_SHIFTS,
};
use log::warn;

/// Deterministic label layout engine
#[derive(Debug, Clone)]
pub struct LabelLayoutEngine {
    box_width: f64,
    box_height: f64,
    max_shifts: u32,
}

impl Default for LabelLayoutEngine {
    fn default() -> Self {
        Self {
            box_width: LABEL_BOX_WIDTH,
            box_height: LABEL_BOX_HEIGHT,
            max_shifts: MAX_COLLISION_SHIFTS,
        }
    }
}

impl LabelLayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an engine with the configured box size and shift cap
    pub fn from_config(config: &crate::config::OverlayConfig) -> Self {
        Self {
            box_width: config.label_box_width,
            box_height: config.label_box_height,
            max_shifts: config.max_collision_shifts,
        }
    }

    /// Overrides the fixed label box size
    pub fn with_box_size(mut self, width: f64, height: f64) -> Self {
        self.box_width = width;
        self.box_height = height;
        self
    }

    /// Overrides the collision shift cap
    pub fn with_max_shifts(mut self, max_shifts: u32) -> Self {
        self.max_shifts = max_shifts;
        self
    }

    /// Places one label per visible point on a canvas of the given size.
    ///
    /// Points are sorted nearest-first so closer labels claim their spot
    /// before farther ones get displaced. The returned list preserves
    /// that order. Running the same input twice yields the same boxes.
    pub fn layout(
        &self,
        visible: &[VisiblePoint],
        canvas_width: f64,
        canvas_height: f64,
    ) -> Vec<PlacedLabel> {
        let mut by_distance: Vec<&VisiblePoint> = visible.iter().collect();
        by_distance.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut placed_boxes: Vec<ScreenBox> = Vec::with_capacity(by_distance.len());
        let mut labels = Vec::with_capacity(by_distance.len());

        for item in by_distance {
            let left = self.horizontal_position(item.angle_deg, canvas_width);
            let top = (canvas_height - self.box_height) * LABEL_TOP_BAND;

            let mut candidate = ScreenBox::new(left, top, self.box_width, self.box_height);
            self.resolve_collisions(&mut candidate, &placed_boxes);
            placed_boxes.push(candidate);

            labels.push(PlacedLabel {
                screen_box: candidate,
                caption: caption(&item.point.name, item.distance_km),
                name: item.point.name.clone(),
                distance_km: item.distance_km,
            });
        }

        labels
    }

    /// Maps the signed view angle onto a horizontal canvas offset:
    /// angle 0 puts the box's left edge at mid-canvas, the positive FOV
    /// edge at 0, the negative edge at the right edge. The two branches
    /// agree at angle 0 only up to floating-point rounding, so both are
    /// kept verbatim rather than folded into one expression.
    fn horizontal_position(&self, angle_deg: f64, canvas_width: f64) -> f64 {
        if angle_deg > 0.0 {
            canvas_width / 2.0 * ((FOV_HALF_ANGLE_DEG - angle_deg) / FOV_HALF_ANGLE_DEG)
        } else {
            canvas_width / 2.0 * (1.0 + -angle_deg / FOV_HALF_ANGLE_DEG)
        }
    }

    /// Pushes `candidate` upward by `height + 1` per colliding box until
    /// it clears every placed box, restarting the scan from the first
    /// placed box after each shift. Bounded by `max_shifts`; when the
    /// bound is hit the candidate keeps its last position and the
    /// residual overlap is accepted.
    fn resolve_collisions(&self, candidate: &mut ScreenBox, placed: &[ScreenBox]) {
        let mut shifts = 0;
        'scan: loop {
            for existing in placed {
                if existing.intersects(candidate) {
                    if shifts >= self.max_shifts {
                        warn!(
                            "label collision unresolved after {} shifts, accepting overlap at top {}",
                            shifts, candidate.top
                        );
                        return;
                    }
                    candidate.top -= candidate.height + 1.0;
                    shifts += 1;
                    continue 'scan;
                }
            }
            return;
        }
    }
}

/// Two-line caption: `<name> : ` then the distance in meters with
/// thousands separators and two decimals
fn caption(name: &str, distance_km: f64) -> String {
    format!("{} : \n{} m", name, format_meters(distance_km * 1000.0))
}

/// Formats meters with comma thousands separators and two decimal places
fn format_meters(meters: f64) -> String {
    let negative = meters < 0.0;
    let fixed = format!("{:.2}", meters.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-{}.{}", grouped, frac_part)
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}
