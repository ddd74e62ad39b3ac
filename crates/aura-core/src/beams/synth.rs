use tracing::debug;

use crate::detection::{extract_regions_capped, RegionConfig};
use crate::frame::{BoundingRegion, Frame, LineSegment, Point};

use super::colinear::are_points_colinear;
use super::config::BeamConfig;
use super::jitter::JitterSource;

/// Search every combination of one region center per frame for
/// near-collinear paths.
///
/// Each passing combination yields a segment from its first to its last
/// point. Work grows with the product of the per-frame region counts.
pub fn find_lines(region_sets: &[Vec<BoundingRegion>], tolerance: f32) -> Vec<LineSegment> {
    if region_sets.is_empty() || region_sets.iter().any(|set| set.is_empty()) {
        return Vec::new();
    }

    let centers: Vec<Vec<Point>> = region_sets
        .iter()
        .map(|set| set.iter().map(BoundingRegion::center).collect())
        .collect();

    let mut lines = Vec::new();
    let mut choice = vec![0usize; centers.len()];
    let mut path = Vec::with_capacity(centers.len());

    loop {
        path.clear();
        path.extend(choice.iter().zip(&centers).map(|(&i, set)| set[i]));
        if are_points_colinear(&path, tolerance) {
            if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
                lines.push(LineSegment::new(first, last));
            }
        }

        // Advance the odometer, last frame fastest.
        let mut slot = centers.len();
        loop {
            if slot == 0 {
                return lines;
            }
            slot -= 1;
            choice[slot] += 1;
            if choice[slot] < centers[slot].len() {
                break;
            }
            choice[slot] = 0;
        }
    }
}

/// Detect lines across the most recent history frames and decorate them.
///
/// Returns an empty set until the history holds `min_history` frames.
/// Otherwise the first `max_lines` detections are kept, each followed by
/// its randomly drifted and rescaled decorative copies.
pub fn make_lines_from_motion_frames(
    history: &[Frame],
    beams: &BeamConfig,
    regions: &RegionConfig,
    jitter: &mut dyn JitterSource,
) -> Vec<LineSegment> {
    if history.len() < beams.min_history {
        return Vec::new();
    }

    let window = beams.window.min(history.len());
    let region_sets: Vec<Vec<BoundingRegion>> = history[history.len() - window..]
        .iter()
        .map(|mask| extract_regions_capped(mask, regions))
        .collect();

    let found = find_lines(&region_sets, beams.tolerance);
    debug!(
        candidates = found.len(),
        kept = found.len().min(beams.max_lines),
        "Line search complete"
    );

    let mut lines = Vec::new();
    for line in found.into_iter().take(beams.max_lines) {
        lines.push(line);
        let copies = jitter.pick(beams.min_decorations, beams.max_decorations);
        for _ in 0..copies {
            lines.push(decorate(&line, beams, jitter));
        }
    }
    lines
}

/// A cosmetic copy of `line`: start drifted per axis by up to `max_drift`,
/// length scaled within `scale_range`.
fn decorate(line: &LineSegment, beams: &BeamConfig, jitter: &mut dyn JitterSource) -> LineSegment {
    let (vx, vy) = line.vector();
    let drift_x = jitter.uniform(0.0, beams.max_drift);
    let drift_y = jitter.uniform(0.0, beams.max_drift);
    let scale = jitter.uniform(beams.scale_range.0, beams.scale_range.1);

    let start = Point::new(line.start.x + drift_x, line.start.y + drift_y);
    let end = Point::new(start.x + vx * scale, start.y + vy * scale);
    LineSegment::new(start, end)
}
