use std::f32::consts::PI;

use crate::frame::Point;

/// Angle-based collinearity test.
///
/// The reference vector runs from the first to the last point. For every
/// ordered pair of points the angle between their connecting vector and the
/// reference line (either direction) is measured, and the points are
/// collinear when the largest such angle is below `tolerance` radians.
/// Zero-length vectors contribute an angle of 0. Spacing along the line
/// does not matter.
pub fn are_points_colinear(points: &[Point], tolerance: f32) -> bool {
    max_deviation(points) < tolerance
}

/// Largest angular deviation (radians) of any point pair from the
/// first-to-last reference line. 0.0 for fewer than two points.
pub fn max_deviation(points: &[Point]) -> f32 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };
    let reference = first.to(*last);

    let mut worst = 0.0f32;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let angle = line_angle(a.to(*b), reference);
            worst = worst.max(angle);
        }
    }
    worst
}

/// Angle between `v` and the undirected line along `reference`, in
/// `[0, PI/2]`. Degenerate vectors give 0.
fn line_angle(v: (f32, f32), reference: (f32, f32)) -> f32 {
    let norm = (v.0.hypot(v.1)) * (reference.0.hypot(reference.1));
    if norm <= f32::EPSILON {
        return 0.0;
    }
    let cos = ((v.0 * reference.0 + v.1 * reference.1) / norm).clamp(-1.0, 1.0);
    let angle = cos.acos();
    angle.min(PI - angle)
}
