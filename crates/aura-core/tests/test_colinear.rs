use std::f32::consts::FRAC_PI_2;

use proptest::prelude::*;

use aura_core::beams::are_points_colinear;
use aura_core::beams::colinear::max_deviation;
use aura_core::frame::Point;

fn pts(coords: &[(f32, f32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn test_straight_line_is_colinear() {
    assert!(are_points_colinear(&pts(&[(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]), 0.2));
}

#[test]
fn test_uneven_spacing_is_colinear() {
    assert!(are_points_colinear(&pts(&[(0.0, 0.0), (1.0, 2.0), (50.0, 100.0)]), 0.2));
}

#[test]
fn test_slight_bend_within_tolerance() {
    // Middle point 1px off a 100px line.
    assert!(are_points_colinear(&pts(&[(0.0, 0.0), (50.0, 1.0), (100.0, 0.0)]), 0.2));
}

#[test]
fn test_right_angle_at_middle_is_not_colinear() {
    let points = pts(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
    assert!(!are_points_colinear(&points, 0.2));
    // Both legs sit 45 degrees off the first-to-last chord.
    assert!((max_deviation(&points) - std::f32::consts::FRAC_PI_4).abs() < 1e-5);
}

#[test]
fn test_right_angle_at_endpoint_fails_below_half_pi() {
    let points = pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
    for tolerance in [0.2, 0.8, 1.5, FRAC_PI_2 - 0.01] {
        assert!(!are_points_colinear(&points, tolerance), "tolerance {tolerance}");
    }
}

#[test]
fn test_coincident_points_are_colinear() {
    assert!(are_points_colinear(&pts(&[(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]), 0.2));
    // Zero-length reference vector with a distinct middle point.
    assert!(are_points_colinear(&pts(&[(0.0, 0.0), (7.0, 2.0), (0.0, 0.0)]), 0.2));
}

#[test]
fn test_fewer_than_two_points() {
    assert!(are_points_colinear(&[], 0.2));
    assert!(are_points_colinear(&pts(&[(1.0, 1.0)]), 0.2));
}

fn integer_points() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((-500i32..500, -500i32..500), 2..6)
}

proptest! {
    #[test]
    fn prop_reversal_invariant(coords in integer_points(), tolerance in 0.01f32..1.5) {
        let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x as f32, y as f32)).collect();
        let mut reversed = points.clone();
        reversed.reverse();
        prop_assert_eq!(
            are_points_colinear(&points, tolerance),
            are_points_colinear(&reversed, tolerance)
        );
    }

    #[test]
    fn prop_translation_invariant(
        coords in integer_points(),
        dx in -500i32..500,
        dy in -500i32..500,
        tolerance in 0.01f32..1.5,
    ) {
        let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x as f32, y as f32)).collect();
        let moved: Vec<Point> = coords
            .iter()
            .map(|&(x, y)| Point::new((x + dx) as f32, (y + dy) as f32))
            .collect();
        prop_assert_eq!(
            are_points_colinear(&points, tolerance),
            are_points_colinear(&moved, tolerance)
        );
    }
}
