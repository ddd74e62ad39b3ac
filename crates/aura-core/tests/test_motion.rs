#[allow(dead_code)]
mod common;

use approx::assert_abs_diff_eq;

use aura_core::motion::differencer::outline_large_regions;
use aura_core::motion::{detect_transients, diff_against_reference, DifferencerConfig};
use aura_core::render::fill_disc;
use aura_core::frame::Point;

use common::{flat, solid, square_mask};

fn sharp_config() -> DifferencerConfig {
    DifferencerConfig {
        blur: false,
        jump_cut_threshold: None,
        ..Default::default()
    }
}

#[test]
fn test_first_frame_bootstraps_reference() {
    let frame = solid(16, 16, 0.6);
    let out = diff_against_reference(&frame, None, &sharp_config());
    assert!(out.mask.is_blank());
    assert!(!out.jump_cut);
    for v in out.reference.data.iter() {
        assert_abs_diff_eq!(*v, 0.6, epsilon = 1e-5);
    }
}

#[test]
fn test_first_frame_with_blur_yields_empty_mask() {
    let frame = common::square_frame(32, 32, 8, 8, 10);
    let out = diff_against_reference(&frame, None, &DifferencerConfig::default());
    assert!(out.mask.is_blank());
}

#[test]
fn test_threshold_separates_motion() {
    let reference = flat(8, 8, 0.0);
    let config = sharp_config();

    let strong = diff_against_reference(&solid(8, 8, 0.5), Some(&reference), &config);
    assert!(strong.mask.data.iter().all(|&v| v == 1.0));

    let weak = diff_against_reference(&solid(8, 8, 0.05), Some(&reference), &config);
    assert!(weak.mask.is_blank());
}

#[test]
fn test_reference_is_exponential_average() {
    let reference = flat(4, 4, 0.0);
    let out = diff_against_reference(&solid(4, 4, 0.5), Some(&reference), &sharp_config());
    // 0.8 * 0.0 + 0.2 * 0.5
    for v in out.reference.data.iter() {
        assert_abs_diff_eq!(*v, 0.1, epsilon = 1e-5);
    }
}

#[test]
fn test_jump_cut_reseeds_reference() {
    let config = DifferencerConfig {
        blur: false,
        ..Default::default()
    };
    let reference = flat(8, 8, 0.0);
    let out = diff_against_reference(&solid(8, 8, 0.5), Some(&reference), &config);
    assert!(out.jump_cut);
    // Re-seeded to 0.475, leaving a 0.025 difference below threshold.
    assert!(out.mask.is_blank());
    for v in out.reference.data.iter() {
        assert_abs_diff_eq!(*v, 0.8 * 0.475 + 0.2 * 0.5, epsilon = 1e-5);
    }
}

#[test]
fn test_small_change_is_not_a_jump_cut() {
    let config = DifferencerConfig {
        blur: false,
        ..Default::default()
    };
    let reference = flat(8, 8, 0.0);
    let mut frame = solid(8, 8, 0.0);
    frame.red.data[[0, 0]] = 1.0;
    frame.green.data[[0, 0]] = 1.0;
    frame.blue.data[[0, 0]] = 1.0;
    let out = diff_against_reference(&frame, Some(&reference), &config);
    assert!(!out.jump_cut);
    assert_eq!(out.mask.data[[0, 0]], 1.0);
}

#[test]
fn test_outlines_only_when_requested() {
    let config = DifferencerConfig {
        outline_regions: true,
        ..sharp_config()
    };
    let out = diff_against_reference(&solid(8, 8, 0.5), Some(&flat(8, 8, 0.0)), &config);
    assert!(out.outlined.is_some());

    let out = diff_against_reference(&solid(8, 8, 0.5), Some(&flat(8, 8, 0.0)), &sharp_config());
    assert!(out.outlined.is_none());
}

#[test]
fn test_outline_drawn_around_large_region() {
    let mut mask = flat(64, 64, 0.0);
    fill_disc(&mut mask.data, Point::new(30.0, 30.0), 15, 1.0);
    // The bounding box corner lies outside the disc.
    assert_eq!(mask.data[[15, 15]], 0.0);

    let outlined = outline_large_regions(&mask);
    assert_eq!(outlined.data[[15, 15]], 1.0);
    assert_eq!(outlined.data[[45, 45]], 1.0);
}

#[test]
fn test_outline_skips_small_region() {
    let mut mask = flat(64, 64, 0.0);
    fill_disc(&mut mask.data, Point::new(30.0, 30.0), 5, 1.0);
    assert_eq!(outline_large_regions(&mask), mask);
}

#[test]
fn test_transient_bootstrap_is_empty() {
    let current = square_mask(32, 32, 4, 4, 10);
    assert!(detect_transients(None, &current, 41, 100).is_blank());
}

#[test]
fn test_transient_keeps_new_region() {
    let previous = flat(32, 32, 0.0);
    let current = square_mask(32, 32, 4, 4, 10);
    let out = detect_transients(Some(&previous), &current, 1, 100);
    assert_eq!(out, current);
}

#[test]
fn test_transient_unchanged_region_vanishes() {
    let mask = square_mask(32, 32, 4, 4, 10);
    assert!(detect_transients(Some(&mask), &mask, 1, 100).is_blank());
}

#[test]
fn test_transient_blur_suppresses_isolated_pixel() {
    let previous = flat(64, 64, 0.0);
    let mut current = flat(64, 64, 0.0);
    current.data[[32, 32]] = 1.0;
    assert!(detect_transients(Some(&previous), &current, 41, 100).is_blank());
}
