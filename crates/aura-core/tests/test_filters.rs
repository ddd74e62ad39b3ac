#[allow(dead_code)]
mod common;

use approx::assert_abs_diff_eq;
use ndarray::Array2;

use aura_core::color::{luminance, tint, AuraChannel};
use aura_core::filters::gaussian_blur::{gaussian_blur, sigma_for_kernel};
use aura_core::filters::resize::{resize_bilinear, resize_color};
use aura_core::filters::threshold::{abs_diff, binary_threshold, intensity_to_unit, weighted_sum};
use aura_core::frame::Frame;

use common::{flat, solid};

#[test]
fn test_sigma_matches_kernel_rule() {
    assert_abs_diff_eq!(sigma_for_kernel(41), 6.5, epsilon = 1e-5);
    assert_abs_diff_eq!(sigma_for_kernel(21), 3.5, epsilon = 1e-5);
}

#[test]
fn test_blur_kernel_one_is_identity() {
    let frame = common::square_mask(16, 16, 4, 4, 5);
    assert_eq!(gaussian_blur(&frame, 1), frame);
    assert_eq!(gaussian_blur(&frame, 0), frame);
}

#[test]
fn test_blur_preserves_uniform_frame() {
    let blurred = gaussian_blur(&flat(20, 20, 0.4), 31);
    for v in blurred.data.iter() {
        assert_abs_diff_eq!(*v, 0.4, epsilon = 1e-5);
    }
}

#[test]
fn test_blur_large_frame_uses_same_math() {
    // Above the parallel threshold; uniform input must stay uniform.
    let blurred = gaussian_blur(&flat(300, 300, 0.7), 21);
    assert_abs_diff_eq!(blurred.data[[150, 150]], 0.7, epsilon = 1e-5);
    assert_abs_diff_eq!(blurred.data[[0, 299]], 0.7, epsilon = 1e-5);
}

#[test]
fn test_blur_spreads_energy() {
    let mut frame = flat(21, 21, 0.0);
    frame.data[[10, 10]] = 1.0;
    let blurred = gaussian_blur(&frame, 5);
    assert!(blurred.data[[10, 10]] < 1.0);
    assert!(blurred.data[[10, 11]] > 0.0);
    assert_abs_diff_eq!(blurred.data.sum(), 1.0, epsilon = 1e-4);
}

#[test]
fn test_threshold_is_strict() {
    let data = Array2::from_shape_vec((1, 3), vec![0.0, intensity_to_unit(25), 0.2]).unwrap();
    let frame = Frame::new(data);
    let out = binary_threshold(&frame, 25);
    let values: Vec<f32> = out.data.iter().copied().collect();
    assert_eq!(values, vec![0.0, 0.0, 1.0]);
}

#[test]
fn test_abs_diff_and_weighted_sum() {
    let a = flat(2, 2, 0.2);
    let b = flat(2, 2, 0.7);
    assert_abs_diff_eq!(abs_diff(&a, &b).data[[0, 0]], 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(weighted_sum(&a, 0.8, &b, 0.2).data[[1, 1]], 0.3, epsilon = 1e-6);
}

#[test]
fn test_resize_constant_stays_constant() {
    let out = resize_bilinear(&flat(18, 32, 0.3), 180, 320);
    assert_eq!(out.data.dim(), (180, 320));
    for v in out.data.iter() {
        assert_abs_diff_eq!(*v, 0.3, epsilon = 1e-6);
    }
}

#[test]
fn test_resize_same_size_is_clone() {
    let frame = common::square_mask(8, 8, 2, 2, 3);
    assert_eq!(resize_bilinear(&frame, 8, 8), frame);
}

#[test]
fn test_resize_color_all_channels() {
    let out = resize_color(&solid(10, 10, 0.5), 5, 4);
    assert_eq!(out.width(), 4);
    assert_eq!(out.height(), 5);
    assert_abs_diff_eq!(out.blue.data[[4, 3]], 0.5, epsilon = 1e-6);
}

#[test]
fn test_luminance_of_gray_is_gray() {
    let gray = luminance(&solid(3, 3, 0.6));
    for v in gray.data.iter() {
        assert_abs_diff_eq!(*v, 0.6, epsilon = 1e-5);
    }
}

#[test]
fn test_tint_zeroes_other_channels() {
    let tinted = tint(&flat(2, 2, 0.9), AuraChannel::Green);
    assert!(tinted.red.is_blank());
    assert!(tinted.blue.is_blank());
    assert_eq!(tinted.green.data[[1, 0]], 0.9);
}
