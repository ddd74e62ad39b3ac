use ndarray::Zip;

use crate::consts::MAX_INTENSITY;
use crate::frame::Frame;

/// Convert a 0-255 intensity to the [0, 1] pixel domain.
pub fn intensity_to_unit(level: u8) -> f32 {
    level as f32 / MAX_INTENSITY
}

/// Per-pixel absolute difference of two equally sized frames.
pub fn abs_diff(a: &Frame, b: &Frame) -> Frame {
    let data = Zip::from(&a.data)
        .and(&b.data)
        .map_collect(|&x, &y| (x - y).abs());
    Frame::new(data)
}

/// Binary threshold: pixels strictly above `level` become 1.0, all others 0.0.
pub fn binary_threshold(frame: &Frame, level: u8) -> Frame {
    let t = intensity_to_unit(level);
    Frame::new(frame.data.mapv(|v| if v > t { 1.0 } else { 0.0 }))
}

/// Weighted sum `a * weight_a + b * weight_b`.
pub fn weighted_sum(a: &Frame, weight_a: f32, b: &Frame, weight_b: f32) -> Frame {
    let data = Zip::from(&a.data)
        .and(&b.data)
        .map_collect(|&x, &y| x * weight_a + y * weight_b);
    Frame::new(data)
}

pub fn mean_intensity(frame: &Frame) -> f32 {
    frame.data.mean().unwrap_or(0.0)
}
