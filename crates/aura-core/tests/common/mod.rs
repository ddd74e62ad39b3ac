use ndarray::Array2;

use aura_core::frame::{ColorFrame, Frame};
use aura_core::motion::{DifferencerConfig, TransientConfig};
use aura_core::pipeline::{EffectMode, PipelineConfig};

/// Single-channel frame filled with `fill`.
pub fn flat(h: usize, w: usize, fill: f32) -> Frame {
    Frame::new(Array2::from_elem((h, w), fill))
}

/// Gray color frame with every channel set to `fill`.
pub fn solid(h: usize, w: usize, fill: f32) -> ColorFrame {
    ColorFrame {
        red: flat(h, w, fill),
        green: flat(h, w, fill),
        blue: flat(h, w, fill),
    }
}

/// Binary mask with a `size` x `size` square whose top-left corner is (x, y).
pub fn square_mask(h: usize, w: usize, x: usize, y: usize, size: usize) -> Frame {
    Frame::new(Array2::from_shape_fn((h, w), |(row, col)| {
        if (y..y + size).contains(&row) && (x..x + size).contains(&col) {
            1.0
        } else {
            0.0
        }
    }))
}

/// Black color frame with a white square.
pub fn square_frame(h: usize, w: usize, x: usize, y: usize, size: usize) -> ColorFrame {
    let mask = square_mask(h, w, x, y, size);
    ColorFrame {
        red: mask.clone(),
        green: mask.clone(),
        blue: mask,
    }
}

/// Config with every blur and resize switched off, so masks stay sharp and
/// region geometry is exact.
pub fn crisp_config(effect: EffectMode) -> PipelineConfig {
    PipelineConfig {
        effect,
        processing: None,
        differencer: DifferencerConfig {
            blur: false,
            jump_cut_threshold: None,
            ..Default::default()
        },
        transient: TransientConfig {
            blur_kernel: 1,
            ..Default::default()
        },
        ..Default::default()
    }
}
