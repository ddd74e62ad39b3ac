use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::luminance;
use crate::consts::{
    DEBUG_OUTLINE_MIN_AREA, DEFAULT_BLUR_KERNEL, DEFAULT_DIFF_THRESHOLD, DEFAULT_JUMP_CUT_RESEED,
    DEFAULT_JUMP_CUT_THRESHOLD, DEFAULT_REFERENCE_DECAY,
};
use crate::detection::extract_regions;
use crate::filters::gaussian_blur::gaussian_blur;
use crate::filters::threshold::{abs_diff, binary_threshold, mean_intensity, weighted_sum};
use crate::frame::{ColorFrame, Frame};
use crate::render::draw_rect_outline;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifferencerConfig {
    /// Intensity (0-255) a pixel must exceed to count as motion.
    pub threshold: u8,
    /// Blur the grayscale frame before differencing.
    pub blur: bool,
    /// Gaussian kernel size used when `blur` is set. Must be odd.
    pub blur_kernel: usize,
    /// Weight the old reference keeps on each update.
    pub reference_decay: f32,
    /// Mean difference (fraction of full scale) that marks a scene cut.
    /// `None` disables cut handling.
    pub jump_cut_threshold: Option<f32>,
    /// Weight of the current frame when re-seeding the reference on a cut.
    pub jump_cut_reseed: f32,
    /// Also return a copy of the mask with large regions outlined.
    pub outline_regions: bool,
}

impl Default for DifferencerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DIFF_THRESHOLD,
            blur: true,
            blur_kernel: DEFAULT_BLUR_KERNEL,
            reference_decay: DEFAULT_REFERENCE_DECAY,
            jump_cut_threshold: Some(DEFAULT_JUMP_CUT_THRESHOLD),
            jump_cut_reseed: DEFAULT_JUMP_CUT_RESEED,
            outline_regions: false,
        }
    }
}

/// Result of differencing one frame against the reference.
#[derive(Clone, Debug)]
pub struct ReferenceDiff {
    /// Binary motion mask (1.0 = changed).
    pub mask: Frame,
    /// Reference to carry into the next call.
    pub reference: Frame,
    /// The frame was treated as a scene cut.
    pub jump_cut: bool,
    /// Mask with large regions outlined, when `outline_regions` is set.
    pub outlined: Option<Frame>,
}

/// Difference `frame` against the slowly decaying `reference`.
///
/// With no reference yet, the working image seeds it and the mask is empty.
/// The returned reference is `decay * reference + (1 - decay) * gray`, where
/// `gray` is the unblurred luminance of `frame`.
pub fn diff_against_reference(
    frame: &ColorFrame,
    reference: Option<&Frame>,
    config: &DifferencerConfig,
) -> ReferenceDiff {
    let gray = luminance(frame);
    let working = if config.blur {
        gaussian_blur(&gray, config.blur_kernel)
    } else {
        gray.clone()
    };

    let mut reference = reference.cloned().unwrap_or_else(|| working.clone());
    let mut diff = abs_diff(&working, &reference);

    let mut jump_cut = false;
    if let Some(limit) = config.jump_cut_threshold {
        let mean = mean_intensity(&diff);
        if mean > limit {
            debug!(mean, limit, "Scene cut detected, re-seeding reference");
            reference = weighted_sum(
                &reference,
                1.0 - config.jump_cut_reseed,
                &working,
                config.jump_cut_reseed,
            );
            diff = abs_diff(&working, &reference);
            jump_cut = true;
        }
    }

    let mask = binary_threshold(&diff, config.threshold);
    let decay = config.reference_decay;
    let reference = weighted_sum(&reference, decay, &gray, 1.0 - decay);
    let outlined = config.outline_regions.then(|| outline_large_regions(&mask));

    ReferenceDiff {
        mask,
        reference,
        jump_cut,
        outlined,
    }
}

/// Outline every region larger than the debug area on a copy of `mask`.
pub fn outline_large_regions(mask: &Frame) -> Frame {
    let mut out = mask.clone();
    for region in extract_regions(mask, DEBUG_OUTLINE_MIN_AREA + 1, usize::MAX) {
        draw_rect_outline(&mut out.data, &region, 1.0);
    }
    out
}
