use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BLUR_KERNEL, DEFAULT_TRANSIENT_THRESHOLDS};
use crate::filters::gaussian_blur::gaussian_blur;
use crate::filters::threshold::{abs_diff, binary_threshold};
use crate::frame::Frame;

/// Settings for the two chained transient passes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransientConfig {
    /// Kernel for smoothing the mask difference. 0 or 1 disables the blur.
    pub blur_kernel: usize,
    /// Threshold (0-255) of the first pass.
    pub first_threshold: u8,
    /// Threshold (0-255) of the second pass.
    pub second_threshold: u8,
}

impl Default for TransientConfig {
    fn default() -> Self {
        Self {
            blur_kernel: DEFAULT_BLUR_KERNEL,
            first_threshold: DEFAULT_TRANSIENT_THRESHOLDS.0,
            second_threshold: DEFAULT_TRANSIENT_THRESHOLDS.1,
        }
    }
}

/// Isolate fast changes between two consecutive masks.
///
/// A missing `previous` mask is replaced by `current`, which yields an
/// all-zero result.
pub fn detect_transients(
    previous: Option<&Frame>,
    current: &Frame,
    blur_kernel: usize,
    threshold: u8,
) -> Frame {
    let previous = previous.unwrap_or(current);
    let diff = abs_diff(previous, current);
    let smoothed = gaussian_blur(&diff, blur_kernel);
    binary_threshold(&smoothed, threshold)
}
