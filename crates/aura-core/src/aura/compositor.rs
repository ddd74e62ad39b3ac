use ndarray::Zip;
use serde::{Deserialize, Serialize};

use crate::color::{tint, AuraChannel};
use crate::consts::DEFAULT_MARKER_RADIUS;
use crate::filters::resize::resize_bilinear;
use crate::frame::{ColorFrame, Frame};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuraConfig {
    /// Channel the overlay is drawn into; the other two stay dark.
    pub channel: AuraChannel,
    /// Mark the weighted median of the motion mask.
    pub draw_median_marker: bool,
    /// Marker disc radius in processing pixels.
    pub marker_radius: usize,
}

impl Default for AuraConfig {
    fn default() -> Self {
        Self {
            channel: AuraChannel::default(),
            draw_median_marker: false,
            marker_radius: DEFAULT_MARKER_RADIUS,
        }
    }
}

/// Blend a single-channel aura onto `original`.
///
/// The aura's intensity is the per-pixel opacity. It is tinted into one
/// channel, resized to the original resolution and composited as
/// `original * (1 - mask) + aura * mask`.
pub fn draw_aura(aura: &Frame, original: &ColorFrame, channel: AuraChannel) -> ColorFrame {
    let resized = resize_bilinear(aura, original.height(), original.width());
    let mask = resized.data.mapv(|v| v.clamp(0.0, 1.0));
    let tinted = tint(&Frame::new(mask.clone()), channel);

    let blend = |orig: &Frame, over: &Frame| {
        let data = Zip::from(&orig.data)
            .and(&over.data)
            .and(&mask)
            .map_collect(|&o, &a, &m| (o * (1.0 - m) + a * m).clamp(0.0, 1.0));
        Frame::new(data)
    };

    ColorFrame {
        red: blend(&original.red, &tinted.red),
        green: blend(&original.green, &tinted.green),
        blue: blend(&original.blue, &tinted.blue),
    }
}
