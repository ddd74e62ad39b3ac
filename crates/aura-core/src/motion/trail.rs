use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HISTORY_CAPACITY, DEFAULT_TRAIL_DROPOFF, DEFAULT_TRAIL_TRANSPARENCY};
use crate::frame::Frame;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Motion history capacity N.
    pub capacity: usize,
    /// Weight of the most recent mask.
    pub start_transparency: f32,
    /// Factor applied to the weight for each step back in time.
    pub dropoff: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            start_transparency: DEFAULT_TRAIL_TRANSPARENCY,
            dropoff: DEFAULT_TRAIL_DROPOFF,
        }
    }
}

/// Collapse a history (oldest first) into one frame with exponentially
/// decaying weights, newest heaviest. Returns `None` for an empty history.
pub fn combine_motion_frames(frames: &[Frame], config: &TrailConfig) -> Option<Frame> {
    let newest = frames.last()?;
    let mut acc = newest.data.mapv(|v| v * config.start_transparency);
    let mut weight = config.start_transparency;

    for frame in frames.iter().rev().skip(1) {
        weight *= config.dropoff;
        acc.scaled_add(weight, &frame.data);
    }

    acc.mapv_inplace(|v| v.clamp(0.0, 1.0));
    Some(Frame::new(acc))
}
