use crate::beams::LineHistory;
use crate::frame::Frame;
use crate::motion::MotionHistory;

use super::config::PipelineConfig;

/// Everything carried from one frame to the next.
///
/// Owned by the driving loop and lent mutably to each per-frame call.
#[derive(Clone, Debug)]
pub struct PipelineState {
    /// Decaying background estimate at processing resolution.
    pub reference: Option<Frame>,
    /// Last differencer mask, input of the first transient pass.
    pub previous_motion: Option<Frame>,
    /// Last first-pass transient mask, input of the second pass.
    pub previous_transient: Option<Frame>,
    pub history: MotionHistory,
    pub lines: LineHistory,
    /// Source (width, height), fixed by the first frame.
    pub source_size: Option<(usize, usize)>,
    pub frames_seen: usize,
}

impl PipelineState {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            reference: None,
            previous_motion: None,
            previous_transient: None,
            history: MotionHistory::new(config.trail.capacity),
            lines: LineHistory::new(config.beams.render_cap),
            source_size: None,
            frames_seen: 0,
        }
    }
}
