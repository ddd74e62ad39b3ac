use crate::frame::{ColorFrame, Point};

/// What the pipeline observed while processing one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Zero-based position in the stream.
    pub index: usize,
    /// Regions found in the refined mask.
    pub regions: usize,
    /// Line segments synthesized this frame, decorations included.
    pub lines: usize,
    /// The differencer treated this frame as a scene cut.
    pub jump_cut: bool,
    /// Weighted median of the refined mask, in processing coordinates.
    pub median: Option<Point>,
}

/// Result of processing one frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    /// Final frame at the source resolution.
    pub composited: ColorFrame,
    pub report: FrameReport,
}

/// Totals for a finished stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub frames: usize,
    pub regions: usize,
    pub lines: usize,
    pub jump_cuts: usize,
    /// The display raised a quit request before end-of-stream.
    pub stopped_by_user: bool,
}

impl StreamSummary {
    pub(super) fn record(&mut self, report: &FrameReport) {
        self.frames += 1;
        self.regions += report.regions;
        self.lines += report.lines;
        if report.jump_cut {
            self.jump_cuts += 1;
        }
    }
}

/// Per-frame progress hooks for the stream driver.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter {
    fn frame_done(&self, _report: &FrameReport) {}

    fn finished(&self, _summary: &StreamSummary) {}
}

/// No-op progress reporter.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
