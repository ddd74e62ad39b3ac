use tracing::info;

use crate::error::Result;
use crate::frame::ColorFrame;

use super::process::Pipeline;
use super::types::{ProgressReporter, StreamSummary};

/// Produces frames in stream order.
pub trait FrameSource {
    /// The next frame, or `Ok(None)` at end-of-stream.
    fn next_frame(&mut self) -> Result<Option<ColorFrame>>;
}

/// Presents composited frames.
pub trait Display {
    /// Show `frame`. Returns `true` when a quit request has been raised.
    fn present(&mut self, frame: &ColorFrame) -> Result<bool>;
}

/// Drive `pipeline` over `source` until end-of-stream or a quit request.
///
/// Frames are processed strictly one at a time; a quit request is honored
/// only between frames.
pub fn run_stream(
    source: &mut dyn FrameSource,
    display: &mut dyn Display,
    pipeline: &mut Pipeline,
    reporter: &dyn ProgressReporter,
) -> Result<StreamSummary> {
    info!(effect = %pipeline.config().effect, "Starting stream");
    let mut summary = StreamSummary::default();

    while let Some(frame) = source.next_frame()? {
        let output = pipeline.process(&frame)?;
        summary.record(&output.report);
        reporter.frame_done(&output.report);

        if display.present(&output.composited)? {
            summary.stopped_by_user = true;
            info!(frames = summary.frames, "Quit requested");
            break;
        }
    }

    info!(
        frames = summary.frames,
        regions = summary.regions,
        lines = summary.lines,
        jump_cuts = summary.jump_cuts,
        "Stream finished"
    );
    reporter.finished(&summary);
    Ok(summary)
}
