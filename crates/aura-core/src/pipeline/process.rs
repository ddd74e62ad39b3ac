use std::borrow::Cow;

use ndarray::Zip;
use tracing::debug;

use crate::aura::draw_aura;
use crate::beams::{make_lines_from_motion_frames, JitterSource, RngJitter};
use crate::detection::{extract_regions, median_point};
use crate::error::{AuraError, Result};
use crate::filters::resize::resize_color;
use crate::frame::{ColorFrame, Frame};
use crate::motion::{combine_motion_frames, detect_transients, diff_against_reference};
use crate::render::fill_disc;

use super::config::{EffectMode, PipelineConfig};
use super::state::PipelineState;
use super::types::{FrameOutput, FrameReport};

/// Run every stage on one source frame, updating `state`.
pub fn process_frame(
    state: &mut PipelineState,
    frame: &ColorFrame,
    config: &PipelineConfig,
    jitter: &mut dyn JitterSource,
) -> Result<FrameOutput> {
    check_frame(state, frame)?;

    let working = match &config.processing {
        Some(size) => Cow::Owned(resize_color(frame, size.height, size.width)),
        None => Cow::Borrowed(frame),
    };

    // Reference differencing, then two chained transient passes.
    let diff = diff_against_reference(&working, state.reference.as_ref(), &config.differencer);
    state.reference = Some(diff.reference);

    let transient = &config.transient;
    let first = detect_transients(
        state.previous_motion.as_ref(),
        &diff.mask,
        transient.blur_kernel,
        transient.first_threshold,
    );
    let refined = detect_transients(
        state.previous_transient.as_ref(),
        &first,
        transient.blur_kernel,
        transient.second_threshold,
    );
    state.previous_motion = Some(diff.mask);
    state.previous_transient = Some(first);

    let regions = extract_regions(&refined, config.regions.min_area, config.regions.max_area).len();
    let median = median_point(&refined);
    state.history.push(refined);

    let (mut aura, lines) = build_overlay(state, config, jitter);

    if config.aura.draw_median_marker {
        if let Some(point) = median {
            fill_disc(&mut aura.data, point, config.aura.marker_radius, 1.0);
        }
    }
    if let Some(outlined) = &diff.outlined {
        overlay_max(&mut aura, outlined);
    }

    let composited = draw_aura(&aura, frame, config.aura.channel);

    let report = FrameReport {
        index: state.frames_seen,
        regions,
        lines,
        jump_cut: diff.jump_cut,
        median,
    };
    state.frames_seen += 1;

    debug!(
        frame = report.index,
        regions = report.regions,
        lines = report.lines,
        jump_cut = report.jump_cut,
        "Frame processed"
    );

    Ok(FrameOutput { composited, report })
}

/// Build the single-channel aura for the configured effect. Returns the
/// aura and the number of lines synthesized this frame.
fn build_overlay(
    state: &mut PipelineState,
    config: &PipelineConfig,
    jitter: &mut dyn JitterSource,
) -> (Frame, usize) {
    let snapshot = state.history.snapshot();
    let latest = match snapshot.last() {
        Some(latest) => latest.clone(),
        None => return (Frame::zeros(0, 0), 0),
    };

    let trail = || combine_motion_frames(snapshot, &config.trail).unwrap_or_else(|| latest.clone());

    match config.effect {
        EffectMode::Trail => (trail(), 0),
        EffectMode::Beams | EffectMode::Combined => {
            let target = if config.effect == EffectMode::Combined {
                trail()
            } else {
                latest.clone()
            };
            let lines =
                make_lines_from_motion_frames(snapshot, &config.beams, &config.regions, jitter);
            let count = lines.len();
            state.lines.push(lines);
            (state.lines.render(&target, &config.beams), count)
        }
    }
}

fn check_frame(state: &mut PipelineState, frame: &ColorFrame) -> Result<()> {
    frame.validate()?;
    let size = (frame.width(), frame.height());
    match state.source_size {
        None => state.source_size = Some(size),
        Some((w, h)) if (w, h) != size => {
            return Err(AuraError::FrameSizeChanged {
                expected_width: w,
                expected_height: h,
                width: size.0,
                height: size.1,
            });
        }
        Some(_) => {}
    }
    Ok(())
}

fn overlay_max(target: &mut Frame, over: &Frame) {
    if target.data.dim() != over.data.dim() {
        return;
    }
    Zip::from(&mut target.data)
        .and(&over.data)
        .for_each(|t, &o| *t = t.max(o));
}

/// Owns the configuration, the per-stream state and the jitter source.
pub struct Pipeline {
    config: PipelineConfig,
    state: PipelineState,
    jitter: Box<dyn JitterSource>,
}

impl Pipeline {
    /// Validate `config` and seed jitter from `beams.seed` (or the OS).
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let jitter: Box<dyn JitterSource> = match config.beams.seed {
            Some(seed) => Box::new(RngJitter::seeded(seed)),
            None => Box::new(RngJitter::from_entropy()),
        };
        Self::with_jitter(config, jitter)
    }

    pub fn with_jitter(config: PipelineConfig, jitter: Box<dyn JitterSource>) -> Result<Self> {
        config.validate()?;
        let state = PipelineState::new(&config);
        Ok(Self {
            config,
            state,
            jitter,
        })
    }

    pub fn process(&mut self, frame: &ColorFrame) -> Result<FrameOutput> {
        process_frame(&mut self.state, frame, &self.config, self.jitter.as_mut())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }
}
