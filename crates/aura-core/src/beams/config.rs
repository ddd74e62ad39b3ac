use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_COLINEAR_TOLERANCE, DEFAULT_DECORATIONS, DEFAULT_LINE_DROPOFF,
    DEFAULT_LINE_RENDER_CAP, DEFAULT_LINE_TRANSPARENCY, DEFAULT_LINE_WINDOW, DEFAULT_MAX_DRIFT,
    DEFAULT_MAX_LINES, DEFAULT_MIN_LINE_HISTORY, DEFAULT_SCALE_RANGE,
};

/// Settings for line synthesis and line-history rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamConfig {
    /// Collinearity tolerance in radians.
    pub tolerance: f32,
    /// History frames required before lines are searched for.
    pub min_history: usize,
    /// Most recent history frames sampled for the search.
    pub window: usize,
    /// Detected lines kept per frame (first found wins).
    pub max_lines: usize,
    /// Maximum start-point drift per axis for decorative lines, in pixels.
    pub max_drift: f32,
    /// Length scale range for decorative lines.
    pub scale_range: (f32, f32),
    /// Fewest decorative lines added per detected line.
    pub min_decorations: usize,
    /// Most decorative lines added per detected line.
    pub max_decorations: usize,
    /// Line sets kept and rendered.
    pub render_cap: usize,
    /// Opacity of the most recent line set.
    pub start_transparency: f32,
    /// Opacity factor per step back through the line history.
    pub dropoff: f32,
    /// Stroke intensity (0-255).
    pub line_intensity: u8,
    /// Fixed seed for decorative jitter. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_COLINEAR_TOLERANCE,
            min_history: DEFAULT_MIN_LINE_HISTORY,
            window: DEFAULT_LINE_WINDOW,
            max_lines: DEFAULT_MAX_LINES,
            max_drift: DEFAULT_MAX_DRIFT,
            scale_range: DEFAULT_SCALE_RANGE,
            min_decorations: DEFAULT_DECORATIONS.0,
            max_decorations: DEFAULT_DECORATIONS.1,
            render_cap: DEFAULT_LINE_RENDER_CAP,
            start_transparency: DEFAULT_LINE_TRANSPARENCY,
            dropoff: DEFAULT_LINE_DROPOFF,
            line_intensity: u8::MAX,
            seed: None,
        }
    }
}
