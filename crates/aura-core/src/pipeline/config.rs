use serde::{Deserialize, Serialize};

use crate::aura::AuraConfig;
use crate::beams::BeamConfig;
use crate::consts::DEFAULT_PROCESSING_SIZE;
use crate::detection::RegionConfig;
use crate::error::{AuraError, Result};
use crate::motion::{DifferencerConfig, TrailConfig, TransientConfig};

/// Which overlay the aura is built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectMode {
    /// Decay-weighted motion trail only.
    Trail,
    /// Synthesized beams over the latest motion mask.
    #[default]
    Beams,
    /// Beams rendered over the motion trail.
    Combined,
}

impl std::fmt::Display for EffectMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trail => write!(f, "Trail"),
            Self::Beams => write!(f, "Beams"),
            Self::Combined => write!(f, "Trail + Beams"),
        }
    }
}

/// Internal processing resolution. Frames are downscaled to this size before
/// any stage runs; the aura is scaled back up for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessingSize {
    pub width: usize,
    pub height: usize,
}

impl Default for ProcessingSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_PROCESSING_SIZE.0,
            height: DEFAULT_PROCESSING_SIZE.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub effect: EffectMode,
    /// `None` processes at the source resolution.
    pub processing: Option<ProcessingSize>,
    pub differencer: DifferencerConfig,
    pub transient: TransientConfig,
    pub regions: RegionConfig,
    pub trail: TrailConfig,
    pub beams: BeamConfig,
    pub aura: AuraConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            effect: EffectMode::default(),
            processing: Some(ProcessingSize::default()),
            differencer: DifferencerConfig::default(),
            transient: TransientConfig::default(),
            regions: RegionConfig::default(),
            trail: TrailConfig::default(),
            beams: BeamConfig::default(),
            aura: AuraConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Reject settings no stage can run with.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(AuraError::InvalidConfig(msg.to_string()));

        if let Some(size) = &self.processing {
            if size.width == 0 || size.height == 0 {
                return invalid("processing size must be non-zero");
            }
        }
        if self.differencer.blur && self.differencer.blur_kernel % 2 == 0 {
            return invalid("differencer.blur_kernel must be odd");
        }
        if self.transient.blur_kernel > 1 && self.transient.blur_kernel % 2 == 0 {
            return invalid("transient.blur_kernel must be odd");
        }
        if !(0.0..=1.0).contains(&self.differencer.reference_decay) {
            return invalid("differencer.reference_decay must be in [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.differencer.jump_cut_reseed) {
            return invalid("differencer.jump_cut_reseed must be in [0, 1]");
        }
        if self.regions.min_area > self.regions.max_area {
            return invalid("regions.min_area exceeds regions.max_area");
        }
        if self.trail.capacity == 0 {
            return invalid("trail.capacity must be at least 1");
        }
        if !unit_range(self.trail.start_transparency)
            || !unit_range(self.beams.start_transparency)
        {
            return invalid("start transparencies must be in [0, 1]");
        }
        if !unit_dropoff(self.trail.dropoff) || !unit_dropoff(self.beams.dropoff) {
            return invalid("dropoff factors must be in (0, 1]");
        }
        if self.beams.tolerance.is_nan() || self.beams.tolerance <= 0.0 {
            return invalid("beams.tolerance must be positive");
        }
        if self.beams.window < 2 {
            return invalid("beams.window must be at least 2");
        }
        if self.beams.min_history < self.beams.window {
            return invalid("beams.min_history must cover beams.window");
        }
        if self.beams.min_history > self.trail.capacity {
            return invalid("beams.min_history exceeds trail.capacity");
        }
        if self.beams.scale_range.0 > self.beams.scale_range.1 {
            return invalid("beams.scale_range is inverted");
        }
        if self.beams.min_decorations > self.beams.max_decorations {
            return invalid("beams.min_decorations exceeds beams.max_decorations");
        }
        if self.beams.render_cap == 0 {
            return invalid("beams.render_cap must be at least 1");
        }
        Ok(())
    }
}

fn unit_range(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

fn unit_dropoff(v: f32) -> bool {
    v > 0.0 && v <= 1.0
}
