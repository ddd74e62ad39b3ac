use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_MAX_REGIONS_PER_FRAME, DEFAULT_MAX_REGION_AREA, DEFAULT_MIN_REGION_AREA};
use crate::frame::{BoundingRegion, Frame};

use super::components::external_components;

/// Pixels above this value count as "bright" when tracing regions.
const BRIGHT_LEVEL: f32 = 0.5;

/// Area filter for extracted regions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Smallest bounding-box area kept (inclusive).
    pub min_area: usize,
    /// Largest bounding-box area kept (inclusive).
    pub max_area: usize,
    /// Regions per frame fed to the line search, largest first.
    pub max_regions_per_frame: usize,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            min_area: DEFAULT_MIN_REGION_AREA,
            max_area: DEFAULT_MAX_REGION_AREA,
            max_regions_per_frame: DEFAULT_MAX_REGIONS_PER_FRAME,
        }
    }
}

/// Bounding boxes of the outermost bright regions whose box area lies in
/// `[min_area, max_area]`. Regions nested in another region's hole are
/// skipped. Ordered largest component first.
pub fn extract_regions(mask: &Frame, min_area: usize, max_area: usize) -> Vec<BoundingRegion> {
    bright_components(mask)
        .into_iter()
        .filter(|r| (min_area..=max_area).contains(&r.area()))
        .collect()
}

/// Region extraction with the configured band and per-frame cap applied.
pub fn extract_regions_capped(mask: &Frame, config: &RegionConfig) -> Vec<BoundingRegion> {
    let mut regions = extract_regions(mask, config.min_area, config.max_area);
    if regions.len() > config.max_regions_per_frame {
        debug!(
            found = regions.len(),
            kept = config.max_regions_per_frame,
            "Region list capped"
        );
        regions.truncate(config.max_regions_per_frame);
    }
    regions
}

fn bright_components(mask: &Frame) -> Vec<BoundingRegion> {
    let bright: Array2<bool> = mask.data.mapv(|v| v > BRIGHT_LEVEL);
    external_components(&bright)
        .into_iter()
        .map(|c| BoundingRegion {
            x: c.bbox.2,
            y: c.bbox.0,
            width: c.bbox_width(),
            height: c.bbox_height(),
        })
        .collect()
}
