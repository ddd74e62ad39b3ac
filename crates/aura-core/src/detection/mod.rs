pub mod components;
pub mod median;
pub mod regions;

pub use median::median_point;
pub use regions::{extract_regions, extract_regions_capped, RegionConfig};
