pub mod process;

pub use process::{from_channels, luminance, process_color, tint, AuraChannel};
