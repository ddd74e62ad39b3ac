pub mod differencer;
pub mod history;
pub mod trail;
pub mod transient;

pub use differencer::{diff_against_reference, DifferencerConfig, ReferenceDiff};
pub use history::MotionHistory;
pub use trail::{combine_motion_frames, TrailConfig};
pub use transient::{detect_transients, TransientConfig};
