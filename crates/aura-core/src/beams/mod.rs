pub mod colinear;
pub mod config;
pub mod history;
pub mod jitter;
pub mod synth;

pub use colinear::are_points_colinear;
pub use config::BeamConfig;
pub use history::LineHistory;
pub use jitter::{JitterSource, RngJitter, ScriptedJitter};
pub use synth::{find_lines, make_lines_from_motion_frames};
