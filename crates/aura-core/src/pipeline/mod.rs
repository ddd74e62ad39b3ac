pub mod config;
mod process;
mod state;
mod stream;
mod types;

pub use config::{EffectMode, PipelineConfig, ProcessingSize};
pub use process::{process_frame, Pipeline};
pub use state::PipelineState;
pub use stream::{run_stream, Display, FrameSource};
pub use types::{FrameOutput, FrameReport, NoOpReporter, ProgressReporter, StreamSummary};
