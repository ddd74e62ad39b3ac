use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use aura_core::io::{ImageSequenceDisplay, ImageSequenceSource};
use aura_core::pipeline::{
    run_stream, EffectMode, FrameReport, Pipeline, PipelineConfig, ProgressReporter, StreamSummary,
};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::summary::{print_pipeline_summary, print_stream_summary};

#[derive(Clone, Copy, ValueEnum)]
pub enum EffectArg {
    Trail,
    Beams,
    Combined,
}

impl From<EffectArg> for EffectMode {
    fn from(arg: EffectArg) -> Self {
        match arg {
            EffectArg::Trail => EffectMode::Trail,
            EffectArg::Beams => EffectMode::Beams,
            EffectArg::Combined => EffectMode::Combined,
        }
    }
}

#[derive(Args)]
pub struct RunArgs {
    /// Directory holding the input frame images
    pub input: PathBuf,

    /// Directory the composited frames are written to
    #[arg(short, long, default_value = "aura-out")]
    pub output: PathBuf,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overlay to render (overrides the config file)
    #[arg(long, value_enum)]
    pub effect: Option<EffectArg>,

    /// Seed for decorative beam jitter
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after each frame, in milliseconds
    #[arg(long, default_value = "0")]
    pub wait_ms: u64,

    /// Process at source resolution instead of downscaling
    #[arg(long)]
    pub no_downscale: bool,
}

struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn frame_done(&self, report: &FrameReport) {
        self.bar.inc(1);
        self.bar
            .set_message(format!("{} regions, {} lines", report.regions, report.lines));
    }

    fn finished(&self, summary: &StreamSummary) {
        self.bar
            .finish_with_message(format!("{} frames", summary.frames));
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    // Validate before anything touches the file system.
    let mut pipeline = Pipeline::new(load_config(args)?).context("Invalid pipeline config")?;

    let mut source = ImageSequenceSource::open(&args.input)
        .with_context(|| format!("Failed to open sequence {}", args.input.display()))?;

    let stop = Arc::new(AtomicBool::new(false));
    let handler_flag = stop.clone();
    ctrlc::set_handler(move || {
        info!("Stop requested, finishing current frame");
        handler_flag.store(true, Ordering::Relaxed);
    })
    .context("Failed to install Ctrl-C handler")?;

    print_pipeline_summary(pipeline.config(), &args.input, &args.output, source.len());

    let mut display = ImageSequenceDisplay::create(&args.output, stop, args.wait_ms)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let bar = ProgressBar::new(source.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{pos:>6}/{len:6} [{bar:40}] {msg}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { bar };

    let summary = run_stream(&mut source, &mut display, &mut pipeline, &reporter)?;
    print_stream_summary(&summary, &args.output);

    Ok(())
}

fn load_config(args: &RunArgs) -> Result<PipelineConfig> {
    let mut config: PipelineConfig = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        PipelineConfig::default()
    };

    if let Some(effect) = args.effect {
        config.effect = effect.into();
    }
    if args.seed.is_some() {
        config.beams.seed = args.seed;
    }
    if args.no_downscale {
        config.processing = None;
    }
    Ok(config)
}
