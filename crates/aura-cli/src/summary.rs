use std::path::Path;

use aura_core::pipeline::{EffectMode, PipelineConfig, StreamSummary};
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_pipeline_summary(config: &PipelineConfig, input: &Path, output: &Path, frames: usize) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Aura Pipeline"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(13)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(input.display()));
    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!("  {:<14}{}", s.label.apply_to("Frames"), s.value.apply_to(frames));
    println!("  {:<14}{}", s.label.apply_to("Effect"), s.method.apply_to(config.effect));
    match &config.processing {
        Some(size) => println!(
            "  {:<14}{}",
            s.label.apply_to("Processing"),
            s.value.apply_to(format!("{}x{}", size.width, size.height))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Processing"),
            s.disabled.apply_to("source resolution")
        ),
    }
    println!();

    // Motion
    let diff = &config.differencer;
    println!("  {}", s.header.apply_to("Motion"));
    println!("    {:<12}{}", s.label.apply_to("Threshold"), s.value.apply_to(diff.threshold));
    if diff.blur {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Blur"),
            s.value.apply_to(format!("{0}x{0}", diff.blur_kernel))
        );
    } else {
        println!("    {:<12}{}", s.label.apply_to("Blur"), s.disabled.apply_to("disabled"));
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Transients"),
        s.value.apply_to(format!(
            "{} / {}",
            config.transient.first_threshold, config.transient.second_threshold
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("History"),
        s.value.apply_to(config.trail.capacity)
    );
    println!();

    if config.effect != EffectMode::Trail {
        let beams = &config.beams;
        println!("  {}", s.header.apply_to("Beams"));
        println!(
            "    {:<12}{}",
            s.label.apply_to("Tolerance"),
            s.value.apply_to(format!("{:.2} rad", beams.tolerance))
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Areas"),
            s.value.apply_to(format!(
                "{}..{}",
                config.regions.min_area, config.regions.max_area
            ))
        );
        match beams.seed {
            Some(seed) => println!("    {:<12}{}", s.label.apply_to("Seed"), s.value.apply_to(seed)),
            None => println!("    {:<12}{}", s.label.apply_to("Seed"), s.disabled.apply_to("random")),
        }
        println!();
    }
}

pub fn print_stream_summary(summary: &StreamSummary, output: &Path) {
    let s = Styles::new();

    println!();
    println!("  {:<14}{}", s.label.apply_to("Frames"), s.value.apply_to(summary.frames));
    println!("  {:<14}{}", s.label.apply_to("Regions"), s.value.apply_to(summary.regions));
    println!("  {:<14}{}", s.label.apply_to("Lines"), s.value.apply_to(summary.lines));
    println!("  {:<14}{}", s.label.apply_to("Scene cuts"), s.value.apply_to(summary.jump_cuts));
    if summary.stopped_by_user {
        println!("  {:<14}{}", s.label.apply_to("Stopped"), s.disabled.apply_to("by user"));
    }
    println!("\n  Output saved to {}", s.path.apply_to(output.display()));
}
