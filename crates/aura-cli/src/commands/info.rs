use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use aura_core::io::image_io::image_dimensions;
use aura_core::io::list_images;
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// Directory holding the frame images
    pub dir: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let paths = list_images(&args.dir)
        .with_context(|| format!("Failed to list {}", args.dir.display()))?;
    let Some(first) = paths.first() else {
        bail!("No images found in {}", args.dir.display());
    };
    let (width, height) = image_dimensions(first)?;

    println!("Directory:   {}", args.dir.display());
    println!("Frames:      {}", paths.len());
    println!("Dimensions:  {}x{}", width, height);
    println!("First:       {}", first.display());
    if let Some(last) = paths.last() {
        println!("Last:        {}", last.display());
    }

    Ok(())
}
