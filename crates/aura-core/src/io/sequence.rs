use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{AuraError, Result};
use crate::frame::ColorFrame;
use crate::pipeline::{Display, FrameSource};

use super::image_io::{load_color_image, save_color_png};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

/// Reads every image in a directory, in file-name order.
pub struct ImageSequenceSource {
    paths: Vec<PathBuf>,
    next: usize,
}

impl ImageSequenceSource {
    pub fn open(dir: &Path) -> Result<Self> {
        let paths = list_images(dir)?;
        if paths.is_empty() {
            return Err(AuraError::EmptySequence);
        }
        info!(frames = paths.len(), dir = %dir.display(), "Opened image sequence");
        Ok(Self { paths, next: 0 })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FrameSource for ImageSequenceSource {
    fn next_frame(&mut self) -> Result<Option<ColorFrame>> {
        let Some(path) = self.paths.get(self.next) else {
            return Ok(None);
        };
        self.next += 1;
        debug!(path = %path.display(), "Loading frame");
        load_color_image(path).map(Some)
    }
}

/// Image files in `dir`, sorted by file name.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && has_image_extension(p))
        .collect();
    paths.sort();
    Ok(paths)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Writes each presented frame as `frame_NNNNNN.png` into a directory.
///
/// The quit signal is a shared flag, normally raised from a Ctrl-C handler.
pub struct ImageSequenceDisplay {
    dir: PathBuf,
    written: usize,
    stop: Arc<AtomicBool>,
    wait: Duration,
}

impl ImageSequenceDisplay {
    pub fn create(dir: &Path, stop: Arc<AtomicBool>, wait_ms: u64) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            written: 0,
            stop,
            wait: Duration::from_millis(wait_ms),
        })
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl Display for ImageSequenceDisplay {
    fn present(&mut self, frame: &ColorFrame) -> Result<bool> {
        let path = self.dir.join(format!("frame_{:06}.png", self.written));
        save_color_png(frame, &path)?;
        self.written += 1;

        if !self.wait.is_zero() {
            std::thread::sleep(self.wait);
        }
        Ok(self.stop.load(Ordering::Relaxed))
    }
}
