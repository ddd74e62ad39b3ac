use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid frame dimensions: {width}x{height}")]
    InvalidFrame { width: usize, height: usize },

    #[error("Frame size changed mid-stream: expected {expected_width}x{expected_height}, got {width}x{height}")]
    FrameSizeChanged {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Empty frame sequence")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, AuraError>;
