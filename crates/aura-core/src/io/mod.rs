pub mod image_io;
pub mod sequence;

pub use sequence::{list_images, ImageSequenceDisplay, ImageSequenceSource};
