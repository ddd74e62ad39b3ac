pub mod gaussian_blur;
pub mod resize;
pub mod threshold;
