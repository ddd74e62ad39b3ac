use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use ndarray::Array2;

use crate::error::{AuraError, Result};
use crate::frame::{ColorFrame, Frame};

/// Load any image the `image` crate understands as an RGB frame.
pub fn load_color_image(path: &Path) -> Result<ColorFrame> {
    let img = image::open(path)?;
    Ok(rgb_to_color_frame(&img.to_rgb8()))
}

/// Convert an 8-bit RGB buffer into separate [0, 1] planes.
pub fn rgb_to_color_frame(img: &RgbImage) -> ColorFrame {
    let (w, h) = img.dimensions();
    let plane = |channel: usize| {
        Frame::new(Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
            img.get_pixel(col as u32, row as u32).0[channel] as f32 / 255.0
        }))
    };
    ColorFrame {
        red: plane(0),
        green: plane(1),
        blue: plane(2),
    }
}

/// Quantise a color frame to an 8-bit RGB buffer.
pub fn color_frame_to_rgb(color: &ColorFrame) -> Result<RgbImage> {
    color.validate()?;
    let h = color.height();
    let w = color.width();

    let mut img = RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let r = to_u8(color.red.data[[row, col]]);
            let g = to_u8(color.green.data[[row, col]]);
            let b = to_u8(color.blue.data[[row, col]]);
            img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
        }
    }
    Ok(img)
}

/// Save a ColorFrame as 8-bit RGB PNG.
pub fn save_color_png(color: &ColorFrame, path: &Path) -> Result<()> {
    let img = color_frame_to_rgb(color)?;
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Image dimensions without decoding pixel data.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32)> {
    let (w, h) = image::image_dimensions(path)?;
    if w == 0 || h == 0 {
        return Err(AuraError::InvalidFrame {
            width: w as usize,
            height: h as usize,
        });
    }
    Ok((w, h))
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
