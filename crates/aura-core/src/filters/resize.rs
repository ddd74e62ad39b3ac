use crate::color::process_color;
use crate::frame::{ColorFrame, Frame};

use super::gaussian_blur::map_pixels;

/// Bilinear resize to `(height, width)`. Same-size requests return a clone.
pub fn resize_bilinear(frame: &Frame, height: usize, width: usize) -> Frame {
    let (src_h, src_w) = frame.data.dim();
    if (src_h, src_w) == (height, width) {
        return frame.clone();
    }
    if src_h == 0 || src_w == 0 || height == 0 || width == 0 {
        return Frame::zeros(height, width);
    }

    let scale_y = src_h as f32 / height as f32;
    let scale_x = src_w as f32 / width as f32;
    let data = &frame.data;

    let out = map_pixels(height, width, |row, col| {
        // Sample at pixel centers.
        let sy = ((row as f32 + 0.5) * scale_y - 0.5).clamp(0.0, (src_h - 1) as f32);
        let sx = ((col as f32 + 0.5) * scale_x - 0.5).clamp(0.0, (src_w - 1) as f32);
        let y0 = sy.floor() as usize;
        let x0 = sx.floor() as usize;
        let y1 = (y0 + 1).min(src_h - 1);
        let x1 = (x0 + 1).min(src_w - 1);
        let fy = sy - y0 as f32;
        let fx = sx - x0 as f32;

        let top = data[[y0, x0]] * (1.0 - fx) + data[[y0, x1]] * fx;
        let bottom = data[[y1, x0]] * (1.0 - fx) + data[[y1, x1]] * fx;
        top * (1.0 - fy) + bottom * fy
    });
    Frame::new(out)
}

/// Resize every channel of a color frame.
pub fn resize_color(color: &ColorFrame, height: usize, width: usize) -> ColorFrame {
    process_color(color, |plane| resize_bilinear(plane, height, width))
}
