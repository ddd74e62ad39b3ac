use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::frame::Frame;

/// Apply a Gaussian blur with a square `kernel_size` x `kernel_size` window.
///
/// Kernel sizes of 0 or 1 return the frame unchanged. Even sizes are rounded
/// up to the next odd size.
pub fn gaussian_blur(frame: &Frame, kernel_size: usize) -> Frame {
    Frame::new(gaussian_blur_array(&frame.data, kernel_size))
}

/// Apply Gaussian blur to a raw array using separable 1D convolution.
pub fn gaussian_blur_array(data: &Array2<f32>, kernel_size: usize) -> Array2<f32> {
    if kernel_size <= 1 {
        return data.clone();
    }
    let kernel = make_gaussian_kernel(kernel_size | 1);
    let row_pass = convolve_rows(data, &kernel);
    convolve_cols(&row_pass, &kernel)
}

/// Sigma derived from the kernel size, using the same rule as OpenCV when
/// the caller passes sigma = 0.
pub fn sigma_for_kernel(kernel_size: usize) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

fn make_gaussian_kernel(size: usize) -> Vec<f32> {
    let sigma = sigma_for_kernel(size);
    let radius = size / 2;
    let mut kernel = vec![0.0f32; size];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

fn convolve_rows(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() as isize / 2;
    map_pixels(h, w, |row, col| {
        kernel
            .iter()
            .enumerate()
            .map(|(ki, &kv)| {
                let src_col = (col as isize + ki as isize - radius).clamp(0, w as isize - 1);
                data[[row, src_col as usize]] * kv
            })
            .sum()
    })
}

fn convolve_cols(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() as isize / 2;
    map_pixels(h, w, |row, col| {
        kernel
            .iter()
            .enumerate()
            .map(|(ki, &kv)| {
                let src_row = (row as isize + ki as isize - radius).clamp(0, h as isize - 1);
                data[[src_row as usize, col]] * kv
            })
            .sum()
    })
}

/// Build an (h, w) array from a per-pixel function, splitting rows across
/// the Rayon pool for large frames.
pub(crate) fn map_pixels<F>(h: usize, w: usize, f: F) -> Array2<f32>
where
    F: Fn(usize, usize) -> f32 + Sync,
{
    if h * w < PARALLEL_PIXEL_THRESHOLD {
        return Array2::from_shape_fn((h, w), |(row, col)| f(row, col));
    }

    let rows: Vec<Vec<f32>> = (0..h)
        .into_par_iter()
        .map(|row| (0..w).map(|col| f(row, col)).collect())
        .collect();

    let mut result = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
    result
}
