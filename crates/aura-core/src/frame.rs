use ndarray::Array2;

use crate::error::{AuraError, Result};

/// A single-channel image frame.
/// Pixel values are f32 in [0.0, 1.0].
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl Frame {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn zeros(height: usize, width: usize) -> Self {
        Self::new(Array2::zeros((height, width)))
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }
}

/// Color image composed of separate channel frames.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorFrame {
    pub red: Frame,
    pub green: Frame,
    pub blue: Frame,
}

impl ColorFrame {
    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }

    /// Reject zero-area frames and frames whose planes disagree in shape.
    pub fn validate(&self) -> Result<()> {
        let dim = self.red.data.dim();
        let (h, w) = dim;
        if h == 0 || w == 0 || self.green.data.dim() != dim || self.blue.data.dim() != dim {
            return Err(AuraError::InvalidFrame {
                width: w,
                height: h,
            });
        }
        Ok(())
    }
}

/// Axis-aligned integer rectangle in mask-local pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingRegion {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl BoundingRegion {
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `self` to `other`.
    pub fn to(self, other: Point) -> (f32, f32) {
        (other.x - self.x, other.y - self.y)
    }
}

/// An ordered pair of points. Never mutated once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn vector(&self) -> (f32, f32) {
        self.start.to(self.end)
    }
}
