use ndarray::Array2;

use crate::frame::{BoundingRegion, LineSegment, Point};

/// Rasterise a 1px line (Bresenham) into `data`, clipping to the frame.
pub fn draw_line(data: &mut Array2<f32>, line: &LineSegment, value: f32) {
    let (mut x0, mut y0) = (line.start.x.round() as i64, line.start.y.round() as i64);
    let (x1, y1) = (line.end.x.round() as i64, line.end.y.round() as i64);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(data, x0, y0, value);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw the 1px outline of a rectangle.
pub fn draw_rect_outline(data: &mut Array2<f32>, region: &BoundingRegion, value: f32) {
    if region.width == 0 || region.height == 0 {
        return;
    }
    let left = region.x as f32;
    let top = region.y as f32;
    let right = (region.x + region.width - 1) as f32;
    let bottom = (region.y + region.height - 1) as f32;
    let corners = [
        Point::new(left, top),
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ];
    for i in 0..corners.len() {
        let edge = LineSegment::new(corners[i], corners[(i + 1) % corners.len()]);
        draw_line(data, &edge, value);
    }
}

/// Fill a disc of `radius` pixels centred on `center`.
pub fn fill_disc(data: &mut Array2<f32>, center: Point, radius: usize, value: f32) {
    let cx = center.x.round() as i64;
    let cy = center.y.round() as i64;
    let r = radius as i64;
    for y in cy - r..=cy + r {
        for x in cx - r..=cx + r {
            if (x - cx).pow(2) + (y - cy).pow(2) <= r * r {
                put(data, x, y, value);
            }
        }
    }
}

fn put(data: &mut Array2<f32>, x: i64, y: i64, value: f32) {
    let (h, w) = data.dim();
    if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
        data[[y as usize, x as usize]] = value;
    }
}
