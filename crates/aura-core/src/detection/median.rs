use crate::frame::{Frame, Point};

/// Weighted median position of a motion mask.
///
/// Each axis is resolved independently: the column (row) at which the
/// cumulative column (row) sums first reach half of the total intensity.
/// Returns `None` for an all-zero mask.
pub fn median_point(mask: &Frame) -> Option<Point> {
    let total: f64 = mask.data.iter().map(|&v| v as f64).sum();
    if total <= 0.0 {
        return None;
    }

    let col_sums: Vec<f64> = mask
        .data
        .columns()
        .into_iter()
        .map(|c| c.iter().map(|&v| v as f64).sum())
        .collect();
    let row_sums: Vec<f64> = mask
        .data
        .rows()
        .into_iter()
        .map(|r| r.iter().map(|&v| v as f64).sum())
        .collect();

    Some(Point::new(
        half_mass_index(&col_sums, total) as f32,
        half_mass_index(&row_sums, total) as f32,
    ))
}

fn half_mass_index(sums: &[f64], total: f64) -> usize {
    let half = total * 0.5;
    let mut acc = 0.0;
    for (i, &s) in sums.iter().enumerate() {
        acc += s;
        if acc >= half {
            return i;
        }
    }
    sums.len().saturating_sub(1)
}
