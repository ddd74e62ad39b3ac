#[allow(dead_code)]
mod common;

use ndarray::Array2;

use aura_core::detection::components::connected_components;
use aura_core::detection::{extract_regions, extract_regions_capped, median_point, RegionConfig};
use aura_core::frame::{BoundingRegion, Frame, Point};

use common::{flat, square_mask};

#[test]
fn test_single_square_region() {
    let mask = square_mask(64, 64, 30, 20, 20);
    let regions = extract_regions(&mask, 50, 1_000_000);
    assert_eq!(
        regions,
        vec![BoundingRegion {
            x: 30,
            y: 20,
            width: 20,
            height: 20
        }]
    );
    assert_eq!(regions[0].area(), 400);
    assert_eq!(regions[0].center(), Point::new(40.0, 30.0));
}

#[test]
fn test_blank_mask_has_no_regions() {
    assert!(extract_regions(&flat(32, 32, 0.0), 0, usize::MAX).is_empty());
}

#[test]
fn test_area_band_filters_regions() {
    let mut mask = square_mask(64, 64, 2, 2, 3);
    mask.data += &square_mask(64, 64, 20, 20, 10).data;
    mask.data += &square_mask(64, 64, 40, 40, 20).data;

    let all = extract_regions(&mask, 0, usize::MAX);
    assert_eq!(all.len(), 3);
    // Largest first.
    assert_eq!(all[0].area(), 400);

    let middle = extract_regions(&mask, 50, 399);
    assert_eq!(middle.len(), 1);
    assert_eq!(middle[0].area(), 100);
}

#[test]
fn test_diagonal_pixels_join_one_region() {
    let mut data = Array2::<f32>::zeros((6, 6));
    for i in 0..4 {
        data[[i, i]] = 1.0;
    }
    let regions = extract_regions(&Frame::new(data), 0, usize::MAX);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].width, 4);
    assert_eq!(regions[0].height, 4);
}

#[test]
fn test_u_shape_merges_through_union() {
    // Two arms that only meet on the bottom row.
    let mut mask = Array2::from_elem((5, 5), false);
    for row in 0..5 {
        mask[[row, 0]] = true;
        mask[[row, 4]] = true;
    }
    for col in 0..5 {
        mask[[4, col]] = true;
    }
    let components = connected_components(&mask);
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].area, 13);
    assert_eq!(components[0].bbox, (0, 4, 0, 4));
}

#[test]
fn test_region_cap_keeps_largest() {
    let mut mask = flat(64, 64, 0.0);
    for (i, size) in [8usize, 12, 10].iter().enumerate() {
        mask.data += &square_mask(64, 64, i * 20, 5, *size).data;
    }
    let config = RegionConfig {
        min_area: 0,
        max_area: usize::MAX,
        max_regions_per_frame: 2,
    };
    let capped = extract_regions_capped(&mask, &config);
    assert_eq!(capped.len(), 2);
    assert_eq!(capped[0].width, 12);
    assert_eq!(capped[1].width, 10);
}

#[test]
fn test_median_point_of_blank_mask() {
    assert!(median_point(&flat(8, 8, 0.0)).is_none());
}

#[test]
fn test_median_point_inside_square() {
    let mask = square_mask(40, 40, 10, 20, 10);
    let p = median_point(&mask).unwrap();
    assert!((10.0..20.0).contains(&p.x), "x = {}", p.x);
    assert!((20.0..30.0).contains(&p.y), "y = {}", p.y);
}

/// `size` x `size` ring of the given thickness with its top-left corner at (x, y).
fn ring_mask(h: usize, w: usize, x: usize, y: usize, size: usize, thickness: usize) -> Frame {
    let mut ring = square_mask(h, w, x, y, size);
    let hole = square_mask(h, w, x + thickness, y + thickness, size - 2 * thickness);
    ring.data -= &hole.data;
    ring
}

#[test]
fn test_region_inside_ring_hole_is_skipped() {
    let mut mask = ring_mask(64, 64, 10, 10, 40, 3);
    mask.data += &square_mask(64, 64, 26, 26, 8).data;

    let regions = extract_regions(&mask, 50, 1_000_000);
    assert_eq!(
        regions,
        vec![BoundingRegion {
            x: 10,
            y: 10,
            width: 40,
            height: 40
        }]
    );
}

#[test]
fn test_diagonal_gap_still_seals_ring() {
    // Cutting one corner pixel leaves the ring 8-connected, so the hole stays closed.
    let mut mask = ring_mask(64, 64, 10, 10, 40, 1);
    mask.data[[10, 10]] = 0.0;
    mask.data += &square_mask(64, 64, 26, 26, 8).data;

    assert_eq!(extract_regions(&mask, 50, 1_000_000).len(), 1);
}

#[test]
fn test_region_behind_open_ring_is_kept() {
    let mut mask = ring_mask(64, 64, 10, 10, 40, 3);
    for row in 10..13 {
        mask.data[[row, 30]] = 0.0;
    }
    mask.data += &square_mask(64, 64, 26, 26, 8).data;

    let regions = extract_regions(&mask, 50, 1_000_000);
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[1], BoundingRegion {
        x: 26,
        y: 26,
        width: 8,
        height: 8
    });
}

#[test]
fn test_region_touching_frame_edge_is_external() {
    let mask = square_mask(32, 32, 0, 0, 10);
    assert_eq!(extract_regions(&mask, 50, 1_000_000).len(), 1);
}
