use std::collections::{HashMap, HashSet, VecDeque};

use ndarray::Array2;

/// Statistics for a single connected component.
#[derive(Clone, Debug)]
pub struct ComponentStats {
    /// Unique label for this component.
    pub label: u32,
    /// Number of pixels in the component.
    pub area: usize,
    /// Bounding box: (min_row, max_row, min_col, max_col).
    pub bbox: (usize, usize, usize, usize),
}

impl ComponentStats {
    pub fn bbox_width(&self) -> usize {
        self.bbox.3 - self.bbox.2 + 1
    }

    pub fn bbox_height(&self) -> usize {
        self.bbox.1 - self.bbox.0 + 1
    }
}

/// Perform connected component analysis on a binary mask using two-pass
/// labeling with union-find. Uses 8-connectivity, so diagonal neighbours
/// join a region the same way an outer contour would enclose them.
///
/// Returns component statistics sorted by area descending (largest first).
pub fn connected_components(mask: &Array2<bool>) -> Vec<ComponentStats> {
    label_components(mask).1
}

/// Components with an outer boundary: those touching the frame edge or the
/// background reachable from it. Components sitting inside another
/// component's hole are dropped.
///
/// The background is flooded with 4-connectivity, the dual of the
/// 8-connected foreground, so an 8-connected ring seals its hole.
pub fn external_components(mask: &Array2<bool>) -> Vec<ComponentStats> {
    let (labels, components) = label_components(mask);
    let (h, w) = mask.dim();
    let outside = outside_background(mask);

    let mut external = HashSet::new();
    for ((row, col), &lbl) in labels.indexed_iter() {
        if lbl == 0 || external.contains(&lbl) {
            continue;
        }
        let on_edge = row == 0 || col == 0 || row + 1 == h || col + 1 == w;
        if on_edge || four_neighbours(row, col, h, w).any(|(r, c)| outside[[r, c]]) {
            external.insert(lbl);
        }
    }

    components
        .into_iter()
        .filter(|c| external.contains(&c.label))
        .collect()
}

/// Background pixels 4-connected to the frame edge.
fn outside_background(mask: &Array2<bool>) -> Array2<bool> {
    let (h, w) = mask.dim();
    let mut outside = Array2::from_elem((h, w), false);
    let mut queue = VecDeque::new();

    for ((row, col), &set) in mask.indexed_iter() {
        let on_edge = row == 0 || col == 0 || row + 1 == h || col + 1 == w;
        if on_edge && !set {
            outside[[row, col]] = true;
            queue.push_back((row, col));
        }
    }

    while let Some((row, col)) = queue.pop_front() {
        for (r, c) in four_neighbours(row, col, h, w) {
            if !mask[[r, c]] && !outside[[r, c]] {
                outside[[r, c]] = true;
                queue.push_back((r, c));
            }
        }
    }
    outside
}

fn four_neighbours(
    row: usize,
    col: usize,
    h: usize,
    w: usize,
) -> impl Iterator<Item = (usize, usize)> {
    [
        (row.wrapping_sub(1), col),
        (row + 1, col),
        (row, col.wrapping_sub(1)),
        (row, col + 1),
    ]
    .into_iter()
    .filter(move |&(r, c)| r < h && c < w)
}

/// Two-pass labeling. Returns the resolved label image (0 = background)
/// and the per-component statistics.
fn label_components(mask: &Array2<bool>) -> (Array2<u32>, Vec<ComponentStats>) {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return (Array2::zeros((h, w)), Vec::new());
    }

    let mut labels = Array2::<u32>::zeros((h, w));
    let mut next_label: u32 = 1;
    // Union-find parent array. Index 0 unused; labels start at 1.
    let mut parent: Vec<u32> = vec![0; h * w / 2 + 2];

    // Pass 1: assign provisional labels from the already-visited neighbours
    // (left, upper-left, up, upper-right).
    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            let mut neighbours = [0u32; 4];
            if col > 0 {
                neighbours[0] = labels[[row, col - 1]];
            }
            if row > 0 {
                if col > 0 {
                    neighbours[1] = labels[[row - 1, col - 1]];
                }
                neighbours[2] = labels[[row - 1, col]];
                if col + 1 < w {
                    neighbours[3] = labels[[row - 1, col + 1]];
                }
            }

            let smallest = neighbours.iter().copied().filter(|&l| l > 0).min();
            match smallest {
                None => {
                    if next_label as usize >= parent.len() {
                        parent.resize(parent.len() * 2, 0);
                    }
                    parent[next_label as usize] = next_label;
                    labels[[row, col]] = next_label;
                    next_label += 1;
                }
                Some(smallest) => {
                    labels[[row, col]] = smallest;
                    for &other in neighbours.iter().filter(|&&l| l > 0 && l != smallest) {
                        union(&mut parent, smallest, other);
                    }
                }
            }
        }
    }

    // Flatten parent references.
    for i in 1..next_label as usize {
        parent[i] = find(&parent, i as u32);
    }

    // Pass 2: resolve labels and collect stats.
    let mut stats_map = HashMap::<u32, ComponentStats>::new();

    for row in 0..h {
        for col in 0..w {
            let lbl = labels[[row, col]];
            if lbl == 0 {
                continue;
            }
            let root = parent[lbl as usize];
            labels[[row, col]] = root;

            let entry = stats_map.entry(root).or_insert(ComponentStats {
                label: root,
                area: 0,
                bbox: (row, row, col, col),
            });

            entry.area += 1;
            entry.bbox.0 = entry.bbox.0.min(row);
            entry.bbox.1 = entry.bbox.1.max(row);
            entry.bbox.2 = entry.bbox.2.min(col);
            entry.bbox.3 = entry.bbox.3.max(col);
        }
    }

    let mut components: Vec<ComponentStats> = stats_map.into_values().collect();
    components.sort_unstable_by(|a, b| b.area.cmp(&a.area).then(a.label.cmp(&b.label)));
    (labels, components)
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Merge larger root into smaller root to keep labels consistent.
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
