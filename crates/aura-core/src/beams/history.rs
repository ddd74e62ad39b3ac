use std::collections::VecDeque;

use crate::filters::threshold::{intensity_to_unit, weighted_sum};
use crate::frame::{Frame, LineSegment};
use crate::render::draw_line;

use super::config::BeamConfig;

/// Per-frame line sets, newest last, bounded to the render cap.
///
/// Empty sets are recorded too: rendering still spends a decay step on them.
#[derive(Clone, Debug)]
pub struct LineHistory {
    entries: VecDeque<Vec<LineSegment>>,
    capacity: usize,
}

impl LineHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, lines: Vec<LineSegment>) {
        self.entries.push_back(lines);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Line sets, oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &Vec<LineSegment>> {
        self.entries.iter()
    }

    /// Render recorded lines over `target`, newest most opaque.
    ///
    /// Walking back from the newest entry, each non-empty set is stroked onto
    /// a copy of the running frame and blended in at the current opacity.
    /// The opacity decays by `dropoff` per entry, empty or not.
    pub fn render(&self, target: &Frame, config: &BeamConfig) -> Frame {
        let value = intensity_to_unit(config.line_intensity);
        let mut running = target.clone();
        let mut transparency = config.start_transparency;

        for lines in self.entries.iter().rev().take(config.render_cap) {
            if !lines.is_empty() {
                let mut stroked = running.clone();
                for line in lines {
                    draw_line(&mut stroked.data, line, value);
                }
                running = weighted_sum(&running, 1.0 - transparency, &stroked, transparency);
            }
            transparency *= config.dropoff;
        }
        running
    }
}
