use std::collections::VecDeque;

use crate::frame::Frame;

/// Fixed-capacity FIFO of the most recent refined motion masks.
#[derive(Clone, Debug)]
pub struct MotionHistory {
    frames: VecDeque<Frame>,
    capacity: usize,
}

impl MotionHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append `mask`, evicting the oldest entries beyond capacity.
    pub fn push(&mut self, mask: Frame) {
        self.frames.push_back(mask);
        while self.frames.len() > self.capacity {
            self.frames.pop_front();
        }
        self.frames.make_contiguous();
    }

    /// Current contents, oldest first.
    pub fn snapshot(&self) -> &[Frame] {
        let (head, tail) = self.frames.as_slices();
        debug_assert!(tail.is_empty());
        head
    }

    pub fn latest(&self) -> Option<&Frame> {
        self.frames.back()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
