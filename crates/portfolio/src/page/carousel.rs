//! Testimonial carousel

use std::time::Duration;

/// Autoplay advances one card this often
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Index over a fixed number of cards that wraps in both directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The active card, `None` when there are no cards
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    /// Move by `direction` cards (negative goes back), wrapping around
    pub fn step(&mut self, direction: isize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let len = self.len as isize;
        self.index = (self.index as isize + direction).rem_euclid(len) as usize;
        Some(self.index)
    }

    pub fn forward(&mut self) -> Option<usize> {
        self.step(1)
    }

    pub fn back(&mut self) -> Option<usize> {
        self.step(-1)
    }
}
