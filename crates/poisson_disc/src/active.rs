//! Frontier of accepted samples that may still spawn neighbours.
use glam::Vec2;

use crate::random::UniformSource;

/// Unordered list of active samples with O(1) removal.
#[derive(Debug, Clone, Default)]
pub struct ActiveList {
    samples: Vec<Vec2>,
}

impl ActiveList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.samples.get(index).copied()
    }

    pub fn add(&mut self, sample: Vec2) {
        self.samples.push(sample);
    }

    /// Uniformly chosen index into the list, or `None` when it is empty.
    pub fn pick_random<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.samples.is_empty() {
            return None;
        }
        Some(rng.next_index(self.samples.len()))
    }

    /// Removes the sample at `index` by moving the last sample into its slot.
    pub fn remove_at(&mut self, index: usize) -> Vec2 {
        self.samples.swap_remove(index)
    }
}
