//! Domain rectangle and small geometry helpers.
//!
//! Samples are `glam::Vec2` values whose `y` component carries the ground-plane
//! `z` coordinate. [`lift_to_xz`] places them on the XZ plane of a 3D scene.
use glam::{Vec2, Vec3};

use crate::error::{Error, Result};
use crate::random::{just_below, UniformSource};

/// Axis-aligned rectangle `[0, width) x [0, height)` that samples are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    extent: Vec2,
}

impl Domain {
    /// Creates a domain, rejecting non-positive or non-finite sides.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let width = Error::require_positive("width", width)?;
        let height = Error::require_positive("height", height)?;
        Ok(Self {
            extent: Vec2::new(width, height),
        })
    }

    pub fn width(&self) -> f32 {
        self.extent.x
    }

    pub fn height(&self) -> f32 {
        self.extent.y
    }

    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    pub fn area(&self) -> f32 {
        self.extent.x * self.extent.y
    }

    /// Half-open containment test: the far edges are excluded.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x < self.extent.x && point.y < self.extent.y
    }

    /// Draws a point uniformly inside the domain.
    pub(crate) fn random_point<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let x = rng.next_unit() * self.extent.x;
        let y = rng.next_unit() * self.extent.y;
        // Rounding in the product can land exactly on the far edge.
        Vec2::new(
            x.min(just_below(self.extent.x)),
            y.min(just_below(self.extent.y)),
        )
    }
}

/// Places a 2D sample on the XZ plane at elevation `y`.
#[inline]
pub fn lift_to_xz(sample: Vec2, y: f32) -> Vec3 {
    Vec3::new(sample.x, y, sample.y)
}
