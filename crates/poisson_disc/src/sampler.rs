//! Lazy Poisson disc sampler (Bridson's algorithm).
//!
//! [`PoissonDiscSampler`] owns the acceleration grid and the active list. Calling
//! [`PoissonDiscSampler::samples`] hands both over to a [`Samples`] iterator that
//! yields one accepted sample per call to `next`. The iterator is single-pass:
//! build a new sampler to sample again.
use std::f32::consts::TAU;
use std::iter::FusedIterator;

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::active::ActiveList;
use crate::error::{Error, Result};
use crate::geometry::Domain;
use crate::grid::SpatialGrid;
use crate::random::UniformSource;

/// Default number of candidates tried around an active sample before it retires.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;

/// How the next active sample is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActivePick {
    /// Uniformly random index into the active list.
    #[default]
    Uniform,
    /// Always the first entry. Reproduces the legacy selection, which truncated
    /// the random draw to zero before scaling it. The draw is still consumed,
    /// so a recorded legacy stream replays in step. Grows the pattern outward
    /// from the seed; spacing guarantees are unaffected.
    First,
}

/// Configuration for a [`PoissonDiscSampler`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Domain width; samples satisfy `0 <= x < width`.
    pub width: f32,
    /// Domain height; samples satisfy `0 <= z < height`.
    pub height: f32,
    /// Minimum distance between any two samples.
    pub radius: f32,
    /// Candidates tried around an active sample before it retires.
    pub max_attempts: u32,
    /// Active sample selection policy.
    pub active_pick: ActivePick,
}

impl SamplerConfig {
    /// Creates a new [`SamplerConfig`] with default attempts and uniform picking.
    pub fn new(width: f32, height: f32, radius: f32) -> Self {
        Self {
            width,
            height,
            radius,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            active_pick: ActivePick::default(),
        }
    }

    /// Sets the number of candidates per active sample.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the active sample selection policy.
    pub fn with_active_pick(mut self, active_pick: ActivePick) -> Self {
        self.active_pick = active_pick;
        self
    }
}

/// Counters describing a sampling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplingStats {
    /// Samples emitted so far, including the seed.
    pub accepted: usize,
    /// Annulus candidates drawn.
    pub candidates: usize,
    /// Candidates that fell outside the domain.
    pub rejected_outside: usize,
    /// Candidates that were too close to an accepted sample.
    pub rejected_too_close: usize,
    /// Active samples retired after exhausting their attempts.
    pub retired: usize,
}

/// Poisson disc sampler over `[0, width) x [0, height)`.
#[derive(Debug, Clone)]
pub struct PoissonDiscSampler {
    domain: Domain,
    radius: f32,
    radius_squared: f32,
    max_attempts: u32,
    active_pick: ActivePick,
    grid: SpatialGrid,
    active: ActiveList,
}

impl PoissonDiscSampler {
    /// Creates a sampler with default settings.
    pub fn new(width: f32, height: f32, radius: f32) -> Result<Self> {
        Self::from_config(SamplerConfig::new(width, height, radius))
    }

    pub fn from_config(config: SamplerConfig) -> Result<Self> {
        let domain = Domain::new(config.width, config.height)?;
        let radius = Error::require_positive("radius", config.radius)?;
        if config.max_attempts == 0 {
            return Err(Error::InvalidConfig(
                "max_attempts must be at least 1".to_owned(),
            ));
        }
        let grid = SpatialGrid::new(&domain, radius)?;

        let (cols, rows) = grid.dimensions();
        debug!(
            "Poisson disc sampler over {}x{} with radius {}: {}x{} grid, cell size {}.",
            domain.width(),
            domain.height(),
            radius,
            cols,
            rows,
            grid.cell_size()
        );

        Ok(Self {
            domain,
            radius,
            radius_squared: radius * radius,
            max_attempts: config.max_attempts,
            active_pick: config.active_pick,
            grid,
            active: ActiveList::new(),
        })
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// Upper bound on the number of samples: each grid cell holds at most one.
    pub fn max_samples(&self) -> usize {
        let (cols, rows) = self.grid.dimensions();
        cols * rows
    }

    /// Starts sampling, drawing randomness from `rng`.
    ///
    /// The iterator owns `rng`; get it back with [`Samples::into_rng`].
    pub fn samples<R: UniformSource>(self, rng: R) -> Samples<R> {
        Samples {
            sampler: self,
            rng,
            state: State::Seed,
            stats: SamplingStats::default(),
        }
    }

    fn add_sample(&mut self, sample: Vec2) -> Vec2 {
        self.grid.insert(sample);
        self.active.add(sample);
        sample
    }

    fn pick_active<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        match self.active_pick {
            ActivePick::Uniform => self.active.pick_random(rng),
            ActivePick::First => {
                if self.active.is_empty() {
                    return None;
                }
                rng.next_unit();
                Some(0)
            }
        }
    }

    /// Point uniformly distributed over the annulus `[radius, 2 * radius]`.
    fn annulus_candidate<R: UniformSource + ?Sized>(&self, center: Vec2, rng: &mut R) -> Vec2 {
        let angle = TAU * rng.next_unit();
        let distance =
            (rng.next_unit() * 3.0 * self.radius_squared + self.radius_squared).sqrt();
        center + Vec2::from_angle(angle) * distance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Seed,
    Running,
    Done,
}

/// Lazy sequence of accepted samples. Created by [`PoissonDiscSampler::samples`].
#[derive(Debug, Clone)]
pub struct Samples<R> {
    sampler: PoissonDiscSampler,
    rng: R,
    state: State,
    stats: SamplingStats,
}

impl<R: UniformSource> Samples<R> {
    pub fn stats(&self) -> SamplingStats {
        self.stats
    }

    /// Number of samples still eligible to spawn neighbours.
    pub fn active_len(&self) -> usize {
        self.sampler.active.len()
    }

    /// The grid holding every sample accepted so far.
    pub fn grid(&self) -> &SpatialGrid {
        &self.sampler.grid
    }

    /// Stops sampling and returns the random source.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Tries up to `max_attempts` candidates around the active sample at `index`.
    fn try_spawn(&mut self, index: usize) -> Option<Vec2> {
        let center = self.sampler.active.get(index)?;
        for _ in 0..self.sampler.max_attempts {
            let candidate = self.sampler.annulus_candidate(center, &mut self.rng);
            self.stats.candidates += 1;

            if !self.sampler.domain.contains(candidate) {
                self.stats.rejected_outside += 1;
                continue;
            }
            if !self.sampler.grid.is_far_enough(candidate, self.sampler.radius) {
                self.stats.rejected_too_close += 1;
                continue;
            }
            return Some(candidate);
        }
        None
    }

    fn finish(&mut self) {
        self.state = State::Done;
        debug!(
            "Poisson disc sampling finished: {} accepted, {} candidates ({} outside, {} too close), {} retired.",
            self.stats.accepted,
            self.stats.candidates,
            self.stats.rejected_outside,
            self.stats.rejected_too_close,
            self.stats.retired
        );
    }
}

impl<R: UniformSource> Iterator for Samples<R> {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        match self.state {
            State::Done => return None,
            State::Seed => {
                let seed = self.sampler.domain.random_point(&mut self.rng);
                self.state = State::Running;
                self.stats.accepted += 1;
                return Some(self.sampler.add_sample(seed));
            }
            State::Running => {}
        }

        while let Some(index) = self.sampler.pick_active(&mut self.rng) {
            if let Some(sample) = self.try_spawn(index) {
                self.stats.accepted += 1;
                return Some(self.sampler.add_sample(sample));
            }

            let retired = self.sampler.active.remove_at(index);
            self.stats.retired += 1;
            trace!(
                "Retired active sample {} after {} attempts.",
                retired,
                self.sampler.max_attempts
            );
        }

        self.finish();
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Done => (0, Some(0)),
            State::Seed => (1, Some(self.sampler.max_samples())),
            State::Running => (
                0,
                Some(self.sampler.max_samples().saturating_sub(self.stats.accepted)),
            ),
        }
    }
}

impl<R: UniformSource> FusedIterator for Samples<R> {}
