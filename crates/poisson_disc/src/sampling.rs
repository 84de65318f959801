//! Eager position sampling on top of the lazy sampler.
//!
//! [`PositionSampling`] is the interface scattering code calls to get a full set
//! of positions at once. [`PoissonDiscSampling`] implements it by draining a
//! [`PoissonDiscSampler`].
use mint::Vector2;
use rand::Rng;
use tracing::warn;

use crate::random::{index_from_bits, unit_f32, UniformSource};
use crate::sampler::{ActivePick, PoissonDiscSampler, SamplerConfig, DEFAULT_MAX_ATTEMPTS};

/// Trait for position sampling.
///
/// Positions lie in `[0, extent.x) x [0, extent.y)`.
pub trait PositionSampling: Send + Sync {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn Rng) -> Vec<Vector2<f32>>;
}

/// Poisson disc sampling strategy.
#[derive(Debug, Clone)]
pub struct PoissonDiscSampling {
    /// Minimum distance between samples in world units.
    pub radius: f32,
    /// Candidates tried around an active sample before it retires.
    pub max_attempts: u32,
    /// Active sample selection policy.
    pub active_pick: ActivePick,
}

impl PoissonDiscSampling {
    /// Create a new PoissonDiscSampling with specified radius.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            active_pick: ActivePick::Uniform,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_active_pick(mut self, active_pick: ActivePick) -> Self {
        self.active_pick = active_pick;
        self
    }
}

impl PositionSampling for PoissonDiscSampling {
    fn generate(&self, domain_extent: Vector2<f32>, rng: &mut dyn Rng) -> Vec<Vector2<f32>> {
        let config = SamplerConfig::new(domain_extent.x, domain_extent.y, self.radius)
            .with_max_attempts(self.max_attempts)
            .with_active_pick(self.active_pick);

        let sampler = match PoissonDiscSampler::from_config(config) {
            Ok(sampler) => sampler,
            Err(err) => {
                warn!("Skipping Poisson disc sampling: {}", err);
                return Vec::new();
            }
        };

        sampler.samples(DynSource(rng)).map(Into::into).collect()
    }
}

struct DynSource<'a>(&'a mut dyn Rng);

impl UniformSource for DynSource<'_> {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        unit_f32(self.0.next_u32())
    }

    #[inline]
    fn next_index(&mut self, len: usize) -> usize {
        index_from_bits(self.0.next_u64(), len)
    }
}
