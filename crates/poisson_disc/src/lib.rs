#![forbid(unsafe_code)]
//! poisson_disc: lazy Poisson disc sampling over rectangular 2D domains.
//!
//! Modules:
//! - sampler: the Bridson sampler and its lazy [`sampler::Samples`] iterator
//! - grid / active: acceleration grid and active-sample frontier
//! - random: uniform random sources (any `rand::Rng`, replay, recording)
//! - geometry: domain rectangle and XZ-plane helpers
//! - sampling: eager `PositionSampling` strategy for scattering pipelines
//!
//! ```
//! use poisson_disc::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let sampler = PoissonDiscSampler::new(10.0, 10.0, 2.0)?;
//! let points: Vec<_> = sampler.samples(StdRng::seed_from_u64(7)).collect();
//! assert!(!points.is_empty());
//! # Ok::<(), poisson_disc::error::Error>(())
//! ```
pub mod active;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod random;
pub mod sampler;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use poisson_disc::prelude::*;`.
pub mod prelude {
    pub use crate::active::ActiveList;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{lift_to_xz, Domain};
    pub use crate::grid::SpatialGrid;
    pub use crate::random::{RecordingSource, ReplaySource, UniformSource};
    pub use crate::sampler::{
        ActivePick, PoissonDiscSampler, SamplerConfig, Samples, SamplingStats,
        DEFAULT_MAX_ATTEMPTS,
    };
    pub use crate::sampling::{PoissonDiscSampling, PositionSampling};
}
