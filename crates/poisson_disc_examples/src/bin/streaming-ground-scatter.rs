use glam::Vec3;
use poisson_disc::prelude::*;
use poisson_disc_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Pulls samples lazily and stops once a placement budget is spent.
fn main() -> anyhow::Result<()> {
    init_tracing();
    let budget = 50;

    let sampler = PoissonDiscSampler::new(64.0, 64.0, 4.0)?;
    let bound = sampler.max_samples();
    let mut samples = sampler.samples(StdRng::seed_from_u64(99));

    let placements: Vec<Vec3> = samples
        .by_ref()
        .take(budget)
        .map(|s| lift_to_xz(s, 0.0))
        .collect();

    for (i, p) in placements.iter().enumerate().take(5) {
        info!("placement {}: {}", i, p);
    }
    info!(
        "Placed {} of at most {} objects; {} samples remain active.",
        placements.len(),
        bound,
        samples.active_len()
    );
    Ok(())
}
