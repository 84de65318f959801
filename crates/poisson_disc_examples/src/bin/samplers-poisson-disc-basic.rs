use poisson_disc::prelude::*;
use poisson_disc_examples::{init_tracing, render_samples_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let (width, height, radius) = (100.0, 100.0, 3.0);

    let sampler = PoissonDiscSampler::new(width, height, radius)?;
    let mut samples = sampler.samples(StdRng::seed_from_u64(2025));
    let points: Vec<_> = samples.by_ref().collect();

    let stats = samples.stats();
    info!(
        "Accepted {} samples from {} candidates.",
        stats.accepted, stats.candidates
    );

    let rc = RenderConfig::new((1000, 1000), glam::Vec2::new(width, height)).with_dot_radius(4);
    render_samples_to_png(&points, &rc, "samplers-poisson-disc-basic.png")?;
    Ok(())
}
