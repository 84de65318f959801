use glam::Vec2;
use poisson_disc::prelude::*;
use poisson_disc_examples::{init_tracing, render_samples_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let extent = Vec2::new(100.0, 100.0);

    for (pick, out, color) in [
        (
            ActivePick::Uniform,
            "samplers-poisson-disc-uniform.png",
            [120, 200, 255],
        ),
        (
            ActivePick::First,
            "samplers-poisson-disc-first.png",
            [255, 170, 90],
        ),
    ] {
        let config = SamplerConfig::new(extent.x, extent.y, 2.5).with_active_pick(pick);
        let mut samples = PoissonDiscSampler::from_config(config)?.samples(StdRng::seed_from_u64(7));

        // Only the first half of the run, so the growth pattern stays visible.
        let points: Vec<Vec2> = samples.by_ref().take(600).collect();
        info!(
            "{:?}: {} samples, {} still active.",
            pick,
            points.len(),
            samples.active_len()
        );

        let rc = RenderConfig::new((1000, 1000), extent).with_color(color);
        render_samples_to_png(&points, &rc, out)?;
    }

    Ok(())
}
