//! PNG rendering and logging setup shared by the example binaries.
use std::path::Path;

use glam::Vec2;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honouring `RUST_LOG` (defaults to `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Image size, colours and dot radius used when drawing samples.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub domain_extent: Vec2,
    pub background: [u8; 3],
    pub color: [u8; 3],
    /// Dot radius in pixels.
    pub dot_radius: u32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), domain_extent: Vec2) -> Self {
        Self {
            image_size,
            domain_extent,
            background: [26, 26, 26],
            color: [235, 235, 235],
            dot_radius: 3,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_dot_radius(mut self, dot_radius: u32) -> Self {
        self.dot_radius = dot_radius;
        self
    }

    fn to_pixel(&self, sample: Vec2) -> (i64, i64) {
        let (w, h) = self.image_size;
        let u = sample.x / self.domain_extent.x;
        let v = sample.y / self.domain_extent.y;
        ((u * w as f32) as i64, (v * h as f32) as i64)
    }
}

/// Draws every sample as a filled dot and writes the image to `path`.
pub fn render_samples_to_png(
    samples: &[Vec2],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    let r = config.dot_radius as i64;

    for &sample in samples {
        let (cx, cy) = config.to_pixel(sample);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (px, py) = (cx + dx, cy + dy);
                if px >= 0 && py >= 0 && px < w as i64 && py < h as i64 {
                    img.put_pixel(px as u32, py as u32, Rgb(config.color));
                }
            }
        }
    }

    let path = path.as_ref();
    img.save(path)?;
    info!("Wrote {} samples to {}.", samples.len(), path.display());
    Ok(())
}
