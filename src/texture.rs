//! Static "aged paper" layer: grain speckles, a few dark scratches and a
//! radial vignette. Only redrawn when the surface is resized.

use std::f64::consts::PI;

use rand::Rng;

use crate::config::TextureConfig;
use crate::error::Result;
use crate::surface::{ColorStop, LineCap, Point, RadialGradient, Rect, Rgba, Stroke, Surface};

/// Vignette stops as (offset, alpha). The outer alpha is over-range and ends
/// up clamped to opaque.
const VIGNETTE_STOPS: [(f64, f64); 3] = [(0.0, 0.0), (0.7, 0.75), (1.0, 1.5)];

#[derive(Debug, Clone, Default)]
pub struct TextureLayer {
    config: TextureConfig,
}

impl TextureLayer {
    pub fn new(config: TextureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TextureConfig {
        &self.config
    }

    /// Number of grain marks drawn for a surface of `area` pixels.
    pub fn grain_count(&self, area: u64) -> u64 {
        (area as f64 * self.config.grain_density).ceil() as u64
    }

    pub fn draw<S, R>(&self, surface: &mut S, rng: &mut R) -> Result<()>
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        surface.clear()?;
        let size = surface.size();
        let (w, h) = (f64::from(size.width), f64::from(size.height));

        for _ in 0..self.grain_count(size.area()) {
            let origin = Point::new(rng.gen::<f64>() * w, rng.gen::<f64>() * h);
            let gray = (180.0 + rng.gen::<f64>() * 75.0).floor() as u8;
            let alpha = 0.1 + rng.gen::<f64>() * 0.1;
            surface.fill_rect(
                Rect {
                    origin,
                    width: 1.0,
                    height: 1.0,
                },
                Rgba::gray(gray, alpha),
            )?;
        }

        for _ in 0..self.config.scratches {
            let from = Point::new(rng.gen::<f64>() * w, rng.gen::<f64>() * h);
            let angle = rng.gen::<f64>() * PI * 2.0;
            let length = rng.gen::<f64>() * self.config.scratch_max_length + 10.0;
            let width = rng.gen::<f64>() * self.config.scratch_max_width + 0.5;
            let to = Point::new(from.x + length * angle.cos(), from.y + length * angle.sin());
            let gray = (100.0 + rng.gen::<f64>() * 50.0).floor() as u8;
            let alpha = 0.2 + rng.gen::<f64>() * 0.2;
            surface.stroke_line(&Stroke {
                from,
                to,
                width,
                cap: LineCap::Round,
                color: Rgba::gray(gray, alpha),
            })?;
        }

        surface.fill_radial_gradient(&self.vignette(w, h))
    }

    fn vignette(&self, w: f64, h: f64) -> RadialGradient {
        let max_dim = w.max(h);
        RadialGradient {
            center: Point::new(w / 2.0, h / 2.0),
            inner_radius: max_dim * self.config.vignette_inner,
            outer_radius: max_dim * self.config.vignette_outer,
            stops: VIGNETTE_STOPS
                .iter()
                .map(|&(offset, alpha)| ColorStop {
                    offset,
                    color: Rgba::gray(0, alpha),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grain_count_follows_density() {
        let t = TextureLayer::default();
        assert_eq!(t.grain_count(1_000_000), 50_000);
        assert_eq!(t.grain_count(0), 0);
        // 3 * 0.05 = 0.15 still draws one mark.
        assert_eq!(t.grain_count(3), 1);
    }

    #[test]
    fn vignette_geometry_uses_larger_dimension() {
        let g = TextureLayer::default().vignette(800.0, 600.0);
        assert_eq!(g.center, Point::new(400.0, 300.0));
        assert!((g.inner_radius - 320.0).abs() < 1e-9);
        assert!((g.outer_radius - 560.0).abs() < 1e-9);
    }

    #[test]
    fn vignette_stops_run_transparent_to_opaque() {
        let g = TextureLayer::default().vignette(10.0, 10.0);
        let alphas: Vec<f64> = g.stops.iter().map(|s| s.color.alpha).collect();
        assert_eq!(alphas, vec![0.0, 0.75, 1.0]);
        assert_eq!(g.stops[0].offset, 0.0);
        assert_eq!(g.stops[2].offset, 1.0);
    }
}
