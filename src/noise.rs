//! Animated two-tone noise field.
//!
//! Each frame samples a sum of three travelling sine waves at every pixel,
//! paints the field blue/white with an outline colour wherever a pixel and one
//! of its neighbours straddle the band around the threshold, then strokes a
//! couple of translucent scratches over the result.

use rand::Rng;

use crate::config::NoiseConfig;
use crate::error::Result;
use crate::surface::{LineCap, PixelBuffer, Point, Rgba, Size, Stroke, Surface};

pub const OUTLINE: [u8; 4] = [89, 114, 222, 255];
pub const HIGH: [u8; 4] = [7, 54, 254, 255];
pub const LOW: [u8; 4] = [255, 255, 255, 255];

const SCRATCH_ALPHA: f64 = 0.4;
const SCRATCH_LIGHT_BLUE: (u8, u8, u8) = (173, 216, 230);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    High,
    Low,
}

/// Noise values for one frame, row-major, sized to the surface it was sampled for.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    size: Size,
    values: Vec<f64>,
}

impl NoiseField {
    pub fn from_fn(size: Size, mut f: impl FnMut(u32, u32) -> f64) -> Self {
        let mut values = Vec::with_capacity(size.area() as usize);
        for y in 0..size.height {
            for x in 0..size.width {
                values.push(f(x, y));
            }
        }
        Self { size, values }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.values[y as usize * self.size.width as usize + x as usize]
    }

    /// In-bounds 8-neighbourhood of `(x, y)`. Edge pixels yield fewer than 8.
    pub fn neighbors(&self, x: u32, y: u32) -> impl Iterator<Item = f64> + '_ {
        let (w, h) = (i64::from(self.size.width), i64::from(self.size.height));
        let (x, y) = (i64::from(x), i64::from(y));
        (-1..=1i64)
            .flat_map(move |dx| (-1..=1i64).map(move |dy| (x + dx, y + dy)))
            .filter(move |&(nx, ny)| (nx, ny) != (x, y))
            .filter(move |&(nx, ny)| nx >= 0 && nx < w && ny >= 0 && ny < h)
            .map(move |(nx, ny)| self.get(nx as u32, ny as u32))
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoiseLayer {
    config: NoiseConfig,
}

impl NoiseLayer {
    pub fn new(config: NoiseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    pub fn value(&self, x: f64, y: f64, t: f64) -> f64 {
        let s = self.config.scale;
        let v = (x * s + t).sin() * 0.5
            + (y * s * 0.8 + t * 0.7).sin() * 0.5
            + ((x + y) * s * 0.6 + t * 1.2).sin() * 0.5;
        v.abs().powf(self.config.sharpness)
    }

    pub fn sample(&self, size: Size, t: f64) -> NoiseField {
        NoiseField::from_fn(size, |x, y| self.value(f64::from(x), f64::from(y), t))
    }

    pub fn tone(&self, value: f64) -> Tone {
        if value > self.config.threshold {
            Tone::High
        } else {
            Tone::Low
        }
    }

    /// Whether `value` and `neighbor` lie on opposite sides of the outline band.
    pub fn straddles(&self, value: f64, neighbor: f64) -> bool {
        let lo = self.config.threshold - self.config.fuzziness;
        let hi = self.config.threshold + self.config.fuzziness;
        (value > lo && neighbor <= hi) || (value <= hi && neighbor > lo)
    }

    pub fn is_outline(&self, field: &NoiseField, x: u32, y: u32) -> bool {
        let value = field.get(x, y);
        field.neighbors(x, y).any(|n| self.straddles(value, n))
    }

    /// Classify every pixel of a fully sampled field.
    pub fn paint(&self, field: &NoiseField) -> PixelBuffer {
        let size = field.size();
        let mut pixels = PixelBuffer::new(size);
        for y in 0..size.height {
            for x in 0..size.width {
                let rgba = if self.is_outline(field, x, y) {
                    OUTLINE
                } else {
                    match self.tone(field.get(x, y)) {
                        Tone::High => HIGH,
                        Tone::Low => LOW,
                    }
                };
                pixels.set_pixel(x, y, rgba);
            }
        }
        pixels
    }

    pub fn draw<S, R>(&self, surface: &mut S, rng: &mut R, time: f64) -> Result<()>
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        let size = surface.size();
        let field = self.sample(size, time);
        surface.put_pixels(&self.paint(&field))?;

        let (w, h) = (f64::from(size.width), f64::from(size.height));
        let reach = self.config.scratch_reach;
        for _ in 0..self.config.scratches {
            let from = Point::new(rng.gen::<f64>() * w, rng.gen::<f64>() * h);
            let to = Point::new(
                from.x + (rng.gen::<f64>() * reach * 2.0 - reach),
                from.y + (rng.gen::<f64>() * reach * 2.0 - reach),
            );
            let color = if rng.gen::<f64>() > 0.5 {
                Rgba::gray(255, SCRATCH_ALPHA)
            } else {
                let (r, g, b) = SCRATCH_LIGHT_BLUE;
                Rgba::new(r, g, b, SCRATCH_ALPHA)
            };
            let width = rng.gen::<f64>() * 1.5 + 0.5;
            surface.stroke_line(&Stroke {
                from,
                to,
                width,
                cap: LineCap::Butt,
                color,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer() -> NoiseLayer {
        NoiseLayer::default()
    }

    #[test]
    fn value_is_deterministic() {
        let l = layer();
        for &(x, y, t) in &[(0.0, 0.0, 0.0), (123.0, 45.0, 0.005), (1919.0, 1079.0, 42.0)] {
            assert_eq!(l.value(x, y, t).to_bits(), l.value(x, y, t).to_bits());
        }
    }

    #[test]
    fn value_matches_wave_sum() {
        let l = layer();
        let (x, y, t) = (10.0_f64, 20.0_f64, 0.3_f64);
        let expected = ((x * 0.01 + t).sin() * 0.5
            + (y * 0.01 * 0.8 + t * 0.7).sin() * 0.5
            + ((x + y) * 0.01 * 0.6 + t * 1.2).sin() * 0.5)
            .abs();
        assert!((l.value(x, y, t) - expected).abs() < 1e-12);
        assert!(l.value(0.0, 0.0, 0.0).abs() < 1e-12);
    }

    #[test]
    fn threshold_is_exclusive() {
        let l = layer();
        assert_eq!(l.tone(0.5), Tone::Low);
        assert_eq!(l.tone(0.500_001), Tone::High);
    }

    #[test]
    fn corner_and_edge_neighbor_counts() {
        let field = NoiseField::from_fn(Size::new(4, 3), |_, _| 0.0);
        assert_eq!(field.neighbors(0, 0).count(), 3);
        assert_eq!(field.neighbors(3, 2).count(), 3);
        assert_eq!(field.neighbors(1, 0).count(), 5);
        assert_eq!(field.neighbors(0, 1).count(), 5);
        assert_eq!(field.neighbors(1, 1).count(), 8);
    }

    #[test]
    fn uniform_half_field_is_all_outline() {
        let l = layer();
        let field = NoiseField::from_fn(Size::new(3, 3), |_, _| 0.5);
        let pixels = l.paint(&field);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(pixels.pixel(x, y), OUTLINE);
            }
        }
    }

    #[test]
    fn isolated_pixel_has_no_outline() {
        let l = layer();
        let half = l.paint(&NoiseField::from_fn(Size::new(1, 1), |_, _| 0.5));
        assert_eq!(half.pixel(0, 0), LOW);
        let high = l.paint(&NoiseField::from_fn(Size::new(1, 1), |_, _| 0.9));
        assert_eq!(high.pixel(0, 0), HIGH);
    }

    #[test]
    fn band_exterior_regions_are_flat() {
        let l = layer();
        // Left half far below the band, right half far above it.
        let field = NoiseField::from_fn(Size::new(6, 2), |x, _| if x < 3 { 0.1 } else { 1.2 });
        let pixels = l.paint(&field);
        assert_eq!(pixels.pixel(0, 0), LOW);
        assert_eq!(pixels.pixel(5, 1), HIGH);
        // Columns touching the transition see a straddling neighbour.
        assert_eq!(pixels.pixel(2, 0), OUTLINE);
        assert_eq!(pixels.pixel(3, 1), OUTLINE);
    }

    #[test]
    fn straddle_band_edges() {
        let l = layer();
        assert!(!l.straddles(0.2, 0.2));
        assert!(l.straddles(0.2, 0.200_001));
        assert!(l.straddles(0.799_999, 0.799_999));
        assert!(!l.straddles(0.800_001, 0.800_001));
        assert!(l.straddles(0.1, 0.9));
        assert!(l.straddles(0.9, 0.1));
    }

    #[test]
    fn paint_is_idempotent() {
        let l = layer();
        let field = l.sample(Size::new(40, 30), 1.25);
        assert_eq!(l.paint(&field), l.paint(&field));
    }

    #[test]
    fn sampled_field_matches_requested_size() {
        let field = layer().sample(Size::new(7, 5), 0.0);
        assert_eq!(field.size(), Size::new(7, 5));
        assert_eq!(field.get(6, 4), layer().value(6.0, 4.0, 0.0));
    }
}
