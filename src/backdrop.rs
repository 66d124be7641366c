use rand::Rng;

use crate::config::{NoiseConfig, TextureConfig};
use crate::error::Result;
use crate::noise::NoiseLayer;
use crate::surface::{Size, Surface};
use crate::texture::TextureLayer;

/// Animation time accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    time: f64,
    step: f64,
}

impl Clock {
    pub fn new(step: f64) -> Self {
        Self {
            time: 0.0,
            step: step.abs(),
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn advance(&mut self) -> f64 {
        self.time += self.step;
        self.time
    }
}

/// Both layers plus the state that drives them between frames.
pub struct Backdrop<S, R> {
    texture_surface: S,
    noise_surface: S,
    texture: TextureLayer,
    noise: NoiseLayer,
    clock: Clock,
    rng: R,
}

impl<S: Surface, R: Rng> Backdrop<S, R> {
    pub fn new(texture_surface: S, noise_surface: S, rng: R) -> Self {
        Self::with_config(
            texture_surface,
            noise_surface,
            rng,
            TextureConfig::default(),
            NoiseConfig::default(),
        )
    }

    pub fn with_config(
        texture_surface: S,
        noise_surface: S,
        rng: R,
        texture: TextureConfig,
        noise: NoiseConfig,
    ) -> Self {
        Self {
            texture_surface,
            noise_surface,
            texture: TextureLayer::new(texture),
            clock: Clock::new(noise.speed),
            noise: NoiseLayer::new(noise),
            rng,
        }
    }

    /// Match both surfaces to `size` and repaint the texture, then the noise.
    pub fn resize(&mut self, size: Size) -> Result<()> {
        log::debug!("resizing backdrop to {}x{}", size.width, size.height);
        self.texture_surface.resize(size);
        self.noise_surface.resize(size);
        self.texture.draw(&mut self.texture_surface, &mut self.rng)?;
        self.draw_noise()
    }

    /// Advance time by one step and repaint the noise layer only.
    pub fn tick(&mut self) -> Result<()> {
        self.clock.advance();
        self.draw_noise()
    }

    fn draw_noise(&mut self) -> Result<()> {
        self.noise
            .draw(&mut self.noise_surface, &mut self.rng, self.clock.time())
    }

    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn texture_surface(&self) -> &S {
        &self.texture_surface
    }

    pub fn noise_surface(&self) -> &S {
        &self.noise_surface
    }
}
