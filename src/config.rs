//! Fixed tuning constants for both layers.

/// Parameters of the animated noise layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    /// Spatial frequency applied to pixel coordinates.
    pub scale: f64,
    /// Time added per animation frame.
    pub speed: f64,
    pub sharpness: f64,
    pub threshold: f64,
    /// Half-width of the band around `threshold` used for outline detection.
    pub fuzziness: f64,
    pub scratches: usize,
    pub scratch_reach: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            scale: 0.01,
            speed: 0.005,
            sharpness: 1.0,
            threshold: 0.5,
            fuzziness: 0.3,
            scratches: 2,
            scratch_reach: 100.0,
        }
    }
}

/// Parameters of the static paper texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureConfig {
    /// Grain marks per pixel of surface area.
    pub grain_density: f64,
    pub scratches: usize,
    pub scratch_max_length: f64,
    pub scratch_max_width: f64,
    /// Vignette radii as fractions of the larger surface dimension.
    pub vignette_inner: f64,
    pub vignette_outer: f64,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            grain_density: 0.05,
            scratches: 20,
            scratch_max_length: 50.0,
            scratch_max_width: 1.5,
            vignette_inner: 0.4,
            vignette_outer: 0.7,
        }
    }
}
