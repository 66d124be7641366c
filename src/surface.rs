//! Drawing primitives shared by both layers and the `Surface` capability they
//! paint through. The browser build implements it over a 2D canvas context.

use std::fmt;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

/// Straight-alpha color. `alpha` is kept in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn gray(value: u8, alpha: f64) -> Self {
        Self::new(value, value, value, alpha)
    }
}

/// CSS `rgba()` notation, as accepted by canvas fill and stroke styles.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub cap: LineCap,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

/// Gradient between two concentric circles.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub stops: Vec<ColorStop>,
}

/// Tightly packed RGBA8 pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: Size,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            data: vec![0; size.area() as usize * 4],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size.width as usize + x as usize) * 4
    }
}

/// A drawable raster the layers paint into.
///
/// Resizing discards prior content, matching canvas semantics.
pub trait Surface {
    fn size(&self) -> Size;
    fn resize(&mut self, size: Size);
    fn clear(&mut self) -> Result<()>;
    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()>;
    fn stroke_line(&mut self, stroke: &Stroke) -> Result<()>;
    /// Fill the whole surface with `gradient`.
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient) -> Result<()>;
    /// Replace the surface contents with `pixels`, anchored at the origin.
    fn put_pixels(&mut self, pixels: &PixelBuffer) -> Result<()>;
}
