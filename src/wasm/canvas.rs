use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, ImageData};

use crate::error::{BackdropError, Result};
use crate::surface::{PixelBuffer, RadialGradient, Rect, Rgba, Size, Stroke, Surface};

impl From<BackdropError> for JsValue {
    fn from(err: BackdropError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn js_err(err: JsValue) -> BackdropError {
    BackdropError::Surface(format!("{err:?}"))
}

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_document(document: &Document, id: &'static str) -> Result<Self> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or(BackdropError::MissingElement(id))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BackdropError::MissingElement(id))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or(BackdropError::MissingContext(id))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BackdropError::MissingContext(id))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, size: Size) {
        // Assigning either dimension resets the backing store.
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn clear(&mut self) -> Result<()> {
        let size = self.size();
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(size.width), f64::from(size.height));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) -> Result<()> {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx
            .fill_rect(rect.origin.x, rect.origin.y, rect.width, rect.height);
        Ok(())
    }

    fn stroke_line(&mut self, stroke: &Stroke) -> Result<()> {
        self.ctx.set_stroke_style_str(&stroke.color.to_string());
        self.ctx.set_line_width(stroke.width);
        self.ctx.set_line_cap(stroke.cap.as_str());
        self.ctx.begin_path();
        self.ctx.move_to(stroke.from.x, stroke.from.y);
        self.ctx.line_to(stroke.to.x, stroke.to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient) -> Result<()> {
        let g = self
            .ctx
            .create_radial_gradient(
                gradient.center.x,
                gradient.center.y,
                gradient.inner_radius,
                gradient.center.x,
                gradient.center.y,
                gradient.outer_radius,
            )
            .map_err(js_err)?;
        for stop in &gradient.stops {
            g.add_color_stop(stop.offset as f32, &stop.color.to_string())
                .map_err(js_err)?;
        }
        self.ctx.set_fill_style_canvas_gradient(&g);
        let size = self.size();
        self.ctx
            .fill_rect(0.0, 0.0, f64::from(size.width), f64::from(size.height));
        Ok(())
    }

    fn put_pixels(&mut self, pixels: &PixelBuffer) -> Result<()> {
        let size = pixels.size();
        // ImageData rejects empty dimensions.
        if size.area() == 0 {
            return Ok(());
        }
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(pixels.data()),
            size.width,
            size.height,
        )
        .map_err(js_err)?;
        self.ctx.put_image_data(&image, 0.0, 0.0).map_err(js_err)
    }
}
