use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Window};

use super::canvas::CanvasSurface;
use crate::backdrop::Backdrop;
use crate::error::{BackdropError, Result};
use crate::surface::Size;

pub const TEXTURE_CANVAS_ID: &str = "textureCanvas";
pub const NOISE_CANVAS_ID: &str = "noiseCanvas";

/// Shared backdrop state, owned jointly by the resize listener and the frame loop.
pub type Handle = Rc<RefCell<Backdrop<CanvasSurface, SmallRng>>>;

fn viewport(window: &Window) -> Result<Size> {
    let dim = |v: std::result::Result<JsValue, JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .ok_or_else(|| BackdropError::Surface("viewport size unavailable".into()))
    };
    let w = dim(window.inner_width())?;
    let h = dim(window.inner_height())?;
    Ok(Size::new(w as u32, h as u32))
}

fn resize(handle: &Handle) -> Result<()> {
    let window = window().ok_or(BackdropError::Surface("no window".into()))?;
    let size = viewport(&window)?;
    handle.borrow_mut().resize(size)
}

/// Bind both canvases in `document`, size them to the viewport and draw once.
pub fn mount(document: &Document) -> std::result::Result<Handle, JsValue> {
    let texture = CanvasSurface::from_document(document, TEXTURE_CANVAS_ID)?;
    let noise = CanvasSurface::from_document(document, NOISE_CANVAS_ID)?;
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let handle = Rc::new(RefCell::new(Backdrop::new(
        texture,
        noise,
        SmallRng::seed_from_u64(seed),
    )));
    resize(&handle)?;
    Ok(handle)
}

/// Redraw on viewport resize and animate the noise layer every frame.
pub fn start(handle: Handle) -> std::result::Result<(), JsValue> {
    let window = window().ok_or("no window")?;

    let resize_closure = {
        let handle = handle.clone();
        Closure::wrap(Box::new(move || {
            if let Err(err) = resize(&handle) {
                log::error!("resize failed: {err}");
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_handle = handle.clone();
    let frame_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        tick(&frame_handle);

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            if let Err(err) = frame_window.request_animation_frame(next.as_ref().unchecked_ref()) {
                log::error!("request_animation_frame failed: {err:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    // The first frame is drawn immediately, the rest on each display refresh.
    tick(&handle);
    if let Some(first) = g.borrow().as_ref() {
        window.request_animation_frame(first.as_ref().unchecked_ref())?;
    }
    log::info!("backdrop animation started");
    Ok(())
}

fn tick(handle: &Handle) {
    if let Err(err) = handle.borrow_mut().tick() {
        log::error!("frame failed: {err}");
    }
}
