//! Animated paper-grain and noise backdrop for a web page.
//!
//! The drawing logic is platform-neutral and paints through [`Surface`]; the
//! wasm32 build wires it to two `<canvas>` elements and the browser's frame
//! and resize events.

pub mod backdrop;
pub mod config;
pub mod error;
pub mod noise;
pub mod surface;
pub mod texture;

pub use backdrop::{Backdrop, Clock};
pub use error::{BackdropError, Result};
pub use surface::{Size, Surface};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod canvas;
    mod dom;
    mod render;

    pub use canvas::CanvasSurface;
    pub use dom::insert_top_bar_decoration;
    pub use render::{mount, Handle, NOISE_CANVAS_ID, TEXTURE_CANVAS_ID};

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("backdrop starting");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        dom::insert_top_bar_decoration(&document);

        let handle = render::mount(&document)?;
        render::start(handle)?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    insert_top_bar_decoration, mount, CanvasSurface, Handle, NOISE_CANVAS_ID, TEXTURE_CANVAS_ID,
};
