#![cfg(target_arch = "wasm32")]

use paper_noise_wasm::{
    insert_top_bar_decoration, mount, Size, Surface, NOISE_CANVAS_ID, TEXTURE_CANVAS_ID,
};
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn ensure_canvas(document: &Document, id: &str) {
    if document.get_element_by_id(id).is_none() {
        let canvas = document.create_element("canvas").unwrap();
        canvas.set_id(id);
        document.body().unwrap().append_child(&canvas).unwrap();
    }
}

#[wasm_bindgen_test]
fn mount_sizes_both_canvases_to_viewport() {
    let document = document();
    ensure_canvas(&document, TEXTURE_CANVAS_ID);
    ensure_canvas(&document, NOISE_CANVAS_ID);

    let window = web_sys::window().unwrap();
    let expected = Size::new(
        window.inner_width().unwrap().as_f64().unwrap() as u32,
        window.inner_height().unwrap().as_f64().unwrap() as u32,
    );

    let handle = mount(&document).expect("mount");
    let backdrop = handle.borrow();
    assert_eq!(backdrop.texture_surface().size(), expected);
    assert_eq!(backdrop.noise_surface().size(), expected);
    drop(backdrop);

    handle.borrow_mut().tick().expect("tick");
}

#[wasm_bindgen_test]
fn decoration_is_appended_once_per_call() {
    let document = document();
    let bar = document.create_element("div").unwrap();
    bar.set_id("top-bar-container");
    document.body().unwrap().append_child(&bar).unwrap();

    insert_top_bar_decoration(&document);

    assert_eq!(bar.child_element_count(), 1);
    let circle = bar.first_element_child().unwrap();
    assert!(circle.class_list().contains("rounded-full"));
    assert!(circle.class_list().contains("border-gray-400"));
    bar.remove();
}

#[wasm_bindgen_test]
fn missing_top_bar_is_not_fatal() {
    insert_top_bar_decoration(&document());
}
