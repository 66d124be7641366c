use web_sys::Document;

pub const TOP_BAR_ID: &str = "top-bar-container";

const DECORATION_CLASSES: [&str; 8] = [
    "w-8",
    "h-8",
    "border-2",
    "border-gray-400",
    "rounded-full",
    "flex",
    "items-center",
    "justify-center",
];

/// Append the empty circle to the top bar. A missing container is logged and skipped.
pub fn insert_top_bar_decoration(document: &Document) {
    let Some(container) = document.get_element_by_id(TOP_BAR_ID) else {
        log::error!("Top bar container not found!");
        return;
    };

    let result = document.create_element("div").and_then(|circle| {
        for class in DECORATION_CLASSES {
            circle.class_list().add_1(class)?;
        }
        container.append_child(&circle).map(drop)
    });
    if let Err(err) = result {
        log::error!("failed to insert top bar decoration: {err:?}");
    }
}
