use crate::constants::{LAYER_INFO_ID, LOADING_ID, SCROLL_HINT_ID};
use crate::dom;
use skyfall_core::{LayerDescriptor, ScrollHint};
use web_sys as web;

/// Write the active layer into `#info h2` / `#info p`. Missing nodes are skipped.
pub fn show_layer(document: &web::Document, layer: &LayerDescriptor) {
    let Some(info) = document.get_element_by_id(LAYER_INFO_ID) else {
        return;
    };
    if let Ok(Some(title)) = info.query_selector("h2") {
        if title.text_content().as_deref() != Some(layer.name) {
            title.set_text_content(Some(layer.name));
        }
    }
    if let Ok(Some(body)) = info.query_selector("p") {
        if body.text_content().as_deref() != Some(layer.description) {
            body.set_text_content(Some(layer.description));
        }
    }
}

/// Reflect the scroll hint state: faded is transparent, removed is gone.
pub fn apply_scroll_hint(document: &web::Document, hint: ScrollHint) {
    let Some(el) = dom::html_element(document, SCROLL_HINT_ID) else {
        return;
    };
    match hint {
        ScrollHint::Visible => {}
        ScrollHint::Faded => dom::set_style(&el, "opacity", "0"),
        ScrollHint::Removed => {
            dom::set_style(&el, "opacity", "0");
            dom::set_style(&el, "display", "none");
        }
    }
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = dom::html_element(document, LOADING_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for pages without the CSS class
        dom::set_style(&el, "display", "none");
    }
}
