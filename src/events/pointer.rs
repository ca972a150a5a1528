use super::InputWiring;
use crate::constants::HOTSPOT_PICK_SLACK;
use crate::input;
use glam::Vec2;
use skyfall_core::HotspotAction;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub(super) fn wire_click(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if !w.journey.borrow().is_started() {
            return;
        }
        let rect = w.canvas.get_bounding_client_rect();
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let Some(ndc) = input::client_to_ndc(
            client,
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ) else {
            return;
        };

        let hit = {
            let j = w.journey.borrow();
            let (ro, rd) = j.camera().camera.ray_from_ndc(ndc);
            let candidates = j
                .scene()
                .hotspots()
                .map(|(_, o, action)| (action, o.position, o.world_radius() * HOTSPOT_PICK_SLACK));
            let found = input::nearest_hit(ro, rd, candidates);
            found
        };

        if let Some((action, point)) = hit {
            log::info!("[click] hotspot {:?}", action);
            w.journey.borrow_mut().burst_sparkles(point);
            invoke_page_callback(action);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

/// Call `window[action.callback_name()]()` when the page defines it.
fn invoke_page_callback(action: HotspotAction) {
    let Some(wnd) = web::window() else {
        return;
    };
    let name = action.callback_name();
    match js_sys::Reflect::get(&wnd, &JsValue::from_str(name)) {
        Ok(v) if v.is_function() => {
            let f: js_sys::Function = v.unchecked_into();
            if let Err(e) = f.call0(&JsValue::NULL) {
                log::error!("[click] {} threw: {:?}", name, e);
            }
        }
        _ => log::warn!("[click] page has no {} handler", name),
    }
}
