use super::InputWiring;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire_wheel(w: &InputWiring) {
    let journey = w.journey.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let accepted = journey.borrow_mut().on_wheel(ev.delta_y() as f32);
        if !accepted {
            log::trace!("[wheel] ignored dy={:.1}", ev.delta_y());
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
