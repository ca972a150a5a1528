use super::InputWiring;
use crate::constants::JOURNEY_START_EVENT;
use crate::dom;

/// The page dispatches `journeyStart` on window once the visitor is ready.
pub(super) fn wire_journey_start(w: &InputWiring) {
    let journey = w.journey.clone();
    dom::add_window_listener(JOURNEY_START_EVENT, move |_| {
        journey.borrow_mut().start();
    });
}

pub(super) fn wire_resize(w: &InputWiring) {
    let canvas = w.canvas.clone();
    let journey = w.journey.clone();
    dom::add_window_listener("resize", move |_| {
        let (width, height) = dom::sync_canvas_backing_size(&canvas);
        journey
            .borrow_mut()
            .set_viewport(width as f32, height as f32);
        log::debug!("[resize] {}x{}", width, height);
    });
}
