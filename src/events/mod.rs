use skyfall_core::Journey;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod lifecycle;
mod pointer;
mod wheel;

/// Shared handles for every DOM listener.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub journey: Rc<RefCell<Journey>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wheel::wire_wheel(&w);
    pointer::wire_click(&w);
    lifecycle::wire_journey_start(&w);
    lifecycle::wire_resize(&w);
}
