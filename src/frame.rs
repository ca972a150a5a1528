use crate::dom;
use crate::hud;
use crate::instances::{collect_instances, SphereInstance};
use crate::render;
use instant::Instant;
use skyfall_core::Journey;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub journey: Rc<RefCell<Journey>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub epoch: Instant,
    pub instances: Vec<SphereInstance>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        journey: Rc<RefCell<Journey>>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            journey,
            canvas,
            gpu,
            epoch: Instant::now(),
            instances: Vec::with_capacity(crate::constants::INITIAL_INSTANCE_CAPACITY),
        }
    }

    pub fn frame(&mut self) {
        let time = self.epoch.elapsed().as_secs_f32();
        let report = self.journey.borrow_mut().advance_frame(time);
        for ev in &report.events {
            log::debug!("[frame] {:?} mode={:?}", ev, report.camera_mode);
        }

        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        {
            let j = self.journey.borrow();
            collect_instances(&j, &mut self.instances);
            g.update_globals(&j.camera().camera, j.environment());
        }
        g.upload_instances(&self.instances);
        if let Err(e) = g.render() {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Progress integration and page labels, ticked on its own
/// requestAnimationFrame chain so a slow render never stalls scrolling.
pub fn progress_tick(journey: &Rc<RefCell<Journey>>) {
    let report = journey.borrow_mut().tick_progress();
    if let Some(document) = dom::window_document() {
        hud::show_layer(&document, report.layer);
        hud::apply_scroll_hint(&document, report.hint);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Run `step` on every animation frame for the lifetime of the page.
pub fn start_loop(mut step: impl FnMut() + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        step();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
