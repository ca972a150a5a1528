#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, STAR_CATALOG_URL};
use skyfall_core::{Journey, JourneyParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod background;
mod constants;
mod dom;
mod events;
mod frame;
mod hud;
mod input;
mod instances;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("skyfall starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let params = JourneyParams::with_seed(rand::random::<u64>());
    let journey = Rc::new(RefCell::new(Journey::new(params)));
    journey
        .borrow_mut()
        .set_viewport(width as f32, height as f32);
    hud::show_layer(&document, journey.borrow().layer());

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        journey: journey.clone(),
    });

    let journey_stars = journey.clone();
    spawn_local(async move {
        match assets::load_star_catalog(STAR_CATALOG_URL).await {
            Ok(stars) => journey_stars.borrow_mut().add_catalog_stars(stars),
            Err(e) => log::warn!("[stars] {}; keeping the procedural field", e),
        }
    });

    // Integrate scroll input while the adapter request is still pending.
    let journey_progress = journey.clone();
    frame::start_loop(move || frame::progress_tick(&journey_progress));

    // Without WebGPU the journey still runs; only drawing is skipped.
    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[gpu] rendering disabled");
    }
    hud::hide_loading(&document);

    let mut frame_ctx = frame::FrameContext::new(journey, canvas, gpu);
    frame::start_loop(move || frame_ctx.frame());

    Ok(())
}
