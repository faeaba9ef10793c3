#![cfg(target_arch = "wasm32")]
use crate::core::{Simulation, StarfieldConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

const CANVAS_ID: &str = "starfield-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starveil starting");

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
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (width, height, pixel_ratio) = dom::sync_canvas_backing_size(&canvas);

    // Capability absent is a logged no-op, not an error
    let Some(ctx) = render::context_2d(&canvas) else {
        log::warn!("[starfield] 2d canvas context unavailable; not starting");
        return Ok(());
    };

    let config = config_from_attributes(&canvas)?;
    let star_color = config.star_color.clone();
    let sim = Simulation::new(
        config,
        width,
        height,
        pixel_ratio,
        js_sys::Date::now() as u64,
    )?;
    log::info!(
        "[starfield] {} stars, model {:?}, {}x{}@{}",
        sim.stars().len(),
        sim.config().model,
        width,
        height,
        pixel_ratio
    );
    let sim = Rc::new(RefCell::new(sim));

    events::wire_resize(&canvas, sim.clone());
    events::wire_pointer(&canvas, &document, sim.clone());
    events::wire_touch(&canvas, sim.clone());
    events::wire_orientation(&document, sim.clone());

    frame::start_loop(frame::FrameContext {
        sim,
        renderer: render::CanvasRenderer::new(ctx, star_color),
        marks: Vec::new(),
    });
    Ok(())
}

/// Read optional `data-*` overrides off the canvas element; anything the
/// page does not set keeps its default.
fn config_from_attributes(
    canvas: &web::HtmlCanvasElement,
) -> Result<StarfieldConfig, core::ConfigError> {
    let mut config = StarfieldConfig::default();
    if let Some(model) = canvas.get_attribute("data-model") {
        config.model = model.parse()?;
    }
    if let Some(count) = canvas.get_attribute("data-star-count") {
        match count.parse::<usize>() {
            Ok(n) => config.star_count = Some(n),
            Err(_) => log::warn!("[starfield] ignoring bad data-star-count {:?}", count),
        }
    }
    if let Some(color) = canvas.get_attribute("data-star-color") {
        config.star_color = color;
    }
    Ok(config)
}
