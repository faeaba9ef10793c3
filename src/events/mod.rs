mod orientation;
mod pointer;
mod touch;

pub use orientation::wire_orientation;
pub use pointer::wire_pointer;
pub use touch::wire_touch;

use crate::core::Simulation;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store and the simulation's screen state in sync
/// with the window; every star is re-placed when the size changes.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, sim: Rc<RefCell<Simulation>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (width, height, pixel_ratio) = dom::sync_canvas_backing_size(&canvas);
        if let Err(e) = sim.borrow_mut().resize(width, height, pixel_ratio) {
            log::warn!("[starfield] resize rejected: {e}");
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
