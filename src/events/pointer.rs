use crate::core::{client_to_canvas_px, InputSample, Simulation};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in canvas device-pixel space, or `None` while the
/// canvas has no layout extent.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

pub fn wire_pointer(
    canvas: &web::HtmlCanvasElement,
    document: &web::Document,
    sim: Rc<RefCell<Simulation>>,
) {
    // pointermove
    {
        let canvas = canvas.clone();
        let sim = sim.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if let Some(pos) = pointer_canvas_px(&ev, &canvas) {
                sim.borrow_mut()
                    .handle_input(InputSample::Pointer { x: pos.x, y: pos.y });
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // mouseleave: the aim point becomes absent so re-entry cannot emit a
    // spurious full-screen delta
    {
        let closure = Closure::wrap(Box::new(move || {
            sim.borrow_mut().pointer_left();
        }) as Box<dyn FnMut()>);
        _ = document.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
