use crate::core::{client_to_canvas_px, InputSample, Simulation};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn touch_canvas_px(touch: &web::Touch, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        Vec2::new(touch.client_x() as f32, touch.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

pub fn wire_touch(canvas: &web::HtmlCanvasElement, sim: Rc<RefCell<Simulation>>) {
    // touchmove: the first active touch drives the aim point
    {
        let canvas_px = canvas.clone();
        let sim = sim.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                if let Some(pos) = touch_canvas_px(&touch, &canvas_px) {
                    sim.borrow_mut()
                        .handle_input(InputSample::Touch { x: pos.x, y: pos.y });
                }
                // suppress scrolling/gestures while driving the field
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        // the listener must be non-passive for prevent_default to be honored
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }

    // touchend clears the aim point, same as pointer-leave
    {
        let closure = Closure::wrap(Box::new(move || {
            sim.borrow_mut().pointer_left();
        }) as Box<dyn FnMut()>);
        _ = canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
