//! Device-orientation input, including the iOS 13+ permission dance.
//!
//! A missing API or a denied grant leaves the simulation in pointer/touch
//! mode; nothing here is fatal.

use crate::core::{InputSample, Simulation};
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire_orientation(document: &web::Document, sim: Rc<RefCell<Simulation>>) {
    let Some(window) = web::window() else { return };
    if !js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("DeviceOrientationEvent"))
        .unwrap_or(false)
    {
        log::info!("[motion] DeviceOrientationEvent unsupported; pointer input only");
        return;
    }

    match request_permission_fn(&window) {
        // iOS 13+: the permission prompt must come from a user gesture, so
        // surface the page's button and hook the request onto its click
        Some(request) => {
            overlay::show(document);
            let doc = document.clone();
            dom::add_click_listener(document, overlay::MOTION_BUTTON_ID, move || {
                let sim = sim.clone();
                let request = request.clone();
                let doc = doc.clone();
                spawn_local(async move {
                    match await_permission(&request).await {
                        Ok(state) if state == "granted" => {
                            log::info!("[motion] permission granted");
                            overlay::hide(&doc);
                            add_orientation_listener(sim);
                        }
                        Ok(state) => {
                            log::info!("[motion] permission {:?}; staying pointer-only", state);
                        }
                        Err(e) => {
                            log::warn!("[motion] permission request failed: {:?}", e);
                        }
                    }
                });
            });
        }
        None => add_orientation_listener(sim),
    }
}

/// `DeviceOrientationEvent.requestPermission`, when the platform defines it.
/// web-sys has no binding for the static, so go through Reflect.
fn request_permission_fn(window: &web::Window) -> Option<js_sys::Function> {
    let ctor =
        js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("DeviceOrientationEvent")).ok()?;
    js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

async fn await_permission(request: &js_sys::Function) -> Result<String, JsValue> {
    let promise: js_sys::Promise = request.call0(&JsValue::UNDEFINED)?.dyn_into()?;
    let state = JsFuture::from(promise).await?;
    Ok(state.as_string().unwrap_or_default())
}

fn add_orientation_listener(sim: Rc<RefCell<Simulation>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        sim.borrow_mut().handle_input(InputSample::Orientation {
            gamma: ev.gamma(),
            beta: ev.beta(),
        });
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
