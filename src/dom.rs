use wasm_bindgen::JsCast;
use web_sys as web;

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the resulting `(width, height, pixel_ratio)` in device pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f32, f32, f32) {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr).ceil() as u32).max(1);
    let h_px = ((rect.height() * dpr).ceil() as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px as f32, h_px as f32, dpr as f32)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
