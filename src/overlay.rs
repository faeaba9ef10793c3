use web_sys as web;

// The host page provides this element (a button or banner); we only toggle
// its visibility around the motion-permission flow.
pub const MOTION_BUTTON_ID: &str = "motion-permission";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MOTION_BUTTON_ID) {
        _ = el.class_list().remove_1("hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MOTION_BUTTON_ID) {
        _ = el.class_list().add_1("hidden");
    }
}
