use super::InputWiring;
use crate::constants::PAUSED_BODY_CLASS;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resize the canvas backing store and camera aspect. The surface itself is
/// reconfigured by the renderer on the next frame.
fn apply_resize(w: &InputWiring) {
    let viewport = dom::sync_canvas_backing_size(&w.canvas, &w.mount, w.max_pixel_ratio);
    w.camera.borrow_mut().set_aspect(viewport.aspect());
    log::debug!(
        "[resize] css={}x{} backing={:?}",
        viewport.css_width,
        viewport.css_height,
        viewport.backing_size()
    );
}

pub(super) fn wire_resize(w: &InputWiring) {
    apply_resize(w);
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        apply_resize(&w);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub(super) fn wire_visibility(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let hidden = w.document.hidden();
        *w.paused.borrow_mut() = hidden;
        dom::set_body_class(&w.document, PAUSED_BODY_CLASS, hidden);
        log::debug!("[visibility] hidden={}", hidden);
    }) as Box<dyn FnMut()>);
    _ = w
        .document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
