use crate::constants::CANVAS_STYLE;
use globe_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        toggle_class(&body, class, on);
    }
}

/// Create the render canvas and append it to `mount`.
pub fn create_canvas(
    document: &web::Document,
    mount: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("canvas cast: {:?}", e))?;
    canvas
        .set_attribute("style", CANVAS_STYLE)
        .map_err(|e| anyhow::anyhow!("canvas style: {:?}", e))?;
    mount
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

/// Viewport of `mount` at the current device pixel ratio, capped at `max_pixel_ratio`.
pub fn mount_viewport(mount: &web::Element, max_pixel_ratio: f64) -> Viewport {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    Viewport::new(
        mount.client_width() as f64,
        mount.client_height() as f64,
        dpr,
        max_pixel_ratio,
    )
}

/// Size the canvas backing store to the mount and return the viewport used.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    mount: &web::Element,
    max_pixel_ratio: f64,
) -> Viewport {
    let viewport = mount_viewport(mount, max_pixel_ratio);
    let (w, h) = viewport.backing_size();
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
    viewport
}
