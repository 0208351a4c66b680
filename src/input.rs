use glam::Vec2;
use web_sys as web;

/// Pointer position relative to the element's top-left corner, in CSS pixels.
#[inline]
pub fn surface_css_px(client_x: f64, client_y: f64, left: f64, top: f64) -> Vec2 {
    Vec2::new((client_x - left) as f32, (client_y - top) as f32)
}

/// Map a CSS-pixel position inside a `width` x `height` surface to normalized
/// device coordinates (x right, y up, both in [-1, 1]).
///
/// Returns `None` for an empty surface.
#[inline]
pub fn normalized_pointer(css: Vec2, width: f64, height: f64) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let x = (css.x / width as f32) * 2.0 - 1.0;
    let y = -((css.y / height as f32) * 2.0 - 1.0);
    Some(Vec2::new(x, y).clamp(Vec2::NEG_ONE, Vec2::ONE))
}

/// Pointer sample in both spaces the handlers need.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub css: Vec2,
    pub ndc: Vec2,
}

#[inline]
pub fn sample_from_rect(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Option<PointerSample> {
    let css = surface_css_px(client_x, client_y, left, top);
    normalized_pointer(css, width, height).map(|ndc| PointerSample { css, ndc })
}

// ---------------- DOM wrappers ----------------
#[inline]
pub fn pointer_sample(ev: &web::PointerEvent, surface: &web::Element) -> Option<PointerSample> {
    let rect = surface.get_bounding_client_rect();
    sample_from_rect(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    )
}
