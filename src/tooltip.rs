use crate::constants::{CURSOR_HOVER_CLASS, CURSOR_ID, TOOLTIP_ID, TOOLTIP_VISIBLE_CLASS};
use crate::dom;
use crate::markup::tooltip_html;
use glam::Vec2;
use web_sys as web;

/// Show the tooltip for `name` at `at` (CSS pixels relative to the mount).
pub fn show(document: &web::Document, name: &str, at: Vec2) {
    if let Some(cursor) = document.get_element_by_id(CURSOR_ID) {
        dom::toggle_class(&cursor, CURSOR_HOVER_CLASS, true);
    }
    if let Some(el) = dom::element_by_id(document, TOOLTIP_ID) {
        el.set_inner_html(&tooltip_html(name));
        let style = el.style();
        _ = style.set_property("left", &format!("{}px", at.x));
        _ = style.set_property("top", &format!("{}px", at.y));
        dom::toggle_class(&el, TOOLTIP_VISIBLE_CLASS, true);
    }
}

pub fn hide(document: &web::Document) {
    if let Some(cursor) = document.get_element_by_id(CURSOR_ID) {
        dom::toggle_class(&cursor, CURSOR_HOVER_CLASS, false);
    }
    if let Some(el) = document.get_element_by_id(TOOLTIP_ID) {
        dom::toggle_class(&el, TOOLTIP_VISIBLE_CLASS, false);
    }
}
