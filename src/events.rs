use globe_core::{Camera, Interaction, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod pointer;
mod window;

/// Handles shared between the DOM listeners and the frame loop.
#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub mount: web::Element,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub camera: Rc<RefCell<Camera>>,
    pub interaction: Rc<RefCell<Interaction>>,
    pub paused: Rc<RefCell<bool>>,
    pub max_pixel_ratio: f64,
}

pub fn wire_input_handlers(w: InputWiring) {
    pointer::wire_pointermove(&w);
    pointer::wire_pointerleave(&w);
    window::wire_resize(&w);
    window::wire_visibility(&w);
}
