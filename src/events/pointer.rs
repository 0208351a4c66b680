use super::InputWiring;
use crate::input;
use crate::tooltip;
use globe_core::HoverChange;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(sample) = input::pointer_sample(&ev, &w.mount) else {
            return;
        };

        let mut interaction = w.interaction.borrow_mut();
        interaction.pointer_moved(sample.ndc);

        let ray = w.camera.borrow().ray_from_ndc(sample.ndc);
        let scene = w.scene.borrow();
        let hit = scene.pick_marker(&ray);
        let change = interaction.set_hover(hit.map(|h| h.marker));

        match hit.and_then(|h| scene.marker_target(h.marker)) {
            Some(target) => tooltip::show(&w.document, target.name, sample.css),
            None => tooltip::hide(&w.document),
        }

        match change {
            HoverChange::Unchanged => {}
            HoverChange::Entered(i) | HoverChange::Switched { to: i, .. } => {
                log::debug!(
                    "[pointer] hover marker {} ({})",
                    i,
                    scene.marker_target(i).map_or("?", |t| t.name)
                );
            }
            HoverChange::Left(i) => log::debug!("[pointer] left marker {}", i),
        }
    }) as Box<dyn FnMut(_)>);

    _ = w
        .mount
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());

    closure.forget();
}

pub(super) fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if let HoverChange::Left(i) = w.interaction.borrow_mut().pointer_left() {
            log::debug!("[pointer] left surface while over marker {}", i);
        }
        tooltip::hide(&w.document);
    }) as Box<dyn FnMut(_)>);

    _ = w
        .mount
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());

    closure.forget();
}
