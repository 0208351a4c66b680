#![cfg(target_arch = "wasm32")]
use globe_core::{Camera, FrameGate, GlobeConfig, Interaction, Scene, CONNECTIONS, TARGETS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod markup;
mod render;
mod tooltip;

use constants::{MOUNT_ID, PAUSED_BODY_CLASS, REDUCED_BODY_CLASS};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn scene_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
        ^ ((js_sys::Date::now() as u64) << 16)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let Some(mount) = document.get_element_by_id(MOUNT_ID) else {
        log::debug!("#{} not found, globe disabled", MOUNT_ID);
        return Ok(());
    };

    let user_agent = window
        .navigator()
        .user_agent()
        .map_err(|e| anyhow::anyhow!("user agent: {:?}", e))?;
    let config = GlobeConfig::from_user_agent(&user_agent);
    if config.device == globe_core::DeviceClass::Reduced {
        dom::set_body_class(&document, REDUCED_BODY_CLASS, true);
    }

    let canvas = dom::create_canvas(&document, &mount)?;
    let viewport = dom::sync_canvas_backing_size(&canvas, &mount, config.max_pixel_ratio);

    let scene = Scene::build(&config, &TARGETS, &CONNECTIONS, scene_seed())?;
    log::info!(
        "[globe] device={} markers={} arcs={} particles={} draws={}",
        config.device.name(),
        scene.markers.len(),
        scene.connections.len(),
        scene.particles.points.len(),
        scene.draw_count()
    );

    let gpu = frame::init_gpu(&canvas, &scene).await;

    let scene = Rc::new(RefCell::new(scene));
    let camera = Rc::new(RefCell::new(Camera::globe(viewport.aspect())));
    let interaction = Rc::new(RefCell::new(Interaction::default()));
    let hidden = document.hidden();
    dom::set_body_class(&document, PAUSED_BODY_CLASS, hidden);
    let paused = Rc::new(RefCell::new(hidden));

    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        mount: mount.clone(),
        canvas: canvas.clone(),
        scene: scene.clone(),
        camera: camera.clone(),
        interaction: interaction.clone(),
        paused: paused.clone(),
        max_pixel_ratio: config.max_pixel_ratio,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        camera,
        interaction,
        paused,
        canvas,
        gate: FrameGate::new(config.frame_skip),
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
