use crate::render;
use globe_core::{Camera, FrameGate, FrameInput, Interaction, Scene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub camera: Rc<RefCell<Camera>>,
    pub interaction: Rc<RefCell<Interaction>>,
    pub paused: Rc<RefCell<bool>>,
    pub canvas: web::HtmlCanvasElement,
    pub gate: FrameGate,
    pub gpu: Option<render::GpuState>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Hidden pages keep the loop scheduled but do no work
        if *self.paused.borrow() {
            return;
        }
        let Some(budget) = self.gate.tick() else {
            return;
        };

        let input = FrameInput::new(self.started.elapsed().as_secs_f32(), budget as f32);
        let interaction = *self.interaction.borrow();
        let items = {
            let mut scene = self.scene.borrow_mut();
            scene.advance(&input, &interaction);
            scene.draw_list()
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let camera = self.camera.borrow();
            match g.render(&camera, &items) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::debug!("[gpu] surface lost or outdated, reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, scene: &Scene) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, &scene.meshes, scene.draw_count()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
