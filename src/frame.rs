use crate::assets::TextureQueue;
use crate::camera::CameraRig;
use crate::render;
use crate::scene::Scene;
use crate::state::AppState;
use crate::update::{self, TweenSet};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<AppState>>,
    pub scene: Rc<RefCell<Scene>>,
    pub rig: Rc<RefCell<CameraRig>>,
    pub tweens: Rc<RefCell<TweenSet>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub pending_textures: TextureQueue,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Late-arriving textures pop in whenever their load resolved
        if let Some(g) = &mut self.gpu {
            for (kind, img) in self.pending_textures.borrow_mut().drain(..) {
                g.upload_material(kind, &img);
            }
        }

        {
            let state = self.state.borrow();
            let mut scene = self.scene.borrow_mut();
            let mut rig = self.rig.borrow_mut();
            let mut tweens = self.tweens.borrow_mut();
            update::advance_frame(&state, &mut scene, &mut rig, &mut tweens, dt_sec);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let scene = self.scene.borrow();
            g.set_particle_tint(scene.particles.tint);
            let rig = self.rig.borrow();
            if let Err(e) = g.render(&scene, &rig) {
                // A dropped frame is late, never fatal
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Start the continuous requestAnimationFrame loop. It reschedules itself
/// every frame and runs until the page unloads.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
