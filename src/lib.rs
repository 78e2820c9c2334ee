#![cfg(target_arch = "wasm32")]
//! Scroll-driven 3D landing scene: three textured section meshes, a particle
//! field, pointer parallax, and scroll-triggered rotation tweens, rendered
//! with WebGPU from a single canvas.

use crate::camera::{Camera, CameraRig};
use crate::constants::{
    CAMERA_FOV_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, CANVAS_ID, DEFAULT_TINT_HEX,
};
use crate::scene::Scene;
use crate::state::{parse_hex_color, AppState};
use crate::update::TweenSet;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod geometry;
mod render;
mod scene;
mod state;
mod tween;
mod update;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollscape starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let viewport = dom::viewport_size();
    let tint_value = parse_hex_color(DEFAULT_TINT_HEX).unwrap_or([1.0, 1.0, 1.0]);

    let mut app_state = AppState::new(viewport);
    // Pick up a pre-scrolled page without firing a tween
    let _ = app_state.apply_scroll(dom::scroll_offset());

    let scene = {
        let mut rng = rand::thread_rng();
        Scene::new(&mut rng, viewport.width, tint_value)
    };

    let camera = Camera::new(
        viewport.width.max(1.0) / viewport.height.max(1.0),
        CAMERA_FOV_DEG.to_radians(),
        CAMERA_ZNEAR,
        CAMERA_ZFAR,
    );

    let state = Rc::new(RefCell::new(app_state));
    let scene = Rc::new(RefCell::new(scene));
    let rig = Rc::new(RefCell::new(CameraRig::new(camera)));
    let tweens = Rc::new(RefCell::new(TweenSet::new()));

    // Fire-and-forget texture loads; meshes render untextured until each
    // resolves
    let pending_textures: assets::TextureQueue = Rc::new(RefCell::new(Vec::new()));
    assets::spawn_texture_loads(pending_textures.clone());

    events::wire_event_handlers(events::EventWiring {
        canvas: canvas.clone(),
        state: state.clone(),
        scene: scene.clone(),
        rig: rig.clone(),
        tweens: tweens.clone(),
    });

    // Snapshot the scene for buffer construction; holding a borrow across the
    // await would trip any event handler that fires meanwhile
    let scene_snapshot = scene.borrow().clone();
    let gpu = frame::init_gpu(&canvas, &scene_snapshot).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        scene,
        rig,
        tweens,
        canvas,
        gpu,
        pending_textures,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
