use crate::camera::CameraRig;
use crate::constants::TINT_INPUT_ID;
use crate::dom;
use crate::scene::Scene;
use crate::state::{parse_hex_color, AppState};
use crate::update::TweenSet;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared handles every DOM listener closes over.
#[derive(Clone)]
pub struct EventWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<AppState>>,
    pub scene: Rc<RefCell<Scene>>,
    pub rig: Rc<RefCell<CameraRig>>,
    pub tweens: Rc<RefCell<TweenSet>>,
}

pub fn wire_event_handlers(w: EventWiring) {
    wire_resize(&w);
    wire_scroll(&w);
    wire_mousemove(&w);
    wire_tint_input(&w);
}

/// Resize: refresh viewport state, re-evaluate the responsive mesh layout,
/// update the camera projection, and resync the canvas backing store. The GPU
/// surface follows the canvas size on the next frame.
fn wire_resize(w: &EventWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let size = dom::viewport_size();
        w.state.borrow_mut().apply_resize(size.width, size.height);
        w.scene.borrow_mut().apply_layout(size.width);
        w.rig
            .borrow_mut()
            .camera
            .set_aspect(size.width, size.height);
        dom::sync_canvas_backing_size(&w.canvas);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Scroll: mirror the raw offset into state and, exactly once per section
/// crossing, kick off the eased rotation tween on the newly active mesh.
fn wire_scroll(w: &EventWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let raw = dom::scroll_offset();
        if let Some(section) = w.state.borrow_mut().apply_scroll(raw) {
            log::info!("[scroll] entered section {}", section);
            w.tweens.borrow_mut().trigger(section);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Mousemove: pure state update, consumed lazily by the frame loop.
fn wire_mousemove(w: &EventWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        w.state
            .borrow_mut()
            .apply_pointer(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Debug panel: a color input whose value retints the particle cloud live.
fn wire_tint_input(w: &EventWiring) {
    let w = w.clone();
    if let Some(document) = dom::window_document() {
        dom::add_input_listener(&document, TINT_INPUT_ID, move |value| {
            match parse_hex_color(&value) {
                Some(tint) => w.scene.borrow_mut().particles.tint = tint,
                None => log::error!("[panel] ignoring malformed color {:?}", value),
            }
        });
    }
}
