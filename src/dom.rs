use crate::state::{clamp_pixel_ratio, ViewportSize};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current window dimensions in logical pixels.
pub fn viewport_size() -> ViewportSize {
    let mut size = ViewportSize::default();
    if let Some(w) = web::window() {
        if let Ok(v) = w.inner_width() {
            size.width = v.as_f64().unwrap_or(1.0) as f32;
        }
        if let Ok(v) = w.inner_height() {
            size.height = v.as_f64().unwrap_or(1.0) as f32;
        }
    }
    size
}

/// Current vertical scroll distance in logical pixels.
pub fn scroll_offset() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio, capped at 2 to bound GPU cost on high-DPI displays.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = clamp_pixel_ratio(w.device_pixel_ratio());
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Wire an `input` listener on an element, handing its current value to the
/// handler. Used by the debug tint panel.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            if let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            {
                handler(input.value());
            }
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
