use crate::scene::MaterialKind;
use js_sys::Uint8Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Color maps per material group. Each entry loads independently and lands in
/// the frame loop's texture queue when it resolves; the rest of the group's
/// maps (displacement, normal, occlusion, ...) stay server-side concerns here.
pub const TEXTURE_MANIFEST: &[(MaterialKind, &str)] = &[
    (MaterialKind::Water, "Textures/Water/WaterCOLOR.jpg"),
    (MaterialKind::Stone, "Textures/Stone/Stone_Floorbasecolor.jpg"),
    (MaterialKind::Lava, "Textures/Lava/LavaCOLOR.jpg"),
];

/// Decoded textures waiting for upload, shared between the async loaders and
/// the frame loop.
pub type TextureQueue = Rc<RefCell<Vec<(MaterialKind, image::RgbaImage)>>>;

/// Kick off one fire-and-forget load per manifest entry. Nothing blocks on
/// completion; a failed load logs and the mesh keeps its placeholder.
pub fn spawn_texture_loads(queue: TextureQueue) {
    for &(kind, url) in TEXTURE_MANIFEST {
        let queue = queue.clone();
        spawn_local(async move {
            match fetch_rgba(url).await {
                Ok(img) => {
                    log::info!("[assets] loaded {} ({}x{})", url, img.width(), img.height());
                    queue.borrow_mut().push((kind, img));
                }
                Err(e) => log::error!("[assets] failed to load {}: {:?}", url, e),
            }
        });
    }
}

async fn fetch_rgba(url: &str) -> anyhow::Result<image::RgbaImage> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        return Err(anyhow::anyhow!("HTTP {} for {}", resp.status(), url));
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let bytes = Uint8Array::new(&buf).to_vec();
    let img = image::load_from_memory(&bytes)?;
    Ok(img.to_rgba8())
}
