#![cfg(target_arch = "wasm32")]
use diorama_core::{Modal, RuntimeConfig, SceneAssets, SceneRuntime, TextureId, TextureKey, Theme};
use std::cell::{Cell, RefCell, RefMut};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod bridge;
mod camera_sync;
mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod overlay;

pub use bridge::SceneBridge;
use camera_sync::PendingPose;
use host::{SharedRuntime, WebHost};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("desert-diorama starting");
    Ok(())
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Handle the page script holds on to. The JS side owns the three.js scene
/// and feeds nodes and textures in as they load; the runtime drives them.
#[wasm_bindgen]
pub struct Experience {
    runtime: SharedRuntime,
    pending_pose: PendingPose,
    assets: SceneAssets,
    loaded: bool,
}

#[wasm_bindgen]
impl Experience {
    #[wasm_bindgen(constructor)]
    pub fn new(bridge: SceneBridge) -> Result<Experience, JsValue> {
        init(bridge).map_err(|e| {
            log::error!("init error: {:?}", e);
            js_err(e)
        })
    }

    /// Register one mesh. Arrays: `[pos, rot, scale]`, `[center, half]`, `[r, g, b]`.
    #[wasm_bindgen(js_name = "addNode")]
    pub fn add_node(&mut self, name: &str, transform: &[f32], bounds: &[f32], color: &[f32]) -> u32 {
        let id = self.assets.nodes.len() as u32;
        self.assets
            .nodes
            .push(input::node_desc(name, transform, bounds, color));
        id
    }

    #[wasm_bindgen(js_name = "addMonitorSlide")]
    pub fn add_monitor_slide(&mut self, texture: u32) {
        self.assets.monitor_slides.push(TextureId(texture));
    }

    #[wasm_bindgen(js_name = "addThemeTexture")]
    pub fn add_theme_texture(&mut self, theme: &str, key: &str, texture: u32) -> Result<(), JsValue> {
        let theme: Theme = theme.parse().map_err(js_err)?;
        let key = TextureKey::from_name(key)
            .ok_or_else(|| JsValue::from_str(&format!("unknown texture key {:?}", key)))?;
        self.assets.textures.insert(theme, key, TextureId(texture));
        Ok(())
    }

    /// The asset loader is done; build the registry and start interacting.
    #[wasm_bindgen(js_name = "finishLoading")]
    pub fn finish_loading(&mut self) -> Result<(), JsValue> {
        if self.loaded {
            log::warn!("[runtime] finishLoading called twice");
            return Ok(());
        }
        let mut runtime = self.runtime.try_borrow_mut().map_err(js_err)?;
        runtime
            .load(std::mem::take(&mut self.assets))
            .map_err(js_err)?;
        self.loaded = true;
        Ok(())
    }

    /// Orbit controls moved the camera.
    #[wasm_bindgen(js_name = "syncCamera")]
    pub fn sync_camera(&self, pose: &[f32]) {
        if let Some(pose) = input::pose_from_slice(pose) {
            if !camera_sync::sync_or_queue(&self.runtime, &self.pending_pose, pose) {
                log::debug!("[camera] orbit pose queued for next frame");
            }
        }
    }

    #[wasm_bindgen(js_name = "setTheme")]
    pub fn set_theme(&self, name: &str) -> Result<(), JsValue> {
        self.runtime_mut()?
            .set_theme_named(name)
            .map(|_| ())
            .map_err(js_err)
    }

    #[wasm_bindgen(js_name = "theme")]
    pub fn theme(&self) -> Result<String, JsValue> {
        let runtime = self.runtime.try_borrow().map_err(js_err)?;
        Ok(runtime.theme().as_str().to_string())
    }

    #[wasm_bindgen(js_name = "startVideo")]
    pub fn start_video(&self) -> Result<(), JsValue> {
        let action = self.runtime_mut()?.start_video();
        log::info!("[monitor] start video -> {:?}", action);
        Ok(())
    }
}

impl Experience {
    // JS may call back in while a frame holds the runtime; report it instead of panicking.
    fn runtime_mut(&self) -> Result<RefMut<'_, SceneRuntime<WebHost>>, JsValue> {
        self.runtime.try_borrow_mut().map_err(|e| {
            log::warn!("[runtime] busy: {}", e);
            js_err(e)
        })
    }
}

fn init(bridge: SceneBridge) -> anyhow::Result<Experience> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    for modal in Modal::ALL {
        if !overlay::is_hidden(&document, modal) {
            overlay::hide(&document, modal);
        }
    }

    let host = WebHost::new(bridge, document.clone());
    let video = host.video().cloned();
    // fresh cloud drift per page load
    let config = RuntimeConfig {
        viewport: dom::viewport(),
        ambient_seed: (js_sys::Math::random() * u32::MAX as f64) as u64,
        ..RuntimeConfig::default()
    };
    let runtime = SceneRuntime::new(host, config)?;
    let theme = runtime.theme();
    dom::set_body_class(&document, constants::NIGHT_BODY_CLASS, theme == Theme::Night);
    let runtime: SharedRuntime = Rc::new(RefCell::new(runtime));

    events::wire_resize(&runtime, &canvas);
    events::wire_pointer_handlers(&runtime, &canvas);
    events::wire_modal_exit_buttons(&runtime, &document);
    events::wire_ui_buttons(&runtime, &document);
    if let Some(video) = &video {
        events::wire_video_ended(&runtime, video);
    }

    let pending_pose: PendingPose = Rc::new(Cell::new(None));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        runtime.clone(),
        pending_pose.clone(),
    )));
    frame::start_loop(frame_ctx);

    Ok(Experience {
        runtime,
        pending_pose,
        assets: SceneAssets::default(),
        loaded: false,
    })
}
