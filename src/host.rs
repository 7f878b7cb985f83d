use diorama_core::{
    AudioPlayer, CameraPose, CursorStyle, CursorSurface, Modal, ModalPresenter, MonitorUniforms,
    NodeId, NodePose, PreferenceStore, SceneRuntime, SceneSurface, SoundKey, TextureId,
    TintUniform, VideoSurface,
};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::{self, SoundBank};
use crate::bridge::SceneBridge;
use crate::constants::{MONITOR_VIDEO_ID, NIGHT_BODY_CLASS};
use crate::{dom, overlay};

/// The runtime as shared between event closures and the frame loop.
pub type SharedRuntime = Rc<RefCell<SceneRuntime<WebHost>>>;

/// Every collaborator the runtime talks to, backed by the DOM and the JS
/// scene bridge.
pub struct WebHost {
    bridge: SceneBridge,
    document: web::Document,
    storage: Option<web::Storage>,
    sounds: SoundBank,
    video: Option<web::HtmlVideoElement>,
    pose_ids: Vec<u32>,
    poses: Vec<NodePose>,
}

impl WebHost {
    pub fn new(bridge: SceneBridge, document: web::Document) -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[prefs] localStorage unavailable; theme will not persist");
        }
        let video = document
            .get_element_by_id(MONITOR_VIDEO_ID)
            .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok());
        Self {
            bridge,
            document,
            storage,
            sounds: SoundBank::default(),
            video,
            pose_ids: Vec::new(),
            poses: Vec::new(),
        }
    }

    pub fn video(&self) -> Option<&web::HtmlVideoElement> {
        self.video.as_ref()
    }

    fn flush_poses(&mut self) {
        if self.poses.is_empty() {
            return;
        }
        let floats: &[f32] = bytemuck::cast_slice(&self.poses);
        self.bridge.set_node_poses(&self.pose_ids, floats);
        self.pose_ids.clear();
        self.poses.clear();
    }
}

impl AudioPlayer for WebHost {
    fn play(&mut self, sound: SoundKey) {
        self.sounds.play(&sound.key(), sound.is_looping());
    }

    fn stop(&mut self, sound: SoundKey) {
        self.sounds.stop(&sound.key());
    }
}

impl ModalPresenter for WebHost {
    fn show(&mut self, modal: Modal) {
        overlay::show(&self.document, modal);
    }

    fn hide(&mut self, modal: Modal) {
        overlay::hide(&self.document, modal);
    }
}

impl PreferenceStore for WebHost {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            _ = storage.set_item(key, value);
        }
        if key == diorama_core::THEME_PREFERENCE_KEY {
            dom::set_body_class(&self.document, NIGHT_BODY_CLASS, value == "night");
        }
    }
}

impl CursorSurface for WebHost {
    fn set_cursor(&mut self, cursor: CursorStyle) {
        if let Some(body) = self.document.body() {
            _ = body.style().set_property("cursor", cursor.as_css());
        }
    }
}

impl SceneSurface for WebHost {
    fn set_node_pose(&mut self, node: NodeId, pose: &NodePose) {
        self.pose_ids.push(node.0 as u32);
        self.poses.push(*pose);
    }

    fn set_monitor_uniforms(&mut self, u: &MonitorUniforms) {
        self.bridge
            .set_monitor_uniforms(u.texture_a, u.texture_b, u.mix, u.brightness, u.contrast);
    }

    fn set_mesh_texture(&mut self, node: NodeId, texture: TextureId) {
        self.bridge.set_mesh_texture(node.0 as u32, texture.0);
    }

    fn set_background(&mut self, color: Vec3) {
        self.bridge.set_background(color.x, color.y, color.z);
    }

    fn set_tint(&mut self, slot: TintUniform, color: Vec3) {
        let name = match slot {
            TintUniform::GridLine => "gridLine",
            TintUniform::Smoke => "smoke",
        };
        self.bridge.set_tint(name, color.x, color.y, color.z);
    }

    fn set_smoke_time(&mut self, seconds: f32) {
        self.bridge.set_smoke_time(seconds);
    }

    fn set_camera_pose(&mut self, pose: &CameraPose) {
        let mut packed = [0.0_f32; 6];
        packed[..3].copy_from_slice(&pose.position.to_array());
        packed[3..].copy_from_slice(&pose.target.to_array());
        self.bridge.set_camera_pose(&packed);
    }

    fn render(&mut self) {
        self.flush_poses();
        self.bridge.render();
    }
}

impl VideoSurface for WebHost {
    fn create_video_texture(&mut self) -> Option<TextureId> {
        match &self.video {
            Some(video) => Some(TextureId(self.bridge.create_video_texture(video))),
            None => {
                log::warn!("[video] no #{} element", MONITOR_VIDEO_ID);
                None
            }
        }
    }

    fn play_video(&mut self) {
        if let Some(video) = &self.video {
            video.set_current_time(0.0);
            audio::play_media(video, "monitor video");
        }
    }

    fn stop_video(&mut self) {
        if let Some(video) = &self.video {
            _ = video.pause();
            video.set_current_time(0.0);
        }
    }
}
