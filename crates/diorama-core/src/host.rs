//! Collaborators the runtime calls into. The web front-end implements all of
//! them on one `WebHost`; tests use a recording double.

use crate::camera::CameraPose;
use crate::hover::CursorStyle;
use crate::monitor::MonitorUniforms;
use crate::scene::{NodeId, NodePose, TextureId};
use glam::Vec3;

pub const THEME_PREFERENCE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modal {
    Work,
    About,
    Contact,
    Legal,
}

impl Modal {
    pub const ALL: [Modal; 4] = [Modal::Work, Modal::About, Modal::Contact, Modal::Legal];

    pub fn name(self) -> &'static str {
        match self {
            Modal::Work => "work",
            Modal::About => "about",
            Modal::Contact => "contact",
            Modal::Legal => "legal",
        }
    }

    pub fn from_name(name: &str) -> Option<Modal> {
        Modal::ALL.into_iter().find(|m| m.name() == name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundKey {
    UiClick,
    Slider,
    PcButton,
    DjPad(u8),
    Background,
}

impl SoundKey {
    /// Short identifier the audio host keys its elements by.
    pub fn key(self) -> String {
        match self {
            SoundKey::UiClick => "click".to_string(),
            SoundKey::Slider => "slider".to_string(),
            SoundKey::PcButton => "pcbtn".to_string(),
            SoundKey::DjPad(pad) => format!("dj{}", pad),
            SoundKey::Background => "background".to_string(),
        }
    }

    /// Looping sounds keep playing until explicitly stopped.
    pub fn is_looping(self) -> bool {
        matches!(self, SoundKey::Background | SoundKey::DjPad(_))
    }
}

/// Colour uniforms tinted by the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TintUniform {
    GridLine,
    Smoke,
}

pub trait AudioPlayer {
    fn play(&mut self, sound: SoundKey);
    fn stop(&mut self, sound: SoundKey);
}

pub trait ModalPresenter {
    fn show(&mut self, modal: Modal);
    fn hide(&mut self, modal: Modal);
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub trait CursorSurface {
    fn set_cursor(&mut self, cursor: CursorStyle);
}

/// Rendering side of the scene.
pub trait SceneSurface {
    fn set_node_pose(&mut self, node: NodeId, pose: &NodePose);
    fn set_monitor_uniforms(&mut self, uniforms: &MonitorUniforms);
    fn set_mesh_texture(&mut self, node: NodeId, texture: TextureId);
    fn set_background(&mut self, color: Vec3);
    fn set_tint(&mut self, slot: TintUniform, color: Vec3);
    fn set_smoke_time(&mut self, seconds: f32);
    fn set_camera_pose(&mut self, pose: &CameraPose);
    fn render(&mut self);
}

pub trait VideoSurface {
    /// Build the live video texture. Called on first playback until it
    /// succeeds; `None` when there is no video source to wrap.
    fn create_video_texture(&mut self) -> Option<TextureId>;
    fn play_video(&mut self);
    fn stop_video(&mut self);
}

pub trait Host:
    AudioPlayer + ModalPresenter + PreferenceStore + CursorSurface + SceneSurface + VideoSurface
{
}

impl<T> Host for T where
    T: AudioPlayer + ModalPresenter + PreferenceStore + CursorSurface + SceneSurface + VideoSurface
{
}
