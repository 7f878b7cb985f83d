// Shared fixtures for the host-side tests: a recording Host double and a
// small scene laid out in front of the wide home camera.

#![allow(dead_code)]

use diorama_core::*;
use glam::{Vec2, Vec3};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Play(SoundKey),
    Stop(SoundKey),
    Show(Modal),
    Hide(Modal),
    Cursor(CursorStyle),
    MeshTexture(NodeId, TextureId),
    Background(Vec3),
    Tint(TintUniform, Vec3),
    CreateVideoTexture,
    PlayVideo,
    StopVideo,
}

#[derive(Default)]
pub struct RecordingHost {
    pub calls: Vec<Call>,
    pub prefs: HashMap<String, String>,
    pub poses: HashMap<NodeId, NodePose>,
    pub uniforms: Option<MonitorUniforms>,
    pub camera: Option<CameraPose>,
    pub smoke_time: f32,
    pub renders: usize,
    pub video_texture: Option<TextureId>,
}

impl RecordingHost {
    pub fn with_video() -> Self {
        Self {
            video_texture: Some(VIDEO_TEXTURE),
            ..Self::default()
        }
    }

    pub fn with_pref(mut self, key: &str, value: &str) -> Self {
        self.prefs.insert(key.to_string(), value.to_string());
        self
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn texture_writes(&self) -> usize {
        self.count(|c| matches!(c, Call::MeshTexture(..)))
    }

    pub fn last_cursor(&self) -> Option<CursorStyle> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Cursor(style) => Some(*style),
            _ => None,
        })
    }

    pub fn cursor_writes(&self) -> usize {
        self.count(|c| matches!(c, Call::Cursor(_)))
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl AudioPlayer for RecordingHost {
    fn play(&mut self, sound: SoundKey) {
        self.calls.push(Call::Play(sound));
    }
    fn stop(&mut self, sound: SoundKey) {
        self.calls.push(Call::Stop(sound));
    }
}

impl ModalPresenter for RecordingHost {
    fn show(&mut self, modal: Modal) {
        self.calls.push(Call::Show(modal));
    }
    fn hide(&mut self, modal: Modal) {
        self.calls.push(Call::Hide(modal));
    }
}

impl PreferenceStore for RecordingHost {
    fn get(&self, key: &str) -> Option<String> {
        self.prefs.get(key).cloned()
    }
    fn set(&mut self, key: &str, value: &str) {
        self.prefs.insert(key.to_string(), value.to_string());
    }
}

impl CursorSurface for RecordingHost {
    fn set_cursor(&mut self, cursor: CursorStyle) {
        self.calls.push(Call::Cursor(cursor));
    }
}

impl SceneSurface for RecordingHost {
    fn set_node_pose(&mut self, node: NodeId, pose: &NodePose) {
        self.poses.insert(node, *pose);
    }
    fn set_monitor_uniforms(&mut self, uniforms: &MonitorUniforms) {
        self.uniforms = Some(*uniforms);
    }
    fn set_mesh_texture(&mut self, node: NodeId, texture: TextureId) {
        self.calls.push(Call::MeshTexture(node, texture));
    }
    fn set_background(&mut self, color: Vec3) {
        self.calls.push(Call::Background(color));
    }
    fn set_tint(&mut self, slot: TintUniform, color: Vec3) {
        self.calls.push(Call::Tint(slot, color));
    }
    fn set_smoke_time(&mut self, seconds: f32) {
        self.smoke_time = seconds;
    }
    fn set_camera_pose(&mut self, pose: &CameraPose) {
        self.camera = Some(*pose);
    }
    fn render(&mut self) {
        self.renders += 1;
    }
}

impl VideoSurface for RecordingHost {
    fn create_video_texture(&mut self) -> Option<TextureId> {
        self.calls.push(Call::CreateVideoTexture);
        self.video_texture
    }
    fn play_video(&mut self) {
        self.calls.push(Call::PlayVideo);
    }
    fn stop_video(&mut self) {
        self.calls.push(Call::StopVideo);
    }
}

pub const SLIDES: [TextureId; 4] = [TextureId(10), TextureId(11), TextureId(12), TextureId(13)];
pub const VIDEO_TEXTURE: TextureId = TextureId(99);

pub const DAY_TERRAIN: TextureId = TextureId(100);
pub const NIGHT_TERRAIN: TextureId = TextureId(101);
pub const DAY_OTHER: TextureId = TextureId(110);
pub const NIGHT_OTHER: TextureId = TextureId(111);
pub const DAY_PCWEI: TextureId = TextureId(120);
pub const NIGHT_PCWEI: TextureId = TextureId(121);

pub const MONITOR: &str = "monitor_raycaster";
pub const WORK: &str = "workbtn_hover_pointer_raycaster";
pub const ABOUT: &str = "aboutbtn_hover_pointer_raycaster";
pub const CONTACT: &str = "contactbtn_hover_pointer_raycaster";
pub const LEGAL: &str = "legalbtn_hover_pointer_raycaster";
pub const SLIDER: &str = "slider_hover_raycaster";
pub const PC_BUTTON: &str = "pcbtn_hover_raycaster";
pub const DJ1: &str = "DJ1_hover_raycaster";
pub const DJ2: &str = "DJ2_hover_raycaster";
pub const CACTUS: &str = "cactus_hover_v2_raycaster";

fn node(name: &str, position: Vec3) -> NodeDesc {
    NodeDesc::new(
        name,
        Transform {
            position,
            ..Transform::default()
        },
    )
    .with_bounds(Bounds {
        center: Vec3::ZERO,
        half_extents: Vec3::splat(0.3),
    })
}

/// Interactive objects spread on a row facing the wide home camera, plus
/// themed and ambient decorations.
pub fn scene_nodes() -> Vec<NodeDesc> {
    vec![
        node(MONITOR, Vec3::new(-4.0, 2.0, 0.0)),
        node(WORK, Vec3::new(-2.5, 2.0, 0.0)),
        node(ABOUT, Vec3::new(-1.0, 2.0, 0.0)),
        node(CONTACT, Vec3::new(0.5, 2.0, 0.0)),
        node(LEGAL, Vec3::new(2.0, 2.0, 0.0)),
        node(SLIDER, Vec3::new(-4.0, 4.0, 0.0)),
        node(PC_BUTTON, Vec3::new(-2.5, 4.0, 0.0)),
        node(DJ1, Vec3::new(-1.0, 4.0, 0.0)),
        node(DJ2, Vec3::new(0.5, 4.0, 0.0)),
        node(CACTUS, Vec3::new(2.0, 4.0, 0.0)),
        node("terrain_ground", Vec3::new(0.0, -1.0, 0.0)),
        node("other_props", Vec3::new(0.0, -1.0, -3.0)),
        node("desk_pcwei", Vec3::new(0.0, -1.0, -6.0)),
        node("cloud_01", Vec3::new(5.0, 9.0, -10.0)),
        node("windmill_roA", Vec3::new(8.0, 3.0, -8.0)),
    ]
}

pub fn texture_set() -> TextureSet {
    TextureSet::default()
        .with(Theme::Day, TextureKey::Terrain, DAY_TERRAIN)
        .with(Theme::Night, TextureKey::Terrain, NIGHT_TERRAIN)
        .with(Theme::Day, TextureKey::Other, DAY_OTHER)
        .with(Theme::Night, TextureKey::Other, NIGHT_OTHER)
        .with(Theme::Day, TextureKey::Pcwei, DAY_PCWEI)
        .with(Theme::Night, TextureKey::Pcwei, NIGHT_PCWEI)
}

pub fn assets() -> SceneAssets {
    SceneAssets {
        nodes: scene_nodes(),
        monitor_slides: SLIDES.to_vec(),
        textures: texture_set(),
    }
}

pub fn runtime_with(host: RecordingHost) -> SceneRuntime<RecordingHost> {
    let mut rt = SceneRuntime::new(host, RuntimeConfig::default()).expect("runtime");
    rt.load(assets()).expect("load");
    rt
}

pub fn loaded_runtime() -> SceneRuntime<RecordingHost> {
    runtime_with(RecordingHost::with_video())
}

/// Drives frames at 60 Hz from an internal clock.
pub struct Clock {
    pub now: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self { now: 0.0 }
    }

    pub fn step(&mut self, rt: &mut SceneRuntime<RecordingHost>) {
        rt.frame(self.now);
        self.now += 1.0 / 60.0;
    }

    pub fn run(&mut self, rt: &mut SceneRuntime<RecordingHost>, seconds: f64) {
        let frames = (seconds * 60.0).ceil() as usize;
        for _ in 0..frames.max(1) {
            self.step(rt);
        }
    }
}

/// Client pixel position over the named node's current world centre.
pub fn client_over(rt: &SceneRuntime<RecordingHost>, name: &str) -> Vec2 {
    let nodes = rt.nodes().expect("loaded");
    let id = nodes.find(name).expect("node");
    let node = nodes.get(id).expect("node");
    let world = node.live().matrix().transform_point3(node.bounds.center);
    let ndc = rt.camera().project(world).expect("in front of camera");
    let viewport = rt.config().viewport;
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.x,
        (1.0 - ndc.y) * 0.5 * viewport.y,
    )
}

/// Client position far from every object.
pub fn client_empty(rt: &SceneRuntime<RecordingHost>) -> Vec2 {
    let viewport = rt.config().viewport;
    Vec2::new(2.0, viewport.y - 2.0)
}

pub fn hover_over(rt: &mut SceneRuntime<RecordingHost>, clock: &mut Clock, name: &str) {
    let client = client_over(rt, name);
    rt.pointer_move(client);
    clock.step(rt);
}

pub fn click_on(rt: &mut SceneRuntime<RecordingHost>, clock: &mut Clock, name: &str) -> Option<ObjectId> {
    let client = client_over(rt, name);
    rt.pointer_move(client);
    clock.step(rt);
    rt.click()
}
