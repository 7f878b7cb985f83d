//! The scene runtime: one context object owning every subsystem, driven by
//! input events and per-frame ticks from the host.

use crate::ambient::AmbientDriver;
use crate::camera::{Breakpoint, Camera, CameraCycler, CameraPose, ViewHook};
use crate::constants::{
    AMBIENT_SEED, GLOW_VIEW_INDEX, HIT_TEST_MIN_INTERVAL_SEC, MONITOR_EPSILON, MONITOR_SMOOTHING,
};
use crate::effects::ButtonEffects;
use crate::error::RuntimeError;
use crate::hit_test::{Hit, HitTester};
use crate::host::{Host, Modal, SoundKey, THEME_PREFERENCE_KEY};
use crate::hover::{cursor_for, CursorStyle, HoverMachine};
use crate::monitor::{MonitorAction, MonitorEngine, MonitorUniforms, Source};
use crate::pointer::PointerTracker;
use crate::registry::{ObjectId, Registry};
use crate::scene::{NodeDesc, NodeId, NodePose, NodeTable, TextureId};
use crate::tags::Role;
use crate::theme::{TextureSet, Theme, ThemeController};
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub hit_test_interval: f32,
    pub monitor_smoothing: f32,
    pub monitor_epsilon: f32,
    pub ambient_seed: u64,
    /// Viewport in CSS pixels; its width picks the camera breakpoint.
    pub viewport: Vec2,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            hit_test_interval: HIT_TEST_MIN_INTERVAL_SEC,
            monitor_smoothing: MONITOR_SMOOTHING,
            monitor_epsilon: MONITOR_EPSILON,
            ambient_seed: AMBIENT_SEED,
            viewport: Vec2::new(1280.0, 720.0),
        }
    }
}

/// Everything the asset loader hands over once the scene is ready.
#[derive(Clone, Debug, Default)]
pub struct SceneAssets {
    pub nodes: Vec<NodeDesc>,
    pub monitor_slides: Vec<TextureId>,
    pub textures: TextureSet,
}

/// Which DJ pads currently have their loop playing.
#[derive(Clone, Copy, Debug, Default)]
struct DjDeck(u16);

impl DjDeck {
    /// Flip a pad; returns whether it is playing afterwards.
    fn toggle(&mut self, pad: u8) -> bool {
        let bit = 1u16 << pad;
        self.0 ^= bit;
        self.0 & bit != 0
    }

    fn is_playing(&self, pad: u8) -> bool {
        self.0 & (1u16 << pad) != 0
    }
}

/// Subsystems that only exist once the scene is loaded.
struct LoadedScene {
    nodes: NodeTable,
    registry: Registry,
    monitor: Option<MonitorEngine>,
    theme: ThemeController,
    ambient: AmbientDriver,
    effects: ButtonEffects,
}

pub struct SceneRuntime<H: Host> {
    host: H,
    config: RuntimeConfig,
    pointer: PointerTracker,
    hit_test: HitTester,
    hover: HoverMachine,
    camera: Camera,
    cameras: CameraCycler,
    breakpoint: Breakpoint,
    theme: Theme,
    modal: Option<Modal>,
    dj: DjDeck,
    background_playing: bool,
    scene: Option<LoadedScene>,
    started_at: Option<f64>,
    last_frame: Option<f64>,
    last_uniforms: Option<MonitorUniforms>,
    dirty: Vec<NodeId>,
}

impl<H: Host> SceneRuntime<H> {
    pub fn new(mut host: H, config: RuntimeConfig) -> Result<Self, RuntimeError> {
        let breakpoint = Breakpoint::for_width(config.viewport.x);
        let cameras = CameraCycler::new(breakpoint.view_presets())?;
        let home = breakpoint.home_pose();
        let camera = Camera::new(home, aspect_of(config.viewport));
        let theme = Theme::from_preference(host.get(THEME_PREFERENCE_KEY).as_deref());
        host.set_camera_pose(&home);
        log::info!("[runtime] {:?} viewport, stored theme {}", breakpoint, theme);
        Ok(Self {
            host,
            hit_test: HitTester::new(config.hit_test_interval),
            config,
            pointer: PointerTracker::default(),
            hover: HoverMachine::default(),
            camera,
            cameras,
            breakpoint,
            theme,
            modal: None,
            dj: DjDeck::default(),
            background_playing: false,
            scene: None,
            started_at: None,
            last_frame: None,
            last_uniforms: None,
            dirty: Vec::new(),
        })
    }

    /// Build the registry and every scene-bound subsystem. Called once, when
    /// the asset collaborator reports the scene is ready.
    pub fn load(&mut self, assets: SceneAssets) -> Result<(), RuntimeError> {
        let nodes = NodeTable::from_descs(assets.nodes);
        let registry = Registry::from_nodes(&nodes);

        let monitor = if nodes.find_role(Role::Monitor).is_none() {
            log::warn!("[monitor] no monitor mesh in scene; monitor interactions disabled");
            None
        } else if assets.monitor_slides.is_empty() {
            log::warn!("[monitor] monitor mesh has no slide textures; monitor interactions disabled");
            None
        } else {
            let mut engine = MonitorEngine::new(assets.monitor_slides)?
                .with_smoothing(self.config.monitor_smoothing, self.config.monitor_epsilon);
            engine.warm_up();
            Some(engine)
        };

        let mut effects = ButtonEffects::new(
            registry.find_role(Role::Slider),
            registry.ids_where(Role::is_corner_button),
            registry.ids_where(Role::is_hint_target),
        );
        // the cycler starts on the glow view
        effects.glow.start();

        let mut theme = ThemeController::new(&nodes, assets.textures);
        theme.apply(self.theme, &mut self.host);

        let ambient = AmbientDriver::from_nodes(&nodes, self.config.ambient_seed);
        log::info!(
            "[runtime] scene loaded: {} nodes, {} interactive, {} ambient",
            nodes.len(),
            registry.len(),
            ambient.len()
        );

        self.scene = Some(LoadedScene {
            nodes,
            registry,
            monitor,
            theme,
            ambient,
            effects,
        });
        self.pointer.mark_dirty();
        Ok(())
    }

    /// One display frame. `now` is wall-clock time in seconds.
    pub fn frame(&mut self, now: f64) {
        let started = *self.started_at.get_or_insert(now);
        let dt = self.last_frame.map_or(0.0, |last| (now - last).max(0.0)) as f32;
        self.last_frame = Some(now);
        let elapsed = (now - started) as f32;

        if let Some(pose) = self.cameras.tick(dt) {
            self.camera.set_pose(pose);
            self.host.set_camera_pose(&pose);
        }

        let Some(scene) = self.scene.as_mut() else {
            self.host.render();
            return;
        };

        scene.ambient.tick(elapsed);
        scene.ambient.apply(&mut scene.nodes);
        self.host.set_smoke_time(scene.ambient.smoke_time());

        if self.modal.is_none() {
            self.hit_test.update(
                &mut self.pointer,
                &self.camera,
                &scene.registry,
                &scene.nodes,
                dt,
            );
            let nearest = self.hit_test.nearest();
            self.hover.update(nearest, &mut scene.registry);

            let locked = scene.monitor.as_ref().is_some_and(MonitorEngine::is_locked);
            let cursor = cursor_for(nearest, &scene.registry, locked);
            if let Some(style) = self.hover.apply_cursor(cursor) {
                self.host.set_cursor(style);
            }
            if let Some(monitor) = scene.monitor.as_mut() {
                let over_monitor = nearest
                    .and_then(|id| scene.registry.role(id))
                    .is_some_and(|role| role == Role::Monitor);
                monitor.set_hovered(over_monitor);
            }
        }

        scene.registry.tick(dt);
        scene.effects.tick(dt);
        if let Some(monitor) = scene.monitor.as_mut() {
            if let Some(settled) = monitor.tick(dt) {
                if settled.stop_video {
                    self.host.stop_video();
                }
            }
            let uniforms = monitor.uniforms();
            if self.last_uniforms != Some(uniforms) {
                self.host.set_monitor_uniforms(&uniforms);
                self.last_uniforms = Some(uniforms);
            }
        }

        compose(scene);
        scene.nodes.drain_dirty(&mut self.dirty);
        for &id in &self.dirty {
            if let Some(node) = scene.nodes.get(id) {
                self.host.set_node_pose(id, &NodePose::from(node));
            }
        }
        self.host.render();
    }

    pub fn pointer_move(&mut self, client: Vec2) {
        self.pointer
            .mouse_move(client, self.config.viewport, self.modal.is_some());
    }

    pub fn touch_start(&mut self, client: Vec2) {
        self.pointer
            .touch_start(client, self.config.viewport, self.modal.is_some());
    }

    pub fn touch_end(&mut self) {
        self.pointer.touch_end();
    }

    /// Click or tap release on the canvas. Returns the object it landed on.
    pub fn click(&mut self) -> Option<ObjectId> {
        if self.modal.is_some() {
            return None;
        }
        let scene = self.scene.as_ref()?;
        if self.pointer.take_dirty() {
            self.hit_test
                .cast(&self.pointer, &self.camera, &scene.registry, &scene.nodes);
        }
        let id = self.hit_test.nearest()?;
        self.activate(id);
        Some(id)
    }

    /// Run an object's click behaviour as if it had been clicked.
    pub fn activate(&mut self, id: ObjectId) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let Some(obj) = scene.registry.get_mut(id) else {
            return;
        };
        if let Some(click) = obj.click.as_mut() {
            click.trigger();
        }
        let role = obj.role;
        log::info!("[click] {:?}", role);

        match role {
            Role::WorkButton | Role::AboutButton | Role::ContactButton | Role::LegalButton => {
                if let Some(modal) = role.modal() {
                    self.host.play(SoundKey::UiClick);
                    self.open_modal(modal);
                }
            }
            Role::Monitor => {
                if let Some(monitor) = scene.monitor.as_mut() {
                    let action = monitor.advance();
                    log::info!("[monitor] click -> {:?}", action);
                }
            }
            Role::PcButton => {
                self.host.play(SoundKey::PcButton);
                scene.effects.pulse(id);
                self.press_pc_button();
            }
            Role::Slider => {
                self.host.play(SoundKey::Slider);
                scene.effects.pulse(id);
                if let Some(slider) = scene.effects.slider.as_mut() {
                    let offset = slider.toggle();
                    log::info!("[click] slider offset={}", offset);
                }
            }
            Role::DjPad(pad) => {
                scene.effects.pulse(id);
                if self.dj.toggle(pad) {
                    self.host.play(SoundKey::DjPad(pad));
                } else {
                    self.host.stop(SoundKey::DjPad(pad));
                }
            }
            Role::GenericHover | Role::Decoration => {}
        }
    }

    // The pc-button is the monitor's reset and video control.
    fn press_pc_button(&mut self) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let Some(monitor) = scene.monitor.as_mut() else {
            return;
        };
        let action = if monitor.is_locked() {
            scene.effects.hint.play();
            monitor.reset()
        } else if monitor.is_transitioning() {
            monitor.reset()
        } else if monitor.current() == Source::Video {
            monitor.advance()
        } else {
            begin_video(monitor, &mut self.host)
        };
        if let MonitorAction::Reset { stop_video: true } = action {
            self.host.stop_video();
        }
        log::info!("[monitor] pc-button -> {:?}", action);
    }

    pub fn open_modal(&mut self, modal: Modal) {
        if self.modal == Some(modal) {
            return;
        }
        if let Some(previous) = self.modal.take() {
            self.host.hide(previous);
        }
        self.modal = Some(modal);
        self.host.show(modal);
        if let Some(scene) = self.scene.as_mut() {
            scene.registry.set_hover_disabled(true);
            self.hover.release(&mut scene.registry);
            if let Some(monitor) = scene.monitor.as_mut() {
                monitor.set_hovered(false);
            }
        }
        self.hit_test.clear();
        if let Some(style) = self.hover.apply_cursor(CursorStyle::Default) {
            self.host.set_cursor(style);
        }
        log::info!("[modal] open {}", modal.name());
    }

    pub fn close_modal(&mut self) {
        let Some(modal) = self.modal.take() else {
            return;
        };
        self.host.hide(modal);
        if let Some(scene) = self.scene.as_mut() {
            scene.registry.set_hover_disabled(false);
        }
        self.pointer.mark_dirty();
        log::info!("[modal] close {}", modal.name());
    }

    /// Touch release on a modal exit button.
    pub fn modal_exit_touch(&mut self) {
        self.pointer.touch_end();
        self.host.play(SoundKey::UiClick);
        self.close_modal();
    }

    /// Click on a modal exit button; swallowed when a touch already closed it.
    pub fn modal_exit_click(&mut self) {
        if self.pointer.touch_happened() {
            return;
        }
        self.host.play(SoundKey::UiClick);
        self.close_modal();
    }

    /// Move to the next camera preset and fire any hooks bound to it.
    pub fn cycle_camera(&mut self) -> usize {
        let hooks = self.cameras.trigger(self.camera.pose());
        if let Some(scene) = self.scene.as_mut() {
            for hook in hooks {
                match hook {
                    ViewHook::StartAttentionGlow => scene.effects.glow.start(),
                    ViewHook::StopAttentionGlow => scene.effects.glow.cancel(),
                    ViewHook::PlayInteractionHint => scene.effects.hint.play(),
                }
            }
        }
        self.host.play(SoundKey::UiClick);
        self.cameras.index()
    }

    // The glow runs exactly while the cycler sits on the glow view.
    fn sync_attention_glow(&mut self) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let on_glow_view = self.cameras.index() == GLOW_VIEW_INDEX;
        let glow = &mut scene.effects.glow;
        if on_glow_view && !glow.is_active() {
            glow.start();
        } else if !on_glow_view && glow.is_active() {
            glow.cancel();
        }
    }

    /// Orbit controls moved the camera on the host side.
    pub fn sync_camera(&mut self, pose: CameraPose) {
        if self.cameras.is_moving() {
            return;
        }
        self.camera.set_pose(pose);
        self.pointer.mark_dirty();
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.config.viewport = viewport;
        self.camera.aspect = aspect_of(viewport);
        let breakpoint = Breakpoint::for_width(viewport.x);
        if breakpoint != self.breakpoint {
            let current = self.camera.pose();
            if let Ok(view) = self.cameras.replace_presets(breakpoint.view_presets(), current) {
                self.breakpoint = breakpoint;
                if !self.cameras.is_moving() {
                    self.camera.set_pose(view);
                    self.host.set_camera_pose(&view);
                }
                self.sync_attention_glow();
                log::info!(
                    "[camera] switched to {:?} presets at view {}",
                    breakpoint,
                    self.cameras.index()
                );
            }
        }
        self.pointer.mark_dirty();
    }

    /// Apply and persist a theme. Returns the number of texture swaps.
    pub fn set_theme(&mut self, theme: Theme) -> usize {
        self.theme = theme;
        self.host.set(THEME_PREFERENCE_KEY, theme.as_str());
        match self.scene.as_mut() {
            Some(scene) => scene.theme.apply(theme, &mut self.host),
            None => 0,
        }
    }

    pub fn set_theme_named(&mut self, name: &str) -> Result<usize, RuntimeError> {
        let theme = name.parse::<Theme>()?;
        Ok(self.set_theme(theme))
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    /// Start the monitor video from outside the scene (e.g. a UI control).
    pub fn start_video(&mut self) -> MonitorAction {
        match self.scene.as_mut().and_then(|s| s.monitor.as_mut()) {
            Some(monitor) => begin_video(monitor, &mut self.host),
            None => MonitorAction::Ignored,
        }
    }

    /// The video element reached its end.
    pub fn video_ended(&mut self) -> MonitorAction {
        match self.scene.as_mut().and_then(|s| s.monitor.as_mut()) {
            Some(monitor) => monitor.video_ended(),
            None => MonitorAction::Ignored,
        }
    }

    pub fn toggle_background_music(&mut self) -> bool {
        self.background_playing = !self.background_playing;
        if self.background_playing {
            self.host.play(SoundKey::Background);
        } else {
            self.host.stop(SoundKey::Background);
        }
        self.background_playing
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.scene.is_some()
    }

    pub fn registry(&self) -> Option<&Registry> {
        self.scene.as_ref().map(|s| &s.registry)
    }

    pub fn registry_mut(&mut self) -> Option<&mut Registry> {
        self.scene.as_mut().map(|s| &mut s.registry)
    }

    pub fn nodes(&self) -> Option<&NodeTable> {
        self.scene.as_ref().map(|s| &s.nodes)
    }

    pub fn monitor(&self) -> Option<&MonitorEngine> {
        self.scene.as_ref().and_then(|s| s.monitor.as_ref())
    }

    pub fn theme_controller(&self) -> Option<&ThemeController> {
        self.scene.as_ref().map(|s| &s.theme)
    }

    pub fn effects(&self) -> Option<&ButtonEffects> {
        self.scene.as_ref().map(|s| &s.effects)
    }

    pub fn object_named(&self, name: &str) -> Option<ObjectId> {
        let scene = self.scene.as_ref()?;
        scene
            .nodes
            .find(name)
            .and_then(|node| scene.registry.object_for_node(node))
    }

    pub fn cameras(&self) -> &CameraCycler {
        &self.cameras
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn hover(&self) -> &HoverMachine {
        &self.hover
    }

    pub fn hits(&self) -> &[Hit] {
        self.hit_test.hits()
    }

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    pub fn slider_is_offset(&self) -> Option<bool> {
        self.effects()
            .and_then(|e| e.slider.as_ref())
            .map(|s| s.is_offset())
    }

    pub fn dj_pad_playing(&self, pad: u8) -> bool {
        self.dj.is_playing(pad)
    }

    pub fn background_playing(&self) -> bool {
        self.background_playing
    }
}

// The video texture is built lazily, on the first playback request.
fn begin_video(monitor: &mut MonitorEngine, host: &mut impl Host) -> MonitorAction {
    if !monitor.has_video_texture() {
        if let Some(texture) = host.create_video_texture() {
            monitor.attach_video_texture(texture);
        }
    }
    let action = monitor.begin_video();
    if action == MonitorAction::VideoStarted {
        host.play_video();
    }
    action
}

fn aspect_of(viewport: Vec2) -> f32 {
    if viewport.y > 0.0 {
        viewport.x / viewport.y
    } else {
        1.0
    }
}

// Live pose = baseline, then ambient motion, then hover/click and button
// effect deltas. Colours always start from the captured base colour.
fn compose(scene: &mut LoadedScene) {
    let LoadedScene {
        nodes,
        registry,
        ambient,
        effects,
        ..
    } = scene;
    for (id, obj) in registry.iter() {
        let Some(node) = nodes.get(obj.node) else {
            continue;
        };
        let start = ambient.adjust(obj.node, *node.base());
        let live = obj.delta().then(&effects.delta_for(id)).apply_to(&start);
        let color = effects.color_for(id, node.base_color());
        nodes.set_live(obj.node, live);
        nodes.set_color(obj.node, color);
    }
}
