//! The in-scene monitor: a two-slot cross-fade between slide textures and a
//! live video texture, plus brightness/contrast that ease toward a target.
//!
//! At rest both texture slots always point at the current source and `mix`
//! is zero, so the shader output never depends on a stale blend.

use crate::constants::{
    MONITOR_BLEND_SEC, MONITOR_EPSILON, MONITOR_HOVER_BRIGHTNESS, MONITOR_HOVER_CONTRAST,
    MONITOR_IDLE_BRIGHTNESS, MONITOR_IDLE_CONTRAST, MONITOR_SMOOTHING,
    MONITOR_WARMUP_BRIGHTNESS, MONITOR_WARMUP_CONTRAST,
};
use crate::error::RuntimeError;
use crate::scene::TextureId;
use crate::tween::{Ease, Finished, Timeline, Tween};
use bytemuck::{Pod, Zeroable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Slide(u8),
    Video,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonitorPhase {
    Idle { index: u8 },
    Transitioning { from: Source, to: Source },
    VideoPlaying,
}

/// Outcome of a monitor request, mostly for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonitorAction {
    Advanced { to: u8 },
    /// Terminal slide: direct clicks do nothing until reset.
    Locked,
    /// A blend is already running.
    Ignored,
    VideoStarted,
    /// Blending from video back to slide 0; playback stops when it lands.
    LeavingVideo,
    Reset { stop_video: bool },
}

/// Reported by [`MonitorEngine::tick`] when a blend lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settled {
    pub current: Source,
    pub stop_video: bool,
}

/// Shader inputs, laid out for a single buffer upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MonitorUniforms {
    pub texture_a: u32,
    pub texture_b: u32,
    pub mix: f32,
    pub brightness: f32,
    pub contrast: f32,
}

/// Scalar that approaches its target by a fixed fraction per frame and
/// snaps once within epsilon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed {
    pub value: f32,
    pub target: f32,
}

impl Smoothed {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
        }
    }

    pub fn is_converged(&self) -> bool {
        self.value == self.target
    }

    pub fn step(&mut self, factor: f32, epsilon: f32) {
        if self.is_converged() {
            return;
        }
        self.value += (self.target - self.value) * factor;
        if (self.target - self.value).abs() < epsilon {
            self.value = self.target;
        }
    }
}

pub struct MonitorEngine {
    slides: Vec<TextureId>,
    video_texture: Option<TextureId>,
    current: Source,
    next: Source,
    slot_a: Source,
    slot_b: Source,
    mix: Tween,
    stop_video_after_blend: bool,
    brightness: Smoothed,
    contrast: Smoothed,
    smoothing: f32,
    epsilon: f32,
}

impl MonitorEngine {
    pub fn new(slides: Vec<TextureId>) -> Result<Self, RuntimeError> {
        if slides.is_empty() {
            return Err(RuntimeError::NoMonitorSlides);
        }
        Ok(Self {
            slides,
            video_texture: None,
            current: Source::Slide(0),
            next: Source::Slide(0),
            slot_a: Source::Slide(0),
            slot_b: Source::Slide(0),
            mix: Tween::new(MONITOR_BLEND_SEC, Ease::Power2Out),
            stop_video_after_blend: false,
            brightness: Smoothed::new(MONITOR_IDLE_BRIGHTNESS),
            contrast: Smoothed::new(MONITOR_IDLE_CONTRAST),
            smoothing: MONITOR_SMOOTHING,
            epsilon: MONITOR_EPSILON,
        })
    }

    pub fn with_smoothing(mut self, factor: f32, epsilon: f32) -> Self {
        self.smoothing = factor.clamp(0.0, 1.0);
        self.epsilon = epsilon.max(0.0);
        self
    }

    pub fn max_index(&self) -> u8 {
        (self.slides.len() - 1).min(u8::MAX as usize) as u8
    }

    pub fn current(&self) -> Source {
        self.current
    }

    pub fn next(&self) -> Source {
        self.next
    }

    pub fn slots(&self) -> (Source, Source) {
        (self.slot_a, self.slot_b)
    }

    pub fn mix(&self) -> f32 {
        self.mix.value()
    }

    pub fn brightness(&self) -> &Smoothed {
        &self.brightness
    }

    pub fn contrast(&self) -> &Smoothed {
        &self.contrast
    }

    pub fn phase(&self) -> MonitorPhase {
        if self.mix.is_active() {
            return MonitorPhase::Transitioning {
                from: self.current,
                to: self.next,
            };
        }
        match self.current {
            Source::Slide(index) => MonitorPhase::Idle { index },
            Source::Video => MonitorPhase::VideoPlaying,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.mix.is_active()
    }

    /// Resting on the last slide.
    pub fn is_locked(&self) -> bool {
        !self.is_transitioning() && self.current == Source::Slide(self.max_index())
    }

    pub fn has_video_texture(&self) -> bool {
        self.video_texture.is_some()
    }

    pub fn attach_video_texture(&mut self, texture: TextureId) {
        self.video_texture.get_or_insert(texture);
    }

    /// Direct click on the monitor.
    pub fn advance(&mut self) -> MonitorAction {
        if self.is_transitioning() {
            return MonitorAction::Ignored;
        }
        match self.current {
            Source::Video => {
                self.stop_video_after_blend = true;
                self.begin_blend(Source::Slide(0));
                MonitorAction::LeavingVideo
            }
            Source::Slide(index) if index >= self.max_index() => MonitorAction::Locked,
            Source::Slide(index) => {
                self.begin_blend(Source::Slide(index + 1));
                MonitorAction::Advanced { to: index + 1 }
            }
        }
    }

    /// Blend into the live video. Needs the video texture attached first.
    pub fn begin_video(&mut self) -> MonitorAction {
        if self.is_transitioning() || self.current == Source::Video || self.video_texture.is_none() {
            return MonitorAction::Ignored;
        }
        self.stop_video_after_blend = false;
        self.begin_blend(Source::Video);
        MonitorAction::VideoStarted
    }

    /// Hard reset to slide 0, cancelling any blend in flight.
    pub fn reset(&mut self) -> MonitorAction {
        let video_involved = self.current == Source::Video
            || (self.is_transitioning() && self.next == Source::Video);
        self.pin(Source::Slide(0));
        MonitorAction::Reset {
            stop_video: video_involved,
        }
    }

    /// Video reached its natural end: back to slide 0 without a blend.
    pub fn video_ended(&mut self) -> MonitorAction {
        let showing_video = self.current == Source::Video || self.next == Source::Video;
        if !showing_video {
            return MonitorAction::Ignored;
        }
        self.pin(Source::Slide(0));
        MonitorAction::Reset { stop_video: false }
    }

    pub fn warm_up(&mut self) {
        self.brightness.value = MONITOR_WARMUP_BRIGHTNESS;
        self.contrast.value = MONITOR_WARMUP_CONTRAST;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if hovered {
            self.brightness.target = MONITOR_HOVER_BRIGHTNESS;
            self.contrast.target = MONITOR_HOVER_CONTRAST;
        } else {
            self.brightness.target = MONITOR_IDLE_BRIGHTNESS;
            self.contrast.target = MONITOR_IDLE_CONTRAST;
        }
    }

    pub fn tick(&mut self, dt: f32) -> Option<Settled> {
        self.brightness.step(self.smoothing, self.epsilon);
        self.contrast.step(self.smoothing, self.epsilon);
        match self.mix.tick(dt) {
            Some(Finished::Forward) => {
                let stop_video = std::mem::take(&mut self.stop_video_after_blend);
                self.pin(self.next);
                log::info!("[monitor] settled on {:?}", self.current);
                Some(Settled {
                    current: self.current,
                    stop_video,
                })
            }
            _ => None,
        }
    }

    pub fn uniforms(&self) -> MonitorUniforms {
        MonitorUniforms {
            texture_a: self.texture_for(self.slot_a).0,
            texture_b: self.texture_for(self.slot_b).0,
            mix: self.mix(),
            brightness: self.brightness.value,
            contrast: self.contrast.value,
        }
    }

    pub fn texture_for(&self, source: Source) -> TextureId {
        match source {
            Source::Slide(i) => self
                .slides
                .get(i as usize)
                .copied()
                .unwrap_or(self.slides[0]),
            Source::Video => self.video_texture.unwrap_or(self.slides[0]),
        }
    }

    fn begin_blend(&mut self, to: Source) {
        self.next = to;
        self.slot_a = self.current;
        self.slot_b = to;
        self.mix.restart();
    }

    fn pin(&mut self, source: Source) {
        self.mix.rewind();
        self.stop_video_after_blend = false;
        self.current = source;
        self.next = source;
        self.slot_a = source;
        self.slot_b = source;
    }
}
