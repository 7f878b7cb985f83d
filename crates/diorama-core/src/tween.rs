//! Time-based interpolation primitives.
//!
//! Every animated value in the runtime (hover raises, click presses, the
//! monitor mix, camera moves, slider offsets, colour pulses) is driven by a
//! [`Timeline`]. Completion is reported as a return value from
//! [`Timeline::tick`] so callers drive explicit state transitions instead of
//! registering closures.

use std::f32::consts::PI;

/// Easing curves, named after the curves the scene was designed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Cubic ease-in.
    Power2In,
    /// Cubic ease-out.
    Power2Out,
    Power2InOut,
    SineInOut,
    /// Elastic overshoot, amplitude 1 and period 0.3.
    ElasticOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::ElasticOut => {
                if t <= 0.0 || t >= 1.0 {
                    t
                } else {
                    let c4 = (2.0 * PI) / 3.0;
                    2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Which end a timeline just reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finished {
    Forward,
    Reverse,
}

/// Playback contract shared by every animation in the runtime.
///
/// - `reverse` resumes from the current progress; it never jumps.
/// - `restart` rewinds to the start and plays forward, dropping whatever was
///   in flight (triggers cancel and replay, they never queue).
/// - `kill` freezes the timeline where it is with no pending completion.
pub trait Timeline {
    fn play(&mut self);
    fn reverse(&mut self);
    fn restart(&mut self);
    fn kill(&mut self);
    fn tick(&mut self, dt: f32) -> Option<Finished>;
    /// Linear progress in `[0, 1]`.
    fn progress(&self) -> f32;
    /// Eased progress.
    fn value(&self) -> f32;
    fn direction(&self) -> Direction;
    fn is_active(&self) -> bool;
}

#[derive(Clone, Debug)]
pub struct Tween {
    duration: f32,
    ease: Ease,
    progress: f32,
    direction: Direction,
    active: bool,
}

impl Tween {
    /// A paused tween resting at its start.
    pub fn new(duration_sec: f32, ease: Ease) -> Self {
        Self {
            duration: duration_sec.max(0.0),
            ease,
            progress: 0.0,
            direction: Direction::Reverse,
            active: false,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Snap back to the start without reporting a completion.
    pub fn rewind(&mut self) {
        self.progress = 0.0;
        self.direction = Direction::Reverse;
        self.active = false;
    }

    pub fn is_at_start(&self) -> bool {
        self.progress <= 0.0
    }

    pub fn is_at_end(&self) -> bool {
        self.progress >= 1.0
    }
}

impl Timeline for Tween {
    fn play(&mut self) {
        self.direction = Direction::Forward;
        self.active = self.progress < 1.0;
    }

    fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.active = self.progress > 0.0;
    }

    fn restart(&mut self) {
        self.progress = 0.0;
        self.direction = Direction::Forward;
        self.active = true;
    }

    fn kill(&mut self) {
        self.active = false;
    }

    fn tick(&mut self, dt: f32) -> Option<Finished> {
        if !self.active {
            return None;
        }
        let step = if self.duration > 0.0 {
            dt.max(0.0) / self.duration
        } else {
            1.0
        };
        match self.direction {
            Direction::Forward => {
                self.progress = (self.progress + step).min(1.0);
                if self.progress >= 1.0 {
                    self.active = false;
                    return Some(Finished::Forward);
                }
            }
            Direction::Reverse => {
                self.progress = (self.progress - step).max(0.0);
                if self.progress <= 0.0 {
                    self.active = false;
                    return Some(Finished::Reverse);
                }
            }
        }
        None
    }

    fn progress(&self) -> f32 {
        self.progress
    }

    fn value(&self) -> f32 {
        self.ease.apply(self.progress)
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
