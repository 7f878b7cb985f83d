//! Button-level effects layered on top of hover/click: the slider toggle,
//! click colour flashes, the looping attention glow and the one-shot
//! interaction hint. All of them are expressed as deltas from the captured
//! baseline, so stopping an effect restores the original pose and colour.

use crate::constants::{
    CLICK_FLASH_COLOR, CLICK_FLASH_SEC, GLOW_COLOR, GLOW_PERIOD_SEC, GLOW_STAGGER_SEC,
    GLOW_STRENGTH, HINT_BOOP_SCALE, HINT_DURATION_SEC, HINT_NUDGE, HINT_STAGGER_SEC, HINT_TINT,
    SLIDER_OFFSET, SLIDER_TOGGLE_SEC,
};
use crate::registry::ObjectId;
use crate::scene::PoseDelta;
use crate::tween::{Direction, Ease, Timeline, Tween};
use fnv::FnvHashMap;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Two-state slider: each click flips between rest and offset.
#[derive(Clone, Debug)]
pub struct SliderToggle {
    pub object: ObjectId,
    tween: Tween,
    offset: Vec3,
}

impl SliderToggle {
    pub fn new(object: ObjectId) -> Self {
        Self {
            object,
            tween: Tween::new(SLIDER_TOGGLE_SEC, Ease::Power2InOut),
            offset: SLIDER_OFFSET,
        }
    }

    /// Returns whether the slider is now heading to the offset position.
    pub fn toggle(&mut self) -> bool {
        if self.is_offset() {
            self.tween.reverse();
        } else {
            self.tween.play();
        }
        self.is_offset()
    }

    pub fn is_offset(&self) -> bool {
        self.tween.direction() == Direction::Forward
    }

    pub fn delta(&self) -> PoseDelta {
        PoseDelta {
            translate: self.offset * self.tween.value(),
            ..PoseDelta::IDENTITY
        }
    }

    fn tick(&mut self, dt: f32) {
        self.tween.tick(dt);
    }
}

/// Flash to a colour, then ease back to the base colour.
#[derive(Clone, Debug)]
struct ColorPulse {
    tween: Tween,
}

impl ColorPulse {
    fn new() -> Self {
        Self {
            tween: Tween::new(CLICK_FLASH_SEC, Ease::Power2Out),
        }
    }

    fn weight(&self) -> f32 {
        if self.tween.is_active() {
            1.0 - self.tween.value()
        } else {
            0.0
        }
    }
}

/// Staggered, endlessly repeating glow over a fixed set of buttons.
#[derive(Clone, Debug, Default)]
pub struct AttentionGlow {
    members: Vec<ObjectId>,
    elapsed: f32,
    active: bool,
}

impl AttentionGlow {
    pub fn new(members: Vec<ObjectId>) -> Self {
        Self {
            members,
            elapsed: 0.0,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = !self.members.is_empty();
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.elapsed = 0.0;
    }

    pub fn weight(&self, object: ObjectId) -> f32 {
        if !self.active {
            return 0.0;
        }
        let Some(slot) = self.members.iter().position(|m| *m == object) else {
            return 0.0;
        };
        let local = self.elapsed - slot as f32 * GLOW_STAGGER_SEC;
        if local <= 0.0 {
            return 0.0;
        }
        let phase = (local / GLOW_PERIOD_SEC).fract();
        0.5 - 0.5 * (TAU * phase).cos()
    }

    fn tick(&mut self, dt: f32) {
        if self.active {
            self.elapsed += dt;
        }
    }
}

/// One-shot nudge, tint and scale "boop" across the desk controls.
#[derive(Clone, Debug, Default)]
pub struct InteractionHint {
    members: Vec<ObjectId>,
    elapsed: f32,
    active: bool,
}

impl InteractionHint {
    pub fn new(members: Vec<ObjectId>) -> Self {
        Self {
            members,
            elapsed: 0.0,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn play(&mut self) {
        self.elapsed = 0.0;
        self.active = !self.members.is_empty();
    }

    pub fn total_duration(&self) -> f32 {
        HINT_DURATION_SEC + self.members.len().saturating_sub(1) as f32 * HINT_STAGGER_SEC
    }

    /// Bump envelope in `[0, 1]` for one member.
    pub fn bump(&self, object: ObjectId) -> f32 {
        if !self.active {
            return 0.0;
        }
        let Some(slot) = self.members.iter().position(|m| *m == object) else {
            return 0.0;
        };
        let u = (self.elapsed - slot as f32 * HINT_STAGGER_SEC) / HINT_DURATION_SEC;
        if (0.0..1.0).contains(&u) {
            (PI * u).sin()
        } else {
            0.0
        }
    }

    fn tick(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= self.total_duration() {
            self.active = false;
            self.elapsed = 0.0;
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ButtonEffects {
    pub slider: Option<SliderToggle>,
    pub glow: AttentionGlow,
    pub hint: InteractionHint,
    pulses: FnvHashMap<ObjectId, ColorPulse>,
}

impl ButtonEffects {
    pub fn new(slider: Option<ObjectId>, glow: Vec<ObjectId>, hint: Vec<ObjectId>) -> Self {
        Self {
            slider: slider.map(SliderToggle::new),
            glow: AttentionGlow::new(glow),
            hint: InteractionHint::new(hint),
            pulses: FnvHashMap::default(),
        }
    }

    /// Restart the click flash on an object.
    pub fn pulse(&mut self, object: ObjectId) {
        self.pulses
            .entry(object)
            .or_insert_with(ColorPulse::new)
            .tween
            .restart();
    }

    pub fn is_pulsing(&self, object: ObjectId) -> bool {
        self.pulses
            .get(&object)
            .is_some_and(|p| p.tween.is_active())
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(slider) = self.slider.as_mut() {
            slider.tick(dt);
        }
        self.glow.tick(dt);
        self.hint.tick(dt);
        for pulse in self.pulses.values_mut() {
            pulse.tween.tick(dt);
        }
    }

    pub fn delta_for(&self, object: ObjectId) -> PoseDelta {
        let mut delta = PoseDelta::IDENTITY;
        if let Some(slider) = self.slider.as_ref().filter(|s| s.object == object) {
            delta = delta.then(&slider.delta());
        }
        let bump = self.hint.bump(object);
        if bump > 0.0 {
            let boop = PoseDelta {
                translate: HINT_NUDGE,
                rotate: Vec3::ZERO,
                scale: Vec3::splat(HINT_BOOP_SCALE),
            };
            delta = delta.then(&boop.weighted(bump));
        }
        delta
    }

    /// Layered tint: hint, then glow, then the click flash on top.
    pub fn color_for(&self, object: ObjectId, base: Vec3) -> Vec3 {
        let mut color = base;
        let bump = self.hint.bump(object);
        if bump > 0.0 {
            color = color.lerp(HINT_TINT, bump);
        }
        let glow = self.glow.weight(object);
        if glow > 0.0 {
            color = color.lerp(GLOW_COLOR, glow * GLOW_STRENGTH);
        }
        if let Some(pulse) = self.pulses.get(&object) {
            let w = pulse.weight();
            if w > 0.0 {
                color = color.lerp(CLICK_FLASH_COLOR, w);
            }
        }
        color
    }
}
