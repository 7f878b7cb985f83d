//! Perspective camera, view presets and the view cycler.

use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_TWEEN_SEC, CAMERA_ZFAR, CAMERA_ZNEAR, GLOW_VIEW_INDEX,
    HINT_VIEW_INDEX, NARROW_HOME_POSE, NARROW_VIEWPORT_MAX_PX, NARROW_VIEW_PRESETS,
    WIDE_HOME_POSE, WIDE_VIEW_PRESETS,
};
use crate::error::RuntimeError;
use crate::tween::{Ease, Finished, Timeline, Tween};
use glam::{Mat4, Vec2, Vec3, Vec4};
use smallvec::SmallVec;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(pose: CameraPose, aspect: f32) -> Self {
        Self {
            eye: pose.position,
            target: pose.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.eye,
            target: self.target,
        }
    }

    pub fn set_pose(&mut self, pose: CameraPose) {
        self.eye = pose.position;
        self.target = pose.target;
    }

    /// World-space ray `(origin, direction)` through a point in NDC.
    pub fn ray_through(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        (self.eye, (p1 - self.eye).normalize())
    }

    /// Project a world point to NDC; `None` when it is behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.projection_matrix() * self.view_matrix() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub const fn from_pair(pair: [Vec3; 2]) -> Self {
        Self {
            position: pair[0],
            target: pair[1],
        }
    }

    pub fn lerp(&self, other: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(other.position, t),
            target: self.target.lerp(other.target, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Narrow,
    Wide,
}

impl Breakpoint {
    pub fn for_width(width_px: f32) -> Self {
        if width_px < NARROW_VIEWPORT_MAX_PX {
            Breakpoint::Narrow
        } else {
            Breakpoint::Wide
        }
    }

    pub fn home_pose(self) -> CameraPose {
        match self {
            Breakpoint::Narrow => CameraPose::from_pair(NARROW_HOME_POSE),
            Breakpoint::Wide => CameraPose::from_pair(WIDE_HOME_POSE),
        }
    }

    pub fn view_presets(self) -> Vec<CameraPose> {
        let presets: &[[Vec3; 2]] = match self {
            Breakpoint::Narrow => &NARROW_VIEW_PRESETS,
            Breakpoint::Wide => &WIDE_VIEW_PRESETS,
        };
        presets.iter().copied().map(CameraPose::from_pair).collect()
    }
}

/// Side effects tied to the index the cycler lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewHook {
    StartAttentionGlow,
    StopAttentionGlow,
    PlayInteractionHint,
}

pub struct CameraCycler {
    poses: Vec<CameraPose>,
    index: usize,
    tween: Tween,
    from: CameraPose,
    to: CameraPose,
}

impl CameraCycler {
    pub fn new(poses: Vec<CameraPose>) -> Result<Self, RuntimeError> {
        let first = *poses.first().ok_or(RuntimeError::EmptyCameraPresets)?;
        Ok(Self {
            poses,
            index: 0,
            tween: Tween::new(CAMERA_TWEEN_SEC, Ease::Power2InOut),
            from: first,
            to: first,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn poses(&self) -> &[CameraPose] {
        &self.poses
    }

    pub fn is_moving(&self) -> bool {
        self.tween.is_active()
    }

    /// Where the running (or last) move ends.
    pub fn destination(&self) -> CameraPose {
        self.to
    }

    /// Head for the pose at the current index, then advance the index.
    /// A trigger during a move re-targets from wherever the camera is now.
    pub fn trigger(&mut self, current: CameraPose) -> SmallVec<[ViewHook; 2]> {
        let previous = self.index;
        self.from = current;
        self.to = self.poses[previous];
        self.index = (previous + 1) % self.poses.len();
        self.tween.restart();

        let mut hooks = SmallVec::new();
        if previous == GLOW_VIEW_INDEX && self.index != GLOW_VIEW_INDEX {
            hooks.push(ViewHook::StopAttentionGlow);
        }
        if self.index == GLOW_VIEW_INDEX {
            hooks.push(ViewHook::StartAttentionGlow);
        }
        if self.index == HINT_VIEW_INDEX {
            hooks.push(ViewHook::PlayInteractionHint);
        }
        log::info!("[camera] view {} -> {}", previous, self.index);
        hooks
    }

    /// Pose of the view the last trigger headed for; home before any trigger.
    pub fn current_view(&self) -> CameraPose {
        let len = self.poses.len();
        self.poses[(self.index + len - 1) % len]
    }

    /// Swap in another preset list, keeping the view index. A running move
    /// restarts from `current` towards the matching view.
    pub fn replace_presets(
        &mut self,
        poses: Vec<CameraPose>,
        current: CameraPose,
    ) -> Result<CameraPose, RuntimeError> {
        if poses.is_empty() {
            return Err(RuntimeError::EmptyCameraPresets);
        }
        self.index %= poses.len();
        self.poses = poses;
        self.to = self.current_view();
        if self.tween.is_active() {
            self.from = current;
            self.tween.restart();
        } else {
            self.from = self.to;
        }
        Ok(self.to)
    }

    /// Advance the move; returns the interpolated pose while one is running.
    pub fn tick(&mut self, dt: f32) -> Option<CameraPose> {
        if !self.tween.is_active() {
            return None;
        }
        let finished = self.tween.tick(dt);
        let pose = self.from.lerp(&self.to, self.tween.value());
        if finished == Some(Finished::Forward) {
            self.from = self.to;
        }
        Some(pose)
    }
}
