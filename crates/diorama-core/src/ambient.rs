//! Stateless-looking background motion: drifting clouds, oscillating rotors
//! and the smoke shader clock.

use crate::constants::{
    CLOUD_FLOAT_AMPLITUDE, CLOUD_FLOAT_SPEED_MIN, CLOUD_FLOAT_SPEED_SPAN,
    CLOUD_ROTATION_SPEED_MIN, CLOUD_ROTATION_SPEED_SPAN, ROTOR_BASE_DEG, ROTOR_FREQUENCY,
    ROTOR_RANGE_DEG,
};
use crate::scene::{NodeId, NodeTable, Transform};
use crate::tags::AmbientKind;
use fnv::FnvHashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Rotor angle around X, in radians, at `t` seconds.
pub fn rotor_angle(t: f32) -> f32 {
    ROTOR_BASE_DEG.to_radians() + (t * ROTOR_FREQUENCY).sin() * (ROTOR_RANGE_DEG / 2.0).to_radians()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudDrift {
    pub float_speed: f32,
    pub float_offset: f32,
    /// Radians added to the yaw every frame.
    pub rotation_speed: f32,
    yaw: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Cloud(CloudDrift),
    Rotor { mirrored: bool },
}

#[derive(Clone, Debug, Default)]
pub struct AmbientDriver {
    motions: FnvHashMap<NodeId, Motion>,
    elapsed: f32,
}

impl AmbientDriver {
    pub fn from_nodes(nodes: &NodeTable, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut motions = FnvHashMap::default();
        for (id, node) in nodes.iter() {
            let motion = match node.tags.ambient {
                Some(AmbientKind::Cloud) => Motion::Cloud(CloudDrift {
                    float_speed: CLOUD_FLOAT_SPEED_MIN + rng.gen::<f32>() * CLOUD_FLOAT_SPEED_SPAN,
                    float_offset: rng.gen::<f32>() * TAU,
                    rotation_speed: CLOUD_ROTATION_SPEED_MIN
                        + rng.gen::<f32>() * CLOUD_ROTATION_SPEED_SPAN,
                    yaw: 0.0,
                }),
                Some(AmbientKind::RotorA) => Motion::Rotor { mirrored: false },
                Some(AmbientKind::RotorB) => Motion::Rotor { mirrored: true },
                None => continue,
            };
            motions.insert(id, motion);
        }
        Self {
            motions,
            elapsed: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    pub fn cloud(&self, node: NodeId) -> Option<&CloudDrift> {
        match self.motions.get(&node) {
            Some(Motion::Cloud(drift)) => Some(drift),
            _ => None,
        }
    }

    pub fn smoke_time(&self) -> f32 {
        self.elapsed
    }

    /// One frame at `elapsed` seconds since the scene started.
    pub fn tick(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
        for motion in self.motions.values_mut() {
            if let Motion::Cloud(drift) = motion {
                drift.yaw += drift.rotation_speed;
            }
        }
    }

    /// Write the ambient pose of every animated node into the table.
    pub fn apply(&self, nodes: &mut NodeTable) {
        for &id in self.motions.keys() {
            let Some(base) = nodes.get(id).map(|n| *n.base()) else {
                continue;
            };
            nodes.set_live(id, self.adjust(id, base));
        }
    }

    /// `base` with this frame's ambient motion layered on; untouched for
    /// nodes without ambient motion.
    pub fn adjust(&self, node: NodeId, base: Transform) -> Transform {
        let mut t = base;
        match self.motions.get(&node) {
            Some(Motion::Cloud(drift)) => {
                t.position.y = base.position.y
                    + (self.elapsed * drift.float_speed + drift.float_offset).sin()
                        * CLOUD_FLOAT_AMPLITUDE;
                t.rotation.y = base.rotation.y + drift.yaw;
            }
            Some(Motion::Rotor { mirrored }) => {
                let angle = rotor_angle(self.elapsed);
                t.rotation.x = if *mirrored { -angle } else { angle };
            }
            None => {}
        }
        t
    }
}

