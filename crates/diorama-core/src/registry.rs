//! Registry of pickable scene objects with their hover and click timelines.

use crate::constants::{CLICK_DURATION_SEC, CLICK_PRESS_SHARE, HOVER_DURATION_SEC};
use crate::scene::{NodeId, NodeTable, PoseDelta};
use crate::tags::{ClickVariant, HoverVariant, Role};
use crate::tween::{Direction, Ease, Timeline, Tween};
use fnv::FnvHashMap;
use glam::Vec3;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl HoverVariant {
    /// Raised pose relative to the load-time baseline.
    pub fn raised(self) -> PoseDelta {
        let (scale, translate, rotate) = match self {
            HoverVariant::Default => (
                Vec3::splat(1.3),
                Vec3::new(0.1, -0.1, 0.1),
                Vec3::new(0.0, -PI / 8.0, 0.0),
            ),
            HoverVariant::V2 => (
                Vec3::new(1.1, 1.5, 1.1),
                Vec3::new(0.0, 0.05, 0.0),
                Vec3::new(0.0, PI / 18.0, 0.0),
            ),
            HoverVariant::V3 => (Vec3::new(1.2, 1.5, 1.2), Vec3::ZERO, Vec3::ZERO),
            HoverVariant::Dj => (Vec3::splat(1.2), Vec3::ZERO, Vec3::new(0.0, PI / 3.0, 0.0)),
            HoverVariant::Slider => (Vec3::new(1.1, 1.2, 1.1), Vec3::ZERO, Vec3::ZERO),
            HoverVariant::PcButton => (Vec3::new(1.2, 1.1, 1.1), Vec3::ZERO, Vec3::ZERO),
            HoverVariant::Tthings => (Vec3::new(1.2, 1.0, 1.2), Vec3::ZERO, Vec3::ZERO),
        };
        PoseDelta {
            translate,
            rotate,
            scale,
        }
    }
}

impl ClickVariant {
    /// Pressed pose relative to the baseline.
    pub fn pressed(self) -> PoseDelta {
        match self {
            ClickVariant::Dj => PoseDelta {
                translate: Vec3::new(0.0, -0.08, 0.0),
                rotate: Vec3::ZERO,
                scale: Vec3::new(1.0, 1.5, 1.0),
            },
            ClickVariant::PcButton => PoseDelta {
                translate: Vec3::new(0.0, 0.0, -0.05),
                rotate: Vec3::ZERO,
                scale: Vec3::ONE,
            },
        }
    }
}

/// Reversible hover raise: forward on pointer-enter, reverse on leave.
pub struct HoverTransition {
    timeline: Box<dyn Timeline>,
    raised: PoseDelta,
}

impl HoverTransition {
    pub fn new(variant: HoverVariant) -> Self {
        Self::with_timeline(
            variant.raised(),
            Box::new(Tween::new(HOVER_DURATION_SEC, Ease::Power2Out)),
        )
    }

    pub fn with_timeline(raised: PoseDelta, timeline: Box<dyn Timeline>) -> Self {
        Self { timeline, raised }
    }

    pub fn timeline(&self) -> &dyn Timeline {
        self.timeline.as_ref()
    }

    pub fn enter(&mut self) {
        self.timeline.play();
    }

    pub fn leave(&mut self) {
        self.timeline.reverse();
    }

    /// True while the raise is playing forward or holding at the top.
    pub fn is_entered(&self) -> bool {
        self.timeline.direction() == Direction::Forward
            && (self.timeline.is_active() || self.timeline.progress() > 0.0)
    }

    pub fn delta(&self) -> PoseDelta {
        self.raised.weighted(self.timeline.value())
    }
}

/// One-shot press-and-spring-back animation.
pub struct ClickTransition {
    timeline: Box<dyn Timeline>,
    pressed: PoseDelta,
}

impl ClickTransition {
    pub fn new(variant: ClickVariant) -> Self {
        // press takes a share of the duration, the elastic release the full duration
        let total = CLICK_DURATION_SEC * (1.0 + CLICK_PRESS_SHARE);
        Self {
            timeline: Box::new(Tween::new(total, Ease::Linear)),
            pressed: variant.pressed(),
        }
    }

    pub fn timeline(&self) -> &dyn Timeline {
        self.timeline.as_ref()
    }

    /// Cancel whatever is running and replay from the start.
    pub fn trigger(&mut self) {
        self.timeline.restart();
    }

    pub fn delta(&self) -> PoseDelta {
        let p = self.timeline.progress();
        if p <= 0.0 || p >= 1.0 {
            return PoseDelta::IDENTITY;
        }
        let press_end = CLICK_PRESS_SHARE / (1.0 + CLICK_PRESS_SHARE);
        let (scale_w, move_w) = if p < press_end {
            let u = p / press_end;
            (Ease::Power2In.apply(u), Ease::Power2Out.apply(u))
        } else {
            let u = (p - press_end) / (1.0 - press_end);
            let w = 1.0 - Ease::ElasticOut.apply(u);
            (w, w)
        };
        PoseDelta {
            translate: self.pressed.translate * move_w,
            rotate: Vec3::ZERO,
            scale: Vec3::ONE + (self.pressed.scale - Vec3::ONE) * scale_w,
        }
    }
}

pub struct InteractiveObject {
    pub node: NodeId,
    pub role: Role,
    pub clickable: bool,
    pub hover: Option<HoverTransition>,
    pub click: Option<ClickTransition>,
    /// Set registry-wide while a modal overlay is open.
    pub hover_disabled: bool,
}

impl InteractiveObject {
    pub fn is_hover_entered(&self) -> bool {
        self.hover.as_ref().is_some_and(|h| h.is_entered())
    }

    pub fn delta(&self) -> PoseDelta {
        let hover = self
            .hover
            .as_ref()
            .map(|h| h.delta())
            .unwrap_or(PoseDelta::IDENTITY);
        let click = self
            .click
            .as_ref()
            .map(|c| c.delta())
            .unwrap_or(PoseDelta::IDENTITY);
        hover.then(&click)
    }
}

#[derive(Default)]
pub struct Registry {
    objects: Vec<InteractiveObject>,
    by_node: FnvHashMap<NodeId, ObjectId>,
}

impl Registry {
    /// Collect every pickable node, building its timelines from its tags.
    pub fn from_nodes(nodes: &NodeTable) -> Self {
        let mut registry = Registry::default();
        for (node_id, node) in nodes.iter() {
            let tags = node.tags;
            if !tags.pickable {
                continue;
            }
            let id = ObjectId(registry.objects.len());
            registry.by_node.insert(node_id, id);
            registry.objects.push(InteractiveObject {
                node: node_id,
                role: tags.role,
                clickable: tags.clickable,
                hover: tags.hover.map(HoverTransition::new),
                click: tags.click.map(ClickTransition::new),
                hover_disabled: false,
            });
        }
        log::info!(
            "[scene] registered {} interactive objects out of {} nodes",
            registry.objects.len(),
            nodes.len()
        );
        registry
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&InteractiveObject> {
        self.objects.get(id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut InteractiveObject> {
        self.objects.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &InteractiveObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| (ObjectId(i), o))
    }

    pub fn object_for_node(&self, node: NodeId) -> Option<ObjectId> {
        self.by_node.get(&node).copied()
    }

    pub fn role(&self, id: ObjectId) -> Option<Role> {
        self.get(id).map(|o| o.role)
    }

    pub fn find_role(&self, role: Role) -> Option<ObjectId> {
        self.iter().find(|(_, o)| o.role == role).map(|(id, _)| id)
    }

    pub fn ids_where(&self, mut pred: impl FnMut(Role) -> bool) -> Vec<ObjectId> {
        self.iter()
            .filter(|(_, o)| pred(o.role))
            .map(|(id, _)| id)
            .collect()
    }

    /// Swap in a different hover timeline, keeping the object's raised pose.
    pub fn set_hover_timeline(&mut self, id: ObjectId, timeline: Box<dyn Timeline>) {
        if let Some(obj) = self.objects.get_mut(id.0) {
            if let Some(hover) = obj.hover.as_mut() {
                hover.timeline = timeline;
            }
        }
    }

    pub fn set_hover_disabled(&mut self, disabled: bool) {
        for obj in &mut self.objects {
            obj.hover_disabled = disabled;
        }
    }

    pub fn entered_count(&self) -> usize {
        self.objects.iter().filter(|o| o.is_hover_entered()).count()
    }

    pub fn tick(&mut self, dt: f32) {
        for obj in &mut self.objects {
            if let Some(hover) = obj.hover.as_mut() {
                hover.timeline.tick(dt);
            }
            if let Some(click) = obj.click.as_mut() {
                click.timeline.tick(dt);
            }
        }
    }
}
