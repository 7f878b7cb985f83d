//! Scene node table: the named meshes handed over by the asset loader, with
//! their load-time baselines and the live pose the runtime animates.

use crate::tags::{classify, NodeTags, Role};
use bytemuck::{Pod, Zeroable};
use fnv::FnvHashMap;
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Opaque handle to a texture owned by the rendering host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }
}

/// Local-space bounding box used for picking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            half_extents: Vec3::splat(0.5),
        }
    }
}

impl Bounds {
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }
}

/// Relative change applied on top of a baseline transform. Translation and
/// rotation add, scale multiplies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseDelta {
    pub translate: Vec3,
    pub rotate: Vec3,
    pub scale: Vec3,
}

impl Default for PoseDelta {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PoseDelta {
    pub const IDENTITY: PoseDelta = PoseDelta {
        translate: Vec3::ZERO,
        rotate: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Partially applied delta: 0 is identity, 1 is the full delta.
    pub fn weighted(&self, amount: f32) -> PoseDelta {
        PoseDelta {
            translate: self.translate * amount,
            rotate: self.rotate * amount,
            scale: Vec3::ONE + (self.scale - Vec3::ONE) * amount,
        }
    }

    pub fn then(&self, other: &PoseDelta) -> PoseDelta {
        PoseDelta {
            translate: self.translate + other.translate,
            rotate: self.rotate + other.rotate,
            scale: self.scale * other.scale,
        }
    }

    pub fn apply_to(&self, base: &Transform) -> Transform {
        Transform {
            position: base.position + self.translate,
            rotation: base.rotation + self.rotate,
            scale: base.scale * self.scale,
        }
    }
}

/// What the asset loader reports for each mesh in the loaded scene.
#[derive(Clone, Debug)]
pub struct NodeDesc {
    pub name: String,
    pub transform: Transform,
    pub bounds: Bounds,
    pub color: Vec3,
}

impl NodeDesc {
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
            bounds: Bounds::default(),
            color: Vec3::ONE,
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub tags: NodeTags,
    pub bounds: Bounds,
    base: Transform,
    base_color: Vec3,
    live: Transform,
    color: Vec3,
    dirty: bool,
}

impl SceneNode {
    fn new(desc: NodeDesc) -> Self {
        let tags = classify(&desc.name);
        Self {
            name: desc.name,
            tags,
            bounds: desc.bounds,
            base: desc.transform,
            base_color: desc.color,
            live: desc.transform,
            color: desc.color,
            dirty: false,
        }
    }

    /// Transform captured at load time. Never mutated.
    pub fn base(&self) -> &Transform {
        &self.base
    }

    /// Colour captured at load time; tint effects always restore to this.
    pub fn base_color(&self) -> Vec3 {
        self.base_color
    }

    pub fn live(&self) -> &Transform {
        &self.live
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }
}

/// Flat per-node record the host uploads in one go.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct NodePose {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    pub color: [f32; 3],
}

impl From<&SceneNode> for NodePose {
    fn from(node: &SceneNode) -> Self {
        Self {
            position: node.live.position.to_array(),
            rotation: node.live.rotation.to_array(),
            scale: node.live.scale.to_array(),
            color: node.color.to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NodeTable {
    nodes: Vec<SceneNode>,
    by_name: FnvHashMap<String, NodeId>,
}

impl NodeTable {
    pub fn from_descs(descs: Vec<NodeDesc>) -> Self {
        let mut table = NodeTable::default();
        for desc in descs {
            let id = NodeId(table.nodes.len());
            table.by_name.entry(desc.name.clone()).or_insert(id);
            table.nodes.push(SceneNode::new(desc));
        }
        table
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// First node tagged with `role`, pickable or not.
    pub fn find_role(&self, role: Role) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.tags.role == role)
            .map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn set_live(&mut self, id: NodeId, transform: Transform) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            if node.live != transform {
                node.live = transform;
                node.dirty = true;
            }
        }
    }

    pub fn set_color(&mut self, id: NodeId, color: Vec3) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            if node.color != color {
                node.color = color;
                node.dirty = true;
            }
        }
    }

    /// Collect and clear the ids of nodes whose pose or colour changed.
    pub fn drain_dirty(&mut self, out: &mut Vec<NodeId>) {
        out.clear();
        for (i, node) in self.nodes.iter_mut().enumerate() {
            if node.dirty {
                node.dirty = false;
                out.push(NodeId(i));
            }
        }
    }
}
