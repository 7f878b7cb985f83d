use diorama_core::{Bounds, CameraPose, NodeDesc, Transform};
use glam::{Vec2, Vec3};

/// Viewport for NDC mapping; degenerate sizes clamp to one pixel.
#[inline]
pub fn viewport_size(width: f64, height: f64) -> Vec2 {
    Vec2::new((width as f32).max(1.0), (height as f32).max(1.0))
}

#[inline]
fn vec3_at(values: &[f32], offset: usize) -> Option<Vec3> {
    values
        .get(offset..offset + 3)
        .map(|v| Vec3::new(v[0], v[1], v[2]))
}

/// Unpack `[px, py, pz, tx, ty, tz]` as sent by the host's orbit controls.
#[inline]
pub fn pose_from_slice(values: &[f32]) -> Option<CameraPose> {
    Some(CameraPose {
        position: vec3_at(values, 0)?,
        target: vec3_at(values, 3)?,
    })
}

/// Build a node description from the flat arrays the JS loader sends:
/// `transform` is position, Euler XYZ rotation, scale; `bounds` is local
/// centre then half extents; `color` is linear RGB. Short arrays fall back to
/// identity, a unit box and white.
pub fn node_desc(name: &str, transform: &[f32], bounds: &[f32], color: &[f32]) -> NodeDesc {
    let identity = Transform::default();
    let transform = Transform {
        position: vec3_at(transform, 0).unwrap_or(identity.position),
        rotation: vec3_at(transform, 3).unwrap_or(identity.rotation),
        scale: vec3_at(transform, 6).unwrap_or(identity.scale),
    };
    let unit = Bounds::default();
    let bounds = Bounds {
        center: vec3_at(bounds, 0).unwrap_or(unit.center),
        half_extents: vec3_at(bounds, 3).unwrap_or(unit.half_extents),
    };
    NodeDesc::new(name, transform)
        .with_bounds(bounds)
        .with_color(vec3_at(color, 0).unwrap_or(Vec3::ONE))
}
