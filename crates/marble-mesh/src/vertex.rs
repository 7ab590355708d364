//! Interleaved vertex and triangle records.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// A single mesh vertex, stored exactly as the GPU reads it.
///
/// Layout (44 bytes total, no padding):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` normal `[f32; 3]`
///   - `[24..36]` color `[f32; 3]`
///   - `[36..44]` uv `[f32; 2]`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
    /// Per-vertex tint.
    pub color: [f32; 3],
    /// Texture coordinates in `[0, 1]²`.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(Vertex, [u8; 44]);

/// Three indices into a vertex buffer, in front-face winding order.
///
/// A `[Triangle]` slice casts directly to a flat `u32` index buffer.
pub type Triangle = [u32; 3];

impl Vertex {
    /// Build a vertex from glam vectors.
    pub fn new(position: Vec3, normal: Vec3, color: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color: color.to_array(),
            uv: uv.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    pub fn color(&self) -> Vec3 {
        Vec3::from_array(self.color)
    }

    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }
}
