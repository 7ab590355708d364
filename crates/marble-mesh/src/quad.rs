//! Constant test quad.

use glam::{Vec2, Vec3};

use crate::mesh::Mesh;
use crate::vertex::Vertex;

/// A 2×2 quad in the XY plane facing +Z, with a distinct tint per corner.
///
/// Uses the same two-triangle split as a sphere grid cell, so it renders
/// with the same winding and culling state.
pub fn quad_mesh() -> Mesh {
    let red = Vec3::X;
    let green = Vec3::Y;
    let blue = Vec3::Z;

    let corners = [
        (Vec3::new(-1.0, -1.0, 0.0), red, Vec2::new(0.0, 0.0)),
        (Vec3::new(1.0, -1.0, 0.0), green, Vec2::new(1.0, 0.0)),
        (Vec3::new(1.0, 1.0, 0.0), red, Vec2::new(1.0, 1.0)),
        (Vec3::new(-1.0, 1.0, 0.0), blue, Vec2::new(0.0, 1.0)),
    ];

    let mut mesh = Mesh::with_capacity(corners.len(), 2);
    mesh.vertices.extend(
        corners
            .iter()
            .map(|&(position, color, uv)| Vertex::new(position, Vec3::Z, color, uv)),
    );
    mesh.triangles.extend_from_slice(&[[0, 1, 3], [3, 1, 2]]);
    mesh
}
