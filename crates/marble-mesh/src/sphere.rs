//! UV sphere mesh generation.
//!
//! The sphere is a `resolution × resolution` grid over the parameter square
//! `(u, v) ∈ [0, 1]²`. `u` sweeps the polar angle from the +Z pole to the
//! -Z pole and `v` sweeps the azimuth once around the Z axis. The first and
//! last columns coincide along the seam and each pole row collapses to a
//! single point, so the texture can wrap without a discontinuity.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::sampling::sample_unit_interval;
use crate::vertex::Vertex;

/// Smallest resolution that spans a surface.
pub const MIN_SPHERE_RESOLUTION: u32 = 2;

/// Largest resolution whose vertices are all addressable by a `u32` index.
pub const MAX_SPHERE_RESOLUTION: u32 = 1 << 16;

/// Placeholder tint written into every sphere vertex.
pub const SPHERE_VERTEX_COLOR: Vec3 = Vec3::ONE;

/// Generate a unit UV sphere with `resolution` samples along each axis.
///
/// Produces `resolution²` vertices and `2 * (resolution - 1)²` triangles.
/// The vertex for parameter indices `(i, j)` is stored at
/// `i + j * resolution`, and every grid cell is split into the triangles
/// `(P0, P1, P3)` and `(P3, P1, P2)`, where `P0 = (i, j)`, `P1 = (i + 1, j)`,
/// `P2 = (i + 1, j + 1)` and `P3 = (i, j + 1)`. Viewed from outside the
/// sphere both triangles wind counter-clockwise.
///
/// # Errors
///
/// Returns [`MeshError::ResolutionTooLow`] for resolutions below
/// [`MIN_SPHERE_RESOLUTION`] and [`MeshError::IndexOverflow`] above
/// [`MAX_SPHERE_RESOLUTION`]. Resolutions near the maximum need hundreds of
/// gigabytes; if the buffers cannot be allocated the result is
/// [`MeshError::OutOfMemory`].
///
/// ```
/// use marble_mesh::generate_sphere_mesh;
///
/// let mesh = generate_sphere_mesh(3).unwrap();
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn generate_sphere_mesh(resolution: u32) -> Result<Mesh, MeshError> {
    let mut mesh = Mesh::new();
    generate_sphere_mesh_into(resolution, &mut mesh)?;
    Ok(mesh)
}

/// Like [`generate_sphere_mesh`], but reuses the buffers of an existing mesh.
///
/// `mesh` is cleared first, so repeated calls never accumulate output. On
/// error it is left empty.
pub fn generate_sphere_mesh_into(resolution: u32, mesh: &mut Mesh) -> Result<(), MeshError> {
    mesh.clear();
    let (vertex_count, triangle_count) = sphere_element_counts(resolution)?;
    reserve_sphere(mesh, resolution, vertex_count, triangle_count)?;

    // Column by column, so (i, j) lands at i + j * resolution.
    for v in sample_unit_interval(resolution) {
        for u in sample_unit_interval(resolution) {
            mesh.vertices.push(sphere_vertex(u, v));
        }
    }

    let r = resolution;
    for i in 0..r - 1 {
        for j in 0..r - 1 {
            let p0 = i + j * r;
            let p1 = (i + 1) + j * r;
            let p2 = (i + 1) + (j + 1) * r;
            let p3 = i + (j + 1) * r;

            mesh.triangles.push([p0, p1, p3]);
            mesh.triangles.push([p3, p1, p2]);
        }
    }

    debug!(
        resolution,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated sphere mesh"
    );
    Ok(())
}

/// Vertex and triangle counts for `resolution`, validating the range.
fn sphere_element_counts(resolution: u32) -> Result<(usize, usize), MeshError> {
    if resolution < MIN_SPHERE_RESOLUTION {
        return Err(MeshError::ResolutionTooLow { resolution });
    }
    if resolution > MAX_SPHERE_RESOLUTION {
        return Err(MeshError::IndexOverflow { resolution });
    }
    let r = resolution as usize;
    Ok((r * r, 2 * (r - 1) * (r - 1)))
}

fn reserve_sphere(
    mesh: &mut Mesh,
    resolution: u32,
    vertices: usize,
    triangles: usize,
) -> Result<(), MeshError> {
    mesh.try_reserve(vertices, triangles).map_err(|_| {
        mesh.clear();
        MeshError::OutOfMemory { resolution }
    })
}

/// The sphere vertex at parameter `(u, v)`.
fn sphere_vertex(u: f32, v: f32) -> Vertex {
    let (sin_theta, cos_theta) = (u * PI).sin_cos();
    let (sin_phi, cos_phi) = (v * TAU).sin_cos();

    let position = Vec3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta);

    Vertex::new(
        position,
        position.normalize(),
        SPHERE_VERTEX_COLOR,
        Vec2::new(1.0 - u, v),
    )
}
