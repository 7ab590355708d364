//! Owned vertex and triangle buffers ready for GPU upload.

use std::collections::TryReserveError;
use std::fmt;
use std::mem;

use crate::vertex::{Triangle, Vertex};

/// An indexed triangle mesh.
///
/// Vertex order is significant: every [`Triangle`] refers to vertices by
/// their position in `vertices`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    /// Interleaved vertex buffer.
    pub vertices: Vec<Vertex>,
    /// Triangle list, three indices per entry.
    pub triangles: Vec<Triangle>,
}

/// Element counts and buffer sizes of a [`Mesh`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshStats {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub index_count: usize,
    pub vertex_buffer_bytes: usize,
    pub index_buffer_bytes: usize,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with room for the given number of elements.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Removes all vertices and triangles, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
    }

    /// Reserves room for at least the given number of additional elements.
    ///
    /// Fails instead of aborting when the allocator cannot provide the memory.
    pub fn try_reserve(
        &mut self,
        vertices: usize,
        triangles: usize,
    ) -> Result<(), TryReserveError> {
        self.vertices.try_reserve(vertices)?;
        self.triangles.try_reserve(triangles)
    }

    /// Returns `true` if the mesh contains no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of entries in the flat index buffer.
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns the size of the vertex buffer in bytes.
    pub fn vertex_buffer_bytes(&self) -> usize {
        self.vertices.len() * mem::size_of::<Vertex>()
    }

    /// Returns the size of the index buffer in bytes.
    pub fn index_buffer_bytes(&self) -> usize {
        self.index_count() * mem::size_of::<u32>()
    }

    /// The triangle list viewed as a flat index buffer.
    pub fn indices(&self) -> &[u32] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Returns the vertex data as a byte slice for GPU upload (zero-copy).
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Returns the index data as a byte slice for GPU upload (zero-copy).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertex_count: self.vertex_count(),
            triangle_count: self.triangle_count(),
            index_count: self.index_count(),
            vertex_buffer_bytes: self.vertex_buffer_bytes(),
            index_buffer_bytes: self.index_buffer_bytes(),
        }
    }
}

impl fmt::Display for MeshStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vertices, {} indices ({} triangles), {} + {} bytes",
            self.vertex_count,
            self.index_count,
            self.triangle_count,
            self.vertex_buffer_bytes,
            self.index_buffer_bytes,
        )
    }
}
