//! Mesh generation error types.

use crate::sphere::{MAX_SPHERE_RESOLUTION, MIN_SPHERE_RESOLUTION};

/// Errors that can occur when generating a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// Fewer than two samples per axis cannot span a surface.
    #[error(
        "sphere resolution {resolution} is too low (minimum is {min})",
        min = MIN_SPHERE_RESOLUTION
    )]
    ResolutionTooLow { resolution: u32 },

    /// The vertex count would not be addressable with `u32` indices.
    #[error(
        "sphere resolution {resolution} exceeds the u32 index range (maximum is {max})",
        max = MAX_SPHERE_RESOLUTION
    )]
    IndexOverflow { resolution: u32 },

    /// The vertex or index buffer could not be allocated.
    #[error("not enough memory for a sphere of resolution {resolution}")]
    OutOfMemory { resolution: u32 },
}
