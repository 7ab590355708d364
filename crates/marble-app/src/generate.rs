//! Config-driven mesh generation.

use std::path::Path;

use marble_config::{Config, MeshConfig, MeshShape};
use marble_mesh::{Mesh, MeshError, MeshStats, generate_sphere_mesh, quad_mesh};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::export::export_mesh;

/// Build the mesh selected by `config`.
pub fn build_mesh(config: &MeshConfig) -> Result<Mesh, MeshError> {
    match config.shape {
        MeshShape::Sphere => generate_sphere_mesh(config.resolution),
        MeshShape::Quad => Ok(quad_mesh()),
    }
}

/// Generate the configured mesh, log its statistics and export it if enabled.
#[instrument(skip_all, fields(shape = config.mesh.shape.name()))]
pub fn run(config: &Config) -> Result<MeshStats, AppError> {
    let mesh = build_mesh(&config.mesh)?;
    let stats = mesh.stats();
    info!(
        vertices = stats.vertex_count,
        indices = stats.index_count,
        triangles = stats.triangle_count,
        "{stats}"
    );

    if config.export.enabled {
        let dir = config
            .export
            .directory
            .as_deref()
            .unwrap_or_else(|| Path::new("."));
        let files = export_mesh(&mesh, dir, config.mesh.shape.name())?;
        info!(
            vertices = %files.vertices.display(),
            indices = %files.indices.display(),
            "exported mesh buffers"
        );
    }

    Ok(stats)
}
