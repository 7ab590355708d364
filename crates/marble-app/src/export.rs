//! Raw buffer export.
//!
//! Writes exactly the bytes a graphics API receives: the interleaved vertex
//! buffer and the flat `u32` index buffer, in native byte order.

use std::path::{Path, PathBuf};

use marble_mesh::Mesh;
use tracing::debug;

use crate::error::AppError;

/// Paths written by [`export_mesh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub vertices: PathBuf,
    pub indices: PathBuf,
}

/// Write `<name>.vertices.bin` and `<name>.indices.bin` into `dir`.
///
/// `dir` is created if missing. Existing files are overwritten.
pub fn export_mesh(mesh: &Mesh, dir: &Path, name: &str) -> Result<ExportedFiles, AppError> {
    std::fs::create_dir_all(dir).map_err(|source| AppError::Export {
        path: dir.to_path_buf(),
        source,
    })?;

    let files = ExportedFiles {
        vertices: dir.join(format!("{name}.vertices.bin")),
        indices: dir.join(format!("{name}.indices.bin")),
    };

    write_buffer(&files.vertices, mesh.vertex_bytes())?;
    write_buffer(&files.indices, mesh.index_bytes())?;
    Ok(files)
}

fn write_buffer(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    std::fs::write(path, bytes).map_err(|source| AppError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote buffer");
    Ok(())
}
