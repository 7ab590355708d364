//! Application error type.

use std::path::PathBuf;

use marble_config::ConfigError;
use marble_mesh::MeshError;

use crate::platform::PlatformError;

/// Everything that can stop a `marble` run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("mesh generation failed: {0}")]
    Mesh(#[from] MeshError),

    /// Writing an exported buffer failed.
    #[error("failed to write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
