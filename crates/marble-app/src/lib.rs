//! The `marble` command-line tool: generate a mesh from configuration,
//! report its statistics, and optionally write its GPU buffers to disk.

pub mod error;
pub mod export;
pub mod generate;
pub mod platform;
pub mod startup;

pub use error::AppError;
pub use export::{ExportedFiles, export_mesh};
pub use generate::{build_mesh, run};
pub use platform::{PlatformDirs, PlatformError};
pub use startup::Startup;
