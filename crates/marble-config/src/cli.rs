//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, MeshShape};

/// Marble command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "marble", about = "Generate Blue Marble sphere meshes")]
pub struct CliArgs {
    /// Geometry to generate.
    #[arg(long, value_enum)]
    pub shape: Option<MeshShape>,

    /// Samples per axis of the sphere grid.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Write the vertex and index buffers into this directory.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(shape) = args.shape {
            self.mesh.shape = shape;
        }
        if let Some(resolution) = args.resolution {
            self.mesh.resolution = resolution;
        }
        if let Some(ref out) = args.out {
            self.export.enabled = true;
            self.export.directory = Some(out.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
