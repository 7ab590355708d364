//! Configuration for the Marble mesh tool.
//!
//! Settings persist to disk as RON, accept CLI overrides via clap, and
//! tolerate missing or unknown fields so old config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, ConfigOrigin, DebugConfig, ExportConfig, MeshConfig, MeshShape,
};
pub use error::ConfigError;
