//! Startup: directories and configuration, resolved before logging exists.

use std::path::PathBuf;

use marble_config::{CONFIG_FILE_NAME, CliArgs, Config, ConfigOrigin};
use tracing::info;

use crate::error::AppError;
use crate::platform::PlatformDirs;

/// Everything `main` needs before it can install the subscriber and run.
#[derive(Debug, Clone)]
pub struct Startup {
    pub dirs: PlatformDirs,
    /// The loaded config with CLI overrides applied.
    pub config: Config,
    pub origin: ConfigOrigin,
}

impl Startup {
    /// Resolve directories, create them, load or create `config.ron`, then
    /// apply the command-line overrides.
    pub fn load(args: &CliArgs) -> Result<Self, AppError> {
        let dirs = PlatformDirs::resolve_with_override(args.config.as_deref())?;
        dirs.create_dirs()?;

        let (mut config, origin) = Config::load_with_origin(&dirs.config_dir)?;
        config.apply_cli_overrides(args);
        Ok(Self {
            dirs,
            config,
            origin,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.dirs.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Report where the config came from. Call after logging is initialized.
    pub fn log_config_origin(&self) {
        let path = self.config_path();
        info!(path = %path.display(), "{} {}", self.origin.describe(), path.display());
    }
}
