//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Mesh generation settings.
    pub mesh: MeshConfig,
    /// Buffer export settings.
    pub export: ExportConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Which geometry to generate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum MeshShape {
    /// Procedural UV sphere.
    #[default]
    Sphere,
    /// Constant 2×2 test quad.
    Quad,
}

impl MeshShape {
    /// Lowercase name, used for exported file names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Quad => "quad",
        }
    }
}

/// Mesh generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    /// Geometry to generate.
    pub shape: MeshShape,
    /// Samples per parametric axis of the sphere (ignored for the quad).
    pub resolution: u32,
}

/// Buffer export configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Write the generated buffers to disk.
    pub enabled: bool,
    /// Output directory. Falls back to the working directory when unset.
    pub directory: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write a JSON log file in debug builds.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            shape: MeshShape::Sphere,
            resolution: 100,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

// --- Load / Save / Reload ---

/// Whether [`Config::load_with_origin`] read an existing file or wrote a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// `config.ron` already existed and was parsed.
    Loaded,
    /// `config.ron` was missing and the defaults were written in its place.
    Created,
}

impl ConfigOrigin {
    /// Log prefix describing the origin, followed by the file path.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Loaded => "Loaded config from",
            Self::Created => "Created default config at",
        }
    }
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let (config, origin) = Self::load_with_origin(config_dir)?;
        log::info!(
            "{} {}",
            origin.describe(),
            config_dir.join(CONFIG_FILE_NAME).display()
        );
        Ok(config)
    }

    /// Like [`Config::load_or_create`], but leaves reporting to the caller.
    ///
    /// Binaries load their config before logging is up, so they log the
    /// returned [`ConfigOrigin`] once a subscriber is installed.
    pub fn load_with_origin(config_dir: &Path) -> Result<(Self, ConfigOrigin), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok((Self::read(&config_path)?, ConfigOrigin::Loaded))
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            Ok((config, ConfigOrigin::Created))
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
