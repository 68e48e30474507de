//! Service configuration.
//!
//! Values are layered the same way everywhere: CLI flags override
//! environment variables, which override `chroma.toml`, which overrides the
//! built-in defaults.

pub mod loader;
pub mod sources;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader};

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Directory served for non-API paths, if one is configured.
    pub fn static_root(&self) -> Option<&Path> {
        self.static_files.root.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticFilesConfig {
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Start with the three sample colors.
    pub seed_samples: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { seed_samples: true }
    }
}

/// Where the configuration came from, for startup logging.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
