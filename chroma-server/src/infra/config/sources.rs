use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::util::{parse_bool, parse_csv};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub static_files: FileStaticFilesConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    #[serde(default)]
    pub storage: FileStorageConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileStaticFilesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileStorageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_samples: Option<bool>,
}

/// Values picked up from the process environment.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub static_dir: Option<PathBuf>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub seed_samples: Option<bool>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; `gather` reads the real
    /// environment through this.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key).filter(|value| !value.trim().is_empty())
        };

        Self {
            config_path: non_empty("CHROMA_CONFIG").map(PathBuf::from),
            server_host: non_empty("SERVER_HOST"),
            // `PORT` is the conventional name on most hosting platforms.
            server_port: non_empty("SERVER_PORT")
                .or_else(|| non_empty("PORT"))
                .and_then(|raw| raw.trim().parse().ok()),
            static_dir: non_empty("STATIC_DIR").map(PathBuf::from),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_csv(&raw)),
            seed_samples: non_empty("SEED_SAMPLE_COLORS")
                .and_then(|raw| parse_bool(&raw)),
            dev_mode: non_empty("DEV_MODE").and_then(|raw| parse_bool(&raw)),
        }
    }
}
