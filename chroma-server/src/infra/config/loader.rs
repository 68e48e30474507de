use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use super::{
    Config, ConfigMetadata, CorsConfig, ServerConfig, StaticFilesConfig,
    StorageConfig,
    sources::{EnvConfig, FileConfig},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("chroma.toml"),
        PathBuf::from("config/chroma.toml"),
    ]
});

const DEFAULT_STATIC_ROOT: &str = "public";

#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

/// A loaded configuration plus anything worth telling the operator.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: Vec<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit config file; takes priority over `CHROMA_CONFIG` and the
    /// default locations, and must exist.
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// `.env` file to read instead of `./.env`. A missing file is not an
    /// error.
    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        self.load_with_env(EnvConfig::gather(), env_file_loaded)
    }

    /// Resolve the file layer and merge it with an already gathered
    /// environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        Ok(compose_config(file_config, env, config_path, env_file_loaded))
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(path) => path.clone(),
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
    toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    config_path: Option<PathBuf>,
    env_file_loaded: bool,
) -> ConfigLoad {
    let mut warnings = Vec::new();

    if file_config.is_none() {
        warnings.push(
            "No chroma.toml detected; using environment variables and defaults"
                .to_string(),
        );
    }

    let FileConfig {
        server: file_server,
        static_files: file_static,
        cors: file_cors,
        storage: file_storage,
        dev_mode: file_dev_mode,
    } = file_config.unwrap_or_default();

    let defaults = ServerConfig::default();
    let server = ServerConfig {
        host: env.server_host.or(file_server.host).unwrap_or(defaults.host),
        port: env.server_port.or(file_server.port).unwrap_or(defaults.port),
    };

    let static_root = env
        .static_dir
        .or(file_static.root)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_ROOT));
    let static_files = if static_root.is_dir() {
        StaticFilesConfig {
            root: Some(static_root),
        }
    } else {
        warnings.push(format!(
            "Static directory {} not found; browser client will not be served",
            static_root.display()
        ));
        StaticFilesConfig { root: None }
    };

    let dev_mode = env.dev_mode.or(file_dev_mode).unwrap_or(false);

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file_cors.allowed_origins)
            .unwrap_or_default(),
    };
    if !dev_mode && cors.allowed_origins.is_empty() {
        warnings.push(
            "CORS_ALLOWED_ORIGINS is empty; cross-origin requests from any origin are allowed"
                .to_string(),
        );
    }

    let storage = StorageConfig {
        seed_samples: env
            .seed_samples
            .or(file_storage.seed_samples)
            .unwrap_or(true),
    };

    let config = Config {
        server,
        static_files,
        cors,
        storage,
        dev_mode,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded,
        },
    };

    ConfigLoad { config, warnings }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
