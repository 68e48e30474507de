use std::{fmt, sync::Arc};

use chroma_core::{ColorRepository, InMemoryColorRepository};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub colors: Arc<dyn ColorRepository>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Arc<Config>, colors: Arc<dyn ColorRepository>) -> Self {
        Self { config, colors }
    }

    /// State backed by the in-memory repository, seeded according to
    /// `storage.seed_samples`.
    pub fn in_memory(config: Config) -> Self {
        let colors = if config.storage.seed_samples {
            InMemoryColorRepository::seeded()
        } else {
            InMemoryColorRepository::new()
        };
        Self::new(Arc::new(config), Arc::new(colors))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn colors(&self) -> &dyn ColorRepository {
        self.colors.as_ref()
    }
}
