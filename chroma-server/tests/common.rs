use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chroma_core::{
    ColorError, ColorRepository, InMemoryColorRepository, NewColor,
    SavedColor,
};
use chroma_server::{
    AppState, create_app,
    infra::config::{Config, StaticFilesConfig},
};

// Code is used by test modules, but not in this scope
#[allow(unused)]
#[derive(Debug)]
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

#[allow(unused)]
impl TestApp {
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router.clone()).expect("test server starts")
    }

    pub fn repository(&self) -> Arc<dyn ColorRepository> {
        Arc::clone(&self.state.colors)
    }
}

/// App over the seeded in-memory repository, no static files.
#[allow(unused)]
pub fn build_test_app() -> TestApp {
    build_test_app_with_config(Config::default())
}

#[allow(unused)]
pub fn build_test_app_with_static_root(root: PathBuf) -> TestApp {
    build_test_app_with_config(Config {
        static_files: StaticFilesConfig { root: Some(root) },
        ..Config::default()
    })
}

#[allow(unused)]
pub fn build_test_app_with_config(config: Config) -> TestApp {
    let state = AppState::new(
        Arc::new(config),
        Arc::new(InMemoryColorRepository::seeded()),
    );
    TestApp {
        router: create_app(state.clone()),
        state,
    }
}

/// Repository whose backend is always down.
#[allow(unused)]
#[derive(Debug, Default)]
pub struct UnavailableRepository;

#[async_trait]
impl ColorRepository for UnavailableRepository {
    async fn list(&self) -> chroma_core::Result<Vec<SavedColor>> {
        Err(ColorError::Storage("backend offline".into()))
    }

    async fn append(&self, _color: NewColor) -> chroma_core::Result<SavedColor> {
        Err(ColorError::Storage("backend offline".into()))
    }

    async fn find_by_id(
        &self,
        _id: u64,
    ) -> chroma_core::Result<Option<SavedColor>> {
        Err(ColorError::Storage("backend offline".into()))
    }
}

#[allow(unused)]
pub fn build_test_app_with_unavailable_storage() -> TestApp {
    let state = AppState::new(
        Arc::new(Config::default()),
        Arc::new(UnavailableRepository),
    );
    TestApp {
        router: create_app(state.clone()),
        state,
    }
}
