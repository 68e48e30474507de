use axum::{Router, routing::get};

use crate::{handlers::colors, infra::app_state::AppState};

/// Route paths relative to the version prefix.
pub mod paths {
    pub const COLORS: &str = "/colors";
    pub const COLOR_BY_ID: &str = "/colors/{id}";
    pub const RANDOM: &str = "/colors/random";
    pub const SCHEME: &str = "/colors/scheme";
}

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(paths::RANDOM, get(colors::random_color_handler))
        .route(paths::SCHEME, get(colors::color_scheme_handler))
        .route(
            paths::COLORS,
            get(colors::list_colors_handler).post(colors::save_color_handler),
        )
        .route(paths::COLOR_BY_ID, get(colors::get_color_handler))
}
