use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
};
use tracing::info;

use crate::{
    handlers::{health_handler, ping_handler, route_not_found},
    infra::{app_state::AppState, middleware::request_trace_layer},
    routes,
};

pub fn create_app(state: AppState) -> Router {
    let versioned_api = routes::create_api_router();

    // Build CORS layer (permissive in dev, allow-list in prod)
    let cors_layer = if state.config().dev_mode {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config()
            .cors
            .allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();
        let allow_origin =
            if origins.is_empty() || state.config().cors.is_wildcard_included() {
                AllowOrigin::any()
            } else {
                AllowOrigin::list(origins)
            };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    };

    let app = Router::new()
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .merge(versioned_api);

    // Everything else is a static asset of the browser client, or a 404
    let app = match state.config().static_root() {
        Some(root) => {
            info!(root = %root.display(), "serving static files");
            app.fallback_service(
                ServeDir::new(root)
                    .call_fallback_on_method_not_allowed(true)
                    .fallback(route_not_found.into_service()),
            )
        }
        None => app.fallback(route_not_found),
    };

    app
        // 1. CORS
        .layer(cors_layer)
        // 2. Request logging (outermost)
        .layer(request_trace_layer())
        .with_state(state)
}
