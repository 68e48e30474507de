pub mod v1;

use crate::infra::app_state::AppState;
use axum::Router;

/// Create the main API router with all versions
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", v1::create_v1_router())
        // Unversioned paths used by the bundled browser client
        .nest("/api", v1::create_v1_router())
}
