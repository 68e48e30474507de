use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::info;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

pub async fn ping_handler() -> Result<Json<Value>, StatusCode> {
    info!("Ping endpoint called");
    Ok(Json(json!({
        "status": "ok",
        "message": "Chroma color service is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>, StatusCode> {
    let mut health_status = json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    match state.colors().count().await {
        Ok(stored) => {
            health_status["checks"]["storage"] = json!({
                "status": "healthy",
                "stored_colors": stored
            });
        }
        Err(e) => {
            tracing::error!(error = %e, "storage health check failed");
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    health_status["checks"]["static_files"] = json!({
        "enabled": state.config().static_root().is_some()
    });

    Ok(Json(health_status))
}

/// Fallback for paths that match neither a route nor a static file.
pub async fn route_not_found() -> AppResult<()> {
    Err(AppError::not_found("Route not found"))
}
