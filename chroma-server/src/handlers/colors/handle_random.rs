use axum::Json;
use chroma_core::random_color;
use tracing::info;

use crate::{api::RandomColorResponse, infra::errors::AppResult};

/// Generate a uniformly random color
pub async fn random_color_handler() -> AppResult<Json<RandomColorResponse>> {
    let color = random_color().entry();
    info!(hex = %color.hex, "random color generated");

    Ok(Json(
        RandomColorResponse::new(color)
            .with_message("Random color generated successfully"),
    ))
}
