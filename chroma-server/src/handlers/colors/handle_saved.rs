use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chroma_core::{ColorError, NewColor};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    api::{ColorDetailsResponse, ColorListResponse, SavedColorResponse},
    infra::{
        app_state::AppState,
        errors::{AppError, AppResult},
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct SaveColorRequest {
    pub name: Option<String>,
    pub hex: Option<String>,
}

/// List every saved color
pub async fn list_colors_handler(
    State(state): State<AppState>,
) -> AppResult<Json<ColorListResponse>> {
    let colors = state.colors().list().await?;
    Ok(Json(ColorListResponse::new(colors)))
}

/// Fetch one saved color with its RGB and HSL forms
pub async fn get_color_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ColorDetailsResponse>> {
    let not_found = || AppError::from(ColorError::NotFound(raw_id.clone()));

    let id = raw_id.trim().parse::<u64>().map_err(|_| not_found())?;
    let color = state.colors().find_by_id(id).await?.ok_or_else(not_found)?;

    Ok(Json(ColorDetailsResponse::new(color.details())))
}

/// Validate and store a named color
pub async fn save_color_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveColorRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SavedColorResponse>)> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected save color payload");
        AppError::bad_request(rejection.body_text())
    })?;

    let new_color = NewColor::from_parts(
        request.name.as_deref(),
        request.hex.as_deref(),
    )
    .inspect_err(|err| warn!(%err, "rejected color"))?;

    let saved = state.colors().append(new_color).await?;
    info!(id = saved.id, name = %saved.name, hex = %saved.hex, "color saved");

    Ok((
        StatusCode::CREATED,
        Json(
            SavedColorResponse::new(saved)
                .with_message("Color saved successfully"),
        ),
    ))
}
