use axum::{extract::State, response::IntoResponse, routing::get, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use super::common::{map_service_error, success_response};
use crate::{
    errors::ApiError, models::SiteSettings, services::settings::UpdateSettingsInput, AppState,
};

/// Partial update: provided fields overwrite, absent fields keep their
/// current value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    /// `#rrggbb`
    pub theme_color: Option<String>,
    /// `#rrggbb`
    pub footer_color: Option<String>,
    pub announcement_text: Option<String>,
}

/// Get site settings
#[utoipa::path(
    get,
    path = "/api/v1/settings",
    responses(
        (status = 200, description = "Site settings", body = SiteSettings)
    ),
    tag = "settings"
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let settings = state
        .services
        .settings
        .get()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(settings))
}

/// Update site settings
#[utoipa::path(
    put,
    path = "/api/v1/settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings updated", body = SiteSettings),
        (status = 400, description = "Invalid color value")
    ),
    tag = "settings"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let settings = state
        .services
        .settings
        .update(UpdateSettingsInput {
            theme_color: payload.theme_color,
            footer_color: payload.footer_color,
            announcement_text: payload.announcement_text,
        })
        .await
        .map_err(map_service_error)?;
    Ok(success_response(settings))
}

pub fn settings_routes() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}
