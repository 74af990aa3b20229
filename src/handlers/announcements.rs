use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};
use crate::{errors::ApiError, models::Announcement, AppState};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAnnouncementRequest {
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: String,
}

/// List announcements, newest first
#[utoipa::path(
    get,
    path = "/api/v1/announcements",
    responses(
        (status = 200, description = "Announcements, newest first", body = Vec<Announcement>)
    ),
    tag = "announcements"
)]
pub async fn list_announcements(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let announcements = state
        .services
        .announcements
        .list()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(announcements))
}

/// Create an announcement
#[utoipa::path(
    post,
    path = "/api/v1/announcements",
    request_body = CreateAnnouncementRequest,
    responses(
        (status = 201, description = "Announcement created", body = Announcement),
        (status = 400, description = "Invalid input")
    ),
    tag = "announcements"
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateAnnouncementRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let announcement = state
        .services
        .announcements
        .create(payload.content)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(announcement))
}

/// Delete an announcement
#[utoipa::path(
    delete,
    path = "/api/v1/announcements/{id}",
    params(("id" = Uuid, Path, description = "Announcement ID")),
    responses(
        (status = 204, description = "Announcement deleted"),
        (status = 404, description = "Announcement not found")
    ),
    tag = "announcements"
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .announcements
        .delete(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

pub fn announcements_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_announcements).post(create_announcement))
        .route("/:id", delete(delete_announcement))
}
