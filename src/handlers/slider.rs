use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{delete, get, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    ReorderRequest, ReorderResponse,
};
use crate::{errors::ApiError, models::SliderImage, AppState};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSliderImageRequest {
    #[validate(length(min = 1, message = "URL cannot be empty"))]
    pub url: String,
}

/// Uploaded slider images in display order
#[utoipa::path(
    get,
    path = "/api/v1/slider",
    responses(
        (status = 200, description = "Slider images in display order", body = Vec<SliderImage>)
    ),
    tag = "slider"
)]
pub async fn list_slider_images(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let images = state
        .services
        .slider
        .list()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(images))
}

/// Slide URLs for the storefront hero, with stock fallbacks when empty
#[utoipa::path(
    get,
    path = "/api/v1/slider/urls",
    responses(
        (status = 200, description = "Slide URLs in display order", body = Vec<String>)
    ),
    tag = "slider"
)]
pub async fn slider_urls(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let urls = state
        .services
        .slider
        .urls()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(urls))
}

/// Add a slider image
#[utoipa::path(
    post,
    path = "/api/v1/slider",
    request_body = CreateSliderImageRequest,
    responses(
        (status = 201, description = "Slider image added", body = SliderImage),
        (status = 400, description = "Invalid input")
    ),
    tag = "slider"
)]
pub async fn create_slider_image(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateSliderImageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let image = state
        .services
        .slider
        .create(payload.url)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(image))
}

/// Delete a slider image
#[utoipa::path(
    delete,
    path = "/api/v1/slider/{id}",
    params(("id" = Uuid, Path, description = "Slider image ID")),
    responses(
        (status = 204, description = "Slider image deleted"),
        (status = 404, description = "Slider image not found")
    ),
    tag = "slider"
)]
pub async fn delete_slider_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .slider
        .delete(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

/// Persist a new slider display order
#[utoipa::path(
    put,
    path = "/api/v1/slider/reorder",
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "Order persisted", body = ReorderResponse),
        (status = 400, description = "Unknown slider image id")
    ),
    tag = "slider"
)]
pub async fn reorder_slider_images(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<ReorderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let updated = state
        .services
        .slider
        .reorder(&payload.ids)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(ReorderResponse { updated }))
}

pub fn slider_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_slider_images).post(create_slider_image))
        .route("/urls", get(slider_urls))
        .route("/reorder", put(reorder_slider_images))
        .route("/:id", delete(delete_slider_image))
}
