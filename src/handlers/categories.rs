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
use crate::{
    errors::ApiError,
    models::Category,
    services::categories::{CategoryTree, CreateCategoryInput},
    AppState,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    /// Parent category; must itself be top-level.
    pub parent_id: Option<Uuid>,
    /// Display position; appended to the end when absent.
    pub order: Option<i32>,
}

/// List all categories in display order
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Categories in display order", body = Vec<Category>)
    ),
    tag = "categories"
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let categories = state
        .services
        .categories
        .list()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(categories))
}

/// Top-level categories with their children nested
#[utoipa::path(
    get,
    path = "/api/v1/categories/tree",
    responses(
        (status = 200, description = "Two-level category tree", body = Vec<CategoryTree>)
    ),
    tag = "categories"
)]
pub async fn category_tree(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let tree = state
        .services
        .categories
        .tree()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(tree))
}

/// Top-level categories for the storefront footer
#[utoipa::path(
    get,
    path = "/api/v1/categories/footer",
    responses(
        (status = 200, description = "Footer category list", body = Vec<Category>)
    ),
    tag = "categories"
)]
pub async fn footer_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state
        .services
        .categories
        .footer(state.config.footer_category_limit)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(categories))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Name already taken")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let category = state
        .services
        .categories
        .create(CreateCategoryInput {
            name: payload.name,
            parent_id: payload.parent_id,
            order: payload.order,
        })
        .await
        .map_err(map_service_error)?;

    Ok(created_response(category))
}

/// Delete a category, cascading to its direct children
#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .categories
        .delete(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

/// Persist a new category display order
#[utoipa::path(
    put,
    path = "/api/v1/categories/reorder",
    request_body = ReorderRequest,
    responses(
        (status = 200, description = "Order persisted", body = ReorderResponse),
        (status = 400, description = "Unknown category id")
    ),
    tag = "categories"
)]
pub async fn reorder_categories(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<ReorderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let updated = state
        .services
        .categories
        .reorder(&payload.ids)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(ReorderResponse { updated }))
}

pub fn categories_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/tree", get(category_tree))
        .route("/footer", get(footer_categories))
        .route("/reorder", put(reorder_categories))
        .route("/:id", delete(delete_category))
}
