use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};
use crate::{
    catalog::Selector,
    errors::ApiError,
    models::Product,
    services::products::{CreateProductInput, UpdateProductInput},
    AppState,
};

/// Storefront listing query. `q` wins over `category` when both are present;
/// `category=all`, blank, or absent means the whole catalog.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub price: Decimal,
    #[validate(length(min = 1, message = "Image cannot be empty"))]
    pub image: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: String,
    #[serde(default)]
    pub is_showcase: bool,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub price: Option<Decimal>,
    #[validate(length(min = 1, message = "Image cannot be empty"))]
    pub image: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    /// Price formatted the way the storefront prints it, e.g. `"12.50 TL"`.
    pub price_label: String,
    pub image: String,
    pub description: Option<String>,
    pub category: String,
    pub is_showcase: bool,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let price_label = product.price_label();
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            price_label,
            image: product.image,
            description: product.description,
            category: product.category,
            is_showcase: product.is_showcase,
            in_stock: product.in_stock,
            created_at: product.created_at,
        }
    }
}

/// One page of the filtered catalog plus the heading and count line the
/// storefront renders above the grid.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub items: Vec<ProductResponse>,
    pub label: String,
    pub summary: String,
    pub total: usize,
    pub page: u64,
    pub per_page: u64,
}

/// List products, filtered by category or search query
#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Filtered product listing", body = ProductListResponse),
        (status = 400, description = "Invalid paging parameters")
    ),
    tag = "products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let selector = Selector::from_params(params.category.as_deref(), params.q.as_deref());
    let page = params.page.unwrap_or(1).max(1);
    let per_page = u64::from(state.config.clamp_page_size(params.per_page));

    let result = state
        .services
        .products
        .list(&selector, page, per_page)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ProductListResponse {
        items: result.items.into_iter().map(ProductResponse::from).collect(),
        label: result.label,
        summary: result.summary,
        total: result.total,
        page: result.page,
        per_page: result.per_page,
    }))
}

/// Products flagged for the promotional carousel
#[utoipa::path(
    get,
    path = "/api/v1/products/showcase",
    responses(
        (status = 200, description = "Showcase products", body = Vec<ProductResponse>)
    ),
    tag = "products"
)]
pub async fn showcase_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state
        .services
        .products
        .showcase()
        .await
        .map_err(map_service_error)?;
    let response: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(success_response(response))
}

/// Get a single product
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .products
        .get(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(ProductResponse::from(product)))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid input")
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let product = state
        .services
        .products
        .create(CreateProductInput {
            name: payload.name,
            price: payload.price,
            image: payload.image,
            description: payload.description,
            category: payload.category,
            is_showcase: payload.is_showcase,
            in_stock: payload.in_stock,
        })
        .await
        .map_err(map_service_error)?;

    Ok(created_response(ProductResponse::from(product)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    axum::Json(payload): axum::Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let product = state
        .services
        .products
        .update(
            id,
            UpdateProductInput {
                name: payload.name,
                price: payload.price,
                image: payload.image,
                description: payload.description,
                category: payload.category,
                in_stock: payload.in_stock,
            },
        )
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ProductResponse::from(product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .products
        .delete(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

/// Toggle a product's showcase flag
#[utoipa::path(
    post,
    path = "/api/v1/products/{id}/showcase",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Showcase flag toggled", body = ProductResponse),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn toggle_showcase(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .products
        .toggle_showcase(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(ProductResponse::from(product)))
}

pub fn products_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/showcase", get(showcase_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/:id/showcase", post(toggle_showcase))
}
