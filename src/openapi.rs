use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    errors::ErrorResponse,
    handlers::{
        announcements::{self, CreateAnnouncementRequest},
        categories::{self, CreateCategoryRequest},
        common::{ReorderRequest, ReorderResponse},
        products::{
            self, CreateProductRequest, ProductListResponse, ProductResponse,
            UpdateProductRequest,
        },
        settings::{self, UpdateSettingsRequest},
        slider::{self, CreateSliderImageRequest},
    },
    models::{Announcement, Category, Product, SiteSettings, SliderImage},
    services::categories::CategoryTree,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        products::list_products,
        products::showcase_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        products::toggle_showcase,
        categories::list_categories,
        categories::category_tree,
        categories::footer_categories,
        categories::create_category,
        categories::delete_category,
        categories::reorder_categories,
        slider::list_slider_images,
        slider::slider_urls,
        slider::create_slider_image,
        slider::delete_slider_image,
        slider::reorder_slider_images,
        announcements::list_announcements,
        announcements::create_announcement,
        announcements::delete_announcement,
        settings::get_settings,
        settings::update_settings,
    ),
    components(schemas(
        Product,
        Category,
        SliderImage,
        Announcement,
        SiteSettings,
        CategoryTree,
        ProductResponse,
        ProductListResponse,
        CreateProductRequest,
        UpdateProductRequest,
        CreateCategoryRequest,
        ReorderRequest,
        ReorderResponse,
        CreateSliderImageRequest,
        CreateAnnouncementRequest,
        UpdateSettingsRequest,
        ErrorResponse,
    )),
    tags(
        (name = "products", description = "Storefront product listing and admin CRUD"),
        (name = "categories", description = "Two-level category hierarchy"),
        (name = "slider", description = "Hero slider images"),
        (name = "announcements", description = "Site announcements"),
        (name = "settings", description = "Site-wide appearance settings")
    ),
    info(
        title = "Kirtasiye API",
        description = "Catalog backend for a stationery storefront and its admin panel",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI router, mounted next to the API routes.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
