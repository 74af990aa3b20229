use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    catalog::{self, CategoryIndex, Selector},
    errors::ServiceError,
    events::{Event, EventSender},
    models::Product,
    store::CatalogStore,
};

/// Product catalog service: storefront filtering plus the admin CRUD surface.
#[derive(Clone)]
pub struct ProductCatalogService {
    store: Arc<CatalogStore>,
    event_sender: EventSender,
}

#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: Option<String>,
    pub category: String,
    pub is_showcase: bool,
    pub in_stock: bool,
}

/// Partial update: `Some` overwrites, `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    /// Can set a description but never clear one: `None` here means "leave
    /// as-is", so a stored description only goes away with the product.
    pub description: Option<String>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// One page of a filtered product listing, plus the display metadata the
/// storefront renders above the grid. `total` counts the whole filtered set,
/// not the page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub label: String,
    pub summary: String,
    pub total: usize,
    pub page: u64,
    pub per_page: u64,
}

impl ProductCatalogService {
    pub fn new(store: Arc<CatalogStore>, event_sender: EventSender) -> Self {
        Self {
            store,
            event_sender,
        }
    }

    /// Filters the catalog for one selector and pages the result.
    ///
    /// Paging happens after filtering, so `total` and the summary line always
    /// reflect the whole result set. `page` is 1-based.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        selector: &Selector,
        page: u64,
        per_page: u64,
    ) -> Result<ProductPage, ServiceError> {
        if per_page == 0 {
            return Err(ServiceError::InvalidInput(
                "per_page must be at least 1".into(),
            ));
        }

        let products = self.store.products().await;
        let categories = self.store.categories().await;
        let index = CategoryIndex::build(&categories);
        let outcome = catalog::filter(&products, &index, selector);

        let total = outcome.count;
        let summary = outcome.summary();
        let offset = page.saturating_sub(1).saturating_mul(per_page) as usize;
        let items: Vec<Product> = outcome
            .items
            .into_iter()
            .skip(offset)
            .take(per_page as usize)
            .collect();

        Ok(ProductPage {
            items,
            label: outcome.label,
            summary,
            total,
            page: page.max(1),
            per_page,
        })
    }

    /// Products for the promotional carousel, falling back to the whole
    /// catalog when nothing is flagged.
    #[instrument(skip(self))]
    pub async fn showcase(&self) -> Result<Vec<Product>, ServiceError> {
        let products = self.store.products().await;
        Ok(catalog::showcase_products(&products))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Product, ServiceError> {
        self.store
            .find_product(id)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("Product {} not found", id)))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateProductInput) -> Result<Product, ServiceError> {
        ensure_price_non_negative(&input.price)?;
        let name = non_blank(&input.name, "Product name")?;
        let category = non_blank(&input.category, "Product category")?;
        self.warn_on_unknown_category(&category).await;

        let product = Product {
            id: Uuid::new_v4(),
            name,
            price: input.price,
            image: input.image,
            description: input.description,
            category,
            is_showcase: input.is_showcase,
            in_stock: input.in_stock,
            created_at: Utc::now(),
        };
        let id = product.id;
        self.store.insert_product(product.clone()).await;

        self.event_sender.send_or_log(Event::ProductCreated(id)).await;
        info!("Created product: {}", id);
        Ok(product)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateProductInput,
    ) -> Result<Product, ServiceError> {
        let name = input.name.map(|n| non_blank(&n, "Product name")).transpose()?;
        let category = input
            .category
            .map(|c| non_blank(&c, "Product category"))
            .transpose()?;
        if let Some(price) = input.price.as_ref() {
            ensure_price_non_negative(price)?;
        }
        if let Some(category) = category.as_deref() {
            self.warn_on_unknown_category(category).await;
        }

        let updated = self
            .store
            .update_product(id, |product| {
                if let Some(name) = name {
                    product.name = name;
                }
                if let Some(price) = input.price {
                    product.price = price;
                }
                if let Some(image) = input.image {
                    product.image = image;
                }
                if let Some(description) = input.description {
                    product.description = Some(description);
                }
                if let Some(category) = category {
                    product.category = category;
                }
                if let Some(in_stock) = input.in_stock {
                    product.in_stock = in_stock;
                }
            })
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("Product {} not found", id)))?;

        self.event_sender.send_or_log(Event::ProductUpdated(id)).await;
        info!("Updated product: {}", id);
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.store
            .remove_product(id)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("Product {} not found", id)))?;

        self.event_sender.send_or_log(Event::ProductDeleted(id)).await;
        info!("Deleted product: {}", id);
        Ok(())
    }

    /// Flips the carousel flag, mirroring the admin panel's one-click toggle.
    #[instrument(skip(self))]
    pub async fn toggle_showcase(&self, id: Uuid) -> Result<Product, ServiceError> {
        let updated = self
            .store
            .update_product(id, |product| product.is_showcase = !product.is_showcase)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("Product {} not found", id)))?;

        self.event_sender
            .send_or_log(Event::ShowcaseToggled {
                product_id: id,
                is_showcase: updated.is_showcase,
            })
            .await;
        Ok(updated)
    }

    /// Unknown category names are allowed (the product still shows under
    /// "all" and in search) but worth surfacing to the operator.
    async fn warn_on_unknown_category(&self, category: &str) {
        if !self.store.category_name_taken(category).await {
            warn!(
                category = %category,
                "Product references a category name not present in the catalog"
            );
        }
    }
}

fn ensure_price_non_negative(price: &Decimal) -> Result<(), ServiceError> {
    if *price < Decimal::ZERO {
        return Err(ServiceError::ValidationError(
            "price cannot be negative".into(),
        ));
    }
    Ok(())
}

fn non_blank(value: &str, field: &str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::ValidationError(format!(
            "{field} cannot be blank"
        )));
    }
    Ok(trimmed.to_string())
}
