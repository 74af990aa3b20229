use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A storefront product.
///
/// `category` is a name-based foreign key to [`Category::name`]. A product
/// whose category matches no known category still renders and still matches
/// the "all" view and free-text search over the raw string; it just never
/// benefits from parent-category expansion.
///
/// [`Category::name`]: crate::models::Category::name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Non-negative; coerced at the admin boundary, never inside the core.
    pub price: Decimal,
    /// URL or embedded data URI.
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    /// Selects the product for the promotional carousel.
    #[serde(default)]
    pub is_showcase: bool,
    /// Absent is treated as in stock.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Price the way the storefront prints it, e.g. `149.90 TL`.
    pub fn price_label(&self) -> String {
        format!("{:.2} TL", self.price)
    }
}
