//! In-memory catalog store.
//!
//! The data-access collaborator for the catalog: it owns the current snapshot
//! of every collection and hands out clones, so the pure core always works on
//! an immutable snapshot and never sees a lock. Insertion order is preserved,
//! updates keep their element's position, and writes are the only mutation
//! path. Collection sizes stay in the low thousands, so clone-out snapshots
//! are the simplest consistent read model.

use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Announcement, Category, Product, SiteSettings, SliderImage};

#[derive(Debug, Default)]
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
    categories: RwLock<Vec<Category>>,
    slider_images: RwLock<Vec<SliderImage>>,
    announcements: RwLock<Vec<Announcement>>,
    settings: RwLock<SiteSettings>,
}

/// Collection sizes, reported by the health endpoint.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct StoreCounts {
    pub products: usize,
    pub categories: usize,
    pub slider_images: usize,
    pub announcements: usize,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- products ----

    /// Snapshot of all products, in insertion order.
    pub async fn products(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    pub async fn find_product(&self, id: Uuid) -> Option<Product> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub async fn insert_product(&self, product: Product) {
        self.products.write().await.push(product);
    }

    /// Applies `apply` to the product with the given id, keeping its position.
    /// Returns the updated product, or `None` when the id is unknown.
    pub async fn update_product<F>(&self, id: Uuid, apply: F) -> Option<Product>
    where
        F: FnOnce(&mut Product),
    {
        let mut products = self.products.write().await;
        let product = products.iter_mut().find(|p| p.id == id)?;
        apply(product);
        Some(product.clone())
    }

    pub async fn remove_product(&self, id: Uuid) -> Option<Product> {
        let mut products = self.products.write().await;
        let position = products.iter().position(|p| p.id == id)?;
        Some(products.remove(position))
    }

    // ---- categories ----

    /// Snapshot of all categories, in insertion order (not display order).
    pub async fn categories(&self) -> Vec<Category> {
        self.categories.read().await.clone()
    }

    pub async fn insert_category(&self, category: Category) {
        self.categories.write().await.push(category);
    }

    pub async fn category_name_taken(&self, name: &str) -> bool {
        self.categories.read().await.iter().any(|c| c.name == name)
    }

    pub async fn find_category(&self, id: Uuid) -> Option<Category> {
        self.categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Removes every category whose id is listed; returns how many went away.
    pub async fn remove_categories(&self, ids: &[Uuid]) -> usize {
        let mut categories = self.categories.write().await;
        let before = categories.len();
        categories.retain(|c| !ids.contains(&c.id));
        before - categories.len()
    }

    /// Applies `(id, order)` assignments; ids not present are skipped.
    /// Returns how many records were updated.
    pub async fn set_category_orders(&self, assignments: &[(Uuid, i32)]) -> usize {
        let mut categories = self.categories.write().await;
        apply_orders(&mut categories, assignments, |c| c.id, |c, o| c.order = o)
    }

    // ---- slider ----

    pub async fn slider_images(&self) -> Vec<SliderImage> {
        self.slider_images.read().await.clone()
    }

    pub async fn insert_slider_image(&self, image: SliderImage) {
        self.slider_images.write().await.push(image);
    }

    pub async fn remove_slider_image(&self, id: Uuid) -> Option<SliderImage> {
        let mut images = self.slider_images.write().await;
        let position = images.iter().position(|s| s.id == id)?;
        Some(images.remove(position))
    }

    pub async fn set_slider_orders(&self, assignments: &[(Uuid, i32)]) -> usize {
        let mut images = self.slider_images.write().await;
        apply_orders(&mut images, assignments, |s| s.id, |s, o| s.order = o)
    }

    // ---- announcements ----

    pub async fn announcements(&self) -> Vec<Announcement> {
        self.announcements.read().await.clone()
    }

    pub async fn insert_announcement(&self, announcement: Announcement) {
        self.announcements.write().await.push(announcement);
    }

    pub async fn remove_announcement(&self, id: Uuid) -> Option<Announcement> {
        let mut announcements = self.announcements.write().await;
        let position = announcements.iter().position(|a| a.id == id)?;
        Some(announcements.remove(position))
    }

    // ---- settings ----

    pub async fn settings(&self) -> SiteSettings {
        self.settings.read().await.clone()
    }

    pub async fn update_settings<F>(&self, apply: F) -> SiteSettings
    where
        F: FnOnce(&mut SiteSettings),
    {
        let mut settings = self.settings.write().await;
        apply(&mut settings);
        settings.clone()
    }

    // ---- diagnostics ----

    pub async fn counts(&self) -> StoreCounts {
        StoreCounts {
            products: self.products.read().await.len(),
            categories: self.categories.read().await.len(),
            slider_images: self.slider_images.read().await.len(),
            announcements: self.announcements.read().await.len(),
        }
    }
}

fn apply_orders<T>(
    items: &mut [T],
    assignments: &[(Uuid, i32)],
    id_of: impl Fn(&T) -> Uuid,
    set_order: impl Fn(&mut T, i32),
) -> usize {
    let mut updated = 0;
    for item in items.iter_mut() {
        if let Some((_, order)) = assignments.iter().find(|(id, _)| *id == id_of(item)) {
            set_order(item, *order);
            updated += 1;
        }
    }
    updated
}
