use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    catalog::{reorder_assignments, sorted_by_order, CategoryIndex},
    errors::ServiceError,
    events::{Event, EventSender},
    models::Category,
    store::CatalogStore,
};

/// Category service: the two-level hierarchy the storefront navigates and
/// the admin panel maintains.
#[derive(Clone)]
pub struct CategoryService {
    store: Arc<CatalogStore>,
    event_sender: EventSender,
}

#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub parent_id: Option<Uuid>,
    /// Display position; appended to the end when absent.
    pub order: Option<i32>,
}

/// A top-level category with its direct children, both in display order.
/// Feeds the header dropdown nav, the sidebar, and the footer list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryTree {
    #[serde(flatten)]
    pub category: Category,
    pub children: Vec<Category>,
}

impl CategoryService {
    pub fn new(store: Arc<CatalogStore>, event_sender: EventSender) -> Self {
        Self {
            store,
            event_sender,
        }
    }

    /// All categories in display order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(sorted_by_order(&self.store.categories().await))
    }

    /// Top-level categories with their children nested, in display order.
    #[instrument(skip(self))]
    pub async fn tree(&self) -> Result<Vec<CategoryTree>, ServiceError> {
        let sorted = sorted_by_order(&self.store.categories().await);
        let index = CategoryIndex::build(&sorted);
        let tree = index
            .top_level()
            .iter()
            .map(|parent| CategoryTree {
                category: (*parent).clone(),
                children: index.children_of(parent.id).into_iter().cloned().collect(),
            })
            .collect();
        Ok(tree)
    }

    /// Top-level categories for the storefront footer, capped at `limit`.
    #[instrument(skip(self))]
    pub async fn footer(&self, limit: usize) -> Result<Vec<Category>, ServiceError> {
        let sorted = sorted_by_order(&self.store.categories().await);
        Ok(sorted
            .into_iter()
            .filter(Category::is_top_level)
            .take(limit)
            .collect())
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateCategoryInput) -> Result<Category, ServiceError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::ValidationError(
                "Category name cannot be blank".into(),
            ));
        }
        if self.store.category_name_taken(&name).await {
            return Err(ServiceError::Conflict(format!(
                "Category \"{}\" already exists",
                name
            )));
        }

        if let Some(parent_id) = input.parent_id {
            let parent = self
                .store
                .find_category(parent_id)
                .await
                .ok_or_else(|| {
                    ServiceError::InvalidInput(format!("Parent category {} not found", parent_id))
                })?;
            if !parent.is_top_level() {
                return Err(ServiceError::InvalidOperation(
                    "Categories support a single nesting level; the parent must be top-level"
                        .into(),
                ));
            }
        }

        let order = match input.order {
            Some(order) => order,
            None => self.store.categories().await.len() as i32,
        };
        let category = Category {
            id: Uuid::new_v4(),
            name,
            parent_id: input.parent_id,
            order,
        };
        let id = category.id;
        self.store.insert_category(category.clone()).await;

        self.event_sender.send_or_log(Event::CategoryCreated(id)).await;
        info!("Created category: {}", id);
        Ok(category)
    }

    /// Deletes a category and cascades to its direct children, like the
    /// admin panel's batched delete. Products referencing the removed names
    /// are left as-is; they degrade to matching only "all" and search.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let snapshot = self.store.categories().await;
        if !snapshot.iter().any(|c| c.id == id) {
            return Err(ServiceError::NotFound(format!("Category {} not found", id)));
        }

        let index = CategoryIndex::build(&snapshot);
        let ids = index.cascade_ids(id);

        let removed = self.store.remove_categories(&ids).await;
        self.event_sender
            .send_or_log(Event::CategoryDeleted {
                category_id: id,
                cascaded_children: removed.saturating_sub(1),
            })
            .await;
        info!(
            "Deleted category {} ({} children cascaded)",
            id,
            removed.saturating_sub(1)
        );
        Ok(())
    }

    /// Persists a drag-and-drop result: ids in their new on-screen order.
    /// Every id must name an existing category.
    #[instrument(skip(self, ids))]
    pub async fn reorder(&self, ids: &[Uuid]) -> Result<usize, ServiceError> {
        let snapshot = self.store.categories().await;
        for id in ids {
            if !snapshot.iter().any(|c| c.id == *id) {
                return Err(ServiceError::InvalidInput(format!(
                    "Category {} not found",
                    id
                )));
            }
        }

        let assignments = reorder_assignments(ids);
        let count = self.store.set_category_orders(&assignments).await;
        self.event_sender
            .send_or_log(Event::CategoriesReordered { count })
            .await;
        Ok(count)
    }
}
