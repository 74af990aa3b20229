use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    catalog::{reorder_assignments, sorted_by_order},
    errors::ServiceError,
    events::{Event, EventSender},
    models::SliderImage,
    store::CatalogStore,
};

/// Stock photos shown while no slider image has been uploaded yet, so the
/// hero section never renders blank.
const FALLBACK_SLIDE_URLS: [&str; 3] = [
    "https://images.unsplash.com/photo-1515003197210-e0cd71810b5f?auto=format&fit=crop&q=80&w=1600",
    "https://images.unsplash.com/photo-1456735190827-d1261f7add50?auto=format&fit=crop&q=80&w=1600",
    "https://images.unsplash.com/photo-1544816155-12df9643f363?auto=format&fit=crop&q=80&w=1600",
];

/// Hero slider service.
#[derive(Clone)]
pub struct SliderService {
    store: Arc<CatalogStore>,
    event_sender: EventSender,
}

impl SliderService {
    pub fn new(store: Arc<CatalogStore>, event_sender: EventSender) -> Self {
        Self {
            store,
            event_sender,
        }
    }

    /// Uploaded slider records in display order, for the admin panel.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<SliderImage>, ServiceError> {
        Ok(sorted_by_order(&self.store.slider_images().await))
    }

    /// Slide URLs in display order for the storefront, substituting the
    /// stock fallbacks when nothing has been uploaded.
    #[instrument(skip(self))]
    pub async fn urls(&self) -> Result<Vec<String>, ServiceError> {
        let images = sorted_by_order(&self.store.slider_images().await);
        if images.is_empty() {
            return Ok(FALLBACK_SLIDE_URLS.iter().map(|u| u.to_string()).collect());
        }
        Ok(images.into_iter().map(|image| image.url).collect())
    }

    #[instrument(skip(self))]
    pub async fn create(&self, url: String) -> Result<SliderImage, ServiceError> {
        let url = url.trim().to_string();
        if url.is_empty() {
            return Err(ServiceError::ValidationError(
                "Slider image URL cannot be blank".into(),
            ));
        }

        let order = self.store.slider_images().await.len() as i32;
        let image = SliderImage {
            id: Uuid::new_v4(),
            url,
            order,
        };
        let id = image.id;
        self.store.insert_slider_image(image.clone()).await;

        self.event_sender.send_or_log(Event::SliderImageAdded(id)).await;
        info!("Added slider image: {}", id);
        Ok(image)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.store
            .remove_slider_image(id)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("Slider image {} not found", id)))?;

        self.event_sender
            .send_or_log(Event::SliderImageDeleted(id))
            .await;
        info!("Deleted slider image: {}", id);
        Ok(())
    }

    /// Persists a drag-and-drop result: ids in their new on-screen order.
    #[instrument(skip(self, ids))]
    pub async fn reorder(&self, ids: &[Uuid]) -> Result<usize, ServiceError> {
        let snapshot = self.store.slider_images().await;
        for id in ids {
            if !snapshot.iter().any(|s| s.id == *id) {
                return Err(ServiceError::InvalidInput(format!(
                    "Slider image {} not found",
                    id
                )));
            }
        }

        let assignments = reorder_assignments(ids);
        let count = self.store.set_slider_orders(&assignments).await;
        self.event_sender
            .send_or_log(Event::SliderReordered { count })
            .await;
        Ok(count)
    }
}
