use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    errors::ServiceError,
    events::{Event, EventSender},
    models::Announcement,
    store::CatalogStore,
};

/// Admin announcements, listed newest first.
#[derive(Clone)]
pub struct AnnouncementService {
    store: Arc<CatalogStore>,
    event_sender: EventSender,
}

impl AnnouncementService {
    pub fn new(store: Arc<CatalogStore>, event_sender: EventSender) -> Self {
        Self {
            store,
            event_sender,
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Announcement>, ServiceError> {
        let mut announcements = self.store.announcements().await;
        announcements.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(announcements)
    }

    #[instrument(skip(self, content))]
    pub async fn create(&self, content: String) -> Result<Announcement, ServiceError> {
        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(ServiceError::ValidationError(
                "Announcement content cannot be blank".into(),
            ));
        }

        let announcement = Announcement {
            id: Uuid::new_v4(),
            content,
            date: Utc::now(),
        };
        let id = announcement.id;
        self.store.insert_announcement(announcement.clone()).await;

        self.event_sender
            .send_or_log(Event::AnnouncementCreated(id))
            .await;
        info!("Created announcement: {}", id);
        Ok(announcement)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.store
            .remove_announcement(id)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("Announcement {} not found", id)))?;

        self.event_sender
            .send_or_log(Event::AnnouncementDeleted(id))
            .await;
        info!("Deleted announcement: {}", id);
        Ok(())
    }
}
