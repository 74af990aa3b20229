pub mod announcements;
pub mod categories;
pub mod common;
pub mod products;
pub mod settings;
pub mod slider;

use std::sync::Arc;

use crate::{
    events::EventSender,
    services::{
        AnnouncementService, CategoryService, ProductCatalogService, SettingsService,
        SliderService,
    },
    store::CatalogStore,
};

/// Aggregates the services the HTTP handlers reach through `AppState`.
#[derive(Clone)]
pub struct AppServices {
    pub products: ProductCatalogService,
    pub categories: CategoryService,
    pub slider: SliderService,
    pub announcements: AnnouncementService,
    pub settings: SettingsService,
}

impl AppServices {
    pub fn new(store: Arc<CatalogStore>, event_sender: EventSender) -> Self {
        Self {
            products: ProductCatalogService::new(store.clone(), event_sender.clone()),
            categories: CategoryService::new(store.clone(), event_sender.clone()),
            slider: SliderService::new(store.clone(), event_sender.clone()),
            announcements: AnnouncementService::new(store.clone(), event_sender.clone()),
            settings: SettingsService::new(store, event_sender),
        }
    }
}
