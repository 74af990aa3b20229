// Catalog services: one per admin-managed collection.
pub mod announcements;
pub mod categories;
pub mod products;
pub mod settings;
pub mod slider;

pub use announcements::AnnouncementService;
pub use categories::CategoryService;
pub use products::ProductCatalogService;
pub use settings::SettingsService;
pub use slider::SliderService;
