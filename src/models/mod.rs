pub mod announcement;
pub mod category;
pub mod product;
pub mod settings;
pub mod slider;

pub use announcement::Announcement;
pub use category::Category;
pub use product::Product;
pub use settings::SiteSettings;
pub use slider::SliderImage;
