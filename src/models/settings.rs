use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Site-wide presentation settings, a single document edited from the admin
/// panel. Every field is optional; the storefront falls back to its built-in
/// defaults for anything unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SiteSettings {
    /// Primary theme color as `#rrggbb`.
    #[serde(default)]
    pub theme_color: Option<String>,
    /// Footer and top-bar background color as `#rrggbb`.
    #[serde(default)]
    pub footer_color: Option<String>,
    /// Marquee text shown across the top of the storefront.
    #[serde(default)]
    pub announcement_text: Option<String>,
}
