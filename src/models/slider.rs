use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One image of the homepage hero slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SliderImage {
    pub id: Uuid,
    pub url: String,
    /// Display ordering, absent treated as 0.
    #[serde(default)]
    pub order: i32,
}
