use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A catalog category.
///
/// Products reference categories by `name`, not by id, so names must stay
/// unique across the catalog. Uniqueness is enforced by the admin surface,
/// never by the filtering core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// `None` means top-level. Exactly one nesting level is used in practice;
    /// a child is never itself a parent.
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    /// Display ordering only; irrelevant to filtering. Absent is treated as 0.
    #[serde(default)]
    pub order: i32,
}

impl Category {
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}
