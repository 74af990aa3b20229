use uuid::Uuid;

use crate::models::{Category, SliderImage};

/// Records the admin can reorder by dragging: they carry a display `order`
/// field that the storefront sorts on.
pub trait DisplayOrdered {
    fn display_order(&self) -> i32;
}

impl DisplayOrdered for Category {
    fn display_order(&self) -> i32 {
        self.order
    }
}

impl DisplayOrdered for SliderImage {
    fn display_order(&self) -> i32 {
        self.order
    }
}

/// Stable ascending sort by display order; ties keep input order.
pub fn sorted_by_order<T: DisplayOrdered + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(DisplayOrdered::display_order);
    sorted
}

/// Turns a drag-and-drop result (ids in their new on-screen order) into the
/// `order` writes to persist: position index becomes the order value.
pub fn reorder_assignments(ids: &[Uuid]) -> Vec<(Uuid, i32)> {
    ids.iter()
        .enumerate()
        .map(|(position, id)| (*id, position as i32))
        .collect()
}
