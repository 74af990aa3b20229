//! The pure catalog core: category hierarchy resolution, product filtering,
//! showcase selection, and display ordering.
//!
//! Everything here is a synchronous function of an immutable snapshot. The
//! store owns the snapshots and the services own refresh timing; nothing in
//! this module performs I/O or holds state across calls.

pub mod filter;
pub mod index;
pub mod ordering;
pub mod showcase;

pub use filter::{filter, FilterOutcome, Selector, ALL_PRODUCTS_LABEL};
pub use index::CategoryIndex;
pub use ordering::{reorder_assignments, sorted_by_order, DisplayOrdered};
pub use showcase::showcase_products;
