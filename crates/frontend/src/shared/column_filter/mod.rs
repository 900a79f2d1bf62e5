//! Table-filter drawer: column visibility, pinning and order

pub mod draft;
pub mod drawer;

pub use draft::{save_preference, ColumnFilterDraft};
pub use drawer::TableFilterDrawer;
