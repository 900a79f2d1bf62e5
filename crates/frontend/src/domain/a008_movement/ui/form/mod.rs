//! Bulk movement form
//!
//! - view_model.rs: form state and the submit command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::MovementForm;
pub use view_model::MovementFormViewModel;
