//! Cycle-count creation form

mod view;
mod view_model;

pub use view::CycleCountForm;
pub use view_model::CycleCountFormViewModel;
