//! Column pipeline: descriptor -> column specs -> table cells

pub mod materializer;
pub mod render;

pub use materializer::{default_columns, materialize, MaterializedColumns};
pub use render::{cell_value, render_cell, CellText, CellView};
